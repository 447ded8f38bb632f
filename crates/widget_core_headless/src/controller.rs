//! Shared navigation controller and the navigator seam used by step controls.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{IndicatorState, StepSequence};

/// Fire-and-forget observer invoked with the new index after every committed transition.
pub type StepObserver = Rc<dyn Fn(usize)>;

/// Navigation contract consumed by step controls and external toolbars.
///
/// Mutating methods return the committed index, or `None` when the request was absorbed.
pub trait StepNavigator {
    /// Moves one step forward.
    fn advance(&self) -> Option<usize>;
    /// Moves one step back.
    fn retreat(&self) -> Option<usize>;
    /// Jumps to `target` when it is a declared step.
    fn go_to(&self, target: usize) -> Option<usize>;
    /// Current index snapshot.
    fn current_index(&self) -> usize;
    /// Declared step count snapshot.
    fn total_steps(&self) -> usize;

    /// Whether the current index is the first step.
    fn is_first(&self) -> bool {
        self.current_index() == 0
    }

    /// Whether the current index is the last declared step.
    fn is_last(&self) -> bool {
        self.total_steps().checked_sub(1) == Some(self.current_index())
    }
}

/// Single owner of one mounted [`StepSequence`].
///
/// Clones share the same sequence, so every clone observes and drives the same index. The seed
/// index supplied at construction is applied on the first non-empty [`resize`](Self::resize),
/// once the step count is known.
#[derive(Clone)]
pub struct StepController {
    sequence: Rc<RefCell<StepSequence>>,
    seed: Rc<Cell<Option<usize>>>,
    observer: Option<StepObserver>,
}

impl std::fmt::Debug for StepController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepController")
            .field("sequence", &*self.sequence.borrow())
            .field("seed", &self.seed.get())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl StepController {
    /// Creates an unsized controller that will start at `initial_index` once steps are declared.
    pub fn new(initial_index: usize) -> Self {
        Self {
            sequence: Rc::new(RefCell::new(StepSequence::default())),
            seed: Rc::new(Cell::new(Some(initial_index))),
            observer: None,
        }
    }

    /// Creates a controller over an already-sized sequence.
    pub fn from_sequence(sequence: StepSequence) -> Self {
        Self {
            sequence: Rc::new(RefCell::new(sequence)),
            seed: Rc::new(Cell::new(None)),
            observer: None,
        }
    }

    /// Installs the change observer.
    pub fn with_observer(mut self, observer: impl Fn(usize) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Copy of the current sequence state.
    pub fn snapshot(&self) -> StepSequence {
        *self.sequence.borrow()
    }

    /// Indicator state for the step at `index`.
    pub fn indicator(&self, index: usize) -> IndicatorState {
        self.sequence.borrow().indicator(index)
    }

    /// Whether `self` and `other` drive the same sequence.
    pub fn same_sequence(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sequence, &other.sequence)
    }

    /// Re-synchronizes the declared step count.
    ///
    /// The first non-empty call applies the construction seed silently. An empty step list
    /// keeps the seed pending. Later calls that clamp the current index notify the observer with
    /// the clamped index.
    pub fn resize(&self, total: usize) -> Option<usize> {
        if total > 0 {
            if let Some(seed) = self.seed.take() {
                *self.sequence.borrow_mut() = StepSequence::new(total, seed);
                return None;
            }
        }
        self.commit(|sequence| sequence.resize(total))
    }

    fn commit(&self, transition: impl FnOnce(&mut StepSequence) -> Option<usize>) -> Option<usize> {
        let moved = transition(&mut self.sequence.borrow_mut())?;
        if let Some(observer) = self.observer.as_ref() {
            observer(moved);
        }
        Some(moved)
    }
}

impl StepNavigator for StepController {
    fn advance(&self) -> Option<usize> {
        self.commit(StepSequence::advance)
    }

    fn retreat(&self) -> Option<usize> {
        self.commit(StepSequence::retreat)
    }

    fn go_to(&self, target: usize) -> Option<usize> {
        self.commit(|sequence| sequence.go_to(target))
    }

    fn current_index(&self) -> usize {
        self.sequence.borrow().current_index()
    }

    fn total_steps(&self) -> usize {
        self.sequence.borrow().total_steps()
    }
}
