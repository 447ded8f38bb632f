//! Activation semantics for the declarative Next and Back step controls.

use std::{cell::Cell, future::Future, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::{PreActionError, StepLabels, StepNavigator};

/// Caller-supplied async action awaited before a control commits its transition.
pub type PreAction = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), PreActionError>>>;

/// Boxes an async closure into a [`PreAction`].
pub fn pre_action<F, Fut>(action: F) -> PreAction
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<(), PreActionError>> + 'static,
{
    Rc::new(move || action().boxed_local())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction driven by a navigation control.
pub enum ControlKind {
    /// Advances the sequence.
    Next,
    /// Retreats the sequence.
    Back,
}

impl ControlKind {
    /// Returns the stable `data-ui-slot` token for this control.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Next => "step-next",
            Self::Back => "step-back",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one control activation.
pub enum Activation {
    /// The navigator committed a transition to this index.
    Committed(usize),
    /// The navigator absorbed the request (already at the boundary).
    Absorbed,
    /// The control was disabled at activation time or after its pre-action settled.
    Disabled,
    /// A previous activation of this control is still awaiting its pre-action.
    Busy,
    /// The pre-action failed; no transition was attempted.
    Blocked(PreActionError),
}

/// Next or Back control bound to a [`StepNavigator`] at activation time.
///
/// Clones share the in-flight flag, so a re-render that clones the control still observes an
/// activation that is awaiting its pre-action.
#[derive(Clone)]
pub struct NavigationControl {
    kind: ControlKind,
    pre_action: Option<PreAction>,
    pending: Rc<Cell<bool>>,
}

impl std::fmt::Debug for NavigationControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationControl")
            .field("kind", &self.kind)
            .field("has_pre_action", &self.pre_action.is_some())
            .field("pending", &self.pending.get())
            .finish()
    }
}

struct PendingGuard(Rc<Cell<bool>>);

impl PendingGuard {
    fn hold(flag: &Rc<Cell<bool>>) -> Self {
        flag.set(true);
        Self(flag.clone())
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl NavigationControl {
    /// Creates a control of `kind` with no pre-action.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            pre_action: None,
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// Creates a Next control.
    pub fn next() -> Self {
        Self::new(ControlKind::Next)
    }

    /// Creates a Back control.
    pub fn back() -> Self {
        Self::new(ControlKind::Back)
    }

    /// Attaches a pre-action awaited before every transition.
    pub fn with_pre_action(mut self, action: PreAction) -> Self {
        self.pre_action = Some(action);
        self
    }

    /// Control direction.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Whether an activation is awaiting its pre-action.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Effective disabled state: Back is additionally disabled on the first step.
    pub fn is_disabled<N: StepNavigator + ?Sized>(&self, navigator: &N, disabled: bool) -> bool {
        match self.kind {
            ControlKind::Next => disabled,
            ControlKind::Back => disabled || navigator.is_first(),
        }
    }

    /// Label to render. Next always shows `labels.finish` on the last step, even over `custom`.
    pub fn label<'a, N: StepNavigator + ?Sized>(
        &self,
        navigator: &N,
        custom: Option<&'a str>,
        labels: &'a StepLabels,
    ) -> &'a str {
        match self.kind {
            ControlKind::Next if navigator.is_last() => &labels.finish,
            ControlKind::Next => custom.unwrap_or(&labels.next),
            ControlKind::Back => custom.unwrap_or(&labels.back),
        }
    }

    /// Runs the pre-action, then commits the transition when the control is still enabled.
    ///
    /// [`is_disabled`](Self::is_disabled) is checked before the pre-action and again after it
    /// settles, with a fresh `disabled` sample each time. Activations that
    /// arrive while a pre-action is in flight return [`Activation::Busy`] without side effects.
    pub async fn activate<N, D>(&self, navigator: &N, disabled: D) -> Activation
    where
        N: StepNavigator + ?Sized,
        D: Fn() -> bool,
    {
        if self.pending.get() {
            return Activation::Busy;
        }
        if self.is_disabled(navigator, disabled()) {
            return Activation::Disabled;
        }

        if let Some(action) = self.pre_action.as_ref() {
            let _pending = PendingGuard::hold(&self.pending);
            if let Err(err) = action().await {
                return Activation::Blocked(err);
            }
        }

        if self.is_disabled(navigator, disabled()) {
            return Activation::Disabled;
        }
        let moved = match self.kind {
            ControlKind::Next => navigator.advance(),
            ControlKind::Back => navigator.retreat(),
        };
        moved.map_or(Activation::Absorbed, Activation::Committed)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::{
        channel::oneshot,
        executor::{block_on, LocalPool},
        task::LocalSpawnExt,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{StepController, StepSequence};

    fn controller(total: usize, initial: usize) -> StepController {
        StepController::from_sequence(StepSequence::new(total, initial))
    }

    fn rejecting() -> PreAction {
        pre_action(|| async { Err(PreActionError::new("form is incomplete")) })
    }

    #[derive(Default)]
    struct ScriptedNavigator {
        index: Cell<usize>,
        total: usize,
        calls: RefCell<Vec<&'static str>>,
    }

    impl StepNavigator for ScriptedNavigator {
        fn advance(&self) -> Option<usize> {
            self.calls.borrow_mut().push("advance");
            None
        }

        fn retreat(&self) -> Option<usize> {
            self.calls.borrow_mut().push("retreat");
            None
        }

        fn go_to(&self, _target: usize) -> Option<usize> {
            self.calls.borrow_mut().push("go_to");
            None
        }

        fn current_index(&self) -> usize {
            self.index.get()
        }

        fn total_steps(&self) -> usize {
            self.total
        }
    }

    #[test]
    fn next_without_pre_action_advances() {
        let steps = controller(3, 0);
        let outcome = block_on(NavigationControl::next().activate(&steps, || false));
        assert_eq!(outcome, Activation::Committed(1));
        assert_eq!(steps.current_index(), 1);
    }

    #[test]
    fn rejected_pre_action_blocks_navigation() {
        let notified = Rc::new(Cell::new(false));
        let flag = notified.clone();
        let steps = controller(4, 0).with_observer(move |_| flag.set(true));
        let control = NavigationControl::next().with_pre_action(rejecting());

        let outcome = block_on(control.activate(&steps, || false));

        assert_eq!(
            outcome,
            Activation::Blocked(PreActionError::new("form is incomplete"))
        );
        assert_eq!(steps.current_index(), 0);
        assert!(!notified.get());
        assert!(!control.is_pending());
    }

    #[test]
    fn pre_action_settles_before_transition() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let from_observer = order.clone();
        let steps = controller(3, 0).with_observer(move |index| {
            from_observer.borrow_mut().push(format!("moved to {index}"));
        });
        let from_action = order.clone();
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            let order = from_action.clone();
            async move {
                order.borrow_mut().push("saved".to_string());
                Ok(())
            }
        }));

        block_on(control.activate(&steps, || false));

        assert_eq!(*order.borrow(), vec!["saved", "moved to 1"]);
    }

    #[test]
    fn disabled_next_skips_pre_action_and_transition() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let steps = controller(3, 0);
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            flag.set(true);
            async { Ok(()) }
        }));

        assert_eq!(block_on(control.activate(&steps, || true)), Activation::Disabled);
        assert!(!ran.get());
        assert_eq!(steps.current_index(), 0);
    }

    #[test]
    fn disabling_during_pre_action_cancels_transition() {
        let disabled = Rc::new(Cell::new(false));
        let toggle = disabled.clone();
        let steps = controller(3, 0);
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            toggle.set(true);
            async { Ok(()) }
        }));

        let outcome = block_on(control.activate(&steps, || disabled.get()));

        assert_eq!(outcome, Activation::Disabled);
        assert_eq!(steps.current_index(), 0);
    }

    #[test]
    fn next_on_last_step_runs_pre_action_and_is_absorbed() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let steps = controller(4, 3);
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            flag.set(true);
            async { Ok(()) }
        }));

        assert_eq!(block_on(control.activate(&steps, || false)), Activation::Absorbed);
        assert!(ran.get());
        assert_eq!(steps.current_index(), 3);
    }

    #[test]
    fn back_is_disabled_on_first_step_even_when_enabled_by_caller() {
        let steps = controller(3, 0);
        let back = NavigationControl::back();
        assert!(back.is_disabled(&steps, false));
        assert_eq!(block_on(back.activate(&steps, || false)), Activation::Disabled);

        steps.go_to(2);
        assert!(!back.is_disabled(&steps, false));
        assert!(back.is_disabled(&steps, true));
        assert_eq!(block_on(back.activate(&steps, || false)), Activation::Committed(1));
    }

    #[test]
    fn back_reaching_first_step_during_pre_action_is_disabled() {
        let navigator = Rc::new(ScriptedNavigator {
            index: Cell::new(1),
            total: 3,
            ..ScriptedNavigator::default()
        });
        let moved_elsewhere = navigator.clone();
        let back = NavigationControl::back().with_pre_action(pre_action(move || {
            moved_elsewhere.index.set(0);
            async { Ok(()) }
        }));

        let outcome = block_on(back.activate(&*navigator, || false));

        assert_eq!(outcome, Activation::Disabled);
        assert!(navigator.calls.borrow().is_empty());
    }

    #[test]
    fn next_ignores_first_step_guard() {
        let steps = controller(3, 0);
        assert!(!NavigationControl::next().is_disabled(&steps, false));
    }

    #[test]
    fn finish_label_overrides_custom_label_on_last_step() {
        let labels = StepLabels::default();
        let steps = controller(2, 0);
        let next = NavigationControl::next();
        assert_eq!(next.label(&steps, Some("Continue"), &labels), "Continue");
        assert_eq!(next.label(&steps, None, &labels), "Next");

        steps.advance();
        assert_eq!(next.label(&steps, Some("Continue"), &labels), "Finish");
        assert_eq!(next.label(&steps, None, &StepLabels::spanish()), "Finalizar");
    }

    #[test]
    fn back_label_prefers_custom_text() {
        let labels = StepLabels::default();
        let steps = controller(2, 1);
        let back = NavigationControl::back();
        assert_eq!(back.label(&steps, Some("Return"), &labels), "Return");
        assert_eq!(back.label(&steps, None, &labels), "Back");
    }

    #[test]
    fn controls_drive_any_navigator() {
        let navigator = ScriptedNavigator {
            index: Cell::new(1),
            total: 3,
            ..ScriptedNavigator::default()
        };

        assert_eq!(
            block_on(NavigationControl::next().activate(&navigator, || false)),
            Activation::Absorbed
        );
        assert_eq!(
            block_on(NavigationControl::back().activate(&navigator, || false)),
            Activation::Absorbed
        );
        assert_eq!(*navigator.calls.borrow(), vec!["advance", "retreat"]);
    }

    #[test]
    fn reactivation_while_pre_action_in_flight_is_ignored() {
        let (release, gate) = oneshot::channel::<()>();
        let gate = Rc::new(RefCell::new(Some(gate)));
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            let gate = gate.borrow_mut().take();
            async move {
                if let Some(gate) = gate {
                    gate.await
                        .map_err(|_| PreActionError::new("gate dropped"))?;
                }
                Ok::<(), PreActionError>(())
            }
        }));
        let steps = controller(4, 0);
        let outcome = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let control = control.clone();
            let steps = steps.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    let result = control.activate(&steps, || false).await;
                    *outcome.borrow_mut() = Some(result);
                })
                .expect("spawn activation");
        }
        pool.run_until_stalled();
        assert!(control.is_pending());

        assert_eq!(block_on(control.activate(&steps, || false)), Activation::Busy);
        assert_eq!(steps.current_index(), 0);

        release.send(()).expect("release gate");
        pool.run_until_stalled();

        assert_eq!(*outcome.borrow(), Some(Activation::Committed(1)));
        assert_eq!(steps.current_index(), 1);
        assert!(!control.is_pending());
    }

    #[test]
    fn dropping_in_flight_activation_clears_pending_flag() {
        let (_release, gate) = oneshot::channel::<()>();
        let gate = Rc::new(RefCell::new(Some(gate)));
        let control = NavigationControl::next().with_pre_action(pre_action(move || {
            let gate = gate.borrow_mut().take();
            async move {
                if let Some(gate) = gate {
                    gate.await
                        .map_err(|_| PreActionError::new("gate dropped"))?;
                }
                Ok::<(), PreActionError>(())
            }
        }));
        let steps = controller(4, 0);

        assert_eq!(control.activate(&steps, || false).now_or_never(), None);
        assert!(!control.is_pending());
        assert_eq!(steps.current_index(), 0);
    }
}
