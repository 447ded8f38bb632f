//! Bounds-checked step position state machine.

/// Position within an ordered list of steps.
///
/// The only mutators are [`advance`](Self::advance), [`retreat`](Self::retreat),
/// [`go_to`](Self::go_to), and [`resize`](Self::resize). Each returns the new index when the
/// position changed (or, for `go_to`, was re-selected) and `None` when the request was absorbed.
/// Absorbed requests are not errors and carry no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSequence {
    current: usize,
    total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendering state of one step indicator relative to the current index.
pub enum IndicatorState {
    /// Step precedes the current index.
    Completed,
    /// Step is the current index.
    Active,
    /// Step follows the current index.
    Pending,
}

impl IndicatorState {
    /// Returns the stable `data-ui-state` token for this state.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }

    /// Whether the step has been reached (completed or active).
    pub const fn is_reached(self) -> bool {
        matches!(self, Self::Completed | Self::Active)
    }
}

impl StepSequence {
    /// Creates a sequence of `total` steps positioned at `initial`, clamped to the last step.
    pub fn new(total: usize, initial: usize) -> Self {
        Self {
            current: clamp_index(initial, total),
            total,
        }
    }

    /// Zero-based current index. Always `0` for an empty sequence.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of declared steps.
    pub fn total_steps(&self) -> usize {
        self.total
    }

    /// Whether the current index is the first position.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the current index is the last declared step. Never true for an empty sequence.
    pub fn is_last(&self) -> bool {
        self.total.checked_sub(1) == Some(self.current)
    }

    /// Moves one step forward unless already on the last step.
    pub fn advance(&mut self) -> Option<usize> {
        if self.current + 1 >= self.total {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Moves one step back unless already on the first step.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Jumps to `target` when it is a declared step; out-of-range targets are ignored.
    ///
    /// Re-selecting the current index still reports a transition.
    pub fn go_to(&mut self, target: usize) -> Option<usize> {
        if target >= self.total {
            return None;
        }
        self.current = target;
        Some(target)
    }

    /// Re-synchronizes the declared step count.
    ///
    /// Shrinking past the current index clamps it to the new last step and reports the clamped
    /// index. Growing never moves the index.
    pub fn resize(&mut self, total: usize) -> Option<usize> {
        self.total = total;
        let clamped = clamp_index(self.current, total);
        if clamped == self.current {
            return None;
        }
        self.current = clamped;
        Some(clamped)
    }

    /// Indicator state for the step at `index`.
    pub fn indicator(&self, index: usize) -> IndicatorState {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => IndicatorState::Completed,
            std::cmp::Ordering::Equal => IndicatorState::Active,
            std::cmp::Ordering::Greater => IndicatorState::Pending,
        }
    }

    /// Indicator states for every declared step, in declaration order.
    pub fn indicators(&self) -> impl Iterator<Item = IndicatorState> + '_ {
        (0..self.total).map(|index| self.indicator(index))
    }
}

fn clamp_index(index: usize, total: usize) -> usize {
    index.min(total.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_and_last_flags_track_every_reachable_index() {
        for total in 1..=6 {
            for index in 0..total {
                let sequence = StepSequence::new(total, index);
                assert_eq!(sequence.is_first(), index == 0, "n={total} i={index}");
                assert_eq!(sequence.is_last(), index == total - 1, "n={total} i={index}");
            }
        }
    }

    #[test]
    fn empty_sequence_is_first_but_never_last() {
        let sequence = StepSequence::new(0, 3);
        assert_eq!(sequence.current_index(), 0);
        assert!(sequence.is_first());
        assert!(!sequence.is_last());
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut sequence = StepSequence::new(3, 2);
        assert_eq!(sequence.advance(), None);
        assert_eq!(sequence.current_index(), 2);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut sequence = StepSequence::new(3, 0);
        assert_eq!(sequence.retreat(), None);
        assert_eq!(sequence.current_index(), 0);
    }

    #[test]
    fn advance_advance_retreat_lands_on_second_step() {
        let mut sequence = StepSequence::new(4, 0);
        assert_eq!(sequence.advance(), Some(1));
        assert_eq!(sequence.advance(), Some(2));
        assert_eq!(sequence.retreat(), Some(1));
        assert_eq!(sequence.current_index(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range_targets() {
        let mut sequence = StepSequence::new(4, 1);
        assert_eq!(sequence.go_to(4), None);
        assert_eq!(sequence.go_to(usize::MAX), None);
        assert_eq!(sequence.current_index(), 1);
    }

    #[test]
    fn go_to_reports_reselection_of_current_index() {
        let mut sequence = StepSequence::new(4, 2);
        assert_eq!(sequence.go_to(2), Some(2));
        assert_eq!(sequence.go_to(0), Some(0));
        assert_eq!(sequence.current_index(), 0);
    }

    #[test]
    fn last_step_can_be_left_after_reaching_it() {
        let mut sequence = StepSequence::new(3, 0);
        sequence.go_to(2);
        assert!(sequence.is_last());
        assert_eq!(sequence.go_to(1), Some(1));
        assert!(!sequence.is_last());
    }

    #[test]
    fn new_clamps_initial_index_to_last_step() {
        assert_eq!(StepSequence::new(3, 7).current_index(), 2);
    }

    #[test]
    fn shrinking_past_current_index_clamps_to_new_last_step() {
        let mut sequence = StepSequence::new(5, 4);
        assert_eq!(sequence.resize(3), Some(2));
        assert_eq!(sequence.current_index(), 2);
        assert!(sequence.is_last());
    }

    #[test]
    fn shrinking_to_zero_resets_to_origin() {
        let mut sequence = StepSequence::new(5, 3);
        assert_eq!(sequence.resize(0), Some(0));
        assert_eq!(sequence.total_steps(), 0);
        assert_eq!(sequence.advance(), None);
    }

    #[test]
    fn resizing_without_crossing_index_keeps_position() {
        let mut sequence = StepSequence::new(3, 1);
        assert_eq!(sequence.resize(6), None);
        assert_eq!(sequence.resize(2), None);
        assert_eq!(sequence.current_index(), 1);
    }

    #[test]
    fn indicators_mark_one_active_step_after_each_transition() {
        let mut sequence = StepSequence::new(4, 0);
        let check = |sequence: &StepSequence| {
            let states: Vec<_> = sequence.indicators().collect();
            assert_eq!(states.len(), 4);
            assert_eq!(
                states
                    .iter()
                    .filter(|state| **state == IndicatorState::Active)
                    .count(),
                1
            );
            for (index, state) in states.iter().enumerate() {
                if index < sequence.current_index() {
                    assert_eq!(*state, IndicatorState::Completed);
                }
            }
        };

        check(&sequence);
        sequence.advance();
        check(&sequence);
        sequence.go_to(3);
        check(&sequence);
        sequence.retreat();
        check(&sequence);
    }

    #[test]
    fn indicator_states_follow_declaration_order() {
        let sequence = StepSequence::new(3, 1);
        let states: Vec<_> = sequence.indicators().collect();
        assert_eq!(
            states,
            vec![
                IndicatorState::Completed,
                IndicatorState::Active,
                IndicatorState::Pending,
            ]
        );
    }
}
