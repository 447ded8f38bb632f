/// Open/closed state of an accordion that can be forced open or closed by its owner.
///
/// A forced value wins whenever it changes. A user toggle wins until the next forced change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureState {
    open: bool,
    last_forced: Option<bool>,
}

impl DisclosureState {
    /// Initial state: the forced value when present, otherwise `default_open`.
    pub fn new(default_open: bool, force_open: Option<bool>) -> Self {
        Self {
            open: force_open.unwrap_or(default_open),
            last_forced: force_open,
        }
    }

    /// Whether the content is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state on user request and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.last_forced = None;
        self.open
    }

    /// Applies a new forced value. Returns the new open state when the forced value changed.
    ///
    /// Clearing the forced value closes the panel.
    pub fn sync_forced(&mut self, force_open: Option<bool>) -> Option<bool> {
        if force_open == self.last_forced {
            return None;
        }
        self.last_forced = force_open;
        self.open = force_open.unwrap_or(false);
        Some(self.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_value_wins_over_default() {
        assert!(DisclosureState::new(false, Some(true)).is_open());
        assert!(!DisclosureState::new(true, Some(false)).is_open());
        assert!(DisclosureState::new(true, None).is_open());
    }

    #[test]
    fn unchanged_forced_value_is_ignored() {
        let mut state = DisclosureState::new(false, Some(true));
        assert_eq!(state.sync_forced(Some(true)), None);
        assert!(state.is_open());
    }

    #[test]
    fn user_toggle_holds_until_forced_value_changes() {
        let mut state = DisclosureState::new(false, Some(true));
        assert!(!state.toggle());
        assert_eq!(state.sync_forced(Some(true)), Some(true));
        assert!(state.is_open());
    }

    #[test]
    fn clearing_forced_value_closes_panel() {
        let mut state = DisclosureState::new(false, Some(true));
        assert_eq!(state.sync_forced(None), Some(false));
        assert!(!state.is_open());
        assert_eq!(state.sync_forced(None), None);
    }

    #[test]
    fn toggle_after_default_open_closes() {
        let mut state = DisclosureState::new(true, None);
        assert!(!state.toggle());
        assert!(state.toggle());
    }
}
