//! Edit/split UI state.

/// Transient UI state for the edit affordance.
///
/// Owned by the controlling component and passed to whoever needs it,
/// never captured as ambient module state. Toggled only by explicit user
/// action and independent of which document is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditState {
    pub is_editing: bool,
    pub is_split_vertical: bool,
}

impl Default for EditState {
    fn default() -> Self {
        Self { is_editing: false, is_split_vertical: true }
    }
}

impl EditState {
    pub fn toggle_editing(&mut self) {
        self.is_editing = !self.is_editing;
    }

    pub fn toggle_split(&mut self) {
        self.is_split_vertical = !self.is_split_vertical;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = EditState::default();
        assert!(!state.is_editing);
        assert!(state.is_split_vertical);
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = EditState::default();
        state.toggle_editing();
        assert!(state.is_editing);
        assert!(state.is_split_vertical);
        state.toggle_split();
        assert!(state.is_editing);
        assert!(!state.is_split_vertical);
    }
}
