//! Per-row expand/collapse bookkeeping, keyed by stable row identity.
//!
//! Keys are the domain's stable identifiers (policy ids), not list
//! positions, so re-filtering or re-sorting the list never transplants an
//! expansion onto a different row. Entries for rows currently filtered out
//! are retained: when the row reappears it comes back in its prior state.

use std::collections::HashMap;

/// Lifecycle of a single row's expansion.
///
/// ```text
/// Collapsed --toggle--> Expanding --settle--> Expanded
/// Expanded  --toggle--> Collapsing --settle--> Collapsed
/// ```
///
/// The *target* height changes at toggle time; `Expanding`/`Collapsing` only
/// mark that the presentation-layer reveal is still in flight. Layout math
/// never depends on a settle signal arriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fully collapsed (the default; absent rows are collapsed).
    #[default]
    Collapsed,
    /// Toggled open, reveal still in flight. Target height: expanded.
    Expanding,
    /// Fully expanded.
    Expanded,
    /// Toggled shut, reveal still in flight. Target height: collapsed.
    Collapsing,
}

impl Phase {
    /// Whether layout should use the expanded height for this phase.
    pub fn target_expanded(self) -> bool {
        matches!(self, Phase::Expanding | Phase::Expanded)
    }

    /// Whether the visual transition is still in flight.
    pub fn in_transition(self) -> bool {
        matches!(self, Phase::Expanding | Phase::Collapsing)
    }
}

/// Expansion phases for a set of rows, keyed by stable `u64` identity.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    rows: HashMap<u64, Phase>,
}

impl ExpansionState {
    /// Create an empty state (every row collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase for `key`; unknown keys are [`Phase::Collapsed`].
    pub fn phase(&self, key: u64) -> Phase {
        self.rows.get(&key).copied().unwrap_or_default()
    }

    /// Whether layout should use the expanded height for `key`.
    pub fn target_expanded(&self, key: u64) -> bool {
        self.phase(key).target_expanded()
    }

    /// Flip the row's expansion, returning the new phase.
    ///
    /// A toggle mid-transition reverses direction immediately; the target
    /// height flips with it.
    pub fn toggle(&mut self, key: u64) -> Phase {
        let next = match self.phase(key) {
            Phase::Collapsed | Phase::Collapsing => Phase::Expanding,
            Phase::Expanded | Phase::Expanding => Phase::Collapsing,
        };
        self.rows.insert(key, next);
        next
    }

    /// Mark the row's transition as finished: `Expanding` becomes
    /// `Expanded`, `Collapsing` becomes `Collapsed`. A settle signal for a
    /// row not in transition is a stale timer and is ignored.
    pub fn settle(&mut self, key: u64) {
        match self.phase(key) {
            Phase::Expanding => {
                self.rows.insert(key, Phase::Expanded);
            }
            Phase::Collapsing => {
                // Collapsed is the default, drop the entry.
                self.rows.remove(&key);
            }
            Phase::Collapsed | Phase::Expanded => {}
        }
    }

    /// Keys whose transitions are still in flight.
    pub fn transitioning(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows
            .iter()
            .filter(|(_, phase)| phase.in_transition())
            .map(|(&key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_collapsed() {
        let state = ExpansionState::new();
        assert_eq!(state.phase(1), Phase::Collapsed);
        assert!(!state.target_expanded(1));
    }

    #[test]
    fn toggle_walks_the_state_machine() {
        let mut state = ExpansionState::new();

        assert_eq!(state.toggle(3), Phase::Expanding);
        assert!(state.target_expanded(3));

        state.settle(3);
        assert_eq!(state.phase(3), Phase::Expanded);

        assert_eq!(state.toggle(3), Phase::Collapsing);
        assert!(!state.target_expanded(3));

        state.settle(3);
        assert_eq!(state.phase(3), Phase::Collapsed);
    }

    #[test]
    fn toggle_mid_transition_reverses_direction() {
        let mut state = ExpansionState::new();
        state.toggle(5);
        assert_eq!(state.phase(5), Phase::Expanding);

        // Second toggle before the settle signal.
        assert_eq!(state.toggle(5), Phase::Collapsing);
        state.settle(5);
        assert_eq!(state.phase(5), Phase::Collapsed);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut state = ExpansionState::new();
        state.toggle(2);
        state.settle(2);
        assert_eq!(state.phase(2), Phase::Expanded);

        // The timer from the already-finished transition fires again.
        state.settle(2);
        assert_eq!(state.phase(2), Phase::Expanded);
    }

    #[test]
    fn entries_survive_unrelated_activity() {
        // Expansion is keyed by identity; filtering a row out of the view
        // does not touch the state, so it is restored on reappearance.
        let mut state = ExpansionState::new();
        state.toggle(4);
        state.settle(4);

        state.toggle(9);
        state.settle(9);
        state.toggle(9);
        state.settle(9);

        assert_eq!(state.phase(4), Phase::Expanded);
    }

    #[test]
    fn transitioning_lists_inflight_rows_only() {
        let mut state = ExpansionState::new();
        state.toggle(1);
        state.toggle(2);
        state.settle(2);
        state.toggle(3);

        let mut inflight: Vec<u64> = state.transitioning().collect();
        inflight.sort_unstable();
        assert_eq!(inflight, vec![1, 3]);
    }
}
