//! Club roster selection state
//!
//! A fixed list of club items with a single selected index. Directional
//! movement wraps at both ends and is edge-triggered through the arrow-key
//! press observer; pointer clicks set the index directly.

use super::keypress::{ArrowDirection, ArrowPressObserver};
use crossterm::event::{KeyCode, KeyEventKind};

/// The clubs on offer. The list is immutable at runtime.
pub const CLUB_ITEMS: &[&str] = &["Chess Club", "Debate Team", "Robotics Lab", "Swim Squad"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterState {
    selected: usize,
    observer: ArrowPressObserver,
}

impl RosterState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn items(&self) -> &'static [&'static str] {
        CLUB_ITEMS
    }

    /// Move to the previous item, wrapping from the first to the last
    pub fn move_previous(&mut self) {
        self.selected = if self.selected == 0 {
            CLUB_ITEMS.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Move to the next item, wrapping from the last to the first
    pub fn move_next(&mut self) {
        self.selected = if self.selected == CLUB_ITEMS.len() - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    /// Pointer selection. The caller supplies a valid list position.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Feed an arrow key event through the press observer.
    ///
    /// With `edge_only` the observer moves once per rising edge and ignores
    /// repeats until the key is released. Terminals that never report key
    /// releases would leave the observer stuck, so callers pass
    /// `edge_only = false` there and every press event moves. Returns true
    /// when the selection moved.
    pub fn handle_arrow(&mut self, code: KeyCode, kind: KeyEventKind, edge_only: bool) -> bool {
        let direction = if edge_only {
            self.observer.observe(code, kind)
        } else if kind == KeyEventKind::Press {
            match code {
                KeyCode::Up => Some(ArrowDirection::Up),
                KeyCode::Down => Some(ArrowDirection::Down),
                _ => None,
            }
        } else {
            None
        };

        match direction {
            Some(ArrowDirection::Up) => {
                self.move_previous();
                true
            }
            Some(ArrowDirection::Down) => {
                self.move_next();
                true
            }
            None => false,
        }
    }

    /// Release the key subscriptions when the roster view is deactivated
    pub fn deactivate(&mut self) {
        self.observer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wraparound {
        use super::*;

        #[test]
        fn test_initial_selection_is_zero() {
            assert_eq!(RosterState::default().selected(), 0);
        }

        #[test]
        fn test_previous_from_first_wraps_to_last() {
            let mut roster = RosterState::default();
            roster.move_previous();
            assert_eq!(roster.selected(), 3);
        }

        #[test]
        fn test_next_from_first_moves_forward() {
            let mut roster = RosterState::default();
            roster.move_next();
            assert_eq!(roster.selected(), 1);
        }

        #[test]
        fn test_next_from_last_wraps_to_first() {
            let mut roster = RosterState::default();
            roster.select(3);
            roster.move_next();
            assert_eq!(roster.selected(), 0);
        }

        #[test]
        fn test_select_overrides_prior_state() {
            let mut roster = RosterState::default();
            roster.move_next();
            roster.select(2);
            assert_eq!(roster.selected(), 2);
        }
    }

    mod arrow_handling {
        use super::*;

        #[test]
        fn test_holding_a_key_moves_exactly_once() {
            let mut roster = RosterState::default();
            assert!(roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, true));
            assert!(!roster.handle_arrow(KeyCode::Down, KeyEventKind::Repeat, true));
            assert!(!roster.handle_arrow(KeyCode::Down, KeyEventKind::Repeat, true));
            assert_eq!(roster.selected(), 1);
        }

        #[test]
        fn test_release_then_press_moves_again() {
            let mut roster = RosterState::default();
            roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, true);
            roster.handle_arrow(KeyCode::Down, KeyEventKind::Release, true);
            assert!(roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, true));
            assert_eq!(roster.selected(), 2);
        }

        #[test]
        fn test_up_from_first_wraps_under_observer() {
            let mut roster = RosterState::default();
            roster.handle_arrow(KeyCode::Up, KeyEventKind::Press, true);
            assert_eq!(roster.selected(), 3);
        }

        #[test]
        fn test_fallback_mode_moves_on_every_press() {
            // Terminals without release reporting deliver repeats as plain
            // presses; fallback mode accepts each of them.
            let mut roster = RosterState::default();
            assert!(roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, false));
            assert!(roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, false));
            assert_eq!(roster.selected(), 2);
        }

        #[test]
        fn test_deactivate_rearms_held_keys() {
            let mut roster = RosterState::default();
            roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, true);
            roster.deactivate();
            assert!(roster.handle_arrow(KeyCode::Down, KeyEventKind::Press, true));
            assert_eq!(roster.selected(), 2);
        }

        #[test]
        fn test_unrelated_keys_do_not_move() {
            let mut roster = RosterState::default();
            assert!(!roster.handle_arrow(KeyCode::Enter, KeyEventKind::Press, true));
            assert_eq!(roster.selected(), 0);
        }
    }
}
