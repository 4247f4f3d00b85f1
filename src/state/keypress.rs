//! Edge-triggered key press tracking
//!
//! Each tracked key gets its own boolean press state, independent of any
//! other key. Only the not-pressed → pressed transition reports a fresh
//! press; auto-repeat events while the key is held report nothing. Observers
//! are reset when their view is deactivated so no stale press state survives
//! across activations.

use crossterm::event::{KeyCode, KeyEventKind};

/// Press state for a single tracked key
#[derive(Debug, Clone, Copy, Default)]
pub struct PressTracker {
    pressed: bool,
}

impl PressTracker {
    /// Record a key-down. Returns true only on the rising edge.
    pub fn press(&mut self) -> bool {
        let fresh = !self.pressed;
        self.pressed = true;
        fresh
    }

    /// Record a key-up
    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn reset(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Direction reported by the arrow-key observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

/// Observer over ArrowUp and ArrowDown, one tracker per key
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowPressObserver {
    up: PressTracker,
    down: PressTracker,
}

impl ArrowPressObserver {
    /// Feed a key event. Returns the direction exactly once per rising edge;
    /// repeats and releases return `None`.
    pub fn observe(&mut self, code: KeyCode, kind: KeyEventKind) -> Option<ArrowDirection> {
        let (tracker, direction) = match code {
            KeyCode::Up => (&mut self.up, ArrowDirection::Up),
            KeyCode::Down => (&mut self.down, ArrowDirection::Down),
            _ => return None,
        };
        match kind {
            KeyEventKind::Press => tracker.press().then_some(direction),
            KeyEventKind::Release => {
                tracker.release();
                None
            }
            // Held key: the press state is already true, nothing new happened
            KeyEventKind::Repeat => None,
        }
    }

    /// Drop all press state (view deactivation)
    pub fn reset(&mut self) {
        self.up.reset();
        self.down.reset();
    }

    #[allow(dead_code)]
    pub fn any_pressed(&self) -> bool {
        self.up.is_pressed() || self.down.is_pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod press_tracker {
        use super::*;

        #[test]
        fn test_first_press_is_fresh() {
            let mut tracker = PressTracker::default();
            assert!(tracker.press());
            assert!(tracker.is_pressed());
        }

        #[test]
        fn test_held_press_is_not_fresh() {
            let mut tracker = PressTracker::default();
            tracker.press();
            assert!(!tracker.press());
            assert!(!tracker.press());
        }

        #[test]
        fn test_release_then_press_is_fresh_again() {
            let mut tracker = PressTracker::default();
            tracker.press();
            tracker.release();
            assert!(tracker.press());
        }
    }

    mod arrow_observer {
        use super::*;

        #[test]
        fn test_rising_edge_reports_direction() {
            let mut observer = ArrowPressObserver::default();
            assert_eq!(
                observer.observe(KeyCode::Up, KeyEventKind::Press),
                Some(ArrowDirection::Up)
            );
            assert_eq!(
                observer.observe(KeyCode::Down, KeyEventKind::Press),
                Some(ArrowDirection::Down)
            );
        }

        #[test]
        fn test_holding_reports_once() {
            let mut observer = ArrowPressObserver::default();
            assert!(observer.observe(KeyCode::Down, KeyEventKind::Press).is_some());
            assert!(observer.observe(KeyCode::Down, KeyEventKind::Repeat).is_none());
            assert!(observer.observe(KeyCode::Down, KeyEventKind::Press).is_none());
        }

        #[test]
        fn test_release_rearms_the_key() {
            let mut observer = ArrowPressObserver::default();
            observer.observe(KeyCode::Up, KeyEventKind::Press);
            observer.observe(KeyCode::Up, KeyEventKind::Release);
            assert_eq!(
                observer.observe(KeyCode::Up, KeyEventKind::Press),
                Some(ArrowDirection::Up)
            );
        }

        #[test]
        fn test_keys_are_tracked_independently() {
            let mut observer = ArrowPressObserver::default();
            observer.observe(KeyCode::Up, KeyEventKind::Press);
            // Holding Up must not block a fresh Down press
            assert_eq!(
                observer.observe(KeyCode::Down, KeyEventKind::Press),
                Some(ArrowDirection::Down)
            );
            // Releasing Down leaves Up held
            observer.observe(KeyCode::Down, KeyEventKind::Release);
            assert!(observer.any_pressed());
            assert!(observer.observe(KeyCode::Up, KeyEventKind::Press).is_none());
        }

        #[test]
        fn test_other_keys_are_ignored() {
            let mut observer = ArrowPressObserver::default();
            assert!(observer.observe(KeyCode::Left, KeyEventKind::Press).is_none());
            assert!(observer
                .observe(KeyCode::Char('j'), KeyEventKind::Press)
                .is_none());
        }

        #[test]
        fn test_reset_drops_held_state() {
            let mut observer = ArrowPressObserver::default();
            observer.observe(KeyCode::Up, KeyEventKind::Press);
            observer.reset();
            assert!(!observer.any_pressed());
            assert!(observer.observe(KeyCode::Up, KeyEventKind::Press).is_some());
        }
    }
}
