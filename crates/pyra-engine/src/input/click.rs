use std::time::{Duration, Instant};

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Maximum delay between the two presses of a double click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

/// Maximum pointer travel (logical px, per axis) between the two presses.
pub const DOUBLE_CLICK_DISTANCE: f32 = 4.0;

#[derive(Debug, Copy, Clone)]
struct LastPress {
    button: MouseButton,
    x: f32,
    y: f32,
    at: Instant,
}

/// Double-click detector fed with button presses.
///
/// winit reports presses only, so the runtime synthesizes double clicks here.
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<LastPress>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press and returns `true` if it completes a double click.
    ///
    /// A completed double click clears the tracker, so the third press of a
    /// triple click starts a new sequence.
    pub fn press(&mut self, button: MouseButton, x: f32, y: f32, now: Instant) -> bool {
        let is_double = self.last.is_some_and(|prev| {
            prev.button == button
                && now.saturating_duration_since(prev.at) <= DOUBLE_CLICK_INTERVAL
                && (x - prev.x).abs() <= DOUBLE_CLICK_DISTANCE
                && (y - prev.y).abs() <= DOUBLE_CLICK_DISTANCE
        });

        self.last = if is_double {
            None
        } else {
            Some(LastPress { button, x, y, at: now })
        };

        is_double
    }

    /// Feeds a translated event and returns the synthesized double click, if any.
    ///
    /// Focus loss discards a pending first press.
    pub fn observe(&mut self, ev: &InputEvent, now: Instant) -> Option<InputEvent> {
        match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: MouseButtonState::Pressed,
                x,
                y,
                ..
            }) => self
                .press(*button, *x, *y, now)
                .then_some(InputEvent::PointerDoubleClick { button: *button, x: *x, y: *y }),
            InputEvent::Focused(false) => {
                self.reset();
                None
            }
            _ => None,
        }
    }

    /// Forgets any pending first press.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn two_quick_presses_are_a_double_click() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        assert!(!c.press(MouseButton::Left, 10.0, 10.0, t0));
        assert!(c.press(MouseButton::Left, 11.0, 9.0, t0 + ms(150)));
    }

    #[test]
    fn slow_second_press_starts_over() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        c.press(MouseButton::Left, 0.0, 0.0, t0);
        assert!(!c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(401)));
        // ...but the slow press itself can begin a new double click.
        assert!(c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(500)));
    }

    #[test]
    fn different_buttons_do_not_pair() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        c.press(MouseButton::Left, 0.0, 0.0, t0);
        assert!(!c.press(MouseButton::Right, 0.0, 0.0, t0 + ms(50)));
        assert!(c.press(MouseButton::Right, 0.0, 0.0, t0 + ms(100)));
    }

    #[test]
    fn pointer_travel_breaks_the_pair() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        c.press(MouseButton::Left, 0.0, 0.0, t0);
        assert!(!c.press(MouseButton::Left, 20.0, 0.0, t0 + ms(50)));
    }

    #[test]
    fn triple_click_is_one_double_click() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        assert!(!c.press(MouseButton::Left, 0.0, 0.0, t0));
        assert!(c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(100)));
        assert!(!c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(200)));
    }

    #[test]
    fn observe_synthesizes_from_presses_only() {
        use crate::input::Modifiers;

        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        let ev = |state| InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state,
            x: 3.0,
            y: 4.0,
            modifiers: Modifiers::default(),
        });

        assert_eq!(c.observe(&ev(MouseButtonState::Pressed), t0), None);
        assert_eq!(c.observe(&ev(MouseButtonState::Released), t0 + ms(20)), None);
        assert_eq!(
            c.observe(&ev(MouseButtonState::Pressed), t0 + ms(60)),
            Some(InputEvent::PointerDoubleClick { button: MouseButton::Right, x: 3.0, y: 4.0 })
        );
    }

    #[test]
    fn focus_loss_discards_pending_press() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        c.press(MouseButton::Left, 0.0, 0.0, t0);
        c.observe(&InputEvent::Focused(false), t0);
        assert!(!c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(10)));
    }

    #[test]
    fn reset_discards_pending_press() {
        let t0 = Instant::now();
        let mut c = ClickTracker::new();
        c.press(MouseButton::Left, 0.0, 0.0, t0);
        c.reset();
        assert!(!c.press(MouseButton::Left, 0.0, 0.0, t0 + ms(10)));
    }
}
