use std::time::{Duration, Instant};

/// Delay before a newly posted message becomes visible. Messages posted in
/// rapid succession coalesce: only the latest one survives the window.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// How long a message stays on screen once visible.
const DISPLAY_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending { message: String, show_at: Instant },
    Visible { message: String, hide_at: Instant },
}

/// Transient auto-dismissing status message.
///
/// The lifecycle is `Idle -> Pending -> Visible -> Idle`, driven by deadlines
/// against a caller-supplied clock rather than by spawned timers. Posting a
/// new message replaces the whole phase, which cancels both pending
/// transitions of the previous message in one step; dropping the `Toaster`
/// leaves nothing scheduled.
#[derive(Debug)]
pub struct Toaster {
    phase: Phase,
    display_duration: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_display_duration(DISPLAY_DURATION)
    }

    pub fn with_display_duration(display_duration: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            display_duration,
        }
    }

    /// Post a message, superseding whatever the toaster was doing. The message
    /// becomes visible after the debounce window and hides after the display
    /// duration; no transition scheduled for an earlier message can fire once
    /// this returns.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.phase = Phase::Pending {
            message: message.into(),
            show_at: now + DEBOUNCE_WINDOW,
        };
    }

    /// Fire every transition whose deadline has passed. A coarse tick that
    /// overshoots both deadlines still ends in the right phase.
    pub fn tick(&mut self, now: Instant) {
        while self.advance(now) {}
    }

    fn advance(&mut self, now: Instant) -> bool {
        match &self.phase {
            Phase::Pending { message, show_at } if now >= *show_at => {
                self.phase = Phase::Visible {
                    message: message.clone(),
                    hide_at: *show_at + self.display_duration,
                };
                true
            }
            Phase::Visible { hide_at, .. } if now >= *hide_at => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// The message currently on screen, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Visible { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_message_shows_after_debounce_and_hides_after_duration() {
        let start = Instant::now();
        let mut toaster = Toaster::new();

        toaster.show("Searching...", start);
        assert_eq!(toaster.message(), None);

        toaster.tick(start + ms(49));
        assert_eq!(toaster.message(), None);

        toaster.tick(start + ms(50));
        assert_eq!(toaster.message(), Some("Searching..."));

        toaster.tick(start + ms(1049));
        assert_eq!(toaster.message(), Some("Searching..."));

        toaster.tick(start + ms(1050));
        assert_eq!(toaster.message(), None);
        assert!(toaster.is_idle());
    }

    #[test]
    fn test_rapid_second_message_wins_and_first_never_shows() {
        let start = Instant::now();
        let mut toaster = Toaster::new();

        toaster.show("A", start);
        toaster.show("B", start + ms(10));

        // A's show deadline passes without A ever appearing
        toaster.tick(start + ms(55));
        assert_eq!(toaster.message(), None);

        toaster.tick(start + ms(60));
        assert_eq!(toaster.message(), Some("B"));
    }

    #[test]
    fn test_new_message_supersedes_a_visible_one() {
        let start = Instant::now();
        let mut toaster = Toaster::new();

        toaster.show("A", start);
        toaster.tick(start + ms(60));
        assert_eq!(toaster.message(), Some("A"));

        // Posting while visible hides the old message immediately
        toaster.show("B", start + ms(100));
        assert_eq!(toaster.message(), None);

        // A's hide deadline must not cancel B
        toaster.tick(start + ms(1050));
        assert_eq!(toaster.message(), Some("B"));
    }

    #[test]
    fn test_coarse_tick_lands_in_the_right_phase() {
        let start = Instant::now();
        let mut toaster = Toaster::with_display_duration(ms(0));

        toaster.show("gone", start);

        // One tick past both deadlines walks Pending -> Visible -> Idle
        toaster.tick(start + ms(60));
        assert!(toaster.is_idle());
    }

    #[test]
    fn test_idle_toaster_ignores_ticks() {
        let start = Instant::now();
        let mut toaster = Toaster::new();

        toaster.tick(start + ms(500));
        assert!(toaster.is_idle());
        assert_eq!(toaster.message(), None);
    }
}
