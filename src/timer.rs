use std::time::Instant;

/// Countdown that forces a regeneration when it runs out. The app owns
/// exactly one of these; re-arming replaces the deadline in place, so a
/// configuration change can never leave a second countdown running.
#[derive(Debug, Clone)]
pub struct ExpiryTimer {
    started: Instant,
    interval_secs: u64,
}

impl ExpiryTimer {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            started: Instant::now(),
            interval_secs,
        }
    }

    /// Restarts the countdown. Called on every configuration change and on
    /// every expiry.
    pub fn rearm(&mut self, interval_secs: u64) {
        self.started = Instant::now();
        self.interval_secs = interval_secs;
    }

    pub fn expired(&self) -> bool {
        self.started.elapsed().as_secs() >= self.interval_secs
    }

    /// Whole seconds left before the next regeneration (0 when expired).
    pub fn remaining_seconds(&self) -> u64 {
        self.interval_secs.saturating_sub(self.started.elapsed().as_secs())
    }

    /// Format the remaining time for the countdown label.
    pub fn format_remaining(&self) -> String {
        let secs = self.remaining_seconds();
        let mins = secs / 60;
        if mins > 0 {
            format!("{}m {}s", mins, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_timer_is_not_expired() {
        let timer = ExpiryTimer::new(30);
        assert!(!timer.expired());
        assert!(timer.remaining_seconds() <= 30);
        assert!(timer.remaining_seconds() >= 29);
    }

    #[test]
    fn test_zero_interval_expires_immediately() {
        let timer = ExpiryTimer::new(0);
        assert!(timer.expired());
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_rearm_resets_the_countdown() {
        let mut timer = ExpiryTimer::new(0);
        assert!(timer.expired());

        timer.rearm(30);
        assert!(!timer.expired());
        assert!(timer.remaining_seconds() >= 29);
    }

    #[test]
    fn test_rearm_can_change_the_interval() {
        let mut timer = ExpiryTimer::new(30);
        timer.rearm(120);
        assert!(timer.remaining_seconds() > 30);
    }

    #[test]
    fn test_format_remaining() {
        let timer = ExpiryTimer::new(0);
        assert_eq!(timer.format_remaining(), "0s");

        let timer = ExpiryTimer::new(30);
        let formatted = timer.format_remaining();
        assert!(formatted.ends_with('s'));
        assert!(!formatted.contains('m'));

        let timer = ExpiryTimer::new(90);
        assert!(timer.format_remaining().contains('m'));
    }
}
