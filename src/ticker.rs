use std::time::{Duration, Instant};

/// Cancellable fixed-interval timer. Time is always handed in by the caller.
#[derive(Debug, Clone)]
pub struct Ticker {
    delay: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(delay: Duration) -> Self {
        Ticker { delay, next_due: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts (or restarts) the timer with the first tick due right away.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true once per elapsed deadline and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.next_due {
            Some(due) if now >= due => due,
            _ => return false,
        };

        let next = due + self.delay;
        // Fell more than one interval behind: don't try to catch up in a burst
        self.next_due = Some(if next <= now { now + self.delay } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_until_started() {
        let mut ticker = Ticker::new(DELAY);
        let now = Instant::now();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(now + DELAY * 5));
    }

    #[test]
    fn test_first_tick_is_immediate() {
        let mut ticker = Ticker::new(DELAY);
        let now = Instant::now();
        ticker.start(now);

        assert!(ticker.poll(now));
        assert!(!ticker.poll(now));
        assert!(!ticker.poll(now + Duration::from_millis(99)));
        assert!(ticker.poll(now + DELAY));
    }

    #[test]
    fn test_stop_cancels() {
        let mut ticker = Ticker::new(DELAY);
        let now = Instant::now();
        ticker.start(now);
        assert!(ticker.poll(now));

        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(now + DELAY * 3));
    }

    #[test]
    fn test_no_burst_after_stall() {
        let mut ticker = Ticker::new(DELAY);
        let now = Instant::now();
        ticker.start(now);
        assert!(ticker.poll(now));

        let late = now + DELAY * 10;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert!(!ticker.poll(late + DELAY / 2));
        assert!(ticker.poll(late + DELAY));
    }
}
