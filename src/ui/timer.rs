//! Free-running elapsed time display.

use std::time::{Duration, Instant};

/// Format elapsed time as `MM:SS`.
///
/// Minutes are not capped, so a long session renders as `125:07`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1_000;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Recurring tick measured from a fixed start instant.
///
/// The start instant never moves: stopping only cancels the tick, so a
/// restarted timer keeps counting from the original start.
#[derive(Debug, Clone)]
pub struct ElapsedTimer {
    started_at: Instant,
    period: Duration,
    next_tick: Option<Instant>,
}

impl ElapsedTimer {
    pub fn new(started_at: Instant, period: Duration) -> Self {
        Self {
            started_at,
            period,
            next_tick: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Start ticking. Returns false if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.next_tick = Some(now + self.period);
        true
    }

    /// Cancel the tick. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        self.next_tick.take().is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Fire the tick if it is due, returning the text to display.
    ///
    /// Missed periods collapse into a single update.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let mut due = self.next_tick?;
        if now < due {
            return None;
        }
        while due <= now {
            due += self.period;
        }
        self.next_tick = Some(due);
        Some(format_elapsed(self.elapsed(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "02:05");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
    }

    #[test]
    fn minutes_are_not_capped() {
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
        assert_eq!(format_elapsed(Duration::from_secs(125 * 60 + 7)), "125:07");
    }

    #[test]
    fn poll_before_start_is_silent() {
        let start = Instant::now();
        let mut timer = ElapsedTimer::new(start, Duration::from_secs(1));
        assert_eq!(timer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn ticks_once_per_period() {
        let start = Instant::now();
        let mut timer = ElapsedTimer::new(start, Duration::from_secs(1));
        assert!(timer.start(start));
        assert_eq!(timer.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            timer.poll(start + Duration::from_millis(1000)).as_deref(),
            Some("00:01")
        );
        assert_eq!(timer.poll(start + Duration::from_millis(1500)), None);
    }

    #[test]
    fn missed_periods_collapse() {
        let start = Instant::now();
        let mut timer = ElapsedTimer::new(start, Duration::from_secs(1));
        timer.start(start);
        assert_eq!(
            timer.poll(start + Duration::from_secs(125)).as_deref(),
            Some("02:05")
        );
        assert_eq!(timer.poll(start + Duration::from_millis(125_500)), None);
    }

    #[test]
    fn stop_is_idempotent() {
        let start = Instant::now();
        let mut timer = ElapsedTimer::new(start, Duration::from_secs(1));
        assert!(!timer.stop());
        timer.start(start);
        assert!(!timer.start(start));
        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_running());
        assert_eq!(timer.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn restart_keeps_original_start() {
        let start = Instant::now();
        let mut timer = ElapsedTimer::new(start, Duration::from_secs(1));
        timer.start(start);
        timer.stop();
        let later = start + Duration::from_secs(30);
        timer.start(later);
        assert_eq!(
            timer.poll(later + Duration::from_secs(1)).as_deref(),
            Some("00:31")
        );
    }
}
