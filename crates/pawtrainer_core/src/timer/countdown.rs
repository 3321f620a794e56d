//! Countdown state machine.
//!
//! Phases:
//! - `Idle`: not counting. `remaining` is the total before the first start,
//!   or whatever was left when stopped.
//! - `Running`: decremented by one per `tick`.
//! - `Completed`: reached zero while running.

/// Current phase of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Completed,
}

/// Result of feeding one event into a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with time left.
    Counting,
    /// This event drove the countdown to zero.
    Completed,
    /// The countdown was not running; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u32,
    remaining_secs: u32,
    phase: TimerPhase,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            phase: TimerPhase::Idle,
        }
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Resets to the full duration and starts counting.
    ///
    /// A zero-length countdown completes immediately.
    pub fn start(&mut self) -> TickOutcome {
        self.remaining_secs = self.total_secs;
        if self.total_secs == 0 {
            self.phase = TimerPhase::Completed;
            return TickOutcome::Completed;
        }
        self.phase = TimerPhase::Running;
        TickOutcome::Counting
    }

    /// Stops counting and keeps the remaining time. No-op unless running.
    pub fn stop(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Idle;
        }
    }

    /// Applies one elapsed second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Ignored;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Counting
        }
    }

    /// Remaining time as zero-padded `MM:SS`.
    pub fn formatted(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

/// Formats seconds as `MM:SS`; minutes grow past two digits when needed.
pub fn format_mm_ss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_mm_ss, Countdown, TickOutcome, TimerPhase};

    #[test]
    fn thirty_ticks_complete_a_thirty_second_countdown() {
        let mut countdown = Countdown::new(30);
        assert_eq!(countdown.start(), TickOutcome::Counting);

        for _ in 0..29 {
            assert_eq!(countdown.tick(), TickOutcome::Counting);
        }
        assert_eq!(countdown.tick(), TickOutcome::Completed);
        assert_eq!(countdown.phase(), TimerPhase::Completed);
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn stop_keeps_remaining_and_start_resets() {
        let mut countdown = Countdown::new(30);
        countdown.start();
        for _ in 0..10 {
            countdown.tick();
        }
        countdown.stop();
        assert_eq!(countdown.phase(), TimerPhase::Idle);
        assert_eq!(countdown.remaining_secs(), 20);
        assert_eq!(countdown.tick(), TickOutcome::Ignored);
        assert_eq!(countdown.remaining_secs(), 20);

        countdown.start();
        assert_eq!(countdown.remaining_secs(), 30);
        assert!(countdown.is_running());
    }

    #[test]
    fn completed_countdown_can_restart() {
        let mut countdown = Countdown::new(1);
        countdown.start();
        assert_eq!(countdown.tick(), TickOutcome::Completed);
        countdown.stop();
        assert_eq!(countdown.phase(), TimerPhase::Completed);

        countdown.start();
        assert_eq!(countdown.phase(), TimerPhase::Running);
        assert_eq!(countdown.remaining_secs(), 1);
    }

    #[test]
    fn zero_length_countdown_completes_on_start() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.start(), TickOutcome::Completed);
        assert_eq!(countdown.phase(), TimerPhase::Completed);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(90), "01:30");
        assert_eq!(format_mm_ss(5), "00:05");
        assert_eq!(Countdown::new(60).formatted(), "01:00");
    }
}
