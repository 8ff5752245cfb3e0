//! Repeating, cancelable timer seam.

/// Schedules the controller's recurring tick.
///
/// The controller guarantees `cancel` before any re-`arm`, so an
/// implementation only ever holds a single live schedule.
pub trait Ticker {
    /// Start a repeating schedule with the given period.
    fn arm(&mut self, period_ms: u32);

    /// Stop the schedule. Calling it while unarmed is a no-op.
    fn cancel(&mut self);

    /// Returns `true` (once) when a tick is due at `now_ms`.
    fn take_due(&mut self, now_ms: u64) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Schedule {
    Off,
    /// Armed, first deadline set on the next poll.
    Starting { period_ms: u32 },
    Running { period_ms: u32, next_due_ms: u64 },
}

/// Cooperative deadline ticker for poll-driven loops.
///
/// After a late poll the next deadline is counted from that poll, so a stalled
/// loop does not burst through several words at once.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTicker {
    schedule: Schedule,
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalTicker {
    pub const fn new() -> Self {
        Self {
            schedule: Schedule::Off,
        }
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self.schedule, Schedule::Off)
    }

    /// When the next tick falls due; `Some(0)` means "poll now".
    pub fn next_due_ms(&self) -> Option<u64> {
        match self.schedule {
            Schedule::Off => None,
            Schedule::Starting { .. } => Some(0),
            Schedule::Running { next_due_ms, .. } => Some(next_due_ms),
        }
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self, period_ms: u32) {
        self.schedule = Schedule::Starting {
            period_ms: period_ms.max(1),
        };
    }

    fn cancel(&mut self) {
        self.schedule = Schedule::Off;
    }

    fn take_due(&mut self, now_ms: u64) -> bool {
        match self.schedule {
            Schedule::Off => false,
            Schedule::Starting { period_ms } => {
                self.schedule = Schedule::Running {
                    period_ms,
                    next_due_ms: now_ms + period_ms as u64,
                };
                false
            }
            Schedule::Running {
                period_ms,
                next_due_ms,
            } => {
                if now_ms < next_due_ms {
                    return false;
                }
                self.schedule = Schedule::Running {
                    period_ms,
                    next_due_ms: now_ms + period_ms as u64,
                };
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_one_period_after_arming() {
        let mut ticker = IntervalTicker::new();
        ticker.arm(240);

        assert!(!ticker.take_due(1_000));
        assert_eq!(ticker.next_due_ms(), Some(1_240));
        assert!(!ticker.take_due(1_239));
        assert!(ticker.take_due(1_240));
        assert!(!ticker.take_due(1_241));
    }

    #[test]
    fn late_poll_rebases_deadline() {
        let mut ticker = IntervalTicker::new();
        ticker.arm(100);
        ticker.take_due(0);

        assert!(ticker.take_due(450));
        assert!(!ticker.take_due(500));
        assert_eq!(ticker.next_due_ms(), Some(550));
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut ticker = IntervalTicker::new();
        ticker.arm(10);
        ticker.take_due(0);
        ticker.cancel();

        assert!(!ticker.is_armed());
        assert!(!ticker.take_due(1_000));
        assert_eq!(ticker.next_due_ms(), None);
    }
}
