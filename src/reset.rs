use chrono::{DateTime, Duration, Local, LocalResult, NaiveTime, TimeZone};

/// Time source for the reset schedule, pluggable for tests
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// First instant of the local day after `after`
pub fn next_midnight(after: DateTime<Local>) -> DateTime<Local> {
    let next_day = after.date_naive() + Duration::days(1);
    let naive = next_day.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // A DST gap swallowed midnight; fall back to a plain 24h step
        LocalResult::None => after + Duration::hours(24),
    }
}

/// Fires once per local midnight.
///
/// The deadline is recomputed from the current time after every firing, so
/// a process suspended across one or more midnights fires exactly once on
/// wake and re-anchors to the next true midnight instead of drifting on a
/// fixed 24-hour period.
pub struct ResetSchedule<C: Clock> {
    clock: C,
    next_reset: DateTime<Local>,
}

impl<C: Clock> ResetSchedule<C> {
    pub fn new(clock: C) -> Self {
        let next_reset = next_midnight(clock.now());
        Self { clock, next_reset }
    }

    /// The deadline the schedule is currently armed for
    pub fn next_reset(&self) -> DateTime<Local> {
        self.next_reset
    }

    /// True when the deadline has passed; reschedules before returning
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        if now < self.next_reset {
            return false;
        }
        self.next_reset = next_midnight(now);
        true
    }
}
