use crate::domain::model::TimeOfDay;
use crate::domain::ports::Clock;
use chrono::Local;

/// Local wall-clock time of the machine running the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from(Local::now().time())
    }
}

/// Always reports the same time. Used for `--at` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(TimeOfDay);

impl FixedClock {
    pub fn new(time: TimeOfDay) -> Self {
        Self(time)
    }

    /// Panics on an out-of-range hour or minute.
    pub fn at(hour: u8, minute: u8) -> Self {
        Self(TimeOfDay::new(hour, minute).expect("valid time of day"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
