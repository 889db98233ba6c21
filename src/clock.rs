use chrono::{Local, NaiveDate, NaiveDateTime};

/// Where "now" comes from. Ids, default expense dates and the history window all read it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The local wall clock.
    #[default]
    System,
    /// A frozen instant, for tests and reproducible sessions.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(now) => *now,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
