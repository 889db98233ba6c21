use chrono::NaiveDateTime;

/// Hands out ids derived from the creation time in epoch milliseconds. When two ids would land on
/// the same millisecond (or the clock goes backwards) the newer one is bumped past the last id.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// A generator that never hands out `1..=last`, for when those ids are already taken.
    pub(crate) fn starting_after(last: i64) -> Self {
        Self { last }
    }

    pub(crate) fn next(&mut self, now: NaiveDateTime) -> String {
        let millis = now.and_utc().timestamp_millis();
        let id = millis.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}
