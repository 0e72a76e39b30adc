use chrono::{DateTime, Duration, FixedOffset};

/// A trailing time window `[anchor - minutes, anchor]`.
///
/// The window is anchored once, on the newest record of a run, and then
/// only answers containment queries; it carries no clock of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    earliest: DateTime<FixedOffset>,
}

impl TrailingWindow {
    /// The window of `minutes` minutes ending at `anchor`.
    pub fn ending_at(anchor: DateTime<FixedOffset>, minutes: i64) -> Self {
        TrailingWindow {
            earliest: anchor - Duration::minutes(minutes),
        }
    }

    /// Whether `time` falls inside the window. The earliest instant of
    /// the window is still inside it.
    pub fn covers(&self, time: DateTime<FixedOffset>) -> bool {
        time >= self.earliest
    }

    /// The earliest instant covered by the window.
    pub fn earliest(&self) -> DateTime<FixedOffset> {
        self.earliest
    }
}
