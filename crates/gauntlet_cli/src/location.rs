//! Shapes store records into location view models

use gauntlet::{transform, Completion, Transform, TransformResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const NO_LOCATION_MESSAGE: &str = "There is no location attached to the provided record.";
pub const INVALID_HOURS_MESSAGE: &str =
    "The hours of operation are in an invalid format: expected 'H:MMxm - H:MMxm'.";
pub const CLOSE_BEFORE_OPEN_MESSAGE: &str = "The close time must be later than the open time";

static HOURS_OF_OPERATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)(?::(\d+))?([ap]m) - (\d+)(?::(\d+))?([ap]m)")
        .expect("hours of operation pattern is valid")
});

/// A record as it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub hours_of_operation: String,
}

/// A location as it is displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub location_id: u64,
    pub location_name: String,
    pub location_open_time: TimeOfDay,
    pub location_close_time: TimeOfDay,
}

/// A time on a 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    /// Converts a 12-hour clock time into a 24-hour one, or `None` if it doesn't fit
    fn from_meridiem(hour: u32, minute: u32, meridiem: &str) -> Option<Self> {
        let hour = match (meridiem.to_ascii_lowercase().as_str(), hour) {
            ("pm", 12) => 12,
            ("pm", hour) => hour.checked_add(12)?,
            ("am", 12) => 0,
            (_, hour) => hour,
        };
        let time = Self { hour, minute };
        time.minutes_of_day()?;
        Some(time)
    }

    fn minutes_of_day(&self) -> Option<u32> {
        self.hour.checked_mul(60)?.checked_add(self.minute)
    }
}

fn to_view_model(
    record: &SourceRecord,
    g: &Completion<'_, SourceRecord, ViewModel>,
) -> TransformResult<SourceRecord, ViewModel> {
    let Some(location) = &record.location else {
        return g.fail(NO_LOCATION_MESSAGE);
    };

    let Some(captures) = HOURS_OF_OPERATION.captures(&location.hours_of_operation) else {
        return g.fail(INVALID_HOURS_MESSAGE);
    };
    let number = |i: usize| -> Option<u32> {
        captures
            .get(i)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };
    let (Some(open_hour), Some(open_minute), Some(close_hour), Some(close_minute)) =
        (number(1), number(2), number(4), number(5))
    else {
        return g.fail(INVALID_HOURS_MESSAGE);
    };

    let (Some(open), Some(close)) = (
        TimeOfDay::from_meridiem(open_hour, open_minute, &captures[3]),
        TimeOfDay::from_meridiem(close_hour, close_minute, &captures[6]),
    ) else {
        return g.fail(INVALID_HOURS_MESSAGE);
    };
    if open.minutes_of_day() > close.minutes_of_day() {
        return g.fail(CLOSE_BEFORE_OPEN_MESSAGE);
    }

    g.succeed(ViewModel {
        location_id: location.id,
        location_name: location.name.clone(),
        location_open_time: open,
        location_close_time: close,
    })
}

/// Creates the transform from [`SourceRecord`] to [`ViewModel`]
pub fn location_transform() -> impl Transform<SourceRecord, ViewModel> {
    transform(to_view_model)
}
