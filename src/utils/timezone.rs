use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Timezone in which "today" and the time-of-day slot are decided
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    /// `None`, blank or "local" mean the system zone; "utc"/"z" and IANA names are accepted
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let name = value.map(str::trim).unwrap_or_default();
        match name.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Timezone::Local),
            "utc" | "z" => Ok(Timezone::Named(chrono_tz::UTC)),
            _ => name
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }

    /// Wall-clock reading of `instant` in this zone
    pub(crate) fn wall_clock(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Timezone::Local => instant.with_timezone(&Local).naive_local(),
            Timezone::Named(tz) => instant.with_timezone(&tz).naive_local(),
        }
    }

    pub(crate) fn now(self) -> NaiveDateTime {
        self.wall_clock(Utc::now())
    }
}
