use std::fmt::{self, Display};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::{error::Error, filetime::FileTime};

const TICKS_PER_SECOND: u64 = 10_000_000;
const TICKS_PER_MILLISECOND: u64 = 10_000;

// FileTimeToSystemTime stops at the last year SYSTEMTIME can carry.
const MAX_CALENDAR_YEAR: i32 = 30827;

/// A broken-down UTC date/time, proleptic Gregorian, no leap seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

fn filetime_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1601, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("1601-01-01 00:00:00 is a valid date")
}

impl TryFrom<FileTime> for CalendarTime {
    type Error = Error;

    fn try_from(ft: FileTime) -> Result<Self, Self::Error> {
        let ticks = ft.ticks();
        let millisecond = (ticks % TICKS_PER_SECOND / TICKS_PER_MILLISECOND) as u32;

        let dt = filetime_epoch()
            .checked_add_signed(Duration::seconds((ticks / TICKS_PER_SECOND) as i64))
            .filter(|dt| dt.year() <= MAX_CALENDAR_YEAR)
            .ok_or(Error::OutOfRange(ticks))?;

        Ok(CalendarTime {
            year: dt.year() as u32,
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            millisecond,
        })
    }
}

impl Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{} {}:{}:{}.{}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
