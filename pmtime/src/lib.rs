pub mod calendar;
pub mod error;
pub mod filetime;

pub use calendar::CalendarTime;
pub use error::Error;
pub use filetime::FileTime;

/// Converts a stored PatchMaster timestamp straight to a calendar
/// date/time.
pub fn seconds_to_calendar(seconds: f64) -> Result<CalendarTime, Error> {
    CalendarTime::try_from(FileTime::from_seconds(seconds))
}
