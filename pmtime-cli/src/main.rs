use anyhow::Result;
use clap::Parser;
use log::trace;
use pmtime::{CalendarTime, FileTime};
use serde::Serialize;

#[derive(Parser, Debug)]
#[clap(version, allow_negative_numbers = true)]
struct Opts {
    /// Stored timestamp in seconds, as read from a PatchMaster record
    seconds: f64,

    #[clap(long, short, action)]
    /// Print the date as a JSON object instead of plain text
    json: bool,
}

#[derive(Serialize, Debug)]
struct Timestamp {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    unix_seconds: i64,
}

impl Timestamp {
    fn new(cal: CalendarTime, ft: FileTime) -> Self {
        Self {
            year: cal.year,
            month: cal.month,
            day: cal.day,
            hour: cal.hour,
            minute: cal.minute,
            second: cal.second,
            millisecond: cal.millisecond,
            unix_seconds: ft.to_unix_seconds(),
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Opts::parse();
    let file_time: FileTime = args.seconds.into();
    trace!("file time: {:?}", file_time);

    let date = CalendarTime::try_from(file_time)?;
    if args.json {
        println!("{}", serde_json::to_string(&Timestamp::new(date, file_time))?);
    } else {
        println!("{}", date);
    }

    Ok(())
}
