const JAN_FIRST_1990: f64 = 1_580_970_496.0;
const HIGH_DWORD: f64 = 4_294_967_296.0;
const MAC_BASE: f64 = 9_561_652_096.0;

const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// A FILETIME-style pair of 32-bit halves holding a count of
/// 100-nanosecond ticks since 1601-01-01 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTime {
    pub high: u32,
    pub low: u32,
}

impl FileTime {
    /// Converts a stored PatchMaster timestamp (seconds in the
    /// format's own numbering) to a FILETIME pair.
    pub fn from_seconds(seconds: f64) -> Self {
        let mut time = seconds - JAN_FIRST_1990;

        // Stored values below the reference point are legitimate; fold
        // them back into the unsigned 32-bit range.
        if time < 0.0 {
            time += HIGH_DWORD;
        }

        time += MAC_BASE;
        time *= 10_000_000.0;

        // Time.txt in HEKA's FileFormat_v9 kit splits on 2^31 rather
        // than 2^32 so the double never passes through a signed 32-bit
        // cast, then moves the spare bit into the top of the low half.
        // Keep the same sequence so the halves land exactly where
        // FILETIME expects them.
        let mut high = (time / (HIGH_DWORD / 2.0)) as u32;
        let mut low = (time - f64::from(high) * (HIGH_DWORD / 2.0)) as u32;
        low |= (high & 1) << 31;
        high >>= 1;

        FileTime { high, low }
    }

    pub fn ticks(&self) -> u64 {
        (u64::from(self.high) << 32) | u64::from(self.low)
    }

    pub fn to_unix_seconds(&self) -> i64 {
        (self.ticks() as i64 - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_SEC
    }
}

impl From<f64> for FileTime {
    fn from(seconds: f64) -> Self {
        FileTime::from_seconds(seconds)
    }
}
