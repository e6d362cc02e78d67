//! Report time windows.
//!
//! All timestamps are Unix epoch milliseconds (`i64`), matching the telemetry
//! feed.  A window is half-open in spirit but both ends are used inclusively
//! by the visit scan: a trip ending exactly at `start_ms` still counts, and a
//! vehicle still parked at the end is charged up to `end_ms`.

use std::fmt;

use crate::{TosError, TosResult};

/// A validated `[start_ms, end_ms]` window with `start_ms < end_ms`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWindow")
)]
pub struct TimeWindow {
    start_ms: i64,
    end_ms:   i64,
}

impl TimeWindow {
    /// Build a window, rejecting `start_ms >= end_ms`.
    pub fn new(start_ms: i64, end_ms: i64) -> TosResult<Self> {
        if start_ms >= end_ms {
            return Err(TosError::InvalidWindow { start_ms, end_ms });
        }
        Ok(Self { start_ms, end_ms })
    }

    /// The window of `duration_ms` milliseconds ending at `end_ms`.
    ///
    /// This is how the telemetry query expresses its range.
    pub fn ending_at(end_ms: i64, duration_ms: i64) -> TosResult<Self> {
        let start_ms = end_ms
            .checked_sub(duration_ms)
            .ok_or(TosError::InvalidWindow { start_ms: i64::MIN, end_ms })?;
        Self::new(start_ms, end_ms)
    }

    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }
}

/// Unchecked wire form; deserialization goes through [`TimeWindow::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    start_ms: i64,
    end_ms:   i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindow> for TimeWindow {
    type Error = TosError;

    fn try_from(raw: RawWindow) -> TosResult<Self> {
        Self::new(raw.start_ms, raw.end_ms)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} ms, {} ms]", self.start_ms, self.end_ms)
    }
}
