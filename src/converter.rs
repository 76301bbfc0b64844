// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Datetime construction, conversion and quantization in one timezone.
//!
//! [`TimezoneConverter`] is bound to a single IANA timezone at construction
//! and every aware datetime it returns carries that zone, never another.
//! chrono keeps naive ([`NaiveDateTime`]) and aware ([`DateTime`]) values as
//! distinct types, so attaching a timezone twice, or feeding a naive value
//! where an instant is required, is a compile error rather than a silent
//! reinterpretation.

use std::fmt;

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Disambiguation for a wall-clock time that occurs twice during a
/// backward DST transition.
///
/// For every other wall-clock time the flag is irrelevant and the earlier
/// default is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fold {
    /// The first occurrence, before the clocks went back.
    #[default]
    Earlier,
    /// The second occurrence, after the clocks went back.
    Later,
}

/// Which boundary of the quantization grid to round to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// The boundary at or before the input.
    Down,
    /// The boundary strictly after the input.
    Up,
}

/// A time of day that may or may not carry a timezone of its own.
///
/// [`TimezoneConverter::combine`] accepts anything `Into<TimeOfDay>`, so a
/// plain [`NaiveTime`] can be passed directly for the common case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// Wall-clock time with no timezone; interpreted in the converter's zone.
    Naive(NaiveTime),
    /// Wall-clock time in the given zone; the instant it denotes (on the
    /// combined date) is projected into the converter's zone.
    Zoned(NaiveTime, Tz),
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::Naive(time)
    }
}

/// Parse an IANA timezone name via the chrono-tz database.
pub(crate) fn parse_tz(timezone: &str) -> Result<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(timezone.to_string()))
}

/// Builds, converts and quantizes datetimes in a single IANA timezone.
///
/// A converter holds no mutable state and is safe to share freely across
/// threads; typical usage is one converter per business timezone for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneConverter {
    tz: Tz,
}

impl TimezoneConverter {
    /// Create a converter bound to the named timezone.
    pub fn new(timezone: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_tz(timezone)?,
        })
    }

    /// Create a converter from an already-resolved timezone.
    pub fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The timezone this converter is bound to.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    // ---------------------- Constructors ----------------------

    /// Build an aware datetime directly in this converter's timezone.
    ///
    /// If the wall-clock reading is ambiguous (backward DST transition),
    /// the earlier occurrence is chosen; use [`Self::datetime_with_fold`]
    /// to pick explicitly.
    #[allow(clippy::too_many_arguments)]
    pub fn datetime(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<DateTime<Tz>> {
        self.datetime_with_fold(
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
            Fold::Earlier,
        )
    }

    /// Build an aware datetime with an explicit fold for the doubled
    /// wall-clock hour of a backward DST transition.
    #[allow(clippy::too_many_arguments)]
    pub fn datetime_with_fold(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
        fold: Fold,
    ) -> Result<DateTime<Tz>> {
        let invalid = || {
            Error::InvalidDate(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                year, month, day, hour, minute, second, microsecond
            ))
        };
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        let time =
            NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or_else(invalid)?;
        self.resolve_local(date.and_time(time), fold)
    }

    /// Build an aware datetime from a date and a time of day.
    ///
    /// A naive time is interpreted as wall-clock time in this converter's
    /// zone. A zone-tagged time is interpreted in its own zone first and
    /// the resulting instant projected here, so the calendar date of the
    /// result may differ from `date`. Either way the result carries this
    /// converter's timezone.
    pub fn combine(&self, date: NaiveDate, time: impl Into<TimeOfDay>) -> Result<DateTime<Tz>> {
        match time.into() {
            TimeOfDay::Naive(time) => self.resolve_local(date.and_time(time), Fold::Earlier),
            TimeOfDay::Zoned(time, tz) => {
                let source = resolve_in(tz, date.and_time(time), Fold::Earlier)?;
                Ok(source.with_timezone(&self.tz))
            },
        }
    }

    /// Sentinel earlier than every constructible instant, in this zone.
    pub fn far_past(&self) -> DateTime<Tz> {
        DateTime::<Utc>::MIN_UTC.with_timezone(&self.tz)
    }

    /// Sentinel later than every constructible instant, in this zone.
    pub fn far_future(&self) -> DateTime<Tz> {
        DateTime::<Utc>::MAX_UTC.with_timezone(&self.tz)
    }

    // ---------------------- Naive/aware conversion ----------------------

    /// Attach this converter's timezone to a naive datetime, interpreting
    /// its fields as wall-clock time in this zone (earlier fold).
    ///
    /// Taking [`NaiveDateTime`] by value means an already-aware datetime
    /// cannot be passed here at all; there is no double-tagging hazard.
    pub fn make_aware(&self, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
        self.resolve_local(naive, Fold::Earlier)
    }

    /// [`Self::make_aware`] with an explicit fold.
    pub fn make_aware_with_fold(&self, naive: NaiveDateTime, fold: Fold) -> Result<DateTime<Tz>> {
        self.resolve_local(naive, fold)
    }

    /// Re-express an aware datetime from any timezone as the same instant
    /// viewed in this converter's zone.
    ///
    /// The instant is already unambiguous, so this cannot fail. Naive
    /// values are rejected at compile time; call [`Self::make_aware`]
    /// first to state which zone they belong to.
    pub fn localize<T: TimeZone>(&self, datetime: &DateTime<T>) -> DateTime<Tz> {
        datetime.with_timezone(&self.tz)
    }

    /// The calendar date of the given instant as observed in this
    /// converter's zone. May differ from the date in the input's own zone.
    pub fn date_of<T: TimeZone>(&self, datetime: &DateTime<T>) -> NaiveDate {
        self.localize(datetime).date_naive()
    }

    // ---------------------- Quantization ----------------------

    /// Round an instant to a boundary of a fixed sub-day grid.
    ///
    /// The grid is anchored at local midnight of the calendar date on
    /// which the input falls *in this converter's zone* and advances in
    /// wall-clock steps of `resolution`. The input belongs to the unique
    /// half-open interval `[lower, upper)` of that grid; `Rounding::Down`
    /// returns `lower`, `Rounding::Up` returns `upper`. An input exactly
    /// on a boundary belongs to the interval it opens.
    ///
    /// `resolution` does not have to tile a day evenly; the last interval
    /// of a date may spill into the next one.
    pub fn quantize<T: TimeZone>(
        &self,
        datetime: &DateTime<T>,
        resolution: Duration,
        mode: Rounding,
    ) -> Result<DateTime<Tz>> {
        if resolution > Duration::days(1) {
            return Err(Error::ResolutionTooLarge(resolution));
        }
        if resolution <= Duration::zero() {
            return Err(Error::ResolutionNotPositive(resolution));
        }

        // The sentinels localize to wall-clock readings chrono cannot
        // represent in zones on the far side of UTC.
        let localized = self.localize(datetime);
        let local = localized
            .naive_utc()
            .checked_add_offset(localized.offset().fix())
            .ok_or(Error::OutOfRange)?;

        // The grid lives in naive wall-clock space, so it is uniform
        // regardless of DST transitions and the enclosing interval is an
        // index computation rather than a scan. Both quantities are at
        // most one day after the guards above, so nanosecond counts fit.
        let anchor = local.date().and_time(NaiveTime::MIN);
        let step = resolution.num_nanoseconds().ok_or(Error::OutOfRange)?;
        let elapsed = (local - anchor).num_nanoseconds().ok_or(Error::OutOfRange)?;
        let lower = anchor
            .checked_add_signed(Duration::nanoseconds(elapsed / step * step))
            .ok_or(Error::OutOfRange)?;
        let boundary = match mode {
            Rounding::Down => lower,
            Rounding::Up => lower
                .checked_add_signed(resolution)
                .ok_or(Error::OutOfRange)?,
        };
        self.resolve_local(boundary, Fold::Earlier)
    }

    fn resolve_local(&self, naive: NaiveDateTime, fold: Fold) -> Result<DateTime<Tz>> {
        resolve_in(self.tz, naive, fold)
    }
}

/// Map a wall-clock reading to an instant in `tz`, using `fold` to pick
/// between the two instants of an ambiguous reading.
fn resolve_in(tz: Tz, naive: NaiveDateTime, fold: Fold) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => Ok(datetime),
        LocalResult::Ambiguous(earlier, later) => Ok(match fold {
            Fold::Earlier => earlier,
            Fold::Later => later,
        }),
        LocalResult::None => Err(Error::SkippedLocalTime(naive)),
    }
}

impl fmt::Display for TimezoneConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tz.name())
    }
}
