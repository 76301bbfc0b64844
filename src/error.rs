// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by converters and clocks.
//!
//! Every failure here signals a programming error in the caller, not a
//! transient condition. Nothing is retried and no partial result is ever
//! produced.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`TimezoneConverter`](crate::TimezoneConverter),
/// [`Clock`](crate::Clock) and the [`localtime`](crate::localtime) helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The timezone name is not in the IANA database.
    UnknownTimezone(String),
    /// Calendar or clock components were out of range (e.g. month 13).
    InvalidDate(String),
    /// The wall-clock time does not exist in the target timezone because
    /// the clocks jumped over it during a forward DST transition.
    SkippedLocalTime(NaiveDateTime),
    /// The quantization resolution exceeds one calendar day, so the
    /// midnight-anchored grid has no well-defined boundary.
    ResolutionTooLarge(Duration),
    /// The quantization resolution is zero or negative.
    ResolutionNotPositive(Duration),
    /// A wall-clock reading fell outside chrono's representable range,
    /// e.g. when quantizing a sentinel from the far end of the calendar.
    OutOfRange,
    /// The host's timezone could not be detected or is not an IANA name.
    SystemTimezone(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTimezone(name) => {
                write!(f, "unknown timezone: {}", name)
            },
            Error::InvalidDate(components) => {
                write!(f, "invalid date/time components: {}", components)
            },
            Error::SkippedLocalTime(naive) => {
                write!(f, "wall-clock time {} is skipped by a DST transition", naive)
            },
            Error::ResolutionTooLarge(resolution) => {
                write!(f, "resolution {} exceeds one day", resolution)
            },
            Error::ResolutionNotPositive(resolution) => {
                write!(f, "resolution {} is not positive", resolution)
            },
            Error::OutOfRange => {
                write!(f, "wall-clock reading out of representable range")
            },
            Error::SystemTimezone(detail) => {
                write!(f, "cannot resolve system timezone: {}", detail)
            },
        }
    }
}

impl std::error::Error for Error {}
