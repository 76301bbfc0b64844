// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Converters and clocks bound to the host's timezone.
//!
//! Detection goes through `iana-time-zone`, so the result is a proper
//! IANA zone with full DST rules, not a fixed offset snapshot.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::converter::TimezoneConverter;
use crate::error::{Error, Result};

/// Resolve the host's IANA timezone.
pub fn timezone() -> Result<Tz> {
    let name = iana_time_zone::get_timezone()
        .map_err(|err| Error::SystemTimezone(err.to_string()))?;
    name.parse::<Tz>().map_err(|_| Error::SystemTimezone(name))
}

/// A [`TimezoneConverter`] bound to the host's timezone.
pub fn converter() -> Result<TimezoneConverter> {
    Ok(TimezoneConverter::from_tz(timezone()?))
}

/// A [`Clock`] bound to the host's timezone.
pub fn clock() -> Result<Clock> {
    Ok(Clock::from_tz(timezone()?))
}

/// The current instant in the host's timezone.
pub fn now() -> Result<DateTime<Tz>> {
    Ok(clock()?.now())
}

/// Today's date as observed in the host's timezone.
pub fn today() -> Result<NaiveDate> {
    Ok(clock()?.today())
}
