// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Current date/time in a specific timezone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::converter::parse_tz;
use crate::error::Result;

/// Reads the system clock and reports it in one configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    tz: Tz,
}

impl Clock {
    /// Create a clock bound to the named timezone.
    pub fn new(timezone: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_tz(timezone)?,
        })
    }

    /// Create a clock from an already-resolved timezone.
    pub fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The timezone this clock reports in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The current instant as an aware datetime in this clock's timezone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Today's calendar date as observed in this clock's timezone.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
