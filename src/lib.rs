// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timezone-pinned datetime helpers.
//!
//! This crate exists to kill one class of bug: silently mixing naive
//! (timezone-less) and aware (timezone-attached) datetimes, and rounding
//! timestamps to a reporting granularity inconsistently across timezone
//! boundaries.
//!
//! A [`TimezoneConverter`] is bound to a single IANA timezone for its
//! lifetime. Every aware datetime it produces carries that zone, and every
//! conversion between naive and aware values goes through an explicitly
//! named operation ([`TimezoneConverter::make_aware`],
//! [`TimezoneConverter::localize`]) — chrono's type split between
//! [`chrono::NaiveDateTime`] and [`chrono::DateTime`] makes the silent
//! variants unrepresentable.
//!
//! [`TimezoneConverter::quantize`] rounds an instant to a grid of fixed
//! sub-day resolution, anchored at local midnight and walked in wall-clock
//! time, so "start of the 30-minute slot" means the same thing on a DST
//! transition day as on any other.
//!
//! # Example
//!
//! ```
//! use chrono::Duration;
//! use datetime_tools::{Rounding, TimezoneConverter};
//!
//! let paris = TimezoneConverter::new("Europe/Paris").unwrap();
//!
//! let dt = paris.datetime(2024, 7, 9, 12, 45, 0, 0).unwrap();
//! let slot = paris.quantize(&dt, Duration::minutes(30), Rounding::Down).unwrap();
//!
//! assert_eq!(slot, paris.datetime(2024, 7, 9, 12, 30, 0, 0).unwrap());
//! ```

mod clock;
mod converter;
mod error;
pub mod localtime;

pub use clock::Clock;
pub use converter::{Fold, Rounding, TimeOfDay, TimezoneConverter};
pub use error::{Error, Result};
