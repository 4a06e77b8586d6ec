// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides inclusive ranges of calendar days and normalized sets of such ranges. Only the calendar date matters: time of day and time zone are dropped when a date enters a range.
//!
//! A [`DateRange`](date_range/struct.DateRange.html) supports membership, overlap, inclusion, intersection, union and difference. Union and difference can produce two disjoint ranges, they return a [`DateRanges`](date_ranges/struct.DateRanges.html) collection which keeps its ranges sorted and merges overlapping or adjacent ones.
//!
//! Both types implement the operation traits of [gcollections](https://docs.rs/gcollections) so they can be used by generic algorithms.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daterange::{DateRange, DateRanges};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2019, 1, d).unwrap();
//!
//! let mut ranges = DateRanges::new(vec![
//!   DateRange::new(day(9), day(18)),
//!   DateRange::new(day(2), day(4)),
//! ]);
//! assert_eq!(ranges.to_string(), "[{2019-01-02 - 2019-01-04} {2019-01-09 - 2019-01-18}]");
//!
//! let gap = DateRange::new(day(3), day(10));
//! assert!(ranges.is_any_date_in(&gap));
//! assert!(!ranges.is_all_dates_in(&gap));
//!
//! ranges.append(vec![DateRange::new(day(5), day(8))]);
//! assert_eq!(ranges.len(), 1);
//! assert!(ranges.is_all_dates_in(&gap));
//! ```

pub mod date;
pub mod date_range;
pub mod date_ranges;
pub mod error;
pub mod ops;

pub use crate::date::{ToDate, ZERO_DATE};
pub use crate::date_range::DateRange;
pub use crate::date_ranges::DateRanges;
pub use crate::error::DateRangeError;
