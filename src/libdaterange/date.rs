// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Calendar dates as seen by date ranges.
//!
//! A date range only cares about the calendar day. Every value entering a range goes through [`ToDate`], which keeps the year, month and day of the value in its own time zone and drops everything else. The resulting `NaiveDate` is understood as midnight UTC of that day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Sentinel date of the zero range. It is the smallest representable date.
///
/// A range made of this single day is indistinguishable from the zero range: `DateRange::new(ZERO_DATE, ZERO_DATE)` is the zero range and normalization drops it. Ranges that start on this date and end later are unaffected.
pub const ZERO_DATE: NaiveDate = NaiveDate::MIN;

/// Truncation of a date-like value to its calendar day.
///
/// The conversion reads the calendar fields of the value and never does arithmetic on durations, so daylight-saving transitions cannot shift the result.
pub trait ToDate {
  fn to_date(self) -> NaiveDate;
}

impl ToDate for NaiveDate {
  fn to_date(self) -> NaiveDate { self }
}

impl ToDate for NaiveDateTime {
  fn to_date(self) -> NaiveDate {
    self.date()
  }
}

impl<Tz: TimeZone> ToDate for DateTime<Tz> {
  fn to_date(self) -> NaiveDate {
    // Local calendar day: 2024-01-26 21:00 EST stays the 26th.
    self.date_naive()
  }
}

impl<'a, T: ToDate + Clone> ToDate for &'a T {
  fn to_date(self) -> NaiveDate {
    self.clone().to_date()
  }
}

/// Midnight UTC of `date`.
pub fn midnight_utc<D: ToDate>(date: D) -> DateTime<Utc> {
  Utc.from_utc_datetime(&date.to_date().and_time(NaiveTime::default()))
}

/// The day after `date`, `None` past the last representable date.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
  date.succ_opt()
}

/// The day before `date`, `None` before the first representable date.
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
  date.pred_opt()
}
