// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inclusive range of calendar dates.
//!
//! A date range `{from - to}` contains every day between `from` and `to`, both included. Dates are truncated to their calendar day on the way in (see [`ToDate`](../date/trait.ToDate.html)), so the time of day and the time zone of the inputs never matter.
//!
//! The zero range, obtained with `DateRange::zero()` or `Default`, stands for "no dates". It never contains, overlaps or includes anything.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daterange::DateRange;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//!
//! let a = DateRange::new(day(28), day(16));
//! let b = DateRange::new(day(20), day(24));
//! assert_eq!(a.to_string(), "{2024-01-16 - 2024-01-28}");
//! assert!(a.includes(&b));
//! assert_eq!(a.difference(&b).to_string(), "[{2024-01-16 - 2024-01-19} {2024-01-25 - 2024-01-28}]");
//! ```

use std::cmp::{max, min};
use std::fmt;

use chrono::NaiveDate;
use gcollections::kind::Collection;
use gcollections::ops::{Bounded, Cardinality, Contains, Difference, Empty, Intersection, Overlap, Subset, Union};
use log::error;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::date::{next_day, previous_day, ToDate, ZERO_DATE};
use crate::date_ranges::DateRanges;
use crate::error::DateRangeError;
use crate::ops::{Adjacent, Hull};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
  from: NaiveDate,
  to: NaiveDate
}

impl DateRange
{
  /// Truncates both dates to their calendar day and orders them. Never fails.
  pub fn new<F: ToDate, T: ToDate>(from: F, to: T) -> DateRange {
    let from = from.to_date();
    let to = to.to_date();
    DateRange {
      from: min(from, to),
      to: max(from, to)
    }
  }

  /// Like `new` but refuses a `from` date after the `to` date, once both are truncated.
  pub fn try_new<F: ToDate, T: ToDate>(from: F, to: T) -> Result<DateRange, DateRangeError> {
    let from = from.to_date();
    let to = to.to_date();
    if from > to {
      Err(DateRangeError::FromAfterTo { from, to })
    }
    else {
      Ok(DateRange { from, to })
    }
  }

  /// Panics if the truncated `from` date is after the truncated `to` date. Use `new` to order the dates instead.
  pub fn must_new<F: ToDate, T: ToDate>(from: F, to: T) -> DateRange {
    match DateRange::try_new(from, to) {
      Ok(range) => range,
      Err(e) => {
        error!("invalid date range: {}", e);
        panic!("{}", e)
      }
    }
  }

  pub fn zero() -> DateRange {
    DateRange { from: ZERO_DATE, to: ZERO_DATE }
  }

  pub fn from(&self) -> NaiveDate {
    self.from
  }

  pub fn to(&self) -> NaiveDate {
    self.to
  }

  pub fn is_zero(&self) -> bool {
    self.from == ZERO_DATE && self.to == ZERO_DATE
  }

  /// Number of days in the range, both ends included.
  pub fn days(&self) -> u64 {
    if self.is_zero() { 0 }
    else {
      self.to.signed_duration_since(self.from).num_days() as u64 + 1
    }
  }

  pub fn contains<D: ToDate>(&self, date: D) -> bool {
    if self.is_zero() {
      return false;
    }
    let date = date.to_date();
    self.from <= date && date <= self.to
  }

  /// At least one day belongs to both ranges.
  pub fn overlaps(&self, other: &DateRange) -> bool {
    if self.is_zero() || other.is_zero() {
      return false;
    }
    self.contains(other.from) || self.contains(other.to)
      || other.contains(self.from) || other.contains(self.to)
  }

  /// `other` lies entirely inside `self`.
  pub fn includes(&self, other: &DateRange) -> bool {
    if self.is_zero() || other.is_zero() {
      return false;
    }
    self.contains(other.from) && self.contains(other.to)
  }

  /// The zero range when the ranges do not overlap.
  pub fn intersection(&self, other: &DateRange) -> DateRange {
    if self.overlaps(other) {
      DateRange {
        from: max(self.from, other.from),
        to: min(self.to, other.to)
      }
    }
    else {
      DateRange::zero()
    }
  }

  /// Overlapping or adjacent ranges are merged, otherwise both ranges are kept in ascending order.
  pub fn union(&self, other: &DateRange) -> DateRanges {
    match (self.is_zero(), other.is_zero()) {
      (true, true) => DateRanges::default(),
      (true, false) => DateRanges::new(vec![*other]),
      (false, true) => DateRanges::new(vec![*self]),
      _ if self.overlaps(other) || self.is_adjacent(other) =>
        DateRanges::new(vec![self.hull(other)]),
      _ if self.from < other.from => DateRanges::new(vec![*self, *other]),
      _ => DateRanges::new(vec![*other, *self])
    }
  }

  /// Days of `self` not in `other`: at most one fragment before `other` and one after it.
  pub fn difference(&self, other: &DateRange) -> DateRanges {
    if self.is_zero() {
      return DateRanges::default();
    }
    if !self.overlaps(other) {
      return DateRanges::new(vec![*self]);
    }

    let mut fragments = DateRanges::default();
    if other.from > self.from {
      if let Some(to) = previous_day(other.from) {
        fragments.append(vec![DateRange { from: self.from, to }]);
      }
    }
    if other.to < self.to {
      if let Some(from) = next_day(other.to) {
        fragments.append(vec![DateRange { from, to: self.to }]);
      }
    }
    fragments
  }
}

impl Default for DateRange
{
  fn default() -> DateRange {
    DateRange::zero()
  }
}

impl fmt::Display for DateRange
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "{{{} - {}}}", self.from.format("%Y-%m-%d"), self.to.format("%Y-%m-%d"))
  }
}

impl Hull for DateRange
{
  type Output = DateRange;

  fn hull(&self, other: &DateRange) -> DateRange {
    if self.is_zero() { *other }
    else if other.is_zero() { *self }
    else {
      DateRange {
        from: min(self.from, other.from),
        to: max(self.to, other.to)
      }
    }
  }
}

impl Adjacent for DateRange
{
  fn is_adjacent(&self, other: &DateRange) -> bool {
    if self.is_zero() || other.is_zero() {
      return false;
    }
    next_day(self.to) == Some(other.from) || next_day(other.to) == Some(self.from)
  }
}

impl Collection for DateRange
{
  type Item = NaiveDate;
}

impl Bounded for DateRange
{
  fn lower(&self) -> NaiveDate {
    debug_assert!(!self.is_zero(), "Cannot access lower bound of the zero date range.");
    self.from
  }

  fn upper(&self) -> NaiveDate {
    debug_assert!(!self.is_zero(), "Cannot access upper bound of the zero date range.");
    self.to
  }
}

impl Cardinality for DateRange
{
  type Size = u64;

  fn size(&self) -> u64 {
    self.days()
  }
}

impl Empty for DateRange
{
  fn empty() -> DateRange {
    DateRange::zero()
  }
}

impl Contains for DateRange
{
  fn contains(&self, value: &NaiveDate) -> bool {
    DateRange::contains(self, *value)
  }
}

impl Overlap for DateRange
{
  fn overlap(&self, other: &DateRange) -> bool {
    self.overlaps(other)
  }
}

impl Subset for DateRange
{
  /// The zero range is a subset of every range.
  fn is_subset(&self, other: &DateRange) -> bool {
    self.is_zero() || other.includes(self)
  }
}

impl Intersection for DateRange
{
  type Output = DateRange;

  fn intersection(&self, other: &DateRange) -> DateRange {
    DateRange::intersection(self, other)
  }
}

impl Union for DateRange
{
  type Output = DateRanges;

  fn union(&self, other: &DateRange) -> DateRanges {
    DateRange::union(self, other)
  }
}

impl Difference for DateRange
{
  type Output = DateRanges;

  fn difference(&self, other: &DateRange) -> DateRanges {
    DateRange::difference(self, other)
  }
}

impl Serialize for DateRange
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    if self.is_zero() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.from, self.to))
    }
  }
}

impl<'de> Deserialize<'de> for DateRange
{
  fn deserialize<D>(deserializer: D) -> Result<DateRange, D::Error> where
    D: Deserializer<'de>
  {
    match Option::<(NaiveDate, NaiveDate)>::deserialize(deserializer)? {
      None => Ok(DateRange::zero()),
      Some((from, to)) => Ok(DateRange::new(from, to))
    }
  }
}
