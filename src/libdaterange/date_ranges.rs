// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Normalized set of date ranges.
//!
//! The ranges are kept sorted by their `from` date, zero ranges are dropped, and overlapping or adjacent ranges are merged. For example `{2019-01-01 - 2019-01-05}` and `{2019-01-06 - 2019-01-14}` are stored as the single range `{2019-01-01 - 2019-01-14}`. Every construction and every `append` goes through this normalization, so two collections covering the same days are always equal element-wise.
//!
//! # See also
//! [date_range](../date_range/index.html)

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::slice;
use std::vec;

use chrono::NaiveDate;
use gcollections::kind::Collection;
use gcollections::ops::{Cardinality, Contains, Difference, Empty, Intersection, Union};
use log::trace;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use trilean::SKleene;

use crate::date::{ToDate, ZERO_DATE};
use crate::date_range::DateRange;
use crate::ops::{Adjacent, Hull};

#[derive(Debug, Clone, Default)]
pub struct DateRanges {
  ranges: Vec<DateRange>
}

impl DateRanges
{
  pub fn new<I>(ranges: I) -> DateRanges where
   I: IntoIterator<Item=DateRange>
  {
    let mut res = DateRanges {
      ranges: ranges.into_iter().collect()
    };
    res.normalize();
    res
  }

  /// Copy of the ranges, in ascending order.
  pub fn to_vec(&self) -> Vec<DateRange> {
    self.ranges.clone()
  }

  pub fn as_slice(&self) -> &[DateRange] {
    &self.ranges
  }

  pub fn iter(&self) -> slice::Iter<DateRange> {
    self.ranges.iter()
  }

  pub fn is_zero(&self) -> bool {
    self.ranges.is_empty()
  }

  /// Number of disjoint ranges. Emptiness is `is_zero`, or `is_empty` from gcollections' `IsEmpty`.
  pub fn len(&self) -> usize {
    self.ranges.len()
  }

  /// `from` date of the first range, `ZERO_DATE` when empty.
  pub fn first_date(&self) -> NaiveDate {
    self.ranges.first().map_or(ZERO_DATE, |r| r.from())
  }

  /// `to` date of the last range, `ZERO_DATE` when empty.
  pub fn last_date(&self) -> NaiveDate {
    self.ranges.last().map_or(ZERO_DATE, |r| r.to())
  }

  /// Total number of days covered.
  pub fn days(&self) -> u64 {
    self.ranges.iter().map(|r| r.days()).sum()
  }

  /// Adds the ranges and normalizes the whole collection: a new range can bridge two existing ones.
  pub fn append<I>(&mut self, ranges: I) where
   I: IntoIterator<Item=DateRange>
  {
    self.ranges.extend(ranges);
    self.normalize();
  }

  fn normalize(&mut self) {
    if self.ranges.is_empty() {
      return;
    }
    let mut ranges = mem::take(&mut self.ranges);
    let count = ranges.len();
    ranges.retain(|r| !r.is_zero());
    ranges.sort_by_key(|r| r.from());
    self.ranges.reserve(ranges.len());
    for range in ranges {
      self.join_or_push(range);
    }
    trace!("normalized {} date ranges into {}", count, self.ranges.len());
  }

  fn join_or_push(&mut self, x: DateRange) {
    debug_assert!(!x.is_zero(), "Cannot push the zero date range.");
    debug_assert!(self.ranges.last().map_or(true, |back| back.from() <= x.from()),
      "Date ranges must be pushed in ascending order of their `from` date.");

    if let Some(back) = self.ranges.last_mut() {
      if joinable(back, &x) {
        *back = back.hull(&x);
        return;
      }
    }
    self.ranges.push(x);
  }

  pub fn contains<D: ToDate>(&self, date: D) -> bool {
    let date = date.to_date();
    self.ranges.binary_search_by(|r| {
      if r.to() < date { Ordering::Less }
      else if r.from() > date { Ordering::Greater }
      else { Ordering::Equal }
    }).is_ok()
  }

  /// At least one day of `range` is in the collection. Trivially true for the zero range.
  pub fn is_any_date_in(&self, range: &DateRange) -> bool {
    range.is_zero() || self.ranges.iter().any(|r| r.overlaps(range))
  }

  /// A single range of the collection includes the whole of `range`. Trivially true for the zero range.
  ///
  /// Ranges are checked one by one: a `range` spanning the gap between two elements is never included.
  pub fn is_all_dates_in(&self, range: &DateRange) -> bool {
    range.is_zero() || self.ranges.iter().any(|r| r.includes(range))
  }

  /// `True` when `is_all_dates_in` holds, `Unknown` when only `is_any_date_in` holds, `False` otherwise.
  pub fn covers(&self, range: &DateRange) -> SKleene {
    if self.is_all_dates_in(range) {
      SKleene::True
    }
    else if self.is_any_date_in(range) {
      SKleene::Unknown
    }
    else {
      SKleene::False
    }
  }

  /// Splits the collection around `pivot`. A range containing the pivot is cut in two and the pivot belongs to both halves.
  pub fn split_inclusive<D: ToDate>(&self, pivot: D) -> (DateRanges, DateRanges) {
    let pivot = pivot.to_date();
    let mut before = vec![];
    let mut after = vec![];
    for range in &self.ranges {
      if range.to() < pivot {
        before.push(*range);
      }
      else if range.from() > pivot {
        after.push(*range);
      }
      else {
        before.push(DateRange::new(range.from(), pivot));
        after.push(DateRange::new(pivot, range.to()));
      }
    }
    let mut lower = DateRanges::default();
    lower.append(before);
    let mut upper = DateRanges::default();
    upper.append(after);
    (lower, upper)
  }

  pub fn union(&self, other: &DateRanges) -> DateRanges {
    let mut res = self.clone();
    res.append(other.iter().cloned());
    res
  }

  pub fn intersection(&self, other: &DateRanges) -> DateRanges {
    let a = &self.ranges;
    let b = &other.ranges;
    let mut res = vec![];
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
      if a[i].overlaps(&b[j]) {
        res.push(a[i].intersection(&b[j]));
      }
      // Advance the one with the lowest upper bound.
      if a[i].to() < b[j].to() { i += 1; }
      else { j += 1; }
    }
    DateRanges::new(res)
  }

  pub fn difference(&self, other: &DateRanges) -> DateRanges {
    other.iter().fold(self.clone(), |res, cut| {
      DateRanges::new(res.into_iter().flat_map(|r| r.difference(cut)))
    })
  }
}

// Precondition: `first.from() <= second.from()`.
fn joinable(first: &DateRange, second: &DateRange) -> bool {
  first.overlaps(second) || first.is_adjacent(second)
}

impl Eq for DateRanges {}

impl PartialEq for DateRanges
{
  fn eq(&self, other: &DateRanges) -> bool {
    if self.len() != other.len() { false }
    else {
      self.ranges == other.ranges
    }
  }
}

impl fmt::Display for DateRanges
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("[")?;
    for (i, range) in self.ranges.iter().enumerate() {
      if i > 0 {
        formatter.write_str(" ")?;
      }
      write!(formatter, "{}", range)?;
    }
    formatter.write_str("]")
  }
}

impl Extend<DateRange> for DateRanges
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=DateRange>
  {
    self.append(iterable);
  }
}

impl FromIterator<DateRange> for DateRanges
{
  fn from_iter<I>(iterable: I) -> DateRanges where
   I: IntoIterator<Item=DateRange>
  {
    DateRanges::new(iterable)
  }
}

impl IntoIterator for DateRanges
{
  type Item = DateRange;
  type IntoIter = vec::IntoIter<DateRange>;

  fn into_iter(self) -> Self::IntoIter {
    self.ranges.into_iter()
  }
}

impl<'a> IntoIterator for &'a DateRanges
{
  type Item = &'a DateRange;
  type IntoIter = slice::Iter<'a, DateRange>;

  fn into_iter(self) -> Self::IntoIter {
    self.ranges.iter()
  }
}

impl Collection for DateRanges
{
  type Item = NaiveDate;
}

impl Cardinality for DateRanges
{
  type Size = u64;

  fn size(&self) -> u64 {
    self.days()
  }
}

impl Empty for DateRanges
{
  fn empty() -> DateRanges {
    DateRanges::default()
  }
}

impl Contains for DateRanges
{
  fn contains(&self, value: &NaiveDate) -> bool {
    DateRanges::contains(self, *value)
  }
}

impl Union for DateRanges
{
  type Output = DateRanges;

  fn union(&self, other: &DateRanges) -> DateRanges {
    DateRanges::union(self, other)
  }
}

impl Intersection for DateRanges
{
  type Output = DateRanges;

  fn intersection(&self, other: &DateRanges) -> DateRanges {
    DateRanges::intersection(self, other)
  }
}

impl Difference for DateRanges
{
  type Output = DateRanges;

  fn difference(&self, other: &DateRanges) -> DateRanges {
    DateRanges::difference(self, other)
  }
}

impl Serialize for DateRanges
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    self.ranges.serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for DateRanges
{
  fn deserialize<D>(deserializer: D) -> Result<DateRanges, D::Error> where
    D: Deserializer<'de>
  {
    Vec::<DateRange>::deserialize(deserializer).map(DateRanges::new)
  }
}
