// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::NaiveDate;
use thiserror::Error;

use crate::date::midnight_utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRangeError {
  /// Both dates are already truncated; they are rendered as midnight UTC.
  #[error("from date ({}) is after to date ({})", midnight_utc(.from), midnight_utc(.to))]
  FromAfterTo { from: NaiveDate, to: NaiveDate },
}
