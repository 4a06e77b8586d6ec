// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Date range specific operations, not covered by the gcollections vocabulary.

/// Smallest value covering both operands. Empty operands are ignored.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// Two disjoint values separated by nothing: the day after one is the first day of the other.
pub trait Adjacent<RHS = Self>
{
  fn is_adjacent(&self, rhs: &RHS) -> bool;
}
