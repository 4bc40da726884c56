// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve can go wrong.
//!
//! None of these are worth retrying: every stage is a pure function,
//! so the same input fails the same way every time.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum CarveError {
    /// The caller asked for something the carver cannot do: grow an
    /// image, or shrink an axis to nothing.  Reported before any seam
    /// is removed.
    #[fail(display = "invalid carve request: {}", _0)]
    InvalidRequest(String),

    /// A seam did not fit the grid it was applied to.  In correct code
    /// this cannot happen.
    #[fail(display = "seam does not match the grid: {}", _0)]
    DimensionMismatch(String),

    /// The grid is too small along the seam's cross axis for a seam to
    /// be located or removed.
    #[fail(display = "cannot carve a seam from a {}x{} grid", width, height)]
    DegenerateGrid { width: u32, height: u32 },
}

pub type CarveResult<T> = Result<T, CarveError>;
