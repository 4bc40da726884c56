// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam direction
//!
//! Every stage of the carver speaks in two coordinates: the *scan*
//! axis, along which the dynamic programming advances one line at a
//! time, and the *cross* axis, along which a seam wanders.  A
//! vertical seam scans rows (y) and wanders across columns (x); a
//! horizontal seam is the same thing with x and y swapped.  All of
//! the swapping lives here, so nobody else has to get it right.

use std::fmt;

/// Which kind of seam to remove.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    /// A top-to-bottom seam, one pixel per row.  Shrinks the width.
    Vertical,
    /// A left-to-right seam, one pixel per column.  Shrinks the height.
    Horizontal,
}

impl Direction {
    /// The other direction.  The carver alternates between them.
    pub fn turn(self) -> Self {
        match self {
            Direction::Vertical => Direction::Horizontal,
            Direction::Horizontal => Direction::Vertical,
        }
    }

    /// Map a (scan, cross) address to an (x, y) address.
    #[inline]
    pub fn locate(self, scan: u32, cross: u32) -> (u32, u32) {
        match self {
            Direction::Vertical => (cross, scan),
            Direction::Horizontal => (scan, cross),
        }
    }

    /// Given (width, height), return (scan extent, cross extent).
    pub fn extents(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            Direction::Vertical => (height, width),
            Direction::Horizontal => (width, height),
        }
    }

    /// The (width, height) left after one seam of this direction has
    /// been removed.  Callers are expected to have checked that the
    /// cross axis has room to lose a pixel.
    pub fn shrunk(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            Direction::Vertical => (width - 1, height),
            Direction::Horizontal => (width, height - 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Vertical => write!(f, "vertical"),
            Direction::Horizontal => write!(f, "horizontal"),
        }
    }
}
