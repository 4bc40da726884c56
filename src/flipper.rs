// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice dimensional flipper
//!
//! A read-only proxy that addresses a lattice (an energy map, a cost
//! map, or an image) by (scan, cross) rather than by (x, y).  For a
//! vertical seam that is the lattice as stored; for a horizontal seam
//! every x becomes a y and vice versa.
//!
//! This has the effect of letting the cost accumulator, the seam
//! locator and the seam remover each be written exactly once, for
//! vertical seams, and be handed a flipped view to get horizontal
//! ones.

use crate::direction::Direction;
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel};
use std::ops::Deref;

/// Anything addressable by (x, y) with a known width and height.
pub trait Lattice {
    type Cell: Copy;

    fn dimensions(&self) -> (u32, u32);

    fn cell(&self, x: u32, y: u32) -> Self::Cell;
}

impl<P: Default + Copy> Lattice for TwoDimensionalMap<P> {
    type Cell = P;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn cell(&self, x: u32, y: u32) -> P {
        self[(x, y)]
    }
}

impl<P, C> Lattice for ImageBuffer<P, C>
where
    P: Pixel + 'static,
    C: Deref<Target = [P::Subpixel]>,
{
    type Cell = P;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn cell(&self, x: u32, y: u32) -> P {
        *self.get_pixel(x, y)
    }
}

pub struct Flipper<'a, L: Lattice> {
    lattice: &'a L,
    direction: Direction,
}

impl<'a, L: Lattice> Flipper<'a, L> {
    /// View `lattice` in the scan order used for seams of `direction`.
    pub fn new(lattice: &'a L, direction: Direction) -> Self {
        Flipper { lattice, direction }
    }

    /// Number of scan lines; also the length of any seam.
    pub fn scan_extent(&self) -> u32 {
        self.direction.extents(self.lattice.dimensions()).0
    }

    /// Number of cells on each scan line.
    pub fn cross_extent(&self) -> u32 {
        self.direction.extents(self.lattice.dimensions()).1
    }

    #[inline]
    pub fn at(&self, scan: u32, cross: u32) -> L::Cell {
        let (x, y) = self.direction.locate(scan, cross);
        self.lattice.cell(x, y)
    }
}
