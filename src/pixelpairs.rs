// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given the two pixels on either side of the one being measured, the
//! gradient is the signed central difference of each colour channel,
//! halved, and then summed:
//!
//! ```text
//!        g = (r₁-r₂)/2 + (g₁-g₂)/2 + (b₁-b₂)/2
//! ```
//!
//! The halving is integer division, truncating toward zero, on each
//! channel separately.  The sign is kept; the energy function takes
//! the absolute value once both axes have been summed.
//!
//! Only integer subpixels are accepted.  Floating-point images would
//! have every channel truncated to nothing; convert them to 8 or 16
//! bits first.

use image::{Pixel, Primitive};
use num_traits::{NumCast, PrimInt};

/// (Pixel, Pixel) -> signed gradient
#[inline]
pub fn gradient_of_pair<P, S>(p1: &P, p2: &P) -> i64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + PrimInt + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.channels()
        .iter()
        .zip(c2.channels().iter())
        .map(|(a, b)| (channel(*a) - channel(*b)) / 2)
        .sum()
}

#[inline]
fn channel<S: Primitive + PrimInt>(c: S) -> i64 {
    // Every subpixel type the image crate decodes to fits.
    <i64 as NumCast>::from(c).unwrap_or(0)
}
