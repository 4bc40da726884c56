// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the sum of the absolute horizontal and
//! vertical colour gradients through it, each measured as a central
//! difference between its two neighbours on that axis.  At the edges
//! the neighbour address is clamped back into the image, so the
//! difference there is one-sided: the pixel stands in for its missing
//! neighbour.  Nothing wraps and nothing is padded.
//!
//! Because a central difference never looks at the pixel itself, a
//! lone pixel in a flat field has zero energy; it is its neighbours
//! that light up.

use crate::errors::{CarveError, CarveResult};
use crate::pixelpairs::gradient_of_pair;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::PrimInt;
use std::cmp;

/// Per-pixel cost of removal.  Higher means more visually important.
pub type EnergyMap = TwoDimensionalMap<f32>;

/// Image -> Energy Map
///
/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; every pixel is measured on its RGB representation,
/// which must have integer channels.  A zero-sized image has no energy
/// to speak of and is refused.
pub fn build_energy<I, P, S>(image: &I) -> CarveResult<EnergyMap>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + PrimInt + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let (xprev, xnext) = (x.saturating_sub(1), cmp::min(x + 1, mw));
        let (yprev, ynext) = (y.saturating_sub(1), cmp::min(y + 1, mh));
        let xgradient = gradient_of_pair(&image.get_pixel(xprev, y), &image.get_pixel(xnext, y));
        let ygradient = gradient_of_pair(&image.get_pixel(x, yprev), &image.get_pixel(x, ynext));
        emap[(x, y)] = (xgradient.abs() + ygradient.abs()) as f32;
    }
    Ok(emap)
}
