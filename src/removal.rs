// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image + Seam -> smaller Image
//!
//! Copies every pixel of the source into a new image one pixel
//! narrower (or shorter), skipping the seam's pixel on each scan line
//! and sliding everything past it back by one to close the gap.  The
//! source is never touched.

use crate::direction::Direction;
use crate::errors::{CarveError, CarveResult};
use crate::flipper::Flipper;
use crate::seam::Seam;
use image::{ImageBuffer, Pixel, Primitive};

pub fn remove_seam<P, S>(
    image: &ImageBuffer<P, Vec<S>>,
    seam: &Seam,
    direction: Direction,
) -> CarveResult<ImageBuffer<P, Vec<S>>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let view = Flipper::new(image, direction);
    let (scans, crosses) = (view.scan_extent(), view.cross_extent());

    if crosses < 2 {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    if seam.len() != scans as usize {
        return Err(CarveError::DimensionMismatch(format!(
            "{} seam has {} coordinates but the {}x{} image has {} scan lines",
            direction,
            seam.len(),
            width,
            height,
            scans
        )));
    }
    if let Some(stray) = seam.traced().iter().find(|c| **c >= crosses) {
        return Err(CarveError::DimensionMismatch(format!(
            "{} seam coordinate {} lies outside 0..{}",
            direction, stray, crosses
        )));
    }

    let (newwidth, newheight) = direction.shrunk((width, height));
    let mut imgbuf = ImageBuffer::new(newwidth, newheight);
    for (scan, cut) in (0..scans).zip(seam.from_origin()) {
        for cross in (0..crosses).filter(|c| *c != cut) {
            let target = if cross < cut { cross } else { cross - 1 };
            let (x, y) = direction.locate(scan, target);
            imgbuf.put_pixel(x, y, view.at(scan, cross));
        }
    }
    Ok(imgbuf)
}
