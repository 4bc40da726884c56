// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The driver loop: keep removing seams, alternating a vertical one
//! (width) with a horizontal one (height), until the requested number
//! of each has gone.  Width goes first in every round.  The energy map
//! is rebuilt from scratch before every single removal, because the
//! image it described no longer exists.

use crate::cost::accumulate_cost;
use crate::direction::Direction;
use crate::energy::build_energy;
use crate::errors::{CarveError, CarveResult};
use crate::removal::remove_seam;
use crate::seam::locate_seam;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use num_traits::PrimInt;
use tracing::{debug, info};

/// How many columns and rows to take out.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct CarveRequest {
    pub width_delta: u32,
    pub height_delta: u32,
}

impl CarveRequest {
    pub fn new(width_delta: u32, height_delta: u32) -> Self {
        CarveRequest {
            width_delta,
            height_delta,
        }
    }

    /// Turn a target size into a request against an image of
    /// `(width, height)`.  The carver only shrinks, and never to
    /// nothing.
    pub fn from_targets(
        (width, height): (u32, u32),
        (newwidth, newheight): (u32, u32),
    ) -> CarveResult<Self> {
        if newwidth > width || newheight > height {
            return Err(CarveError::InvalidRequest(format!(
                "can only shrink images: {}x{} is bigger than {}x{}",
                newwidth, newheight, width, height
            )));
        }
        if newwidth == 0 || newheight == 0 {
            return Err(CarveError::InvalidRequest(format!(
                "target image size {}x{} is too small",
                newwidth, newheight
            )));
        }
        Ok(CarveRequest::new(width - newwidth, height - newheight))
    }

    /// Check the request against an image of `(width, height)`: each
    /// axis must keep at least one pixel.
    pub fn validate(&self, (width, height): (u32, u32)) -> CarveResult<()> {
        if self.width_delta >= width.max(1) || self.height_delta >= height.max(1) {
            return Err(CarveError::InvalidRequest(format!(
                "cannot remove {} columns and {} rows from a {}x{} image",
                self.width_delta, self.height_delta, width, height
            )));
        }
        Ok(())
    }

    /// Total number of seams the request will remove.
    pub fn removals(&self) -> u32 {
        self.width_delta + self.height_delta
    }
}

/// Run one full energy, cost, seam and removal pass.
pub fn carve_once<P, S>(
    image: &ImageBuffer<P, Vec<S>>,
    direction: Direction,
) -> CarveResult<ImageBuffer<P, Vec<S>>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + PrimInt + 'static,
{
    let energy = build_energy(image)?;
    let cost = accumulate_cost(&energy, direction);
    let seam = locate_seam(&cost, direction)?;
    remove_seam(image, &seam, direction)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + PrimInt + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Carve `request.width_delta` columns and `request.height_delta`
    /// rows out of a copy of the image.  Nothing is returned unless
    /// every seam came out.
    pub fn carve(&self, request: CarveRequest) -> CarveResult<ImageBuffer<P, Vec<S>>> {
        let (width, height) = self.image.dimensions();
        request.validate((width, height))?;
        info!(
            width,
            height,
            columns = request.width_delta,
            rows = request.height_delta,
            seams = request.removals(),
            "carving"
        );

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image
            .pixels()
            .for_each(|(x, y, p)| scratch.put_pixel(x, y, p));

        let (mut columns, mut rows) = (request.width_delta, request.height_delta);
        let mut remaining = request.removals();
        let mut direction = Direction::Vertical;
        while remaining > 0 {
            let counter = match direction {
                Direction::Vertical => &mut columns,
                Direction::Horizontal => &mut rows,
            };
            if *counter > 0 {
                scratch = carve_once(&scratch, direction)?;
                *counter -= 1;
                remaining -= 1;
                debug!(
                    %direction,
                    remaining,
                    width = scratch.width(),
                    height = scratch.height(),
                    "removed seam"
                );
            }
            direction = direction.turn();
        }

        info!(width = scratch.width(), height = scratch.height(), "carved");
        Ok(scratch)
    }
}

/// Given an image and a desired new width and height, repeatedly carve
/// seams out of the image.
pub fn seamcarve<I, P, S>(
    image: &I,
    newwidth: u32,
    newheight: u32,
) -> CarveResult<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + PrimInt + 'static,
{
    let request = CarveRequest::from_targets(image.dimensions(), (newwidth, newheight))?;
    SeamCarver::new(image).carve(request)
}
