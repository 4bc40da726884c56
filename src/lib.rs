// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Four stages, each a pure function of its input:
//!
//! 1. `build_energy`: Image -> Energy Map
//! 2. `accumulate_cost`: Energy Map -> Cost Map
//! 3. `locate_seam`: Cost Map -> Seam
//! 4. `remove_seam`: Image + Seam -> Image, one pixel smaller
//!
//! and a driver, `SeamCarver`, that runs them until the image is the
//! size you asked for.

pub mod cost;
pub mod direction;
pub mod energy;
pub mod errors;
pub mod flipper;
pub mod pixelpairs;
pub mod removal;
pub mod seam;
pub mod seamcarver;
pub mod twodmap;

pub use cost::{accumulate_cost, CostMap};
pub use direction::Direction;
pub use energy::{build_energy, EnergyMap};
pub use errors::{CarveError, CarveResult};
pub use removal::remove_seam;
pub use seam::{locate_seam, Seam};
pub use seamcarver::{carve_once, seamcarve, CarveRequest, SeamCarver};
