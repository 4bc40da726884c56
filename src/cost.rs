// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy Map -> Cost Map
//!
//! The classic dynamic programming pass.  The first scan line costs
//! exactly its own energy.  Every cell after that costs its own energy
//! plus the cheapest of the three cells it could have been reached
//! from on the line before: straight behind, or one step to either
//! side, with the sides clamped at the edges of the line.
//!
//! ```text
//!           ⎧ M(x−1,y−1)
//! M(x,y)=e+min⎨ M(x,y−1)
//!           ⎩ M(x+1,y−1)
//! ```
//!
//! Written once, for vertical seams; horizontal seams get the same
//! code on a flipped view.

use crate::direction::Direction;
use crate::energy::EnergyMap;
use crate::flipper::Flipper;
use crate::twodmap::TwoDimensionalMap;
use std::cmp;

/// Cell (x, y) holds the least total energy of any seam from the
/// origin edge to (x, y).  Same shape as the energy map.
pub type CostMap = TwoDimensionalMap<f32>;

pub fn accumulate_cost(energy: &EnergyMap, direction: Direction) -> CostMap {
    let source = Flipper::new(energy, direction);
    let (scans, crosses) = (source.scan_extent(), source.cross_extent());
    let mut cost = CostMap::new(energy.width, energy.height);
    if scans == 0 || crosses == 0 {
        return cost;
    }
    let maxcross = crosses - 1;

    // Populate the first line with their native energies.
    for c in 0..crosses {
        cost[direction.locate(0, c)] = source.at(0, c);
    }

    for s in 1..scans {
        for c in 0..crosses {
            let (left, right) = (c.saturating_sub(1), cmp::min(c + 1, maxcross));
            let behind = |c| cost[direction.locate(s - 1, c)];
            let cheapest = behind(left).min(behind(c)).min(behind(right));
            cost[direction.locate(s, c)] = source.at(s, c) + cheapest;
        }
    }
    cost
}
