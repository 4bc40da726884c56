// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cost Map -> Seam
//!
//! Start at the cheapest cell of the last scan line and walk back to
//! the first, at each step moving to whichever of the three cells
//! behind the current one carries the least accumulated cost.

use crate::cost::CostMap;
use crate::direction::Direction;
use crate::errors::{CarveError, CarveResult};
use crate::flipper::Flipper;

/// A connected, one-pixel-wide path across the image: one cross-axis
/// coordinate for every scan line.
///
/// The coordinates are stored in the order they were traced, from the
/// terminal edge (bottom, or right) back to the origin edge (top, or
/// left).  Use `at` or `from_origin` to read them the other way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    traced: Vec<u32>,
}

impl Seam {
    /// Build a seam from coordinates in trace order, terminal edge
    /// first.
    pub fn from_traced(traced: Vec<u32>) -> Self {
        Seam { traced }
    }

    /// The coordinates, terminal edge first.
    pub fn traced(&self) -> &[u32] {
        &self.traced
    }

    /// The coordinates, origin edge first.
    pub fn from_origin(&self) -> impl Iterator<Item = u32> + '_ {
        self.traced.iter().rev().cloned()
    }

    /// The cross-axis coordinate on scan line `scan`, counting from the
    /// origin edge.
    pub fn at(&self, scan: u32) -> Option<u32> {
        let scan = scan as usize;
        if scan >= self.traced.len() {
            return None;
        }
        Some(self.traced[self.traced.len() - 1 - scan])
    }

    pub fn len(&self) -> usize {
        self.traced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traced.is_empty()
    }

    /// True if no two consecutive coordinates are more than one apart.
    pub fn is_connected(&self) -> bool {
        self.traced
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }
}

/// Find the cheapest seam in a cost map.
///
/// The starting point is the first cheapest cell on the terminal line.
/// On the way back, a step straight behind wins any tie; between the
/// two diagonals, the lower coordinate wins.
pub fn locate_seam(cost: &CostMap, direction: Direction) -> CarveResult<Seam> {
    let view = Flipper::new(cost, direction);
    let (scans, crosses) = (view.scan_extent(), view.cross_extent());
    if scans == 0 || crosses < 2 {
        return Err(CarveError::DegenerateGrid {
            width: cost.width,
            height: cost.height,
        });
    }
    let maxcross = crosses - 1;
    let last = scans - 1;

    let mut current = (1..crosses).fold(0, |best, c| {
        if view.at(last, c) < view.at(last, best) {
            c
        } else {
            best
        }
    });

    let mut traced = Vec::with_capacity(scans as usize);
    traced.push(current);

    for s in (0..last).rev() {
        let mut next = current;
        let mut cheapest = view.at(s, current);
        let sides = [
            if current > 0 { Some(current - 1) } else { None },
            if current < maxcross { Some(current + 1) } else { None },
        ];
        for side in sides.iter().filter_map(|side| *side) {
            let candidate = view.at(s, side);
            if candidate < cheapest {
                next = side;
                cheapest = candidate;
            }
        }
        traced.push(next);
        current = next;
    }

    tracing::trace!(%direction, start = traced[0], "located seam");
    Ok(Seam::from_traced(traced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::accumulate_cost;
    use crate::energy::EnergyMap;

    const ENERGY_DATA: [f32; 20] = [
        9., 9., 0., 9., 9., 9., 1., 9., 8., 9., 9., 9., 9., 9., 0., 9., 9., 9., 0., 9.,
    ];

    fn seam_through(energy: &EnergyMap, direction: Direction) -> Seam {
        locate_seam(&accumulate_cost(energy, direction), direction).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = EnergyMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap();
        let seam = seam_through(&energies, Direction::Vertical);
        assert_eq!(seam.traced(), &[3, 4, 3, 2]);
        assert_eq!(seam.from_origin().collect::<Vec<_>>(), vec![2, 3, 4, 3]);
        assert_eq!(seam.at(0), Some(2));
        assert_eq!(seam.at(3), Some(3));
        assert_eq!(seam.at(4), None);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let energies = EnergyMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap();
        let seam = seam_through(&energies, Direction::Horizontal);
        assert_eq!(seam.from_origin().collect::<Vec<_>>(), vec![1, 1, 0, 1, 2]);
        assert!(seam.is_connected());
    }

    #[test]
    fn flat_energy_gives_a_straight_seam_on_the_first_line() {
        let energies = EnergyMap::new(4, 6);
        let down = seam_through(&energies, Direction::Vertical);
        assert_eq!(down.traced(), &[0; 6]);
        let across = seam_through(&energies, Direction::Horizontal);
        assert_eq!(across.traced(), &[0; 4]);
    }

    #[test]
    fn ties_prefer_straight_then_the_lower_side() {
        // Cost rows, top to bottom.  From the 0 at (1, 2), both diagonals
        // above tie at 1 and beat the middle, so the lower one wins.  From
        // there, straight up ties with the right side and wins.
        #[rustfmt::skip]
        let cost = CostMap::from_raw(3, 3, vec![
            1., 1., 5.,
            1., 2., 1.,
            3., 0., 3.,
        ]).unwrap();
        let seam = locate_seam(&cost, Direction::Vertical).unwrap();
        assert_eq!(seam.from_origin().collect::<Vec<_>>(), vec![0, 0, 1]);
    }

    #[test]
    fn terminal_ties_take_the_first_cell() {
        let cost = CostMap::from_raw(3, 1, vec![2., 1., 1.]).unwrap();
        let seam = locate_seam(&cost, Direction::Vertical).unwrap();
        assert_eq!(seam.traced(), &[1]);
    }

    #[test]
    fn seams_stay_inside_and_connected() {
        // A diagonal ridge of high energy.
        let mut energies = EnergyMap::new(7, 5);
        for i in 0..5 {
            energies[(i + 1, i)] = 100.0;
        }
        for direction in &[Direction::Vertical, Direction::Horizontal] {
            let seam = seam_through(&energies, *direction);
            let (scans, crosses) = direction.extents(energies.dimensions());
            assert_eq!(seam.len(), scans as usize);
            assert!(seam.traced().iter().all(|c| *c < crosses));
            assert!(seam.is_connected());
        }
    }

    #[test]
    fn one_pixel_wide_maps_have_no_seam() {
        let cost = CostMap::new(1, 5);
        assert_eq!(
            locate_seam(&cost, Direction::Vertical),
            Err(CarveError::DegenerateGrid { width: 1, height: 5 })
        );
        // The same strip is fine lying down.
        assert_eq!(locate_seam(&cost, Direction::Horizontal).unwrap().len(), 1);
        assert_eq!(locate_seam(&CostMap::new(5, 1), Direction::Vertical).unwrap().len(), 1);
    }
}
