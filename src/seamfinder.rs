// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the lowest-energy seam
//!
//! A top-to-bottom dynamic program over an energy map.  Horizontal
//! seams are found by running the same program over a transposed map.

use crate::cq;
use crate::twodmap::TwoDimensionalMap;

// For every cell in a row, the cheapest way to arrive there is from
// one of the (at most) three cells above it: up-left, up, or up-right.
// Ties go to whichever was considered first, and we consider them in
// that order.  At the edges there are only two candidates, and the
// leftmost of the pair wins a tie.
//
// Only two rows of cumulative costs are ever live, but the parent of
// every cell has to be kept until the walk back up.

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest connected top-to-bottom seam.
pub fn energy_to_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());
    if width == 1 {
        return vec![0; height as usize];
    }

    let maxwidth = width - 1;
    let mut last: Vec<f64> = energy.row(0).to_vec();
    let mut current: Vec<f64> = vec![0.0; width as usize];
    let mut parents: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);

    for y in 1..height {
        let row = energy.row(y);
        let cost = |x: u32| last[x as usize];

        // The near edge has no up-left.
        let parent = cq!(cost(0) <= cost(1), 0, 1);
        current[0] = cost(parent) + row[0];
        parents[(0, y)] = parent;

        for x in 1..maxwidth {
            let parent = (x..=x + 1).fold(x - 1, |best, candidate| {
                cq!(cost(candidate) < cost(best), candidate, best)
            });
            current[x as usize] = cost(parent) + row[x as usize];
            parents[(x, y)] = parent;
        }

        // The far edge has no up-right.
        let parent = cq!(cost(maxwidth - 1) <= cost(maxwidth), maxwidth - 1, maxwidth);
        current[maxwidth as usize] = cost(parent) + row[maxwidth as usize];
        parents[(maxwidth, y)] = parent;

        std::mem::swap(&mut last, &mut current);
    }

    // After the final swap, `last` holds the total cost of reaching
    // each cell on the bottom row.  First minimum wins.
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(last[x as usize] < last[best as usize], x, best)
    });
    tracing::trace!(total = last[seam_col as usize], "cheapest seam");

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (1..height)
        .rev()
        .fold(vec![seam_col], |mut acc, y| {
            seam_col = parents[(seam_col, y)];
            acc.push(seam_col);
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn seam_cost(energy: &TwoDimensionalMap<f64>, seam: &[u32]) -> f64 {
        seam.iter()
            .enumerate()
            .fold(0.0, |acc, (y, x)| acc + energy[(*x, y as u32)])
    }

    // Try every connected path.  Only for very small maps.
    fn cheapest_path_cost(energy: &TwoDimensionalMap<f64>) -> f64 {
        fn walk(energy: &TwoDimensionalMap<f64>, x: u32, y: u32, acc: f64) -> f64 {
            let acc = acc + energy[(x, y)];
            if y + 1 == energy.height() {
                return acc;
            }
            let lo = cq!(x == 0, 0, x - 1);
            let hi = (x + 1).min(energy.width() - 1);
            (lo..=hi)
                .map(|nx| walk(energy, nx, y + 1, acc))
                .fold(std::f64::INFINITY, f64::min)
        }
        (0..energy.width())
            .map(|x| walk(energy, x, 0, 0.0))
            .fold(std::f64::INFINITY, f64::min)
    }

    fn assert_connected(seam: &[u32], width: u32) {
        assert!(seam.iter().all(|x| *x < width));
        assert!(seam
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1));
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec());
        assert_eq!(energy_to_seam(&energies), [2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let energies = TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec());
        let seam = energy_to_seam(&energies.transpose());
        assert_eq!(seam.len(), 5);
        assert_connected(&seam, 4);
        let flipped = energies.transpose();
        assert_eq!(seam_cost(&flipped, &seam), cheapest_path_cost(&flipped));
    }

    #[test]
    fn single_column_needs_no_search() {
        let energies = TwoDimensionalMap::from_vec(1, 4, vec![5.0, 1.0, 7.0, 2.0]);
        assert_eq!(energy_to_seam(&energies), [0, 0, 0, 0]);
    }

    #[test]
    fn single_row_picks_the_first_minimum() {
        let energies = TwoDimensionalMap::from_vec(4, 1, vec![3.0, 1.0, 2.0, 1.0]);
        assert_eq!(energy_to_seam(&energies), [1]);
    }

    #[test]
    fn ties_prefer_the_earliest_predecessor() {
        let energies = TwoDimensionalMap::from_vec(3, 2, vec![1.0, 1.0, 1.0, 5.0, 0.0, 5.0]);
        assert_eq!(energy_to_seam(&energies), [0, 1]);

        let flat = TwoDimensionalMap::from_vec(3, 3, vec![2.0; 9]);
        assert_eq!(energy_to_seam(&flat), [0, 0, 0]);
    }

    #[test]
    fn far_edge_ties_prefer_the_inner_neighbor() {
        let energies = TwoDimensionalMap::from_vec(2, 2, vec![4.0, 4.0, 9.0, 1.0]);
        assert_eq!(energy_to_seam(&energies), [0, 1]);
    }

    #[test]
    fn two_columns_use_only_the_edge_rules() {
        let energies = TwoDimensionalMap::from_vec(2, 3, vec![5.0, 1.0, 1.0, 5.0, 5.0, 1.0]);
        assert_eq!(energy_to_seam(&energies), [1, 0, 1]);
    }

    #[test]
    fn seams_are_optimal_on_a_busy_map() {
        let data: Vec<f64> = (0..42u32)
            .map(|i| f64::from((i * 37 + 11) % 17) + f64::from(i % 3) * 0.5)
            .collect();
        let energies = TwoDimensionalMap::from_vec(7, 6, data);
        let seam = energy_to_seam(&energies);
        assert_eq!(seam.len(), 6);
        assert_connected(&seam, 7);
        assert_eq!(seam_cost(&energies, &seam), cheapest_path_cost(&energies));
    }
}
