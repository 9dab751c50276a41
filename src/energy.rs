// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of an interior pixel is the gradient magnitude across
//! its four axis-adjacent neighbors:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! where Δx is taken between the pixels to the left and right, and Δy
//! between the pixels above and below.  Pixels on the border don't
//! have a full neighborhood and get a fixed, large energy instead, so
//! seams only run along the edge when they have to.

use crate::color::delta_squared;
use crate::cq;
use crate::twodmap::TwoDimensionalMap;

/// The energy assigned to every pixel on the border of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The energy of one pixel, given the current pixel grid.  The
/// coordinate must be within the grid.
#[inline]
pub fn pixel_energy(colors: &TwoDimensionalMap<u32>, x: u32, y: u32) -> f64 {
    let (mw, mh) = (colors.width() - 1, colors.height() - 1);
    cq!(
        x == 0 || y == 0 || x >= mw || y >= mh,
        BORDER_ENERGY,
        (delta_squared(colors[(x - 1, y)], colors[(x + 1, y)])
            + delta_squared(colors[(x, y - 1)], colors[(x, y + 1)]))
        .sqrt()
    )
}

/// Compute the energy of every pixel in the grid.
pub fn calculate_energy(colors: &TwoDimensionalMap<u32>) -> TwoDimensionalMap<f64> {
    let mut energy = TwoDimensionalMap::new(colors.width(), colors.height());
    if colors.width() > 0 && colors.height() > 0 {
        fill_energy(colors, &mut energy);
    }
    energy
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(colors: &TwoDimensionalMap<u32>, energy: &mut TwoDimensionalMap<f64>) {
    use itertools::iproduct;
    for (y, x) in iproduct!(0..colors.height(), 0..colors.width()) {
        energy[(x, y)] = pixel_energy(colors, x, y);
    }
}

// Every pixel's energy reads only the (already complete) color grid,
// so the energy map can be divvied up into bands of whole rows,
// broken apart with chunks_mut, and each band filled on its own
// thread without anything unsafe.
#[cfg(feature = "threaded")]
fn fill_energy(colors: &TwoDimensionalMap<u32>, energy: &mut TwoDimensionalMap<f64>) {
    let width = colors.width() as usize;
    let height = colors.height() as usize;
    let workers = num_cpus::get().max(1);
    let rows_per_band = ((height + workers - 1) / workers).max(1);

    let result = crossbeam::scope(|scope| {
        for (band, cells) in energy
            .as_mut_slice()
            .chunks_mut(rows_per_band * width)
            .enumerate()
        {
            scope.spawn(move |_| {
                let first_row = band * rows_per_band;
                for (i, cell) in cells.iter_mut().enumerate() {
                    let (x, y) = (i % width, first_row + i / width);
                    *cell = pixel_energy(colors, x as u32, y as u32);
                }
            });
        }
    });

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
