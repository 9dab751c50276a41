// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A two-dimensional, row-major field
//!
//! Both the pixel grid and the energy cache live in one of these.
//! Rows are contiguous, so a "vertical" pass over the map walks
//! memory in order; horizontal work is done by transposing the map
//! first, never through an indexing trick.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `P`: packed colors for the
/// pixel grid, energies for the cache, or back-pointers for the seam
/// finder.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// A single row, as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Relay the whole map out in the opposite orientation, so that
    /// columns become rows.  Doing it twice gets you back exactly what
    /// you started with.
    pub fn transpose(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..height {
            for x in 0..width {
                data.push(self[(y, x)]);
            }
        }
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    /// Delete the cell at `seam[y]` from every row `y`, sliding the
    /// rest of the row left over it.  The seam must already have been
    /// validated against this map.
    pub fn remove_seam(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let mut index = 0;
        self.data.retain(|_| {
            let keep = (index % width) as u32 != seam[index / width];
            index += 1;
            keep
        });
        self.width -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
