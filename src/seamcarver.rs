// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SeamCarver - the engine
//!
//! Holds a private copy of the image as a grid of packed colors, plus
//! a cache of every pixel's energy.  Seams are found and removed one
//! at a time; after a removal only the energies next to the removed
//! seam are recomputed.
//!
//! Horizontal seams are vertical seams of the transposed image, so
//! rather than write every algorithm twice, the carver physically
//! transposes both grids whenever the requested orientation differs
//! from the one they're currently stored in.  Carving several seams in
//! the same direction pays for that once.

use crate::color::{pack_pixel, unpack};
use crate::cq;
use crate::energy::{calculate_energy, pixel_energy};
use crate::error::{Result, SeamError};
use crate::seamfinder::energy_to_seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use itertools::{iproduct, Itertools};

/// A content-aware resizer for a single image.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    colors: TwoDimensionalMap<u32>,
    energy: TwoDimensionalMap<f64>,
    // When set, both grids are stored with the image's columns as
    // their rows.
    transposed: bool,
}

impl SeamCarver {
    /// Copies the image into a new carver and computes the energy of
    /// every pixel.
    pub fn new<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage);
        }

        // Energy involves the neighbors, so every color has to be in
        // place before the first energy is computed.
        let colors = TwoDimensionalMap::from_vec(
            width,
            height,
            iproduct!(0..height, 0..width)
                .map(|(y, x)| pack_pixel(&image.get_pixel(x, y)))
                .collect(),
        );
        let energy = calculate_energy(&colors);

        Ok(SeamCarver {
            colors,
            energy,
            transposed: false,
        })
    }

    /// Width of the current image.
    pub fn width(&self) -> u32 {
        cq!(self.transposed, self.colors.height(), self.colors.width())
    }

    /// Height of the current image.
    pub fn height(&self) -> u32 {
        cq!(self.transposed, self.colors.width(), self.colors.height())
    }

    // Translate an image coordinate into the grids' current layout.
    fn grid_point(&self, x: u32, y: u32) -> (u32, u32) {
        cq!(self.transposed, (y, x), (x, y))
    }

    /// The energy of the pixel at column `x` and row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(SeamError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(self.energy[self.grid_point(x, y)])
    }

    /// The sequence of column indices, one per row, of the
    /// lowest-energy top-to-bottom seam.
    pub fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.orient(false);
        energy_to_seam(&self.energy)
    }

    /// The sequence of row indices, one per column, of the
    /// lowest-energy left-to-right seam.
    pub fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.orient(true);
        energy_to_seam(&self.energy)
    }

    /// Remove a top-to-bottom seam, making the image one pixel narrower.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        validate_seam(seam, self.height(), self.width())?;
        self.orient(false);
        self.remove_seam(seam);
        Ok(())
    }

    /// Remove a left-to-right seam, making the image one pixel shorter.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        validate_seam(seam, self.width(), self.height())?;
        self.orient(true);
        self.remove_seam(seam);
        Ok(())
    }

    /// Export the current image.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            Rgb(unpack(self.colors[self.grid_point(x, y)]))
        })
    }

    /// A copy of the energy cache, laid out the same way as the image.
    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        cq!(self.transposed, self.energy.transpose(), self.energy.clone())
    }

    fn orient(&mut self, transposed: bool) {
        if self.transposed != transposed {
            self.colors = self.colors.transpose();
            self.energy = self.energy.transpose();
            self.transposed = transposed;
            tracing::debug!(
                width = self.colors.width(),
                height = self.colors.height(),
                transposed,
                "relaid grids"
            );
        }
    }

    // Only the two pixels that end up on either side of the removed
    // one have a different neighborhood afterward; every other pixel
    // keeps the energy it had.  The first and last rows are border
    // and stay that way.
    fn remove_seam(&mut self, seam: &[u32]) {
        self.colors.remove_seam(seam);
        self.energy.remove_seam(seam);

        let (width, height) = (self.colors.width(), self.colors.height());
        for y in 1..height - 1 {
            let x = seam[y as usize];
            if x > 0 {
                self.energy[(x - 1, y)] = pixel_energy(&self.colors, x - 1, y);
            }
            if x < width {
                self.energy[(x, y)] = pixel_energy(&self.colors, x, y);
            }
        }
        tracing::debug!(
            width = self.width(),
            height = self.height(),
            "removed seam"
        );
    }
}

// A seam has one entry per line it crosses, every entry is a valid
// position on its line, and neighboring entries are at most one apart.
fn validate_seam(seam: &[u32], length: u32, limit: u32) -> Result<()> {
    if limit <= 1 {
        return Err(SeamError::ExhaustedDimension);
    }
    if seam.len() != length as usize {
        return Err(SeamError::SeamLength {
            expected: length as usize,
            actual: seam.len(),
        });
    }
    if let Some(index) = seam.iter().position(|value| *value >= limit) {
        return Err(SeamError::SeamOutOfRange {
            index,
            value: seam[index],
            limit,
        });
    }
    if let Some(index) = seam
        .iter()
        .tuple_windows()
        .position(|(a, b)| cq!(a > b, a - b, b - a) > 1)
    {
        return Err(SeamError::DisconnectedSeam { index: index + 1 });
    }
    Ok(())
}
