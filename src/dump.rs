// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render a carver's energy cache as a grayscale image, scaled so the
//! most energetic pixel is white.  Mostly useful for seeing why a seam
//! went where it did.

use crate::seamcarver::SeamCarver;
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::clamp;

pub fn energy_to_image(carver: &SeamCarver) -> GrayImage {
    let energy = carver.energy_map();
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let e = energy[(x, y)];
        let level = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
        Luma([clamp(level.round(), 0.0, 255.0) as u8])
    })
}
