// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Packed 24-bit color
//!
//! The pixel grid stores every pixel as a single `u32` with red in the
//! high byte, green in the middle, and blue in the low byte.  That
//! keeps the grid a flat array of `Copy` values, which is what makes
//! whole-grid transposes cheap.

use image::{Pixel, Primitive};
use itertools::zip;

const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

/// Pack three 8-bit channels into one value.
#[inline]
pub fn pack(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << RED_SHIFT) | (u32::from(g) << GREEN_SHIFT) | (u32::from(b) << BLUE_SHIFT)
}

/// Pull the three 8-bit channels back out of a packed value.
#[inline]
pub fn unpack(c: u32) -> [u8; 3] {
    [
        ((c >> RED_SHIFT) & 0xff) as u8,
        ((c >> GREEN_SHIFT) & 0xff) as u8,
        ((c >> BLUE_SHIFT) & 0xff) as u8,
    ]
}

// Subpixels come in whatever primitive the source image uses; scale
// them into 0..=255 against that primitive's maximum.  For 8-bit
// images this is exact.
fn subpixel_to_u8<S: Primitive + 'static>(s: S) -> u8 {
    let value = num_traits::cast::<_, f64>(s).unwrap_or(0.0);
    let max = num_traits::cast::<_, f64>(S::max_value()).unwrap_or(255.0);
    let scaled = (value / max * 255.0).round();
    num_traits::clamp(scaled, 0.0, 255.0) as u8
}

/// Pixel -> packed color, for any pixel type `image` knows how to
/// turn into RGB.
pub fn pack_pixel<P, S>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rgb = pixel.to_rgb();
    let c = rgb.channels();
    pack(
        subpixel_to_u8(c[0]),
        subpixel_to_u8(c[1]),
        subpixel_to_u8(c[2]),
    )
}

// Takes the channels (R,G,B) from two packed pixels and maps the
// difference between each channel, squares it, and then sums them all
// up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
/// Sum of squared per-channel differences between two packed colors.
#[inline]
pub fn delta_squared(c1: u32, c2: u32) -> f64 {
    zip(&unpack(c1), &unpack(c2))
        .map(|(a, b)| {
            let d = i32::from(*a) - i32::from(*b);
            d * d
        })
        .fold(0.0, |acc, d| acc + f64::from(d))
}
