// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every one of these is a usage error on the caller's part.  None of
//! them leaves the carver half-modified: the check always comes
//! before the first write.

use failure::Fail;

/// Result alias for seam carving operations.
pub type Result<T> = std::result::Result<T, SeamError>;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum SeamError {
    /// A coordinate outside the current image.
    #[fail(
        display = "coordinate ({}, {}) is outside the {}x{} image",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The axis being carved is already down to a single pixel.
    #[fail(display = "cannot remove a seam when only one pixel remains along that axis")]
    ExhaustedDimension,

    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    SeamLength { expected: usize, actual: usize },

    #[fail(
        display = "seam entry {} is {}, which is outside 0..{}",
        index, value, limit
    )]
    SeamOutOfRange { index: usize, value: u32, limit: u32 },

    /// Entries `index - 1` and `index` are more than one pixel apart.
    #[fail(display = "seam is disconnected at entry {}", index)]
    DisconnectedSeam { index: usize },

    #[fail(display = "cannot carve an image with no pixels")]
    EmptyImage,

    #[fail(
        display = "cannot upscale a {}x{} image to {}x{}",
        width, height, target_width, target_height
    )]
    Upscale {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// Carving can never remove the last row or column.
    #[fail(display = "target dimensions must be at least 1x1")]
    InvalidTarget,
}
