// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - repeatedly carve an image down to size
//!
//! The carver only knows how to find and remove one seam at a time.
//! This is the loop on top of it: while both dimensions are too big,
//! alternate between narrowing and shortening, then finish off
//! whichever dimension is left.

use crate::error::{Result, SeamError};
use crate::seamcarver::SeamCarver;
use image::{GenericImageView, Pixel, Primitive, RgbImage};

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.
#[derive(PartialEq, Copy, Clone, Debug)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

fn carve_once(carver: &mut SeamCarver, direction: Carve) -> Result<()> {
    match direction {
        Carve::Width => {
            let seam = carver.find_vertical_seam();
            carver.remove_vertical_seam(&seam)
        }
        Carve::Height => {
            let seam = carver.find_horizontal_seam();
            carver.remove_horizontal_seam(&seam)
        }
    }
}

/// Given a carver and a desired new width and height, repeatedly carve
/// seams out of the image until it is that size.
pub fn carve_to(carver: &mut SeamCarver, newwidth: u32, newheight: u32) -> Result<()> {
    let (width, height) = (carver.width(), carver.height());
    if newwidth == 0 || newheight == 0 {
        return Err(SeamError::InvalidTarget);
    }
    if width < newwidth || height < newheight {
        return Err(SeamError::Upscale {
            width,
            height,
            target_width: newwidth,
            target_height: newheight,
        });
    }
    tracing::info!(width, height, newwidth, newheight, "carving");

    let mut direction = Carve::Width;
    while carver.width() > newwidth && carver.height() > newheight {
        carve_once(carver, direction)?;
        direction = direction.turn();
    }
    while carver.width() > newwidth {
        carve_once(carver, Carve::Width)?;
    }
    while carver.height() > newheight {
        carve_once(carver, Carve::Height)?;
    }

    tracing::info!(
        seams = (width - newwidth) + (height - newheight),
        "carving complete"
    );
    Ok(())
}

/// Carve a copy of `image` down to `newwidth` by `newheight`.
pub fn seamcarve<I, P, S>(image: &I, newwidth: u32, newheight: u32) -> Result<RgbImage>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let mut carver = SeamCarver::new(image)?;
    carve_to(&mut carver, newwidth, newheight)?;
    Ok(carver.to_image())
}
