// #![deny(missing_docs)]

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] owns a copy of an image and its energy map, and
//! finds and removes one seam at a time in either direction.
//! [`seamcarve`] drives it down to a target size.

mod ternary;

pub mod color;
pub mod dump;
pub mod energy;
pub mod error;
pub mod resize;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use dump::energy_to_image;
pub use energy::BORDER_ENERGY;
pub use error::{Result, SeamError};
pub use resize::{carve_to, seamcarve};
pub use seamcarver::SeamCarver;
pub use twodmap::TwoDimensionalMap;
