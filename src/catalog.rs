// SPDX-License-Identifier: MPL-2.0
//! The image catalog: the fixed, ordered set of displayable images.
//!
//! A [`Catalog`] is built once at startup from the listing document and
//! never mutated afterwards. Every image carries a stable positive id that
//! the gallery viewer uses as its selection key.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an image within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of aspect ratios used by the gallery layout.
///
/// These only drive how much vertical space a tile occupies; they carry no
/// business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1/1")]
    Square,
    #[serde(rename = "3/4")]
    ThreeFour,
    #[serde(rename = "4/3")]
    FourThree,
    #[serde(rename = "3/2")]
    ThreeTwo,
    #[serde(rename = "2/3")]
    TwoThree,
    #[serde(rename = "16/9")]
    SixteenNine,
    #[serde(rename = "4/5")]
    FourFive,
}

impl AspectRatio {
    /// Width divided by height.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::ThreeFour => 3.0 / 4.0,
            AspectRatio::FourThree => 4.0 / 3.0,
            AspectRatio::ThreeTwo => 3.0 / 2.0,
            AspectRatio::TwoThree => 2.0 / 3.0,
            AspectRatio::SixteenNine => 16.0 / 9.0,
            AspectRatio::FourFive => 4.0 / 5.0,
        }
    }

    /// Tile height for a given tile width.
    #[must_use]
    pub fn height_for_width(&self, width: f32) -> f32 {
        width / self.ratio()
    }
}

/// A single displayable image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Unique positive id, stable ordering key within the catalog.
    pub id: ImageId,
    /// Locator string: an `http(s)` URL or a filesystem path.
    pub source: String,
    /// Display label shown in tiles and the lightbox caption.
    pub alt_text: String,
    /// Layout hint only.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

/// The fixed ordered sequence of images, set at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    images: Vec<Image>,
}

impl Catalog {
    /// Builds a catalog, validating that every id is positive and unique.
    pub fn new(images: Vec<Image>) -> Result<Self> {
        for (position, image) in images.iter().enumerate() {
            if image.id.0 == 0 {
                return Err(Error::Listing(format!(
                    "image at position {} has id 0 (ids must be positive)",
                    position
                )));
            }
            if images[..position].iter().any(|other| other.id == image.id) {
                return Err(Error::Listing(format!("duplicate image id {}", image.id)));
            }
        }
        Ok(Self { images })
    }

    /// Returns the image with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|image| image.id == id)
    }

    /// Returns the position of the given id within the catalog order.
    #[must_use]
    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// Whether the id references an existing catalog entry.
    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the image at the given catalog position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Image> {
        self.images.get(index)
    }

    /// Iterates the images in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.images.iter()
    }

    /// Returns the total number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
