// SPDX-License-Identifier: MPL-2.0
//! The property listing document.
//!
//! A listing bundles everything the page shell needs at startup: the
//! title and tagline for the hero section, the detail cards, and the
//! image catalog. Listings are read from a TOML file passed on the
//! command line; without one, the built-in listing is used.

use crate::catalog::{AspectRatio, Catalog, Image, ImageId};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One label/value row inside a detail card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

/// One card in the details section: either label/value rows or a list of
/// highlight bullets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailCard {
    pub title: String,
    #[serde(default)]
    pub items: Vec<DetailItem>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub cards: Vec<DetailCard>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Listing {
    /// Reads a listing from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Builds the validated image catalog for this listing.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.images.clone())
    }

    /// The image shown in the hero section (the first catalog entry).
    #[must_use]
    pub fn hero_image(&self) -> Option<ImageId> {
        self.images.first().map(|image| image.id)
    }
}

impl Default for Listing {
    fn default() -> Self {
        let base = "https://supermaderas.com";
        let image = |id: u32, path: &str, alt: &str, aspect_ratio: AspectRatio| Image {
            id: ImageId(id),
            source: format!("{base}{path}"),
            alt_text: alt.to_string(),
            aspect_ratio,
        };
        let item = |label: &str, value: &str| DetailItem {
            label: label.to_string(),
            value: value.to_string(),
        };

        Self {
            title: "Casa/Lote Laureles".to_string(),
            tagline: "Exclusiva propiedad ubicada en el prestigioso barrio Laureles, \
                      ideal para vivienda o desarrollo inmobiliario."
                .to_string(),
            cards: vec![
                DetailCard {
                    title: "Dimensiones".to_string(),
                    items: vec![
                        item("Área Total", "424 metros"),
                        item("Área Construida", "331 m"),
                        item("Frente", "10,9 metros"),
                        item("Fondo", "44,05 metros"),
                    ],
                    highlights: Vec::new(),
                },
                DetailCard {
                    title: "Ubicación".to_string(),
                    items: vec![
                        item("Barrio", "Laureles"),
                        item("Estrato", "5"),
                        item("Ciudad", "Medellín"),
                    ],
                    highlights: Vec::new(),
                },
                DetailCard {
                    title: "Características".to_string(),
                    items: Vec::new(),
                    highlights: vec![
                        "Excelente ubicación".to_string(),
                        "Potencial para desarrollo".to_string(),
                        "Cerca a zonas comerciales".to_string(),
                        "Acceso a transporte público".to_string(),
                    ],
                },
            ],
            images: vec![
                image(
                    1,
                    "/wp-content/uploads/2025/03/frente-casa-1.jpg",
                    "Vista frontal de la propiedad",
                    AspectRatio::ThreeFour,
                ),
                image(
                    2,
                    "/wp-content/uploads/2025/03/IMG-20240623-WA0012-1.jpg",
                    "Sala de estar",
                    AspectRatio::FourThree,
                ),
                image(
                    3,
                    "/wp-content/uploads/2025/03/IMG-20250328-WA0053-1024x576.jpg",
                    "Jardín trasero",
                    AspectRatio::Square,
                ),
                image(
                    4,
                    "/wp-content/uploads/2025/04/IMG-20240623-WA0028-1024x576.jpg",
                    "Cocina",
                    AspectRatio::ThreeTwo,
                ),
                image(
                    5,
                    "/wp-content/uploads/2025/04/IMG-20240623-WA0018-1024x576.jpg",
                    "Dormitorio principal",
                    AspectRatio::TwoThree,
                ),
                image(
                    6,
                    "/wp-content/uploads/2025/03/6de0514afcaf779966593e9b7eed96502c8d5732-1-576x1024.jpg",
                    "Vista aérea",
                    AspectRatio::SixteenNine,
                ),
                image(
                    7,
                    "/wp-content/uploads/2025/04/IMG-20240623-WA0016-1024x576.jpg",
                    "Baño principal",
                    AspectRatio::Square,
                ),
                image(
                    8,
                    "/wp-content/uploads/2025/03/IMG-20240326-WA0040-576x1024.jpg",
                    "Terraza",
                    AspectRatio::ThreeTwo,
                ),
                image(
                    9,
                    "/wp-content/uploads/2025/03/IMG-20240326-WA0044-576x1024.jpg",
                    "Detalles arquitectónicos",
                    AspectRatio::FourFive,
                ),
            ],
        }
    }
}
