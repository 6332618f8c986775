// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer: the lightbox selection and navigation state machine.
//!
//! The viewer owns the image catalog and the current selection (if any) and
//! is the single source of truth for which image is enlarged. Navigation
//! treats the catalog as a logical ring: stepping past either end continues
//! from the opposite end.
//!
//! The viewer itself is pure. The page shell observes [`GalleryViewer::has_selection`]
//! to drive side effects such as scroll suppression.

use crate::catalog::{Catalog, ImageId};
use std::fmt;

/// Direction of a navigation step through the catalog ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Errors raised by viewer operations. Neither is fatal to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// `open` was called with an id absent from the catalog.
    InvalidImageId(ImageId),
    /// `navigate` was called while nothing is selected.
    NoActiveSelection,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::InvalidImageId(id) => {
                write!(f, "image id {} is not in the catalog", id)
            }
            GalleryError::NoActiveSelection => write!(f, "no image is selected"),
        }
    }
}

/// Manages which single image (if any) is enlarged, and steps through the
/// catalog in order.
///
/// Two states: `Idle` (no selection) and `Viewing(id)`. `open` enters or
/// replaces a selection, `close` always returns to `Idle`, `navigate`
/// moves the selection along the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryViewer {
    catalog: Catalog,
    selection: Option<ImageId>,
}

impl GalleryViewer {
    /// Creates a viewer over the given catalog, starting with no selection.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: None,
        }
    }

    /// The catalog this viewer navigates.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Selects `id` for enlarged display.
    ///
    /// Replaces any prior selection. Fails with
    /// [`GalleryError::InvalidImageId`] when the id is not in the catalog;
    /// the selection is left unchanged in that case.
    pub fn open(&mut self, id: ImageId) -> Result<(), GalleryError> {
        if !self.catalog.contains(id) {
            return Err(GalleryError::InvalidImageId(id));
        }
        self.selection = Some(id);
        Ok(())
    }

    /// Clears the selection. Idempotent: closing an idle viewer is a no-op.
    pub fn close(&mut self) {
        self.selection = None;
    }

    /// Steps the selection to the neighboring catalog entry, wrapping
    /// around at both ends.
    ///
    /// Returns the newly selected id, or
    /// [`GalleryError::NoActiveSelection`] when nothing is selected.
    pub fn navigate(&mut self, direction: Direction) -> Result<ImageId, GalleryError> {
        let current = self.selection.ok_or(GalleryError::NoActiveSelection)?;

        // The selection invariant guarantees the id is present.
        let index = self
            .catalog
            .index_of(current)
            .ok_or(GalleryError::NoActiveSelection)?;
        let last = self.catalog.len() - 1;

        let new_index = match direction {
            Direction::Previous => {
                if index == 0 {
                    last
                } else {
                    index - 1
                }
            }
            Direction::Next => {
                if index == last {
                    0
                } else {
                    index + 1
                }
            }
        };

        let new_id = self
            .catalog
            .at(new_index)
            .map(|image| image.id)
            .ok_or(GalleryError::NoActiveSelection)?;
        self.selection = Some(new_id);
        Ok(new_id)
    }

    /// Pure query: whether `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: ImageId) -> bool {
        self.selection == Some(id)
    }

    /// Whether any image is selected. The page shell uses this as the
    /// trigger condition for scroll suppression.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// The currently selected id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ImageId> {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AspectRatio, Image};

    fn catalog(ids: &[u32]) -> Catalog {
        let images = ids
            .iter()
            .map(|id| Image {
                id: ImageId(*id),
                source: format!("/uploads/photo-{id}.jpg"),
                alt_text: format!("Photo {id}"),
                aspect_ratio: AspectRatio::Square,
            })
            .collect();
        Catalog::new(images).expect("valid catalog")
    }

    fn viewer(ids: &[u32]) -> GalleryViewer {
        GalleryViewer::new(catalog(ids))
    }

    #[test]
    fn new_viewer_starts_idle() {
        let viewer = viewer(&[1, 2, 3]);
        assert!(!viewer.has_selection());
        assert_eq!(viewer.selection(), None);
    }

    #[test]
    fn open_selects_only_the_requested_image() {
        let mut viewer = viewer(&[1, 2, 3]);
        for id in [1u32, 2, 3] {
            viewer.open(ImageId(id)).expect("id is in catalog");
            assert!(viewer.is_selected(ImageId(id)));
            for other in [1u32, 2, 3].into_iter().filter(|o| *o != id) {
                assert!(!viewer.is_selected(ImageId(other)));
            }
        }
    }

    #[test]
    fn open_with_unknown_id_fails_and_keeps_state() {
        let mut viewer = viewer(&[1, 2]);
        viewer.open(ImageId(2)).expect("valid open");

        let result = viewer.open(ImageId(99));
        assert_eq!(result, Err(GalleryError::InvalidImageId(ImageId(99))));
        assert!(viewer.is_selected(ImageId(2)));
    }

    #[test]
    fn reopen_replaces_selection() {
        let mut viewer = viewer(&[1, 2, 3]);
        viewer.open(ImageId(1)).expect("valid open");
        viewer.open(ImageId(3)).expect("valid open");
        assert!(viewer.is_selected(ImageId(3)));
        assert!(!viewer.is_selected(ImageId(1)));
    }

    #[test]
    fn close_is_idempotent() {
        let mut viewer = viewer(&[1, 2]);
        viewer.open(ImageId(1)).expect("valid open");

        viewer.close();
        assert!(!viewer.has_selection());
        viewer.close();
        assert!(!viewer.has_selection());
    }

    #[test]
    fn navigate_while_idle_reports_no_selection() {
        let mut viewer = viewer(&[1, 2]);
        assert_eq!(
            viewer.navigate(Direction::Next),
            Err(GalleryError::NoActiveSelection)
        );
        assert_eq!(
            viewer.navigate(Direction::Previous),
            Err(GalleryError::NoActiveSelection)
        );
        assert!(!viewer.has_selection());
    }

    #[test]
    fn navigate_next_wraps_from_last_to_first() {
        let mut viewer = viewer(&[1, 2, 3]);
        viewer.open(ImageId(3)).expect("valid open");

        assert_eq!(viewer.navigate(Direction::Next), Ok(ImageId(1)));
        assert_eq!(viewer.navigate(Direction::Previous), Ok(ImageId(3)));
    }

    #[test]
    fn navigate_previous_wraps_from_first_to_last() {
        let mut viewer = viewer(&[1, 2, 3]);
        viewer.open(ImageId(1)).expect("valid open");

        assert_eq!(viewer.navigate(Direction::Previous), Ok(ImageId(3)));
    }

    #[test]
    fn full_ring_returns_to_start_from_any_selection() {
        let ids = [4u32, 7, 9, 12, 15];
        for start in ids {
            let mut viewer = viewer(&ids);
            viewer.open(ImageId(start)).expect("valid open");
            for _ in 0..ids.len() {
                viewer.navigate(Direction::Next).expect("selection active");
            }
            assert!(viewer.is_selected(ImageId(start)), "ring closure from {start}");
        }
    }

    #[test]
    fn previous_is_the_inverse_of_next() {
        let ids = [1u32, 2, 3, 4];
        for start in ids {
            let mut viewer = viewer(&ids);
            viewer.open(ImageId(start)).expect("valid open");
            viewer.navigate(Direction::Next).expect("selection active");
            viewer
                .navigate(Direction::Previous)
                .expect("selection active");
            assert!(viewer.is_selected(ImageId(start)));
        }
    }

    #[test]
    fn single_image_ring_stays_in_place() {
        let mut viewer = viewer(&[8]);
        viewer.open(ImageId(8)).expect("valid open");
        assert_eq!(viewer.navigate(Direction::Next), Ok(ImageId(8)));
        assert_eq!(viewer.navigate(Direction::Previous), Ok(ImageId(8)));
    }
}
