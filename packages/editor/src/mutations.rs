//! # Element Mutations
//!
//! Content-only edits to a single placed element, addressed by position.
//!
//! ## Design Principles
//!
//! 1. **Snapshot in, snapshot out**: the input list is borrowed and never
//!    altered; the edit is visible only in the returned list
//! 2. **Fail fast**: an out-of-range position is a caller bug and is
//!    reported before anything else is looked at
//! 3. **Minimal**: no structural edits here except removal; insertion and
//!    reordering belong to the reconciler
//!
//! ## Positional identity
//!
//! `Remove` shifts every later element down by one. Positions held by the
//! caller for elements after the removed one are stale afterwards and must
//! be re-derived from the returned list.

use crate::element::{Element, ElementKind, ElementList, ImageRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edit applied to one element of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Replace the text of a Text or Button element
    SetContent { index: usize, content: String },

    /// Attach uploaded image data to an Image element
    SetImageRef { index: usize, src: ImageRef },

    /// Enter or leave label-edit mode on a Button
    SetEditing { index: usize, editing: bool },

    /// Delete the element, shifting later elements down
    Remove { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Position {index} is out of range for a list of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot {operation} on a {kind} element")]
    KindMismatch {
        operation: &'static str,
        kind: ElementKind,
    },
}

impl Mutation {
    pub fn index(&self) -> usize {
        match self {
            Mutation::SetContent { index, .. }
            | Mutation::SetImageRef { index, .. }
            | Mutation::SetEditing { index, .. }
            | Mutation::Remove { index } => *index,
        }
    }

    /// Validate without applying
    pub fn validate(&self, list: &ElementList) -> Result<(), MutationError> {
        let element = element_at(list, self.index())?;

        let (operation, accepted) = match self {
            Mutation::SetContent { .. } => (
                "set_content",
                matches!(element.kind(), ElementKind::Text | ElementKind::Button),
            ),
            Mutation::SetImageRef { .. } => ("set_image_ref", element.kind() == ElementKind::Image),
            Mutation::SetEditing { .. } => ("set_editing", element.kind() == ElementKind::Button),
            Mutation::Remove { .. } => ("remove", true),
        };

        if accepted {
            Ok(())
        } else {
            Err(MutationError::KindMismatch {
                operation,
                kind: element.kind(),
            })
        }
    }

    /// Apply to a snapshot, producing the next snapshot
    pub fn apply(&self, list: &ElementList) -> Result<ElementList, MutationError> {
        match self {
            Mutation::SetContent { index, content } => {
                replace_at(list, *index, |element| element.with_content(content.as_str()))
            }

            Mutation::SetImageRef { index, src } => {
                replace_at(list, *index, |element| element.with_image(src.clone()))
            }

            Mutation::SetEditing { index, editing } => {
                replace_at(list, *index, |element| element.with_editing(*editing))
            }

            Mutation::Remove { index } => {
                element_at(list, *index)?;
                Ok(list
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| position != index)
                    .map(|(_, element)| element.clone())
                    .collect())
            }
        }
    }
}

/// Replace the text of the Text or Button element at `index`
pub fn set_content(
    list: &ElementList,
    index: usize,
    content: impl Into<String>,
) -> Result<ElementList, MutationError> {
    Mutation::SetContent {
        index,
        content: content.into(),
    }
    .apply(list)
}

/// Set the image reference of the Image element at `index`
pub fn set_image_ref(
    list: &ElementList,
    index: usize,
    src: impl Into<ImageRef>,
) -> Result<ElementList, MutationError> {
    Mutation::SetImageRef {
        index,
        src: src.into(),
    }
    .apply(list)
}

/// Toggle label-edit mode of the Button at `index`
pub fn set_editing(
    list: &ElementList,
    index: usize,
    editing: bool,
) -> Result<ElementList, MutationError> {
    Mutation::SetEditing { index, editing }.apply(list)
}

/// Delete the element at `index`
pub fn remove(list: &ElementList, index: usize) -> Result<ElementList, MutationError> {
    Mutation::Remove { index }.apply(list)
}

fn element_at(list: &ElementList, index: usize) -> Result<&Element, MutationError> {
    list.get(index).ok_or(MutationError::IndexOutOfRange {
        index,
        len: list.len(),
    })
}

fn replace_at<F>(list: &ElementList, index: usize, edit: F) -> Result<ElementList, MutationError>
where
    F: FnOnce(&Element) -> Result<Element, MutationError>,
{
    let replacement = edit(element_at(list, index)?)?;

    let mut elements = list.as_slice().to_vec();
    elements[index] = replacement;
    Ok(elements.into())
}
