//! # Drag References
//!
//! Abstract identities for the two ends of a drag gesture, the string codec
//! the UI layer uses for them, and the tracker that remembers what is being
//! dragged while a gesture is in flight.
//!
//! ## Drag ids
//!
//! ```text
//! "toolbox-text"   Toolbox(Text)      palette entry, not yet placed
//! "3"              Canvas(3)          placed element at position 3
//! "canvas"         CanvasRegion       the canvas as a whole (targets only)
//! ```

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

const TOOLBOX_PREFIX: &str = "toolbox-";
const CANVAS_REGION_ID: &str = "canvas";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DragIdError {
    #[error("Empty drag id")]
    Empty,

    #[error("Unknown toolbox entry: {0}")]
    UnknownToolboxEntry(String),

    #[error("Unrecognised drag id: {0}")]
    Unrecognised(String),

    #[error("The canvas region cannot be dragged")]
    RegionAsSource,
}

/// One end of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DragRef {
    /// A palette entry
    Toolbox(ElementKind),

    /// An already-placed element, by position
    Canvas(usize),
}

/// Where a gesture ended, when it ended over something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DropTarget {
    /// Empty canvas space, not a specific element
    CanvasRegion,

    /// A specific draggable
    Over(DragRef),
}

impl DragRef {
    pub fn is_toolbox(&self) -> bool {
        matches!(self, DragRef::Toolbox(_))
    }
}

impl fmt::Display for DragRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragRef::Toolbox(kind) => write!(f, "{}{}", TOOLBOX_PREFIX, kind.name()),
            DragRef::Canvas(index) => write!(f, "{}", index),
        }
    }
}

impl FromStr for DragRef {
    type Err = DragIdError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DragIdError::Empty);
        }

        if let Some(name) = id.strip_prefix(TOOLBOX_PREFIX) {
            return ElementKind::from_name(name)
                .map(DragRef::Toolbox)
                .ok_or_else(|| DragIdError::UnknownToolboxEntry(name.to_string()));
        }

        if id == CANVAS_REGION_ID {
            return Err(DragIdError::RegionAsSource);
        }

        id.parse::<usize>()
            .map(DragRef::Canvas)
            .map_err(|_| DragIdError::Unrecognised(id.to_string()))
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropTarget::CanvasRegion => f.write_str(CANVAS_REGION_ID),
            DropTarget::Over(drag_ref) => fmt::Display::fmt(drag_ref, f),
        }
    }
}

impl FromStr for DropTarget {
    type Err = DragIdError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if id.trim() == CANVAS_REGION_ID {
            Ok(DropTarget::CanvasRegion)
        } else {
            id.parse().map(DropTarget::Over)
        }
    }
}

impl From<DragRef> for DropTarget {
    fn from(drag_ref: DragRef) -> Self {
        DropTarget::Over(drag_ref)
    }
}

impl TryFrom<String> for DragRef {
    type Error = DragIdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        id.parse()
    }
}

impl From<DragRef> for String {
    fn from(drag_ref: DragRef) -> Self {
        drag_ref.to_string()
    }
}

impl TryFrom<String> for DropTarget {
    type Error = DragIdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        id.parse()
    }
}

impl From<DropTarget> for String {
    fn from(target: DropTarget) -> Self {
        target.to_string()
    }
}

/// Holds the dragged identity between drag-start and drag-end
///
/// Only used for transient feedback such as the floating preview. The
/// reconciler sees nothing from here except the source handed back by
/// [`DragSession::end`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<DragRef>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the source of a new gesture
    pub fn start(&mut self, source: DragRef) {
        debug_assert!(
            self.active.is_none(),
            "drag started while another drag is active"
        );
        if let Some(previous) = self.active.replace(source) {
            warn!(%previous, %source, "drag started before the previous drag ended");
        }
    }

    /// Finish the gesture, returning the source captured at start
    ///
    /// Always clears the tracker, whatever the gesture ended over.
    pub fn end(&mut self) -> Option<DragRef> {
        self.active.take()
    }

    pub fn active(&self) -> Option<DragRef> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Text for the floating drag preview
    ///
    /// Placed elements are previewed in place by the renderer, so only
    /// palette entries get a label.
    pub fn preview_label(&self) -> Option<&'static str> {
        match self.active {
            Some(DragRef::Toolbox(kind)) => Some(kind.label()),
            _ => None,
        }
    }
}
