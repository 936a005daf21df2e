//! # Editor Events
//!
//! Notifications delivered by the interaction layer. Drag refs travel as the
//! same string ids the UI uses (`"toolbox-text"`, `"2"`, `"canvas"`).
//!
//! ```json
//! [
//!   { "event": "dragStart", "source": "toolbox-text" },
//!   { "event": "dragEnd", "target": "canvas" },
//!   { "event": "contentChanged", "index": 0, "text": "Hello" }
//! ]
//! ```

use crate::drag::{DragRef, DropTarget};
use crate::element::ImageRef;
use crate::mutations::Mutation;
use crate::EditorError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum EditorEvent {
    DragStart {
        source: DragRef,
    },

    /// `target` is absent when the gesture ended outside every drop zone
    DragEnd {
        #[serde(default)]
        target: Option<DropTarget>,
    },

    ContentChanged {
        index: usize,
        text: String,
    },

    UploadCompleted {
        index: usize,
        src: ImageRef,
    },

    EditToggled {
        index: usize,
        editing: bool,
    },

    DeleteClicked {
        index: usize,
    },
}

impl EditorEvent {
    /// The element edit this event requests, if it is not a drag event
    pub fn to_mutation(&self) -> Option<Mutation> {
        match self {
            EditorEvent::DragStart { .. } | EditorEvent::DragEnd { .. } => None,
            EditorEvent::ContentChanged { index, text } => Some(Mutation::SetContent {
                index: *index,
                content: text.clone(),
            }),
            EditorEvent::UploadCompleted { index, src } => Some(Mutation::SetImageRef {
                index: *index,
                src: src.clone(),
            }),
            EditorEvent::EditToggled { index, editing } => Some(Mutation::SetEditing {
                index: *index,
                editing: *editing,
            }),
            EditorEvent::DeleteClicked { index } => Some(Mutation::Remove { index: *index }),
        }
    }
}

/// Parse a JSON array of events
pub fn parse_events(json: &str) -> Result<Vec<EditorEvent>, EditorError> {
    Ok(serde_json::from_str(json)?)
}
