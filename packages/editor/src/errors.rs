//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Invalid drag id: {0}")]
    DragId(#[from] crate::drag::DragIdError),

    #[error("Drag of {active} is still in progress")]
    DragInProgress { active: crate::drag::DragRef },

    #[error("Invalid event: {0}")]
    Event(#[from] serde_json::Error),
}
