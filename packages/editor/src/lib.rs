//! # Page Builder Editor
//!
//! Core state machine for the drag-and-drop page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI layer: toolbox, canvas, file picker      │
//! └─────────────────────────────────────────────┘
//!                     ↓ EditorEvent
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - DragSession remembers the drag source    │
//! │  - Reconciler turns gestures into lists     │
//! │  - Mutations edit one element by position   │
//! └─────────────────────────────────────────────┘
//!                     ↓ ElementList snapshot
//! ┌─────────────────────────────────────────────┐
//! │ SnapshotObserver: renderer, persistence     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are values**: every operation takes a list by reference
//!    and returns a new one
//! 2. **Position is identity**: no ids survive a reorder or a removal
//! 3. **Bad drops are normal**: gestures that match nothing are no-ops
//! 4. **Bad positions are bugs**: edits at a missing position fail fast
//!
//! ## Usage
//!
//! ```rust
//! use pagebuilder_editor::{
//!     reconcile, set_content, DragRef, DropTarget, ElementKind, ElementList,
//! };
//!
//! let list = ElementList::new();
//! let region = Some(DropTarget::CanvasRegion);
//! let list = reconcile(&list, DragRef::Toolbox(ElementKind::Text), region);
//! let list = set_content(&list, 0, "Hello").unwrap();
//!
//! assert_eq!(list.get(0).and_then(|e| e.content()), Some("Hello"));
//! ```

mod config;
mod drag;
mod element;
mod errors;
mod events;
mod mutations;
mod reconcile;
mod session;

pub use config::EditorConfig;
pub use drag::{DragIdError, DragRef, DragSession, DropTarget};
pub use element::{Element, ElementKind, ElementList, ImageRef, DEFAULT_BUTTON_LABEL};
pub use errors::EditorError;
pub use events::{parse_events, EditorEvent};
pub use mutations::{remove, set_content, set_editing, set_image_ref, Mutation, MutationError};
pub use reconcile::{reconcile, Reconciler, Reconciliation, ToolboxDropPolicy};
pub use session::{EditSession, SnapshotObserver};
