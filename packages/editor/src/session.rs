//! # Edit Session
//!
//! The state container the interaction layer owns. It keeps the latest
//! element-list snapshot, tracks the drag in flight, and turns each
//! [`EditorEvent`] into a call on the reconciler or the mutation API.
//!
//! Every new snapshot bumps `version` and is pushed to the registered
//! [`SnapshotObserver`]s. Gestures that leave the list unchanged produce no
//! new version.

use crate::drag::{DragRef, DragSession, DropTarget};
use crate::element::ElementList;
use crate::events::EditorEvent;
use crate::mutations::Mutation;
use crate::reconcile::Reconciler;
use crate::{EditorConfig, EditorError};
use tracing::{debug, warn};

/// Collaborator told about each new snapshot (typically the renderer)
pub trait SnapshotObserver {
    fn snapshot_changed(&mut self, version: u64, elements: &ElementList);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(u64, &ElementList),
{
    fn snapshot_changed(&mut self, version: u64, elements: &ElementList) {
        self(version, elements)
    }
}

/// Single-user editing session over one canvas
pub struct EditSession {
    /// Current version number (increments on each new snapshot)
    pub version: u64,

    elements: ElementList,
    drag: DragSession,
    reconciler: Reconciler,
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl EditSession {
    /// Empty canvas with default settings
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self::from_snapshot(ElementList::new(), config)
    }

    /// Resume from an existing snapshot
    pub fn from_snapshot(elements: ElementList, config: &EditorConfig) -> Self {
        Self {
            version: 0,
            elements,
            drag: DragSession::new(),
            reconciler: Reconciler::new(config.toolbox_drop),
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Latest snapshot
    pub fn elements(&self) -> &ElementList {
        &self.elements
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Dispatch one notification from the interaction layer
    pub fn handle(&mut self, event: EditorEvent) -> Result<&ElementList, EditorError> {
        match event {
            EditorEvent::DragStart { source } => self.drag_start(source)?,
            EditorEvent::DragEnd { target } => self.drag_end(target),
            other => {
                if let Some(mutation) = other.to_mutation() {
                    self.apply(mutation)?;
                }
            }
        }
        Ok(&self.elements)
    }

    /// Begin a gesture. Rejected while another gesture is still active.
    pub fn drag_start(&mut self, source: DragRef) -> Result<(), EditorError> {
        if let Some(active) = self.drag.active() {
            warn!(%active, %source, "drag started before the previous drag ended");
            return Err(EditorError::DragInProgress { active });
        }

        debug!(%source, "drag started");
        self.drag.start(source);
        Ok(())
    }

    /// Finish the active gesture over `target` (or over nothing)
    pub fn drag_end(&mut self, target: Option<DropTarget>) {
        let Some(source) = self.drag.end() else {
            warn!(?target, "drag ended without an active drag");
            return;
        };

        let next = self.reconciler.reconcile(&self.elements, source, target);
        if next != self.elements {
            self.replace(next);
        }
    }

    /// Apply an element edit to the current snapshot
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, EditorError> {
        let next = mutation.apply(&self.elements)?;
        self.replace(next);
        Ok(self.version)
    }

    fn replace(&mut self, next: ElementList) {
        self.elements = next;
        self.version += 1;
        debug!(version = self.version, len = self.elements.len(), "new snapshot");

        for observer in &mut self.observers {
            observer.snapshot_changed(self.version, &self.elements);
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("version", &self.version)
            .field("elements", &self.elements)
            .field("drag", &self.drag)
            .field("reconciler", &self.reconciler)
            .field("observers", &self.observers.len())
            .finish()
    }
}
