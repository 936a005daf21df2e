//! # Reconciler
//!
//! Derives the next element list from a completed drag gesture.
//!
//! ## Decision table
//!
//! Evaluated in order, first match wins:
//!
//! | Source        | Target           | Result                              |
//! |---------------|------------------|-------------------------------------|
//! | any           | none             | unchanged (drag cancelled)          |
//! | `Toolbox(k)`  | `CanvasRegion`   | append `Element::new(k)`            |
//! | `Canvas(i)`   | `Canvas(j)`, i≠j | move i to j (not a swap)            |
//! | `Canvas(i)`   | `Canvas(i)`      | unchanged                           |
//! | `Toolbox(k)`  | `Canvas(j)`      | per [`ToolboxDropPolicy`]           |
//! | anything else |                  | unchanged                           |
//!
//! Gestures naming positions outside the list are treated like drops on an
//! invalid zone: unchanged, never an error.
//!
//! The reconciler is pure. It reads nothing but its arguments and never
//! alters the list it is given.

use crate::drag::{DragRef, DropTarget};
use crate::element::{Element, ElementKind, ElementList};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What happens when a palette entry is dropped onto a placed element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolboxDropPolicy {
    /// Insert the new element at the target's position
    #[default]
    Insert,

    /// Leave the list unchanged
    Ignore,
}

/// Structural change chosen for a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Append(ElementKind),
    Insert { kind: ElementKind, index: usize },
    Move { from: usize, to: usize },
    Unchanged,
}

/// Reconciler configured with a toolbox-drop policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciler {
    pub policy: ToolboxDropPolicy,
}

impl Reconciler {
    pub fn new(policy: ToolboxDropPolicy) -> Self {
        Self { policy }
    }

    /// Pick the structural change for a gesture without applying it
    pub fn decide(
        &self,
        list: &ElementList,
        source: DragRef,
        target: Option<DropTarget>,
    ) -> Reconciliation {
        let Some(target) = target else {
            return Reconciliation::Unchanged;
        };

        match (source, target) {
            (DragRef::Toolbox(kind), DropTarget::CanvasRegion) => Reconciliation::Append(kind),

            (DragRef::Canvas(from), DropTarget::Over(DragRef::Canvas(to))) => {
                if from == to || from >= list.len() || to >= list.len() {
                    Reconciliation::Unchanged
                } else {
                    Reconciliation::Move { from, to }
                }
            }

            (DragRef::Toolbox(kind), DropTarget::Over(DragRef::Canvas(index))) => {
                match self.policy {
                    ToolboxDropPolicy::Insert if index < list.len() => {
                        Reconciliation::Insert { kind, index }
                    }
                    _ => Reconciliation::Unchanged,
                }
            }

            _ => Reconciliation::Unchanged,
        }
    }

    /// Compute the next list for a completed gesture
    #[instrument(level = "debug", skip(self, list), fields(len = list.len()))]
    pub fn reconcile(
        &self,
        list: &ElementList,
        source: DragRef,
        target: Option<DropTarget>,
    ) -> ElementList {
        let decision = self.decide(list, source, target);
        debug!(?decision, "reconciled drag gesture");
        apply(list, decision)
    }
}

/// Reconcile with the default policy
pub fn reconcile(list: &ElementList, source: DragRef, target: Option<DropTarget>) -> ElementList {
    Reconciler::default().reconcile(list, source, target)
}

fn apply(list: &ElementList, decision: Reconciliation) -> ElementList {
    match decision {
        Reconciliation::Unchanged => list.clone(),

        Reconciliation::Append(kind) => list
            .iter()
            .cloned()
            .chain(std::iter::once(Element::new(kind)))
            .collect(),

        Reconciliation::Insert { kind, index } => {
            let mut elements = list.as_slice().to_vec();
            elements.insert(index, Element::new(kind));
            elements.into()
        }

        Reconciliation::Move { from, to } => {
            let mut elements = list.as_slice().to_vec();
            let moved = elements.remove(from);
            elements.insert(to, moved);
            elements.into()
        }
    }
}
