use crate::reconcile::ToolboxDropPolicy;
use serde::{Deserialize, Serialize};

/// Behaviour switches for an edit session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// What a palette entry dropped onto a placed element does
    #[serde(default)]
    pub toolbox_drop: ToolboxDropPolicy,
}
