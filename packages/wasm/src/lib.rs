use pagebuilder_editor::{
    DragRef, DropTarget, EditSession, EditorConfig, EditorError, ElementKind, Mutation,
    ToolboxDropPolicy,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(error: EditorError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Editing session handle owned by the browser UI
#[wasm_bindgen]
pub struct Editor {
    session: EditSession,
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor {
            session: EditSession::new(),
        }
    }

    /// Create an editor whose toolbox drops onto elements are ignored
    /// (`ignoreToolboxDrops = true`) or inserted
    #[wasm_bindgen(js_name = withPolicy)]
    pub fn with_policy(ignore_toolbox_drops: bool) -> Editor {
        let toolbox_drop = if ignore_toolbox_drops {
            ToolboxDropPolicy::Ignore
        } else {
            ToolboxDropPolicy::Insert
        };
        Editor {
            session: EditSession::with_config(&EditorConfig { toolbox_drop }),
        }
    }

    /// Begin a drag of `id` (`"toolbox-text"`, `"2"`, ...)
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, id: &str) -> Result<(), JsValue> {
        self.start(id).map_err(to_js)
    }

    /// End the current drag over `over_id`, or over nothing
    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self, over_id: Option<String>) {
        self.end(over_id.as_deref());
    }

    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&mut self, index: usize, text: String) -> Result<(), JsValue> {
        self.apply(Mutation::SetContent {
            index,
            content: text,
        })
        .map_err(to_js)
    }

    #[wasm_bindgen(js_name = setImageRef)]
    pub fn set_image_ref(&mut self, index: usize, src: String) -> Result<(), JsValue> {
        self.apply(Mutation::SetImageRef {
            index,
            src: src.into(),
        })
        .map_err(to_js)
    }

    #[wasm_bindgen(js_name = setEditing)]
    pub fn set_editing(&mut self, index: usize, editing: bool) -> Result<(), JsValue> {
        self.apply(Mutation::SetEditing { index, editing })
            .map_err(to_js)
    }

    pub fn remove(&mut self, index: usize) -> Result<(), JsValue> {
        self.apply(Mutation::Remove { index }).map_err(to_js)
    }

    /// Current element list as JSON
    pub fn elements(&self) -> Result<String, JsValue> {
        self.elements_json().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.session.version as f64
    }

    /// Floating preview text for the drag in flight
    #[wasm_bindgen(getter, js_name = previewLabel)]
    pub fn preview_label(&self) -> Option<String> {
        self.session.drag().preview_label().map(str::to_string)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    fn start(&mut self, id: &str) -> Result<(), EditorError> {
        let source: DragRef = id.parse()?;
        self.session.drag_start(source)
    }

    fn end(&mut self, over_id: Option<&str>) {
        // An id we cannot read is a drop outside every valid zone
        let target = over_id.and_then(|id| match id.parse::<DropTarget>() {
            Ok(target) => Some(target),
            Err(e) => {
                tracing::debug!(id, error = %e, "ignoring unknown drop target");
                None
            }
        });
        self.session.drag_end(target);
    }

    fn apply(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        self.session.apply(mutation)?;
        Ok(())
    }

    fn elements_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self.session.elements())?)
    }
}

/// Toolbox entries as JSON: `[{ "id": "toolbox-text", "label": "Text" }, ...]`
#[wasm_bindgen]
pub fn palette() -> String {
    let entries: Vec<serde_json::Value> = ElementKind::ALL
        .into_iter()
        .map(|kind| {
            serde_json::json!({
                "id": DragRef::Toolbox(kind).to_string(),
                "label": kind.label(),
            })
        })
        .collect();

    serde_json::Value::Array(entries).to_string()
}
