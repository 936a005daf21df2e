//! # Element Model
//!
//! One placed item on the canvas, plus the ordered list that holds them.
//!
//! Each kind carries only the state that means something for it:
//!
//! ```text
//! Text   { content }
//! Image  { src }              src is None until an upload completes
//! Button { content, editing } starts as "Click Me", editing = true
//! ```
//!
//! Elements are values. Every edit goes through a `with_*` helper that
//! returns a fresh `Element`, so two list snapshots never share mutable
//! element state.

use crate::mutations::MutationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label a button falls back to when its content is blank.
pub const DEFAULT_BUTTON_LABEL: &str = "Click Me";

/// The closed set of element types offered by the toolbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Button,
}

impl ElementKind {
    /// Palette order
    pub const ALL: [ElementKind; 3] = [ElementKind::Text, ElementKind::Image, ElementKind::Button];

    /// Lowercase name used in drag ids and JSON
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
        }
    }

    /// Human-readable palette label
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
        }
    }

    /// Parse a lowercase kind name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque reference to uploaded image data (object URL, blob key, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed item on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text {
        content: String,
    },

    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<ImageRef>,
    },

    Button {
        content: String,
        editing: bool,
    },
}

impl Element {
    /// Create a freshly dropped element with the toolbox defaults
    ///
    /// Buttons start labelled "Click Me" and already in edit mode so the
    /// first render offers the label for editing.
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Element::Text {
                content: String::new(),
            },
            ElementKind::Image => Element::Image { src: None },
            ElementKind::Button => Element::Button {
                content: DEFAULT_BUTTON_LABEL.to_string(),
                editing: true,
            },
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text { .. } => ElementKind::Text,
            Element::Image { .. } => ElementKind::Image,
            Element::Button { .. } => ElementKind::Button,
        }
    }

    /// Text payload for Text and Button elements
    pub fn content(&self) -> Option<&str> {
        match self {
            Element::Text { content } | Element::Button { content, .. } => Some(content),
            Element::Image { .. } => None,
        }
    }

    pub fn image_ref(&self) -> Option<&ImageRef> {
        match self {
            Element::Image { src } => src.as_ref(),
            _ => None,
        }
    }

    /// Whether a button is in label-edit mode. Always false for other kinds.
    pub fn is_editing(&self) -> bool {
        matches!(self, Element::Button { editing: true, .. })
    }

    /// What the renderer shows for this element
    pub fn display_label(&self) -> Option<&str> {
        match self {
            Element::Text { content } => Some(content),
            Element::Button { content, .. } if content.trim().is_empty() => {
                Some(DEFAULT_BUTTON_LABEL)
            }
            Element::Button { content, .. } => Some(content),
            Element::Image { .. } => None,
        }
    }

    /// Copy with new text content (Text and Button only)
    pub fn with_content(&self, content: impl Into<String>) -> Result<Self, MutationError> {
        match self {
            Element::Text { .. } => Ok(Element::Text {
                content: content.into(),
            }),
            Element::Button { editing, .. } => Ok(Element::Button {
                content: content.into(),
                editing: *editing,
            }),
            Element::Image { .. } => Err(self.mismatch("set_content")),
        }
    }

    /// Copy with a new image reference (Image only). A later call overwrites.
    pub fn with_image(&self, src: ImageRef) -> Result<Self, MutationError> {
        match self {
            Element::Image { .. } => Ok(Element::Image { src: Some(src) }),
            _ => Err(self.mismatch("set_image_ref")),
        }
    }

    /// Copy with the edit flag changed (Button only)
    pub fn with_editing(&self, editing: bool) -> Result<Self, MutationError> {
        match self {
            Element::Button { content, .. } => Ok(Element::Button {
                content: content.clone(),
                editing,
            }),
            _ => Err(self.mismatch("set_editing")),
        }
    }

    fn mismatch(&self, operation: &'static str) -> MutationError {
        MutationError::KindMismatch {
            operation,
            kind: self.kind(),
        }
    }
}

/// Ordered snapshot of the canvas
///
/// Position in the list is the element's identity and its z-order. A list
/// value is never edited after it is produced; the reconciler and the
/// mutation functions hand back new lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementList(Vec<Element>);

impl ElementList {
    /// Empty canvas
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.0
    }
}

impl From<Vec<Element>> for ElementList {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl FromIterator<Element> for ElementList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ElementList {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_defaults() {
        let button = Element::new(ElementKind::Button);
        assert_eq!(button.content(), Some("Click Me"));
        assert!(button.is_editing());
    }

    #[test]
    fn test_text_and_image_defaults() {
        assert_eq!(
            Element::new(ElementKind::Text),
            Element::Text {
                content: String::new()
            }
        );
        let image = Element::new(ElementKind::Image);
        assert_eq!(image.image_ref(), None);
        assert!(!image.is_editing());
    }

    #[test]
    fn test_with_content_leaves_original_untouched() {
        let text = Element::new(ElementKind::Text);
        let updated = text.with_content("Hello").unwrap();

        assert_eq!(text.content(), Some(""));
        assert_eq!(updated.content(), Some("Hello"));
    }

    #[test]
    fn test_with_content_keeps_button_edit_state() {
        let button = Element::new(ElementKind::Button).with_editing(false).unwrap();
        let relabelled = button.with_content("Buy").unwrap();
        assert_eq!(
            relabelled,
            Element::Button {
                content: "Buy".to_string(),
                editing: false
            }
        );
    }

    #[test]
    fn test_kind_mismatch_is_reported() {
        let image = Element::new(ElementKind::Image);
        assert_eq!(
            image.with_content("nope"),
            Err(MutationError::KindMismatch {
                operation: "set_content",
                kind: ElementKind::Image
            })
        );
        assert!(Element::new(ElementKind::Text).with_editing(true).is_err());
        assert!(Element::new(ElementKind::Button)
            .with_image(ImageRef::new("blob:1"))
            .is_err());
    }

    #[test]
    fn test_image_ref_overwrites() {
        let image = Element::new(ElementKind::Image)
            .with_image(ImageRef::new("blob:first"))
            .unwrap()
            .with_image(ImageRef::new("blob:second"))
            .unwrap();
        assert_eq!(image.image_ref().map(ImageRef::as_str), Some("blob:second"));
    }

    #[test]
    fn test_blank_button_falls_back_to_default_label() {
        let button = Element::new(ElementKind::Button).with_content("   ").unwrap();
        assert_eq!(button.display_label(), Some("Click Me"));
        assert_eq!(Element::new(ElementKind::Image).display_label(), None);
    }

    #[test]
    fn test_element_serialization() {
        let button = Element::new(ElementKind::Button);
        let json = serde_json::to_string(&button).unwrap();
        assert_eq!(json, r#"{"type":"button","content":"Click Me","editing":true}"#);

        let image: Element = serde_json::from_str(r#"{"type":"image"}"#).unwrap();
        assert_eq!(image, Element::new(ElementKind::Image));
    }

    #[test]
    fn test_list_serializes_as_plain_array() {
        let list: ElementList = vec![Element::new(ElementKind::Text)].into();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"type":"text","content":""}]"#);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ElementKind::from_name("video"), None);
    }
}
