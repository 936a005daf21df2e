//! Mutation API tests

use pagebuilder_editor::{
    set_editing, set_image_ref, Element, ElementKind, ElementList, ImageRef, Mutation,
    MutationError,
};

fn canvas() -> ElementList {
    vec![
        Element::new(ElementKind::Image),
        Element::new(ElementKind::Button),
        Element::Text {
            content: "caption".to_string(),
        },
    ]
    .into()
}

#[test]
fn test_upload_completion_sets_image() {
    let list = canvas();
    let next = set_image_ref(&list, 0, "blob:photo").unwrap();

    assert_eq!(next.get(0).and_then(Element::image_ref), Some(&ImageRef::new("blob:photo")));
    assert_eq!(list.get(0).and_then(Element::image_ref), None);
}

#[test]
fn test_button_edit_cycle() {
    let list = canvas();

    let committed = set_editing(&list, 1, false).unwrap();
    assert!(!committed.get(1).unwrap().is_editing());

    let reopened = set_editing(&committed, 1, true).unwrap();
    assert_eq!(reopened, list);
}

#[test]
fn test_button_relabel_then_blank_shows_default() {
    let list = canvas();
    let relabelled = Mutation::SetContent {
        index: 1,
        content: "Subscribe".to_string(),
    }
    .apply(&list)
    .unwrap();
    assert_eq!(relabelled.get(1).and_then(Element::display_label), Some("Subscribe"));

    let blank = Mutation::SetContent {
        index: 1,
        content: "  ".to_string(),
    }
    .apply(&relabelled)
    .unwrap();
    assert_eq!(blank.get(1).and_then(Element::content), Some("  "));
    assert_eq!(blank.get(1).and_then(Element::display_label), Some("Click Me"));
}

#[test]
fn test_kind_mismatch_does_not_produce_a_list() {
    let list = canvas();

    let result = Mutation::SetEditing {
        index: 2,
        editing: true,
    }
    .apply(&list);

    assert_eq!(
        result,
        Err(MutationError::KindMismatch {
            operation: "set_editing",
            kind: ElementKind::Text,
        })
    );
}

#[test]
fn test_every_operation_checks_position_first() {
    let list = canvas();
    let mutations = vec![
        Mutation::SetContent {
            index: 9,
            content: "x".to_string(),
        },
        Mutation::SetImageRef {
            index: 9,
            src: ImageRef::new("blob:x"),
        },
        Mutation::SetEditing {
            index: 9,
            editing: false,
        },
        Mutation::Remove { index: 9 },
    ];

    for mutation in mutations {
        assert_eq!(
            mutation.apply(&list),
            Err(MutationError::IndexOutOfRange { index: 9, len: 3 }),
            "{:?}",
            mutation
        );
    }
}

#[test]
fn test_remove_last_element_empties_list() {
    let list: ElementList = vec![Element::new(ElementKind::Text)].into();
    let next = Mutation::Remove { index: 0 }.apply(&list).unwrap();
    assert!(next.is_empty());
}
