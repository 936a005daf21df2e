use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagebuilder_editor::{reconcile, remove, DragRef, DropTarget, Element, ElementKind, ElementList};

fn canvas(len: usize) -> ElementList {
    (0..len)
        .map(|i| match i % 3 {
            0 => Element::Text {
                content: format!("Paragraph {}", i),
            },
            1 => Element::new(ElementKind::Image),
            _ => Element::new(ElementKind::Button),
        })
        .collect()
}

fn reconcile_append(c: &mut Criterion) {
    let list = canvas(100);

    c.bench_function("reconcile_append_100", |b| {
        b.iter(|| {
            reconcile(
                black_box(&list),
                DragRef::Toolbox(ElementKind::Button),
                Some(DropTarget::CanvasRegion),
            )
        })
    });
}

fn reconcile_move(c: &mut Criterion) {
    let list = canvas(100);

    c.bench_function("reconcile_move_first_to_last_100", |b| {
        b.iter(|| {
            reconcile(
                black_box(&list),
                DragRef::Canvas(0),
                Some(DragRef::Canvas(99).into()),
            )
        })
    });
}

fn reconcile_cancelled(c: &mut Criterion) {
    let list = canvas(100);

    c.bench_function("reconcile_cancelled_100", |b| {
        b.iter(|| reconcile(black_box(&list), DragRef::Canvas(3), None))
    });
}

fn remove_middle(c: &mut Criterion) {
    let list = canvas(100);

    c.bench_function("remove_middle_100", |b| {
        b.iter(|| remove(black_box(&list), 50))
    });
}

criterion_group!(
    benches,
    reconcile_append,
    reconcile_move,
    reconcile_cancelled,
    remove_middle
);
criterion_main!(benches);
