use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edupilot_core::ItemCollection;
use edupilot_widgets::{ExclusiveToggleSet, PageWindow};

fn bench_page_cycle(c: &mut Criterion) {
    let catalog: ItemCollection<u64> = (0..10_000).collect();
    let mut grid = PageWindow::new(catalog, 6).unwrap();

    c.bench_function("page_window_advance_and_read", |b| {
        b.iter(|| {
            grid.advance();
            black_box(grid.visible_items().iter().sum::<u64>())
        })
    });

    c.bench_function("page_window_buttons", |b| {
        b.iter(|| black_box(grid.page_buttons(7).unwrap()))
    });
}

fn bench_accordion(c: &mut Criterion) {
    let faqs: ItemCollection<u32> = (0..64).collect();
    let mut set = ExclusiveToggleSet::new(faqs);
    let mut i = 0usize;

    c.bench_function("exclusive_toggle", |b| {
        b.iter(|| {
            i = (i + 7) % 64;
            black_box(set.toggle(i).unwrap())
        })
    });
}

criterion_group!(benches, bench_page_cycle, bench_accordion);
criterion_main!(benches);
