//! Screen rendering benchmarks.
//!
//! Every keypress re-renders a full screen, so list and detail composition
//! sit on the hot path of each session.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use stickerterm::catalog::{Catalog, MemoryArchive};
use stickerterm::model::{PackDetail, PackFlags, PackSummary};
use stickerterm::session::Session;
use stickerterm::state::{search_packs, DetailPage, Geometry, SearchTerm};
use stickerterm::transport::CaptureIo;
use stickerterm::view::{Layout, ListScreen};

fn art(fill: char) -> String {
    vec![fill.to_string().repeat(15); 8].join("\n")
}

fn summaries(count: usize) -> Vec<PackSummary> {
    (0..count)
        .map(|i| PackSummary {
            id: format!("p{i}"),
            title: format!("Sticker pack number {i}"),
            cover_art: art('#'),
            tags: vec![format!("tag{}", i % 17), "meme".to_string()],
            flags: PackFlags {
                original: i % 2 == 0,
                animated: i % 3 == 0,
                nsfw: i % 11 == 0,
            },
        })
        .collect()
}

fn detail(thumbs: usize) -> PackDetail {
    PackDetail {
        id: "p0".to_string(),
        key: "0123456789abcdef".repeat(4),
        title: "Sticker pack number 0".to_string(),
        author: "Someone".to_string(),
        source: Some("https://example.org/stickers".to_string()),
        tags: vec!["meme".to_string(), "frog".to_string()],
        flags: PackFlags::default(),
        thumbs: (0..thumbs).map(|_| art('.')).collect(),
    }
}

fn bench_list_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_render");
    let packs: Vec<Arc<PackSummary>> = summaries(64).into_iter().map(Arc::new).collect();

    for (width, height) in [(80, 40), (200, 60)] {
        let layout = Layout::new(Geometry::new(width, height));
        let page_size = layout.geometry().browse_page_size().min(packs.len());
        let screen = ListScreen {
            packs: &packs[..page_size],
            cursor: 0,
            search_term: None,
            notice: None,
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &screen,
            |b, screen| b.iter(|| black_box(layout.list(screen))),
        );
    }
    group.finish();
}

fn bench_detail_render(c: &mut Criterion) {
    let layout = Layout::new(Geometry::new(120, 50));
    let page = DetailPage::new(detail(40), layout.geometry().browse_page_size());

    c.bench_function("detail_render", |b| {
        b.iter(|| black_box(layout.detail(&page)))
    });
}

fn bench_search(c: &mut Criterion) {
    let index: Vec<Arc<PackSummary>> = summaries(5_000).into_iter().map(Arc::new).collect();
    let term = SearchTerm::new("tag1").expect("non-empty term");

    c.bench_function("search_5000_packs", |b| {
        b.iter(|| black_box(search_packs(&term, &index)))
    });
}

fn bench_session_keys(c: &mut Criterion) {
    let catalog = Arc::new(
        Catalog::load(MemoryArchive::new(summaries(200))).expect("memory archive loads"),
    );

    c.bench_function("session_key_sweep", |b| {
        b.iter(|| {
            let mut session = Session::start(CaptureIo::new(), Arc::clone(&catalog), 80, 40, "bench")
                .expect("session starts");
            session.on_data(b"dddsssaaww").expect("input handled");
            session.on_data(b"/meme\r").expect("input handled");
            black_box(session.cursor())
        })
    });
}

criterion_group!(
    benches,
    bench_list_render,
    bench_detail_render,
    bench_search,
    bench_session_keys
);
criterion_main!(benches);
