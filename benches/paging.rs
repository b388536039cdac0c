// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the approval flow hot paths.
//!
//! Measures the performance of:
//! - Paging through a large collection (page cache warm and cold)
//! - Neighbor lookups in the attachment collection
//! - Byte-bounded caption edits

use attachment_approval::attachment::{Attachment, AttachmentItemCollection};
use attachment_approval::ui::approval::caption;
use attachment_approval::ui::approval::navigation::Step;
use attachment_approval::ui::approval::{ApprovalConfig, Message, State};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const ITEM_COUNT: usize = 200;

fn attachments() -> Vec<Attachment> {
    (0..ITEM_COUNT)
        .map(|i| Attachment::from_path(format!("photo_{i:03}.jpg")))
        .collect()
}

/// Steps forward through every item, delivering each transition completion.
fn page_through(state: &mut State) {
    for _ in 1..ITEM_COUNT {
        let _ = state.handle_message(Message::Navigate(Step::Next));
        if let Some(transition) = state.pending_transition() {
            let _ = state.handle_message(Message::TransitionFinished(transition));
        }
    }
}

fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging");

    group.bench_function("page_through_cold", |b| {
        b.iter_batched(
            || {
                State::new(attachments(), ApprovalConfig::default())
                    .expect("non-empty flow")
                    .0
            },
            |mut state| {
                page_through(&mut state);
                black_box(state.current());
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("page_through_warm", |b| {
        let (mut state, _) =
            State::new(attachments(), ApprovalConfig::default()).expect("non-empty flow");
        page_through(&mut state);
        b.iter(|| {
            for _ in 1..ITEM_COUNT {
                let _ = state.handle_message(Message::Navigate(Step::Previous));
            }
            page_through(&mut state);
            black_box(state.pages().stats());
        });
    });

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let collection = AttachmentItemCollection::new(attachments());
    let last = collection.items()[ITEM_COUNT - 1].id();

    c.bench_function("collection_item_before_last", |b| {
        b.iter(|| black_box(collection.item_before(black_box(last)).map(|i| i.id())));
    });
}

fn bench_caption_edit(c: &mut Criterion) {
    let long = "é".repeat(4096);

    c.bench_function("caption_oversized_paste", |b| {
        b.iter(|| {
            let mut state = caption::State::new(Some("hello "), 2048);
            black_box(state.set_text(black_box(&long)));
        });
    });

    c.bench_function("caption_single_char_append", |b| {
        let base = "x".repeat(1000);
        b.iter(|| {
            let mut state = caption::State::new(Some(&base), 2048);
            let mut typed = base.clone();
            typed.push('y');
            black_box(state.set_text(&typed));
        });
    });
}

criterion_group!(benches, bench_paging, bench_neighbors, bench_caption_edit);
criterion_main!(benches);
