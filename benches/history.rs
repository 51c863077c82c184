//! Benchmarks for the snapshot history hot path
//!
//! Run with: cargo bench history

use folio::history::History;
use folio::model::{DocumentTree, Node, NodeKind};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_state(blocks: usize) -> String {
    let mut tree = DocumentTree::new();
    for i in 0..blocks {
        tree.append(Node::new(
            NodeKind::Paragraph,
            format!("paragraph number {} with some body text", i),
        ));
    }
    tree.serialized_state()
}

// ============================================================================
// Snapshot recording
// ============================================================================

#[divan::bench]
fn record_100_distinct_states() {
    let mut history = History::new(80);
    for i in 0..100 {
        let state = format!("{{\"rev\":{}}}", i);
        history.record(divan::black_box(&state));
    }
}

#[divan::bench]
fn record_duplicate_state() {
    let mut history = History::new(80);
    let state = sample_state(50);
    history.record(&state);
    for _ in 0..100 {
        history.record(divan::black_box(&state));
    }
}

#[divan::bench]
fn record_large_document_state() {
    let mut history = History::new(80);
    let state = sample_state(500);
    history.record(divan::black_box(&state));
}

// ============================================================================
// Undo/redo traversal
// ============================================================================

#[divan::bench]
fn undo_redo_sweep_80_entries() {
    let mut history = History::new(80);
    for i in 0..80 {
        history.record(&format!("{{\"rev\":{}}}", i));
    }
    while history.undo().is_some() {}
    while history.redo().is_some() {}
}

// ============================================================================
// Serialization round-trip backing the snapshots
// ============================================================================

#[divan::bench(args = [10, 100, 500])]
fn serialize_document(blocks: usize) -> String {
    let mut tree = DocumentTree::new();
    for i in 0..blocks {
        tree.append(Node::new(NodeKind::Paragraph, format!("block {}", i)));
    }
    divan::black_box(tree.serialized_state())
}
