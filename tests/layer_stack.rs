//! Layer stack integration tests: ordering scenarios and concurrency.

use std::sync::Arc;
use std::thread;

use ember_tui::{Layer, LayerError, LayerStack, Position, Size};

fn layer() -> Layer {
    Layer::from_size(Position::ZERO, Size::new(4, 2))
}

#[test]
fn insert_then_relevel_scenario() {
    // Start empty; add A, add B, insert C at 1 -> [A, C, B].
    let stack = LayerStack::new(Size::new(40, 20));
    let a = stack.add_layer(layer());
    let b = stack.add_layer(layer());
    let c = stack.insert_layer_at(1, layer()).expect("index 1 is valid");

    let order = |stack: &LayerStack| -> Vec<_> {
        (0..stack.len())
            .map(|i| stack.layer_at(i).unwrap().id())
            .collect()
    };
    assert_eq!(order(&stack), vec![a.id(), c.id(), b.id()]);

    // Move C one level toward the top -> [A, B, C].
    assert!(c.move_by_level(1));
    assert_eq!(order(&stack), vec![a.id(), b.id(), c.id()]);
}

#[test]
fn layer_at_matches_last_placement() {
    let stack = LayerStack::new(Size::new(40, 20));
    let first = stack.add_layer(layer());
    let second = stack.add_layer(layer());
    let replacement = stack.set_layer_at(0, layer()).expect("index 0 is valid");

    assert_eq!(stack.layer_at(0).unwrap().id(), replacement.id());
    assert_eq!(stack.layer_at(1).unwrap().id(), second.id());
    assert_ne!(stack.layer_at(0).unwrap().id(), first.id());
}

#[test]
fn out_of_range_operations_report_invalid_index() {
    let stack = LayerStack::new(Size::new(40, 20));
    stack.add_layer(layer());

    assert_eq!(
        stack.insert_layer_at(2, layer()).unwrap_err(),
        LayerError::InvalidIndex { index: 2, len: 1 }
    );
    assert!(matches!(
        stack.set_layer_at(1, layer()),
        Err(LayerError::InvalidIndex { .. })
    ));
    assert_eq!(stack.len(), 1);
}

#[test]
fn detached_handle_fails_every_method() {
    let stack = LayerStack::new(Size::new(40, 20));
    let handle = stack.add_layer(layer());
    assert!(handle.remove());

    assert!(!handle.remove());
    assert!(!handle.move_to(Position::new(1, 1)));
    assert!(!handle.move_by_level(0));
    assert!(!handle.move_by_level(-1));
    assert!(!handle.is_attached());
}

#[test]
fn replaced_layer_detaches_its_handle() {
    let stack = LayerStack::new(Size::new(40, 20));
    let original = stack.add_layer(layer());
    stack.set_layer_at(0, layer()).expect("index 0 is valid");

    assert!(!original.is_attached());
    assert!(!original.move_to(Position::new(1, 1)));
    assert!(!original.move_by_level(0));
    // The replacement is untouched by the stale handle's attempts.
    assert_eq!(stack.len(), 1);
}

#[test]
fn concurrent_adds_lose_no_updates() {
    // N threads, one add_layer each: the stack must end at size N with N
    // distinct identities regardless of scheduling.
    const THREADS: usize = 16;

    let stack = Arc::new(LayerStack::new(Size::new(100, 100)));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let stack = Arc::clone(&stack);
            thread::spawn(move || stack.add_layer(layer()).id())
        })
        .collect();

    let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(stack.len(), THREADS);

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), THREADS);

    // And the index space is contiguous: every index resolves.
    for index in 0..THREADS {
        assert!(stack.layer_at(index).is_some());
    }
}

#[test]
fn concurrent_relevels_keep_the_sequence_consistent() {
    const LAYERS: usize = 8;

    let stack = Arc::new(LayerStack::new(Size::new(100, 100)));
    let handles: Vec<_> = (0..LAYERS)
        .map(|_| Arc::new(stack.add_layer(layer())))
        .collect();

    let workers: Vec<_> = handles
        .iter()
        .map(|handle| {
            let handle = Arc::clone(handle);
            thread::spawn(move || {
                for delta in [1isize, -1, 2, -2] {
                    handle.move_by_level(delta);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    // No layer lost, none duplicated, whatever the interleaving.
    assert_eq!(stack.len(), LAYERS);
    let mut ids: Vec<_> = (0..LAYERS)
        .map(|i| stack.layer_at(i).unwrap().id())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), LAYERS);
}

#[test]
fn snapshot_is_stable_under_concurrent_mutation() {
    let stack = Arc::new(LayerStack::new(Size::new(100, 100)));
    for _ in 0..4 {
        stack.add_layer(layer());
    }

    let reader = {
        let stack = Arc::clone(&stack);
        thread::spawn(move || {
            for _ in 0..100 {
                let states = stack.layer_states();
                // A snapshot is internally consistent even while writers run.
                for state in &states {
                    assert_eq!(state.size, Size::new(4, 2));
                }
            }
        })
    };
    let writer = {
        let stack = Arc::clone(&stack);
        thread::spawn(move || {
            for _ in 0..100 {
                let handle = stack.add_layer(layer());
                handle.remove();
            }
        })
    };

    reader.join().unwrap();
    writer.join().unwrap();
    assert_eq!(stack.len(), 4);
}
