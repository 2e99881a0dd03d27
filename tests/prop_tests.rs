//! Property-based tests for the graph store.
//!
//! Runs random link/unlink sequences against a naive model (one
//! insertion-ordered, duplicate-free destination list per node) and checks
//! that the store agrees with the model and that edge releases line up with
//! model removals.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use backbone::{GraphStore, NodeId};

#[derive(Debug, Clone)]
enum Op {
    Link(usize, usize),
    Unlink(usize, usize),
}

fn arb_op(node_count: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..node_count, 0..node_count).prop_map(|(origin, dest)| Op::Link(origin, dest)),
        (0..node_count, 0..node_count).prop_map(|(origin, dest)| Op::Unlink(origin, dest)),
    ]
}

/// Naive reference model: per node, destinations in insertion order.
fn apply_to_model(model: &mut [Vec<usize>], op: &Op) -> usize {
    match *op {
        Op::Link(origin, dest) => {
            if !model[origin].contains(&dest) {
                model[origin].push(dest);
            }
            0
        }
        Op::Unlink(origin, dest) => {
            let before = model[origin].len();
            model[origin].retain(|&d| d != dest);
            before - model[origin].len()
        }
    }
}

proptest! {
    #[test]
    fn store_agrees_with_model(ops in prop::collection::vec(arb_op(5), 0..200)) {
        let released = Rc::new(RefCell::new(Vec::new()));
        let release_log = Rc::clone(&released);
        let mut store: GraphStore<usize, (usize, usize)> = GraphStore::builder()
            .on_edge_release(move |edge| release_log.borrow_mut().push(edge))
            .build();

        let handles: Vec<NodeId> = (0..5usize).map(|i| store.create(i)).collect();
        let mut model: Vec<Vec<usize>> = vec![Vec::new(); 5];

        for op in &ops {
            match *op {
                Op::Link(origin, dest) => {
                    let result = store.link(handles[origin], handles[dest], (origin, dest));
                    // Rejection happens exactly when the model already has the edge.
                    prop_assert_eq!(result.is_err(), model[origin].contains(&dest));
                }
                Op::Unlink(origin, dest) => {
                    let removed = store.unlink(handles[origin], handles[dest]);
                    // The store removes at most one edge per destination; the
                    // model removal count must match.
                    prop_assert!(removed <= 1);
                    let mut probe = model.clone();
                    prop_assert_eq!(removed, apply_to_model(&mut probe, op));
                }
            }
            apply_to_model(&mut model, op);

            // After every op the store mirrors the model exactly.
            for (origin, expected) in model.iter().enumerate() {
                let node = store.node(handles[origin]).expect("nodes are never destroyed here");
                let actual: Vec<usize> = node
                    .edges()
                    .iter()
                    .map(|edge| {
                        handles
                            .iter()
                            .position(|&h| h == edge.to())
                            .expect("destination must be one of the created nodes")
                    })
                    .collect();
                prop_assert_eq!(&actual, expected);
            }
        }

        // Every release corresponds to a model removal, in order.
        let expected_releases: Vec<(usize, usize)> = {
            let mut replay: Vec<Vec<usize>> = vec![Vec::new(); 5];
            let mut releases = Vec::new();
            for op in &ops {
                if let Op::Unlink(origin, dest) = *op {
                    if replay[origin].contains(&dest) {
                        releases.push((origin, dest));
                    }
                }
                apply_to_model(&mut replay, op);
            }
            releases
        };
        prop_assert_eq!(&*released.borrow(), &expected_releases);
    }

    #[test]
    fn destinations_stay_duplicate_free(ops in prop::collection::vec(arb_op(4), 0..100)) {
        let mut store: GraphStore<(), ()> = GraphStore::new();
        let handles: Vec<NodeId> = (0..4).map(|_| store.create(())).collect();

        for op in &ops {
            match *op {
                Op::Link(origin, dest) => {
                    let _ = store.link(handles[origin], handles[dest], ());
                }
                Op::Unlink(origin, dest) => {
                    store.unlink(handles[origin], handles[dest]);
                }
            }
        }

        for &handle in &handles {
            let node = store.node(handle).expect("nodes are never destroyed here");
            let mut seen = Vec::new();
            for edge in node.edges() {
                prop_assert_eq!(edge.from(), handle);
                prop_assert!(!seen.contains(&edge.to()), "duplicate destination");
                seen.push(edge.to());
            }
        }
    }
}
