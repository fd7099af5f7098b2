use commit_layout::{estimate, size_padded, Fanout, LayoutError};
use proptest::prelude::*;

#[test]
fn million_leaves_quaternary() {
    let layout = size_padded(1_000_000, 4).expect("layout");
    assert_eq!(layout.height, 10);
    assert_eq!(layout.full_leaves, 1_048_576);
    assert_eq!(layout.padding_leaves, 48_576);
    assert_eq!(layout.leaf_nodes, 1_048_576);
    assert_eq!(layout.total_nodes, 1_398_101);
    assert_eq!(layout.internal_nodes, 349_525);
}

#[test]
fn exact_powers_do_not_round_up() {
    for (leaves, arity, height) in [(1u64 << 20, 2u64, 20u32), (1000, 10, 3), (125, 5, 3)] {
        let layout = size_padded(leaves, arity).expect("layout");
        assert_eq!(layout.height, height, "leaves={leaves} arity={arity}");
        assert_eq!(layout.padding_leaves, 0);
    }
}

#[test]
fn padding_is_not_the_exact_layout() {
    let padded = size_padded(5, 2).expect("padded");
    let exact = estimate(5, Fanout::Binary).expect("exact");
    assert_eq!(padded.height, exact.height);
    assert_eq!(padded.total_nodes, 15);
    assert_eq!(exact.total_nodes, 5 + 3 + 2 + 1);
}

#[test]
fn json_field_names() {
    let layout = size_padded(6, 2).expect("layout");
    let value = serde_json::to_value(layout).expect("json");
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "arity",
            "fullLeaves",
            "height",
            "internalNodes",
            "leafNodes",
            "leaves",
            "paddingLeaves",
            "totalNodes"
        ]
    );
}

#[test]
fn invalid_inputs() {
    assert!(matches!(size_padded(0, 4), Err(LayoutError::InvalidInput(_))));
    assert!(matches!(size_padded(8, 0), Err(LayoutError::InvalidInput(_))));
    assert!(matches!(size_padded(8, 1), Err(LayoutError::InvalidInput(_))));
}

proptest! {
    #[test]
    fn padded_layout_invariants(leaves in 1u64..=1_000_000_000, arity in 2u64..=64) {
        let layout = size_padded(leaves, arity).unwrap();
        prop_assert!(layout.full_leaves >= leaves);
        prop_assert_eq!(layout.padding_leaves, layout.full_leaves - leaves);
        prop_assert_eq!(layout.total_nodes, layout.internal_nodes + layout.leaf_nodes);
        prop_assert_eq!(layout.full_leaves, arity.pow(layout.height));
        if layout.height > 0 {
            prop_assert!(arity.pow(layout.height - 1) < leaves);
        }
        let series: u64 = (0..=layout.height).map(|level| arity.pow(level)).sum();
        prop_assert_eq!(layout.total_nodes, series);
    }

    #[test]
    fn both_formulations_share_the_height(leaves in 1u64..=10_000_000) {
        for fanout in Fanout::ALL {
            let exact = estimate(leaves, fanout).unwrap();
            let padded = size_padded(leaves, fanout.as_u64()).unwrap();
            prop_assert_eq!(exact.height, padded.height);
            prop_assert!(exact.total_nodes <= padded.total_nodes);
        }
    }
}
