//! Tests for supply infrastructure.

use super::*;

#[test]
fn test_assign_and_lookup() {
    let mut supply: ListStateSupply<usize> = ListStateSupply::with_unassigned(3);

    supply.assign(10, 0, 0);
    supply.assign(11, 0, 1);
    supply.assign(12, 1, 0);

    assert_eq!(supply.inverse_singleton(&11), Some(0));
    assert_eq!(supply.index_of(&11), Some(1));
    assert_eq!(supply.inverse_singleton(&12), Some(1));
    assert_eq!(supply.inverse_singleton(&99), None);
    assert_eq!(supply.index_of(&99), None);
    assert_eq!(supply.unassigned_count(), 0);
    assert_eq!(supply.assigned_count(), 3);
}

#[test]
fn test_from_lists() {
    let lists = vec![vec![4, 5, 6], vec![], vec![7]];
    let supply = ListStateSupply::from_lists(lists);

    assert_eq!(
        supply.get_position(&6),
        Some(ElementPosition {
            entity_idx: 0,
            list_idx: 2
        })
    );
    assert_eq!(supply.inverse_singleton(&7), Some(2));
    assert_eq!(supply.index_of(&7), Some(0));
    assert_eq!(supply.assigned_count(), 4);
}

#[test]
fn test_unassign() {
    let mut supply = ListStateSupply::from_lists(vec![vec![1, 2]]);

    let removed = supply.unassign(&1);
    assert_eq!(
        removed,
        Some(ElementPosition {
            entity_idx: 0,
            list_idx: 0
        })
    );
    assert!(!supply.is_assigned(&1));
    assert_eq!(supply.unassigned_count(), 1);
    assert_eq!(supply.unassign(&1), None);
}

#[test]
fn test_update() {
    let mut supply = ListStateSupply::from_lists(vec![vec![1, 2], vec![3]]);

    assert!(supply.update(&2, 1, 1));
    assert!(!supply.update(&2, 1, 1));
    assert_eq!(supply.inverse_singleton(&2), Some(1));
    assert_eq!(supply.index_of(&2), Some(1));

    // Untracked element gets assigned
    assert!(supply.update(&9, 0, 1));
    assert!(supply.is_assigned(&9));
}

#[test]
fn test_clear_and_initialize() {
    let mut supply = ListStateSupply::from_lists(vec![vec![1, 2, 3]]);

    supply.clear();
    assert_eq!(supply.assigned_count(), 0);
    assert_eq!(supply.unassigned_count(), 3);

    supply.initialize(5);
    assert_eq!(supply.unassigned_count(), 5);
}

#[test]
fn test_state_through_trait_object() {
    let supply = ListStateSupply::from_lists(vec![vec!["a", "b"]]);
    let state: &dyn ListVariableState<&str> = &supply;

    assert_eq!(state.inverse_singleton(&"b"), Some(0));
    assert_eq!(state.index_of(&"b"), Some(1));
}
