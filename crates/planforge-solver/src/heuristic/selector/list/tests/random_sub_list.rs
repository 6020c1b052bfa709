use std::collections::HashMap;

use planforge_config::SubListSelectorConfig;
use planforge_test::init_test_tracing;
use planforge_test::routing::RoutingSolution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{entities, values};
use crate::error::ListSelectorError;
use crate::heuristic::selector::list::{ListSelector, RandomSubListSelector, SubList};

fn selector(min: usize, max: usize) -> RandomSubListSelector<RoutingSolution, usize> {
    RandomSubListSelector::new(entities(), values(), min, max).unwrap()
}

#[test]
fn test_size_sums_triangles() {
    let solution = RoutingSolution::with_route_lengths(&[3, 5]);
    assert_eq!(selector(1, usize::MAX).size(&solution).unwrap(), 6 + 15);
}

#[test]
fn test_size_with_bounds() {
    let solution = RoutingSolution::with_route_lengths(&[1, 3, 5]);
    // min 2: T(2) + T(4); max 3 removes T(2) from the list of 5
    assert_eq!(selector(2, 3).size(&solution).unwrap(), 3 + 10 - 3);
    assert_eq!(selector(6, 6).size(&solution).unwrap(), 0);
}

#[test]
fn test_flags() {
    let selector = selector(1, 4);
    assert!(selector.is_countable());
    assert!(selector.is_never_ending());
    assert_eq!(selector.minimum_sub_list_size(), 1);
    assert_eq!(selector.maximum_sub_list_size(), 4);
}

#[test]
fn test_rejects_invalid_bounds() {
    let result = RandomSubListSelector::new(entities(), values(), 0, 2);
    assert!(matches!(result, Err(ListSelectorError::InvalidArgument(_))));

    let config = SubListSelectorConfig {
        minimum_sub_list_size: 3,
        maximum_sub_list_size: 2,
    };
    assert!(RandomSubListSelector::from_config(&config, entities(), values()).is_err());
}

#[test]
fn test_draws_are_valid_and_never_end() {
    init_test_tracing();
    let solution = RoutingSolution::with_route_lengths(&[4, 0, 1, 6]);
    let supply = solution.build_list_state();
    let selector = selector(2, 3);
    let mut rng = StdRng::seed_from_u64(11);

    let drawn: Vec<SubList> = selector
        .iter(&solution, &supply, &mut rng)
        .take(2_000)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(drawn.len(), 2_000);
    for sub_list in drawn {
        let len = solution.vehicles[sub_list.entity_index].visits.len();
        assert!(len >= 2, "drew from a list shorter than the minimum");
        assert!((2..=3).contains(&sub_list.length));
        assert!(sub_list.to_index() <= len);
    }
}

#[test]
fn test_entities_picked_proportionally_to_length() {
    let solution = RoutingSolution::with_route_lengths(&[2, 6]);
    let supply = solution.build_list_state();
    let selector = selector(1, usize::MAX);
    let mut rng = StdRng::seed_from_u64(5);

    let mut per_entity: HashMap<usize, usize> = HashMap::new();
    let draws = 40_000;
    for _ in 0..draws {
        let sub_list = selector.next_sub_list(&solution, &supply, &mut rng).unwrap();
        *per_entity.entry(sub_list.entity_index).or_default() += 1;
    }

    let share = per_entity[&1] as f64 / draws as f64;
    assert!((share - 0.75).abs() < 0.02, "long list share was {share}");
}

#[test]
fn test_iter_is_empty_when_no_list_is_long_enough() {
    init_test_tracing();
    let solution = RoutingSolution::with_route_lengths(&[1, 2]);
    let supply = solution.build_list_state();
    let selector = selector(3, 5);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(selector.iter(&solution, &supply, &mut rng).count(), 0);
}

#[test]
fn test_reads_live_state() {
    let mut solution = RoutingSolution::with_route_lengths(&[3, 1]);
    let selector = selector(2, 2);
    let mut rng = StdRng::seed_from_u64(9);

    solution.move_sub_list(0, 0, 2, 1, 1);
    let supply = solution.build_list_state();
    for _ in 0..200 {
        let sub_list = selector.next_sub_list(&solution, &supply, &mut rng).unwrap();
        assert_eq!(sub_list.entity_index, 1);
    }
}

#[test]
fn test_unassigned_value_is_illegal_state() {
    let solution = RoutingSolution::with_visit_count(vec![vec![0, 1]], 50);
    let supply = solution.build_list_state();
    let selector = selector(1, 2);
    let mut rng = StdRng::seed_from_u64(2);

    let result = (0..100)
        .map(|_| selector.next_sub_list(&solution, &supply, &mut rng))
        .find(Result::is_err);
    assert!(matches!(result, Some(Err(ListSelectorError::IllegalState(_)))));
}

#[test]
fn test_empty_value_range_is_illegal_state() {
    let solution = RoutingSolution::default();
    let supply = solution.build_list_state();
    let mut rng = StdRng::seed_from_u64(2);

    let result = selector(1, 1).next_sub_list(&solution, &supply, &mut rng);
    assert!(matches!(result, Err(ListSelectorError::IllegalState(_))));
}

#[test]
fn test_keeps_drawing_when_one_long_list_is_rare() {
    // Each draw hits the long list with probability 2 / 200_002, so a
    // single call routinely rejects more than `MAX_REJECTED_DRAWS` draws.
    let mut lengths = vec![1; 200_000];
    lengths.push(2);
    let solution = RoutingSolution::with_route_lengths(&lengths);
    let supply = solution.build_list_state();
    let selector = selector(2, 2);
    let mut rng = StdRng::seed_from_u64(17);
    assert_eq!(selector.size(&solution), Ok(1));

    for _ in 0..4 {
        let sub_list = selector.next_sub_list(&solution, &supply, &mut rng).unwrap();
        assert_eq!(sub_list, SubList::new(200_000, 0, 2));
    }
}

#[test]
fn test_no_list_long_enough_is_illegal_state() {
    init_test_tracing();
    let solution = RoutingSolution::with_route_lengths(&[1, 1, 1]);
    let supply = solution.build_list_state();
    let mut rng = StdRng::seed_from_u64(3);

    let result = selector(2, 4).next_sub_list(&solution, &supply, &mut rng);
    assert!(matches!(result, Err(ListSelectorError::IllegalState(_))));
}
