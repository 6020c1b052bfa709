//! Tests for runtime constraint weight overrides.

use std::sync::Arc;

use planforge_core::score::{BendableScore, HardMediumSoftScore, SimpleScore};
use planforge_core::ConstraintRef;

use crate::api::weight_overrides::{ConstraintWeightOverrides, WeightProvider};

#[test]
fn test_new_is_empty() {
    let overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    assert!(overrides.is_empty());
    assert_eq!(overrides.len(), 0);
}

#[test]
fn test_put_and_get() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put("test", SimpleScore::of(5));

    assert!(overrides.contains("test"));
    assert_eq!(overrides.get("test"), Some(&SimpleScore::of(5)));
}

#[test]
fn test_put_ref_uses_full_name() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put_ref(&ConstraintRef::new("routing", "Distance"), SimpleScore::of(2));

    assert!(overrides.contains("routing/Distance"));
    assert!(!overrides.contains("Distance"));
}

#[test]
fn test_get_or_default() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put("test", SimpleScore::of(5));

    assert_eq!(
        overrides.get_or_default("test", SimpleScore::of(1)),
        SimpleScore::of(5)
    );
    assert_eq!(
        overrides.get_or_default("other", SimpleScore::of(1)),
        SimpleScore::of(1)
    );
}

#[test]
fn test_remove_and_clear() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put("a", SimpleScore::of(5));
    overrides.put("b", SimpleScore::of(6));

    assert_eq!(overrides.remove("a"), Some(SimpleScore::of(5)));
    assert!(!overrides.contains("a"));

    overrides.clear();
    assert!(overrides.is_empty());
}

#[test]
fn test_from_pairs() {
    let overrides = ConstraintWeightOverrides::<HardMediumSoftScore>::from_pairs([
        ("hard_constraint", HardMediumSoftScore::of_hard(1)),
        ("soft_constraint", HardMediumSoftScore::of_soft(10)),
    ]);

    assert_eq!(overrides.len(), 2);
    assert_eq!(
        overrides.get("soft_constraint"),
        Some(&HardMediumSoftScore::of_soft(10))
    );
}

#[test]
fn test_parse_pairs() {
    let overrides = ConstraintWeightOverrides::<BendableScore>::parse_pairs([
        ("capacity", "[1/0]hard/[0]soft"),
        ("distance", "[0/0]hard/[3]soft"),
    ])
    .unwrap();

    assert_eq!(
        overrides.get("distance"),
        Some(&BendableScore::of(vec![0, 0], vec![3]))
    );

    let bad = ConstraintWeightOverrides::<BendableScore>::parse_pairs([("x", "1hard")]);
    assert!(bad.is_err());
}

#[test]
fn test_weight_provider_trait() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put("test", SimpleScore::of(5));

    let provider: &dyn WeightProvider<SimpleScore> = &overrides;
    assert_eq!(provider.weight("test"), Some(SimpleScore::of(5)));
    assert_eq!(provider.weight("other"), None);
    assert_eq!(
        provider.weight_or_default("other", SimpleScore::of(1)),
        SimpleScore::of(1)
    );
}

#[test]
fn test_arc_weight_provider() {
    let mut overrides = ConstraintWeightOverrides::<SimpleScore>::new();
    overrides.put("test", SimpleScore::of(5));
    let arc_overrides: Arc<ConstraintWeightOverrides<SimpleScore>> = overrides.into_arc();

    let provider: &dyn WeightProvider<SimpleScore> = &arc_overrides;
    assert_eq!(provider.weight("test"), Some(SimpleScore::of(5)));
}
