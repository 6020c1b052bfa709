use planforge_config::{EngineConfig, ScoreConfig, ScoreType};
use planforge_core::score::{BendableLongScore, HardMediumSoftScore, SimpleScore};
use planforge_core::PlanforgeError;

use super::constraint;
use crate::api::analysis::ConstraintJustification;
use crate::api::weight_overrides::{ConstraintWeightOverrides, WeightProvider};
use crate::error::ScoreInlinerError;
use crate::inliner::{
    BendableLongScoreInliner, HardMediumSoftDecimalScoreInliner, HardMediumSoftScoreInliner,
    HardMediumSoftWeight, ScoreInliner, SimpleScoreInliner,
};

#[test]
fn test_session_from_toml() {
    let config = EngineConfig::from_toml_str(
        r#"
        [score]
        score_type = "hard_medium_soft"
        constraint_match_enabled = true

        [score.constraint_weights]
        "routing/Distance" = "0hard/0medium/3soft"
        "#,
    )
    .unwrap();

    let mut inliner = HardMediumSoftScoreInliner::from_config(&config.score).unwrap();
    let overrides =
        ConstraintWeightOverrides::<HardMediumSoftScore>::from_config(&config.score).unwrap();
    assert!(inliner.constraint_match_enabled());
    assert_eq!(overrides.weight("routing/Distance"), Some(HardMediumSoftScore::of_soft(3)));

    let distance = inliner
        .build_weighted_score_impacter_with_overrides(
            constraint("Distance"),
            HardMediumSoftScore::ONE_SOFT,
            &overrides,
        )
        .unwrap();
    assert_eq!(*distance.weight(), HardMediumSoftWeight::Soft(3));

    let undo = distance.impact_score(&mut inliner, -2, ConstraintJustification::empty);
    assert_eq!(inliner.extract_score(0), HardMediumSoftScore::of_soft(-6));
    assert_eq!(inliner.constraint_match_totals().map(|t| t.len()), Some(1));
    undo.undo(&mut inliner);
}

#[test]
fn test_bendable_levels_from_config() {
    let config = ScoreConfig::new(ScoreType::BendableLong).with_bendable_levels(2, 3);
    let mut inliner = BendableLongScoreInliner::from_config(&config).unwrap();
    assert_eq!(inliner.hard_levels_count(), 2);
    assert_eq!(inliner.soft_levels_count(), 3);
    assert!(!inliner.constraint_match_enabled());

    let impacter = inliner
        .build_weighted_score_impacter(
            constraint("Capacity"),
            BendableLongScore::of_hard(2, 3, 1, 4),
        )
        .unwrap();
    let _undo = impacter.impact_score(&mut inliner, -1, ConstraintJustification::empty);
    assert_eq!(inliner.extract_score(0).hard_score(1), -4);
}

#[test]
fn test_rejects_other_score_type() {
    let config = ScoreConfig::new(ScoreType::HardMediumSoft);

    assert!(matches!(
        SimpleScoreInliner::from_config(&config),
        Err(ScoreInlinerError::InvalidConfig(_))
    ));
    assert!(matches!(
        HardMediumSoftDecimalScoreInliner::from_config(&config),
        Err(ScoreInlinerError::InvalidConfig(_))
    ));
    assert!(matches!(
        ConstraintWeightOverrides::<SimpleScore>::from_config(&config),
        Err(ScoreInlinerError::InvalidConfig(_))
    ));
}

#[test]
fn test_rejects_bendable_without_levels() {
    let config = ScoreConfig::new(ScoreType::BendableLong);
    let err = BendableLongScoreInliner::from_config(&config).unwrap_err();

    assert!(matches!(err, ScoreInlinerError::InvalidConfig(_)));
    let converted: PlanforgeError = err.into();
    assert!(matches!(converted, PlanforgeError::ScoreCalculation(_)));
}

#[test]
fn test_rejects_unparseable_weight() {
    let config =
        ScoreConfig::new(ScoreType::Simple).with_constraint_weight("routing/Overtime", "two");
    let result = ConstraintWeightOverrides::<SimpleScore>::from_config(&config);
    assert!(matches!(result, Err(ScoreInlinerError::InvalidConfig(_))));

    let config =
        ScoreConfig::new(ScoreType::Simple).with_constraint_weight("routing/Overtime", "2");
    let overrides = ConstraintWeightOverrides::<SimpleScore>::from_config(&config).unwrap();
    assert_eq!(overrides.weight("routing/Overtime"), Some(SimpleScore::of(2)));
}
