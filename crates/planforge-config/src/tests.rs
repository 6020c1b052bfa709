//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [score]
        score_type = "bendable_long"
        constraint_match_enabled = true
        bendable_hard_levels = 2
        bendable_soft_levels = 1

        [sub_list_selector]
        minimum_sub_list_size = 2
        maximum_sub_list_size = 5

        [destination_selector]
        selection_order = "random"
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.score.score_type, ScoreType::BendableLong);
    assert!(config.score.constraint_match_enabled);
    assert_eq!(config.score.bendable_levels(), Some((2, 1)));
    assert_eq!(config.sub_list_selector.minimum_sub_list_size, 2);
    assert_eq!(config.sub_list_selector.maximum_sub_list_size, 5);
    assert!(config.destination_selector.selection_order.is_random());
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        score:
          score_type: simple
        sub_list_selector:
          maximum_sub_list_size: 3
        destination_selector:
          selection_order: original
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.score.score_type, ScoreType::Simple);
    assert_eq!(config.sub_list_selector.minimum_sub_list_size, 1);
    assert_eq!(config.sub_list_selector.maximum_sub_list_size, 3);
    assert_eq!(
        config.destination_selector.selection_order,
        SelectionOrder::Original
    );
}

#[test]
fn test_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.random_seed, None);
    assert_eq!(config.score.score_type, ScoreType::HardMediumSoft);
    assert!(!config.score.constraint_match_enabled);
    assert_eq!(config.sub_list_selector.minimum_sub_list_size, 1);
    assert_eq!(config.sub_list_selector.maximum_sub_list_size, usize::MAX);
    assert_eq!(
        config.destination_selector.selection_order,
        SelectionOrder::Inherit
    );
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_random_seed(123)
        .with_sub_list_sizes(1, 3)
        .with_score(ScoreConfig::new(ScoreType::Bendable).with_bendable_levels(1, 2));

    assert_eq!(config.random_seed, Some(123));
    assert!(config.validate().is_ok());
}

#[test]
fn test_sub_list_sizes_validation() {
    let zero = SubListSelectorConfig {
        minimum_sub_list_size: 0,
        maximum_sub_list_size: 3,
    };
    assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

    let inverted = SubListSelectorConfig {
        minimum_sub_list_size: 4,
        maximum_sub_list_size: 3,
    };
    assert!(inverted.validate().is_err());
    assert!(SubListSelectorConfig::default().validate().is_ok());
}

#[test]
fn test_bendable_levels_validation() {
    let missing = ScoreConfig::new(ScoreType::BendableDecimal);
    assert!(missing.validate().is_err());

    let unexpected = ScoreConfig::new(ScoreType::Simple).with_bendable_levels(1, 1);
    assert!(unexpected.validate().is_err());
}

#[test]
fn test_selection_order_resolve() {
    assert_eq!(
        SelectionOrder::Inherit.resolve(SelectionOrder::Inherit),
        SelectionOrder::Random
    );
    assert_eq!(
        SelectionOrder::Inherit.resolve(SelectionOrder::Original),
        SelectionOrder::Original
    );
    assert_eq!(
        SelectionOrder::Original.resolve(SelectionOrder::Random),
        SelectionOrder::Original
    );
    assert_eq!(SelectionOrder::from_random_selection(false), SelectionOrder::Original);
}

#[test]
fn test_constraint_weight_pairs() {
    let config = EngineConfig::from_toml_str(
        r#"
        [score.constraint_weights]
        "routing/Distance" = "0hard/0medium/2soft"
        "routing/Capacity" = "1hard/0medium/0soft"
        "#,
    )
    .unwrap();

    let pairs: Vec<(&str, &str)> = config.score.constraint_weight_pairs().collect();
    assert_eq!(
        pairs,
        vec![
            ("routing/Capacity", "1hard/0medium/0soft"),
            ("routing/Distance", "0hard/0medium/2soft"),
        ]
    );
}

#[test]
fn test_config_error_converts() {
    let err = EngineConfig::from_toml_str("random_seed = \"x\"").unwrap_err();
    let converted: planforge_core::PlanforgeError = err.into();
    assert!(matches!(converted, planforge_core::PlanforgeError::Config(_)));
}
