use rust_decimal::Decimal;

use crate::score::*;

#[test]
fn test_parse_and_display() {
    let score = HardMediumSoftDecimalScore::parse("-1.5hard/0medium/-20.25soft").unwrap();
    assert_eq!(score.hard(), Decimal::new(-15, 1));
    assert_eq!(score.medium(), Decimal::ZERO);
    assert_eq!(score.soft(), Decimal::new(-2025, 2));
    assert_eq!(format!("{}", score), "-1.5hard/0medium/-20.25soft");
}

#[test]
fn test_arithmetic_is_exact() {
    let tenth = HardMediumSoftDecimalScore::of(Decimal::ZERO, Decimal::ZERO, Decimal::new(1, 1));
    let mut total = HardMediumSoftDecimalScore::ZERO;
    for _ in 0..10 {
        total = total + tenth;
    }
    assert_eq!(total.soft(), Decimal::ONE);
}

#[test]
fn test_feasibility() {
    let feasible = HardMediumSoftDecimalScore::of(Decimal::ZERO, Decimal::new(-1, 0), Decimal::ZERO);
    let infeasible =
        HardMediumSoftDecimalScore::of(Decimal::new(-1, 2), Decimal::ZERO, Decimal::ZERO);
    assert!(feasible.is_feasible());
    assert!(!infeasible.is_feasible());
    assert!(infeasible.has_negative_level());
}

#[test]
fn test_bendable_decimal_parse() {
    let score = BendableDecimalScore::parse("-1init/[0/-1.5]hard/[-2.25]soft").unwrap();
    assert_eq!(score.init_score(), -1);
    assert_eq!(score.hard_scores(), &[Decimal::ZERO, Decimal::new(-15, 1)]);
    assert_eq!(score.soft_scores(), &[Decimal::new(-225, 2)]);
    assert_eq!(format!("{}", score), "-1init/[0/-1.5]hard/[-2.25]soft");
}

#[test]
fn test_hard_medium_soft_single_level_constructors() {
    assert_eq!(
        HardMediumSoftLongScore::of_hard(-4),
        HardMediumSoftLongScore::of(-4, 0, 0)
    );
    assert_eq!(
        HardMediumSoftLongScore::of_medium(5_000_000_000),
        HardMediumSoftLongScore::of(0, 5_000_000_000, 0)
    );
    assert_eq!(HardMediumSoftLongScore::of_soft(1), HardMediumSoftLongScore::ONE_SOFT);

    let half = Decimal::new(5, 1);
    assert_eq!(
        HardMediumSoftDecimalScore::of_soft(half),
        HardMediumSoftDecimalScore::of(Decimal::ZERO, Decimal::ZERO, half)
    );
    assert_eq!(HardMediumSoftDecimalScore::of_hard(half).hard(), half);
    assert_eq!(HardMediumSoftDecimalScore::of_medium(half).medium(), half);
}

#[test]
fn test_level_arithmetic() {
    assert_eq!(i64::MAX.level_add(1), i64::MIN);
    assert_eq!(i64::MIN.level_sub(1), i64::MAX);
    assert_eq!(i32::MAX.level_mul(2), -2);
    assert_eq!(
        Decimal::new(15, 1).level_mul(Decimal::new(-2, 0)),
        Decimal::new(-3, 0)
    );
}
