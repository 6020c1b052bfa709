use crate::score::*;

#[test]
fn test_creation() {
    let score = SimpleScore::of(-5);
    assert_eq!(score.score(), -5);
    assert_eq!(score.init_score(), 0);
    assert_eq!(SimpleScore::ONE, SimpleScore::of(1));
}

#[test]
fn test_feasibility() {
    assert!(SimpleScore::of(0).is_feasible());
    assert!(SimpleScore::of(10).is_feasible());
    assert!(!SimpleScore::of(-1).is_feasible());
    assert!(!SimpleScore::of_uninitialized(-1, 10).is_feasible());
}

#[test]
fn test_comparison() {
    let s1 = SimpleScore::of(-10);
    let s2 = SimpleScore::of(-5);
    let s3 = SimpleScore::of(0);

    assert!(s3 > s2);
    assert!(s2 > s1);
    assert!(s3.is_better_than(&s2));
    assert!(s1.is_worse_than(&s2));

    // Init score dominates every level
    let uninitialized = SimpleScore::of_uninitialized(-1, 100);
    assert!(s1 > uninitialized);
}

#[test]
fn test_arithmetic() {
    let s1 = SimpleScore::of(10);
    let s2 = SimpleScore::of(3);

    assert_eq!(s1 + s2, SimpleScore::of(13));
    assert_eq!(s1 - s2, SimpleScore::of(7));
    assert_eq!(-s1, SimpleScore::of(-10));
    assert_eq!(SimpleScore::of(-4).abs(), SimpleScore::of(4));
}

#[test]
fn test_parse() {
    assert_eq!(SimpleScore::parse("42").unwrap(), SimpleScore::of(42));
    assert_eq!(SimpleScore::parse("-10").unwrap(), SimpleScore::of(-10));
    assert_eq!(
        SimpleScore::parse("-3init/-10").unwrap(),
        SimpleScore::of_uninitialized(-3, -10)
    );
    assert!(SimpleScore::parse("abc").is_err());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", SimpleScore::of(-7)), "-7");
    assert_eq!(format!("{}", SimpleScore::of_uninitialized(-2, -7)), "-2init/-7");
}

#[test]
fn test_shape() {
    let score = SimpleScore::of(3);
    assert_eq!(score.levels_count(), 1);
    assert_eq!(score.level_label(0), ScoreLevel::Hard);
    assert_eq!(score.zeroed(), SimpleScore::ZERO);
    assert!(SimpleScore::ZERO.is_zero());
    assert!(SimpleScore::of(-1).has_negative_level());
}
