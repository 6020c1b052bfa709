use planforge_core::score::{BendableScore, HardMediumSoftScore, SimpleScore};
use planforge_test::init_test_tracing;

use super::{constraint, visits, Visit};
use crate::api::analysis::{ConstraintJustification, EntityRef};
use crate::inliner::{
    BendableScoreInliner, HardMediumSoftScoreInliner, ScoreInliner, SimpleScoreInliner,
};

#[test]
fn test_registers_match_totals() {
    init_test_tracing();
    let mut inliner = HardMediumSoftScoreInliner::new(true);
    let capacity = inliner
        .build_weighted_score_impacter(constraint("Capacity"), HardMediumSoftScore::ONE_HARD)
        .unwrap();
    let distance = inliner
        .build_weighted_score_impacter(constraint("Distance"), HardMediumSoftScore::ONE_SOFT)
        .unwrap();

    let _u1 = capacity.impact_score(&mut inliner, -2, || visits(&[1, 2]));
    let _u2 = distance.impact_score(&mut inliner, -30, || visits(&[1]));
    let _u3 = distance.impact_score(&mut inliner, -12, || visits(&[2]));

    let totals = inliner.constraint_match_totals().unwrap();
    assert_eq!(totals.len(), 2);
    let distance_total = &totals[&constraint("Distance")];
    assert_eq!(distance_total.match_count(), 2);
    assert_eq!(*distance_total.score(), HardMediumSoftScore::of_soft(-42));
    assert_eq!(
        *totals[&constraint("Capacity")].score(),
        HardMediumSoftScore::of_hard(-2)
    );
}

#[test]
fn test_indictments_per_distinct_entity() {
    let mut inliner = SimpleScoreInliner::new(true);
    let impacter = inliner
        .build_weighted_score_impacter(constraint("Overtime"), SimpleScore::ONE)
        .unwrap();

    let _u1 = impacter.impact_score(&mut inliner, -1, || visits(&[7, 7, 8]));
    let _u2 = impacter.impact_score(&mut inliner, -1, || visits(&[7]));

    let indictments = inliner.indictments().unwrap();
    assert_eq!(indictments.len(), 2);
    assert_eq!(indictments[&EntityRef::new(&Visit(7))].match_count(), 2);
    assert_eq!(indictments[&EntityRef::new(&Visit(8))].match_count(), 1);
}

#[test]
fn test_undo_removes_empty_totals_and_indictments() {
    let mut inliner = HardMediumSoftScoreInliner::new(true);
    let impacter = inliner
        .build_weighted_score_impacter(constraint("Capacity"), HardMediumSoftScore::ONE_HARD)
        .unwrap();

    let first = impacter.impact_score(&mut inliner, -1, || visits(&[1]));
    let second = impacter.impact_score(&mut inliner, -1, || visits(&[1, 2]));
    assert!(first.registration().is_some());

    second.undo(&mut inliner);
    assert_eq!(inliner.indictments().unwrap().len(), 1);
    assert_eq!(
        inliner.constraint_match_totals().unwrap()[&constraint("Capacity")].match_count(),
        1
    );

    first.undo(&mut inliner);
    assert!(inliner.constraint_match_totals().unwrap().is_empty());
    assert!(inliner.indictments().unwrap().is_empty());
}

#[test]
fn test_diagnostics_do_not_change_score() {
    let weights = [
        HardMediumSoftScore::ONE_HARD,
        HardMediumSoftScore::of(1, 2, 3),
        HardMediumSoftScore::of_medium(4),
    ];
    let mut plain = HardMediumSoftScoreInliner::new(false);
    let mut traced = HardMediumSoftScoreInliner::new(true);

    let mut plain_undos = Vec::new();
    let mut traced_undos = Vec::new();
    for (i, weight) in weights.iter().enumerate() {
        let name = format!("C{i}");
        let p = plain
            .build_weighted_score_impacter(constraint(&name), *weight)
            .unwrap();
        let t = traced
            .build_weighted_score_impacter(constraint(&name), *weight)
            .unwrap();
        for match_weight in [-3, 1, 5] {
            plain_undos.push(p.impact_score(&mut plain, match_weight, ConstraintJustification::empty));
            traced_undos.push(t.impact_score(&mut traced, match_weight, || visits(&[i])));
            assert_eq!(plain.extract_score(0), traced.extract_score(0));
        }
    }
    while let (Some(p), Some(t)) = (plain_undos.pop(), traced_undos.pop()) {
        p.undo(&mut plain);
        t.undo(&mut traced);
        assert_eq!(plain.extract_score(0), traced.extract_score(0));
    }
    assert_eq!(traced.extract_score(0), HardMediumSoftScore::ZERO);
}

#[test]
fn test_bendable_registers_match_score() {
    let mut inliner = BendableScoreInliner::new(1, 1, true);
    let impacter = inliner
        .build_weighted_score_impacter(constraint("Mixed"), BendableScore::of(vec![1], vec![2]))
        .unwrap();

    let _undo = impacter.impact_score(&mut inliner, -3, || visits(&[4]));
    let totals = inliner.constraint_match_totals().unwrap();
    assert_eq!(
        *totals[&constraint("Mixed")].score(),
        BendableScore::of(vec![-3], vec![-6])
    );
}

#[test]
fn test_explain_score() {
    let mut inliner = HardMediumSoftScoreInliner::new(true);
    let capacity = inliner
        .build_weighted_score_impacter(constraint("Capacity"), HardMediumSoftScore::ONE_HARD)
        .unwrap();
    let distance = inliner
        .build_weighted_score_impacter(constraint("Distance"), HardMediumSoftScore::ONE_SOFT)
        .unwrap();
    let _u1 = capacity.impact_score(&mut inliner, -1, || visits(&[1]));
    let _u2 = distance.impact_score(&mut inliner, -5, || visits(&[1]));

    let explanation = inliner.explain_score(0).unwrap();
    assert_eq!(explanation.score, HardMediumSoftScore::of(-1, 0, -5));
    assert_eq!(explanation.total_match_count(), 2);
    assert_eq!(explanation.non_zero_constraints().len(), 2);
}

#[test]
fn test_custom_justification_reaches_indictments() {
    let mut inliner = SimpleScoreInliner::new(true);
    let overtime = inliner
        .build_weighted_score_impacter(constraint("Overtime"), SimpleScore::ONE)
        .unwrap();
    let late = inliner
        .build_weighted_score_impacter(constraint("Late"), SimpleScore::of(2))
        .unwrap();

    let visit = EntityRef::with_display(&Visit(3), "visit #3".to_string());
    let _u1 = overtime.impact_score(&mut inliner, -1, || {
        ConstraintJustification::with_description(
            vec![visit.clone()],
            "shift ends after 19:00".to_string(),
        )
    });
    let _u2 = late.impact_score(&mut inliner, -1, || {
        ConstraintJustification::new(vec![visit.clone()])
    });

    let indictment = &inliner.indictments().unwrap()[&visit];
    assert_eq!(indictment.entity.display, "visit #3");
    assert_eq!(indictment.score, SimpleScore::of(-3));

    let mut violated = indictment.violated_constraints();
    violated.sort();
    assert_eq!(violated, vec![&constraint("Late"), &constraint("Overtime")]);
    assert_eq!(
        indictment.constraint_matches[&constraint("Overtime")][0]
            .justification
            .description,
        "shift ends after 19:00"
    );
    assert_eq!(
        indictment.constraint_matches[&constraint("Late")][0]
            .justification
            .description,
        "visit #3"
    );
}
