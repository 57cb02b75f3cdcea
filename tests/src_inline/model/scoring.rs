use super::*;

fn raw(target: f64, achieved: f64, operator: Operator) -> RawKpi {
    RawKpi {
        title: None,
        target_amount: Some(target),
        achieved_amount: Some(achieved),
        operator,
    }
}

#[test]
fn test_mixed_operators_rounded_average() {
    let kpis = vec![
        raw(100.0, 120.0, Operator::GreaterThan),
        raw(50.0, 40.0, Operator::LessThan),
        raw(10.0, 12.0, Operator::LessThan),
    ];
    // 100, 100, 80 -> 280 / 3 = 93.33 -> 93
    assert_eq!(calculate_task_score(&kpis), 93);
}

#[test]
fn test_all_targets_met() {
    let kpis = vec![
        raw(1000.0, 1200.0, Operator::GreaterThan),
        raw(5.0, 2.0, Operator::LessThan),
    ];
    assert_eq!(calculate_task_score(&kpis), 100);
}

#[test]
fn test_underachievement_and_overshoot() {
    let kpis = vec![
        raw(100.0, 50.0, Operator::GreaterThan),
        raw(10.0, 20.0, Operator::LessThan),
    ];
    // 50, 0 -> 25
    assert_eq!(calculate_task_score(&kpis), 25);
}

#[test]
fn test_zero_target_is_full_marks() {
    let kpis = vec![raw(0.0, 10.0, Operator::GreaterThan)];
    assert_eq!(calculate_task_score(&kpis), 100);

    // Operator is irrelevant once the target is zero.
    assert_eq!(
        calculate_task_score(&[raw(0.0, 10.0, Operator::LessThan)]),
        100
    );
    assert_eq!(
        calculate_task_score(&[raw(0.0, 10.0, Operator::Unknown)]),
        100
    );
}

#[test]
fn test_empty_list_scores_zero() {
    assert_eq!(calculate_task_score(&[]), 0);
}

#[test]
fn test_non_numeric_entries_are_skipped() {
    // A "target" that was not a number on the wire decodes to None.
    let kpis = vec![RawKpi {
        title: Some("quality".to_string()),
        target_amount: None,
        achieved_amount: Some(10.0),
        operator: Operator::GreaterThan,
    }];
    assert_eq!(calculate_task_score(&kpis), 0);
}

#[test]
fn test_invalid_entries_do_not_dilute_average() {
    let kpis = vec![
        raw(100.0, 100.0, Operator::GreaterThan),
        RawKpi::default(),
    ];
    // The invalid entry leaves both numerator and denominator.
    assert_eq!(calculate_task_score(&kpis), 100);
}

#[test]
fn test_unknown_operator_counts_toward_denominator() {
    let kpis = vec![
        raw(100.0, 100.0, Operator::GreaterThan),
        raw(100.0, 100.0, Operator::Unknown),
    ];
    assert_eq!(calculate_task_score(&kpis), 50);
}

#[test]
fn test_unknown_operator_excluded_under_policy() {
    let kpis = vec![
        raw(100.0, 100.0, Operator::GreaterThan),
        raw(100.0, 100.0, Operator::Unknown),
    ];
    assert_eq!(
        calculate_task_score_with(&kpis, UnknownOperatorPolicy::Exclude),
        100
    );
    // All entries excluded -> nothing to average.
    assert_eq!(
        calculate_task_score_with(
            &[raw(100.0, 100.0, Operator::Unknown)],
            UnknownOperatorPolicy::Exclude
        ),
        0
    );
}

#[test]
fn test_rounding_half_up() {
    let kpis = vec![
        raw(100.0, 25.0, Operator::GreaterThan),
        raw(100.0, 50.0, Operator::GreaterThan),
    ];
    // (25 + 50) / 2 = 37.5 -> 38
    assert_eq!(calculate_task_score(&kpis), 38);
}

#[test]
fn test_greater_than_monotonic_and_saturating() {
    let mut prev = -1.0;
    for achieved in [0.0, 10.0, 50.0, 99.0, 100.0, 150.0, 1000.0] {
        let score = kpi_score(&KpiRecord {
            target: 100.0,
            achieved,
            operator: Operator::GreaterThan,
        });
        assert!(score >= prev);
        prev = score;
    }
    assert_eq!(prev, 100.0);
    let at_target = kpi_score(&KpiRecord {
        target: 100.0,
        achieved: 100.0,
        operator: Operator::GreaterThan,
    });
    assert_eq!(at_target, 100.0);
}

#[test]
fn test_less_than_full_marks_up_to_target_then_decreasing() {
    for achieved in [0.0, 5.0, 10.0] {
        let score = kpi_score(&KpiRecord {
            target: 10.0,
            achieved,
            operator: Operator::LessThan,
        });
        assert_eq!(score, 100.0);
    }
    let mut prev = 100.0;
    for achieved in [11.0, 12.0, 15.0, 19.0] {
        let score = kpi_score(&KpiRecord {
            target: 10.0,
            achieved,
            operator: Operator::LessThan,
        });
        assert!(score < prev);
        prev = score;
    }
    // 100% overshoot floors at 0 and stays there.
    for achieved in [20.0, 50.0] {
        let score = kpi_score(&KpiRecord {
            target: 10.0,
            achieved,
            operator: Operator::LessThan,
        });
        assert_eq!(score, 0.0);
    }
}

#[test]
fn test_negative_achieved_clamps_to_zero() {
    let score = kpi_score(&KpiRecord {
        target: 100.0,
        achieved: -50.0,
        operator: Operator::GreaterThan,
    });
    assert_eq!(score, 0.0);
}

#[test]
fn test_scores_always_in_range() {
    let cases = [
        (100.0, -1000.0, Operator::GreaterThan),
        (-100.0, 50.0, Operator::GreaterThan),
        (-10.0, 100.0, Operator::LessThan),
        (1.0, 1e9, Operator::LessThan),
        (5.0, 3.0, Operator::Unknown),
    ];
    for (target, achieved, operator) in cases {
        let score = kpi_score(&KpiRecord {
            target,
            achieved,
            operator,
        });
        assert!((0.0..=100.0).contains(&score), "out of range: {score}");
    }
}

#[test]
fn test_mean_score_empty() {
    assert_eq!(mean_score(&[]), 0);
}

#[test]
fn test_clamp100_bounds() {
    assert_eq!(clamp100(-5.0), 0.0);
    assert_eq!(clamp100(42.5), 42.5);
    assert_eq!(clamp100(250.0), 100.0);
}
