use super::*;

#[test]
fn test_parse_array_of_tasks() {
    let text = r#"[
        {
            "id": "t1",
            "title": "Quarterly support review",
            "staffId": "s1",
            "status": "completed",
            "kpis": [
                {"title": "tickets", "targetAmount": 100, "achievedAmount": 120, "operator": "greaterThan"},
                {"title": "escalations", "targetAmount": 5, "achievedAmount": 2, "operator": "lessThan"}
            ]
        }
    ]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.id, "t1");
    assert_eq!(task.title, "Quarterly support review");
    assert_eq!(task.staff_id.as_deref(), Some("s1"));
    assert_eq!(task.status.as_deref(), Some("completed"));
    assert_eq!(task.kpis.len(), 2);
    assert_eq!(task.kpis[0].target_amount, Some(100.0));
    assert_eq!(task.kpis[0].operator, Operator::GreaterThan);
    assert_eq!(task.kpis[1].operator, Operator::LessThan);
}

#[test]
fn test_parse_object_with_tasks_field() {
    let text = r#"{"tasks": [{"id": "t1", "kpis": []}]}"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].kpis.is_empty());
}

#[test]
fn test_numeric_id_and_missing_fields() {
    let text = r#"[{"id": 42}]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks[0].id, "42");
    assert_eq!(tasks[0].title, "");
    assert!(tasks[0].staff_id.is_none());
    assert!(tasks[0].kpis.is_empty());
}

#[test]
fn test_missing_id_gets_positional_fallback() {
    let text = r#"[{"title": "a"}, {"title": "b"}]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks[0].id, "task-0");
    assert_eq!(tasks[1].id, "task-1");
}

#[test]
fn test_non_numeric_amounts_decode_to_none() {
    let text = r#"[{
        "id": "t1",
        "kpis": [
            {"targetAmount": "abc", "achievedAmount": 10, "operator": "greaterThan"},
            {"targetAmount": true, "achievedAmount": null, "operator": "greaterThan"}
        ]
    }]"#;
    let tasks = parse_tasks(text).unwrap();
    let kpis = &tasks[0].kpis;
    assert_eq!(kpis[0].target_amount, None);
    assert_eq!(kpis[0].achieved_amount, Some(10.0));
    assert_eq!(kpis[1].target_amount, None);
    assert_eq!(kpis[1].achieved_amount, None);
}

#[test]
fn test_unrecognized_operator_maps_to_unknown() {
    let text = r#"[{
        "id": "t1",
        "kpis": [{"targetAmount": 10, "achievedAmount": 10, "operator": "equals"}]
    }]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks[0].kpis[0].operator, Operator::Unknown);
}

#[test]
fn test_kpis_not_an_array_degrades_to_empty() {
    let text = r#"[
        {"id": "t1", "kpis": "oops"},
        {"id": "t2", "kpis": null},
        {"id": "t3"}
    ]"#;
    let tasks = parse_tasks(text).unwrap();
    for task in &tasks {
        assert!(task.kpis.is_empty());
    }
}

#[test]
fn test_non_object_entries_are_skipped() {
    let text = r#"[{"id": "t1"}, 7, "nope", null]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_non_object_kpi_entry_counts_as_unscorable() {
    let text = r#"[{"id": "t1", "kpis": [7]}]"#;
    let tasks = parse_tasks(text).unwrap();
    assert_eq!(tasks[0].kpis.len(), 1);
    assert_eq!(tasks[0].kpis[0].target_amount, None);
    assert_eq!(tasks[0].kpis[0].achieved_amount, None);
}

#[test]
fn test_invalid_json_is_a_hard_error() {
    assert!(parse_tasks("not json").is_err());
    assert!(parse_tasks(r#""just a string""#).is_err());
    assert!(parse_tasks(r#"{"no": "tasks"}"#).is_err());
}
