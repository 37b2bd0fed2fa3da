//! Integration tests for task ranking.

use chrono::{Duration, Local, NaiveDate};
use deepwork_core::{args, rank_tasks, PriorityWeights, RankMethod, RankingConfig, Task};
use proptest::prelude::*;
use serde_json::json;

fn march_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

#[test]
fn test_backlog_ranking_workflow() {
    let tasks = vec![
        Task::new("Write docs").with_importance(3).with_effort(4),
        Task::new("Fix prod bug").with_importance(5).with_effort(2).with_deadline("2024-03-10"),
        Task::new("Refactor").with_importance(2).with_effort(5).with_deadline("2024-06-01"),
        Task::new("Review PR").with_importance(4).with_effort(1).with_deadline("2024-03-14"),
    ];
    let config = RankingConfig::new(RankMethod::Weighted).on(march_10());
    let ranked = rank_tasks(&tasks, &config).unwrap();

    let order: Vec<_> = ranked.iter().map(|t| t.task.name.as_str()).collect();
    // 2.5+1.2+1.0 = 4.7, 2.0+1.5+0.6 = 4.1, 1.5+0.6+0.6 = 2.7, 1.0+0.3+0.2 = 1.5
    assert_eq!(order, ["Fix prod bug", "Review PR", "Write docs", "Refactor"]);
    assert_eq!(ranked[0].priority_score, 4.7);
    assert_eq!(ranked[1].priority_score, 4.1);
    assert_eq!(ranked[2].priority_score, 2.7);
    assert_eq!(ranked[3].priority_score, 1.5);
    assert_eq!(ranked.iter().map(|t| t.rank).collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn test_json_ranking_uses_today() {
    let tomorrow = (Local::now().date_naive() + Duration::days(1)).format("%Y-%m-%d").to_string();
    let ranked = args::rank_tasks(&json!({
        "tasks": [
            {"name": "Someday"},
            {"name": "Tomorrow", "deadline": tomorrow, "project": "infra"}
        ],
        "method": "deadline"
    }))
    .unwrap();

    assert_eq!(ranked[0].task.name, "Tomorrow");
    assert_eq!(ranked[0].priority_score, 99.0);
    assert_eq!(ranked[0].days_until_deadline, Some(Some(1)));

    let out = serde_json::to_value(&ranked).unwrap();
    assert_eq!(out[0]["project"], "infra");
    assert_eq!(out[0]["rank"], 1);
    assert_eq!(out[1]["days_until_deadline"], serde_json::Value::Null);
}

#[test]
fn test_weighted_output_has_no_days_column() {
    let ranked = args::rank_tasks(&json!({"tasks": [{"name": "a", "deadline": "2099-01-01"}]})).unwrap();
    let out = serde_json::to_value(&ranked).unwrap();
    assert!(out[0].get("days_until_deadline").is_none());
    assert_eq!(out[0]["deadline"], "2099-01-01");
}

#[test]
fn test_custom_weights_over_json() {
    let ranked = args::rank_tasks(&json!({
        "tasks": [
            {"name": "Easy", "effort": 1, "importance": 1},
            {"name": "Important", "effort": 5, "importance": 5}
        ],
        "weights": {"effort": 1.0, "importance": 0.0, "deadline": 0.0}
    }))
    .unwrap();
    assert_eq!(ranked[0].task.name, "Easy");
    assert_eq!(ranked[0].priority_score, 5.0);
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        "[a-z]{1,8}",
        proptest::option::of(1i64..=5),
        proptest::option::of(1i64..=5),
        proptest::option::of(-30i64..200),
    )
        .prop_map(|(name, effort, importance, offset)| {
            let mut task = Task::new(name);
            task.effort = effort;
            task.importance = importance;
            task.deadline = offset.map(|d| (march_10() + Duration::days(d)).format("%Y-%m-%d").to_string());
            task
        })
}

proptest! {
    #[test]
    fn ranks_are_dense_sorted_and_stable(
        tasks in proptest::collection::vec(task_strategy(), 1..25),
        deadline_method in any::<bool>(),
    ) {
        let method = if deadline_method { RankMethod::Deadline } else { RankMethod::Weighted };
        let config = RankingConfig::new(method)
            .with_weights(PriorityWeights::default())
            .on(march_10());
        let ranked = rank_tasks(&tasks, &config).unwrap();

        prop_assert_eq!(ranked.len(), tasks.len());
        for (i, t) in ranked.iter().enumerate() {
            prop_assert_eq!(t.rank as usize, i + 1);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].priority_score >= pair[1].priority_score);
            if pair[0].priority_score == pair[1].priority_score {
                let first = tasks.iter().position(|t| *t == pair[0].task).unwrap();
                let second = tasks.iter().rposition(|t| *t == pair[1].task).unwrap();
                prop_assert!(first <= second);
            }
        }
    }
}
