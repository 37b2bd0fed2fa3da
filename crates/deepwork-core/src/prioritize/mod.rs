//! Task ranking.
//!
//! Scores every task under one of two methods and returns the tasks sorted
//! by descending score with 1-based ranks:
//! - `weighted`: importance, inverted effort and deadline urgency, each on a
//!   1-5 scale, combined with configurable weights
//! - `deadline`: `100 - days until deadline`, floored at zero
//!
//! Ties keep their input order.

mod task;

pub use task::{RankedTask, Task, DEFAULT_EFFORT, DEFAULT_IMPORTANCE};

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::round2;
use crate::error::ValidationError;

/// Date format accepted for task deadlines.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Deadline score used when a task has no usable deadline.
const NEUTRAL_DEADLINE_SCORE: f64 = 3.0;

/// Scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMethod {
    #[default]
    Weighted,
    Deadline,
}

impl RankMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RankMethod::Weighted => "weighted",
            RankMethod::Deadline => "deadline",
        }
    }
}

impl std::fmt::Display for RankMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(RankMethod::Weighted),
            "deadline" => Ok(RankMethod::Deadline),
            other => Err(ValidationError::invalid_value(
                "method",
                format!("Invalid method '{other}'. Must be one of: weighted, deadline"),
            )),
        }
    }
}

/// Weights for the `weighted` method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight for user importance (default 0.5)
    #[serde(default = "default_importance_weight")]
    pub importance: f64,
    /// Weight for inverted effort (default 0.3)
    #[serde(default = "default_effort_weight")]
    pub effort: f64,
    /// Weight for deadline urgency (default 0.2)
    #[serde(default = "default_deadline_weight")]
    pub deadline: f64,
}

fn default_importance_weight() -> f64 {
    0.5
}
fn default_effort_weight() -> f64 {
    0.3
}
fn default_deadline_weight() -> f64 {
    0.2
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            importance: default_importance_weight(),
            effort: default_effort_weight(),
            deadline: default_deadline_weight(),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    pub method: RankMethod,
    pub weights: PriorityWeights,
    /// Reference date for deadline calculations
    pub today: NaiveDate,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            method: RankMethod::default(),
            weights: PriorityWeights::default(),
            today: Local::now().date_naive(),
        }
    }
}

impl RankingConfig {
    pub fn new(method: RankMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: PriorityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// Rank tasks by priority.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] for an empty task list or an
/// effort/importance outside 1-5.
pub fn rank_tasks(tasks: &[Task], config: &RankingConfig) -> Result<Vec<RankedTask>, ValidationError> {
    if tasks.is_empty() {
        return Err(ValidationError::invalid_value("tasks", "tasks list cannot be empty"));
    }
    for (index, task) in tasks.iter().enumerate() {
        task.validate(index)?;
    }

    let mut ranked: Vec<RankedTask> = tasks
        .iter()
        .map(|task| match config.method {
            RankMethod::Weighted => RankedTask::new(task.clone(), weighted_score(task, config), None),
            RankMethod::Deadline => {
                let days_left = days_until(task, config.today);
                let score = days_left.map_or(0.0, |days| (100 - days).max(0) as f64);
                RankedTask::new(task.clone(), score, Some(days_left))
            }
        })
        .collect();

    // sort_by is stable, so equal scores keep input order
    ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    for (index, task) in ranked.iter_mut().enumerate() {
        task.rank = index as u32 + 1;
    }

    debug!(
        method = %config.method,
        tasks = ranked.len(),
        top = %ranked[0].task.name,
        "ranked tasks"
    );
    Ok(ranked)
}

/// Weighted priority of a single task, rounded to two decimals.
pub fn weighted_score(task: &Task, config: &RankingConfig) -> f64 {
    let importance = task.importance.unwrap_or(DEFAULT_IMPORTANCE) as f64;
    let effort = (6 - task.effort.unwrap_or(DEFAULT_EFFORT)) as f64;
    let deadline = days_until(task, config.today).map_or(NEUTRAL_DEADLINE_SCORE, urgency_score);

    let w = &config.weights;
    round2(importance * w.importance + effort * w.effort + deadline * w.deadline)
}

/// Deadline urgency on a 1-5 scale from days remaining.
pub fn urgency_score(days_left: i64) -> f64 {
    match days_left {
        d if d <= 1 => 5.0,
        d if d <= 3 => 4.0,
        d if d <= 7 => 3.0,
        d if d <= 14 => 2.0,
        _ => 1.0,
    }
}

/// Whole days from `today` to the task's deadline.
///
/// `None` when the task has no deadline or it does not parse as `YYYY-MM-DD`.
pub fn days_until(task: &Task, today: NaiveDate) -> Option<i64> {
    let raw = task.deadline.as_deref().filter(|d| !d.is_empty())?;
    let deadline = NaiveDate::parse_from_str(raw, DEADLINE_FORMAT).ok()?;
    Some((deadline - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn config(method: RankMethod) -> RankingConfig {
        RankingConfig::new(method).on(today())
    }

    #[test]
    fn weighted_scores_by_hand() {
        let tasks = vec![Task::new("Fix bug").with_importance(5).with_effort(2)];
        let ranked = rank_tasks(&tasks, &config(RankMethod::Weighted)).unwrap();
        assert_eq!(ranked[0].priority_score, 4.3);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].days_until_deadline, None);
    }

    #[test]
    fn defaults_give_neutral_score() {
        let tasks = vec![Task::new("Plain")];
        let ranked = rank_tasks(&tasks, &config(RankMethod::Weighted)).unwrap();
        // 3*0.5 + 3*0.3 + 3*0.2
        assert_eq!(ranked[0].priority_score, 3.0);
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(urgency_score(-4), 5.0);
        assert_eq!(urgency_score(1), 5.0);
        assert_eq!(urgency_score(2), 4.0);
        assert_eq!(urgency_score(3), 4.0);
        assert_eq!(urgency_score(7), 3.0);
        assert_eq!(urgency_score(14), 2.0);
        assert_eq!(urgency_score(15), 1.0);
    }

    #[test]
    fn weighted_uses_deadline_urgency() {
        let soon = Task::new("Soon").with_deadline("2024-03-11");
        let later = Task::new("Later").with_deadline("2024-05-01");
        let ranked = rank_tasks(&[later, soon], &config(RankMethod::Weighted)).unwrap();
        assert_eq!(ranked[0].task.name, "Soon");
        // 1.5 + 0.9 + 5*0.2
        assert_eq!(ranked[0].priority_score, 3.4);
        assert_eq!(ranked[1].priority_score, 2.6);
    }

    #[test]
    fn unparseable_deadline_is_neutral() {
        let task = Task::new("Odd").with_deadline("next tuesday");
        assert_eq!(weighted_score(&task, &config(RankMethod::Weighted)), 3.0);
    }

    #[test]
    fn custom_weights() {
        let weights = PriorityWeights {
            importance: 1.0,
            effort: 0.0,
            deadline: 0.0,
        };
        let cfg = config(RankMethod::Weighted).with_weights(weights);
        let tasks = vec![Task::new("Low").with_importance(1), Task::new("High").with_importance(5)];
        let ranked = rank_tasks(&tasks, &cfg).unwrap();
        assert_eq!(ranked[0].task.name, "High");
        assert_eq!(ranked[0].priority_score, 5.0);
    }

    #[test]
    fn deadline_method() {
        let tasks = vec![
            Task::new("None"),
            Task::new("Far").with_deadline("2024-09-01"),
            Task::new("Near").with_deadline("2024-03-15"),
            Task::new("Bad").with_deadline("15/03/2024"),
            Task::new("Overdue").with_deadline("2024-03-01"),
        ];
        let ranked = rank_tasks(&tasks, &config(RankMethod::Deadline)).unwrap();
        let names: Vec<_> = ranked.iter().map(|t| t.task.name.as_str()).collect();
        assert_eq!(names, ["Overdue", "Near", "None", "Far", "Bad"]);

        assert_eq!(ranked[0].priority_score, 109.0);
        assert_eq!(ranked[0].days_until_deadline, Some(Some(-9)));
        assert_eq!(ranked[1].priority_score, 95.0);
        assert_eq!(ranked[1].days_until_deadline, Some(Some(5)));
        // 175 days out floors at zero and ties with the undated tasks
        assert_eq!(ranked[3].priority_score, 0.0);
        assert_eq!(ranked[3].days_until_deadline, Some(Some(175)));
        assert_eq!(ranked[2].days_until_deadline, Some(None));
        assert_eq!(ranked[4].days_until_deadline, Some(None));
        assert_eq!(ranked[4].task.deadline.as_deref(), Some("15/03/2024"));
        assert_eq!(ranked[2].task.deadline, None);
    }

    #[test]
    fn ranks_are_dense_and_stable() {
        let tasks: Vec<_> = (0..6).map(|i| Task::new(format!("t{i}"))).collect();
        let ranked = rank_tasks(&tasks, &config(RankMethod::Weighted)).unwrap();
        for (i, t) in ranked.iter().enumerate() {
            assert_eq!(t.rank as usize, i + 1);
            assert_eq!(t.task.name, format!("t{i}"));
        }
    }

    #[test]
    fn empty_list_rejected() {
        let err = rank_tasks(&[], &config(RankMethod::Weighted)).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.field(), "tasks");
    }

    #[test]
    fn method_parsing() {
        assert_eq!("deadline".parse::<RankMethod>().unwrap(), RankMethod::Deadline);
        let err = "foo".parse::<RankMethod>().unwrap_err();
        assert_eq!(err.field(), "method");
        assert!(err.to_string().contains("Invalid method 'foo'"));
    }
}
