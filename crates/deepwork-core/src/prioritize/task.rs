use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Effort assumed when a task does not set one.
pub const DEFAULT_EFFORT: i64 = 3;
/// Importance assumed when a task does not set one.
pub const DEFAULT_IMPORTANCE: i64 = 3;

/// Keys written by the ranker; never carried over from the input.
const OUTPUT_KEYS: [&str; 3] = ["priority_score", "rank", "days_until_deadline"];

/// A task to rank.
///
/// Fields other than the four known ones are kept in `extra` and echoed
/// back unchanged in the ranked output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Due date as `YYYY-MM-DD`. Kept verbatim even when it does not parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// 1 (trivial) to 5 (large).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<i64>,
    /// 1 (minor) to 5 (critical).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deadline: None,
            effort: None,
            importance: None,
            extra: Map::new(),
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_effort(mut self, effort: i64) -> Self {
        self.effort = Some(effort);
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Check the 1-5 scales. `index` is the task's position in the input.
    pub(crate) fn validate(&self, index: usize) -> Result<(), ValidationError> {
        for (field, value) in [("effort", self.effort), ("importance", self.importance)] {
            if let Some(v) = value {
                if !(1..=5).contains(&v) {
                    return Err(ValidationError::invalid_value(
                        format!("tasks[{index}].{field}"),
                        format!("{field} must be between 1 and 5, got {v}"),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A task with its computed priority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: f64,
    /// 1 is the highest priority.
    pub rank: u32,
    /// Only set by the deadline method: `Some(None)` when the task has no
    /// deadline or it failed to parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<Option<i64>>,
}

impl RankedTask {
    pub(crate) fn new(mut task: Task, priority_score: f64, days_until_deadline: Option<Option<i64>>) -> Self {
        for key in OUTPUT_KEYS {
            task.extra.remove(key);
        }
        Self {
            task,
            priority_score,
            rank: 0,
            days_until_deadline,
        }
    }
}
