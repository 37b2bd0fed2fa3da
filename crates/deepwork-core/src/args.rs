//! Loosely typed entry points.
//!
//! Each operation is also callable with a JSON object of keyword arguments,
//! for callers that receive untyped input (the CLI's `--json` input, config
//! files, scripting bridges). This layer performs the runtime type checks
//! the typed API gets for free: a boolean where an integer is expected, a
//! number where text is expected or a list where a mapping is expected is
//! an [`ValidationError::InvalidType`]; everything else is delegated to the
//! typed validation.

use serde_json::{Map, Value};

use crate::affirmation::{self, Affirmation, AffirmationRequest, Category, Mood};
use crate::breaks::{self, BreakActivity, BreakCategory, BreakRequest};
use crate::error::ValidationError;
use crate::prioritize::{self, PriorityWeights, RankMethod, RankedTask, RankingConfig, Task};
use crate::schedule::{self, ScheduleRequest, ScheduleSession, Technique, DEFAULT_LONG_BREAK_INTERVAL};

/// JSON type name used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type(field, "a mapping", type_name(value)))
}

/// Look up `field`, treating JSON `null` as absent.
fn get<'a>(args: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    args.get(field).filter(|v| !v.is_null())
}

fn opt_text<'a>(args: &'a Map<String, Value>, field: &str) -> Result<Option<&'a str>, ValidationError> {
    match get(args, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(ValidationError::invalid_type(field, "a string", type_name(other))),
    }
}

fn text<'a>(args: &'a Map<String, Value>, field: &str) -> Result<&'a str, ValidationError> {
    opt_text(args, field)?.ok_or_else(|| ValidationError::invalid_type(field, "a string", "null"))
}

fn opt_integer(args: &Map<String, Value>, field: &str) -> Result<Option<i64>, ValidationError> {
    match get(args, field) {
        None => Ok(None),
        Some(value) => integer_value(value, field).map(Some),
    }
}

fn integer(args: &Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    opt_integer(args, field)?.ok_or_else(|| ValidationError::invalid_type(field, "an integer", "null"))
}

fn integer_value(value: &Value, field: &str) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ValidationError::invalid_type(field, "an integer", type_name(value))),
        other => Err(ValidationError::invalid_type(field, "an integer", type_name(other))),
    }
}

/// A strictly positive minute count that fits the typed API.
fn positive_minutes(value: i64, field: &str) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::invalid_value(field, format!("{field} must be > 0, got {value}")));
    }
    u32::try_from(value).map_err(|_| ValidationError::invalid_value(field, format!("{field} is too large: {value}")))
}

fn opt_positive_minutes(args: &Map<String, Value>, field: &str) -> Result<Option<u32>, ValidationError> {
    opt_integer(args, field)?
        .map(|v| positive_minutes(v, field))
        .transpose()
}

/// Seeds may be any integer; negative values keep their bit pattern.
fn opt_seed(args: &Map<String, Value>) -> Result<Option<u64>, ValidationError> {
    match get(args, "seed") {
        None => Ok(None),
        Some(Value::Number(n)) if n.is_u64() => Ok(n.as_u64()),
        Some(value) => integer_value(value, "seed").map(|s| Some(s as u64)),
    }
}

/// Parse `{name, mood, energy, category?, seed?}`.
pub fn affirmation_request(args: &Value) -> Result<AffirmationRequest, ValidationError> {
    let args = object(args, "arguments")?;
    let name = text(args, "name")?;
    let mood: Mood = text(args, "mood")?.parse()?;
    let energy = integer(args, "energy")?;
    let category = opt_text(args, "category")?
        .map(str::parse::<Category>)
        .transpose()?;
    let seed = opt_seed(args)?;

    Ok(AffirmationRequest {
        name: name.to_string(),
        mood,
        energy,
        category,
        seed,
    })
}

/// Parse `{total_minutes, technique?, work_length?, short_break?, long_break?, long_break_interval?}`.
pub fn schedule_request(args: &Value) -> Result<ScheduleRequest, ValidationError> {
    let args = object(args, "arguments")?;
    let total_minutes = positive_minutes(integer(args, "total_minutes")?, "total_minutes")?;
    let technique = opt_text(args, "technique")?
        .map(str::parse::<Technique>)
        .transpose()?
        .unwrap_or_default();
    let work_length = opt_positive_minutes(args, "work_length")?;
    let short_break = opt_positive_minutes(args, "short_break")?;
    let long_break = opt_positive_minutes(args, "long_break")?;
    let long_break_interval = match opt_integer(args, "long_break_interval")? {
        None => DEFAULT_LONG_BREAK_INTERVAL,
        Some(v) if v >= 1 => u32::try_from(v).map_err(|_| {
            ValidationError::invalid_value("long_break_interval", format!("long_break_interval is too large: {v}"))
        })?,
        Some(v) => {
            return Err(ValidationError::invalid_value(
                "long_break_interval",
                format!("long_break_interval must be >= 1, got {v}"),
            ))
        }
    };

    Ok(ScheduleRequest {
        total_minutes,
        technique,
        work_length,
        short_break,
        long_break,
        long_break_interval,
    })
}

/// Parse one task record. `index` is its position in the input list.
pub fn task(value: &Value, index: usize) -> Result<Task, ValidationError> {
    let field = format!("tasks[{index}]");
    let record = object(value, &field)?;

    let name = match record.get("name") {
        None => {
            return Err(ValidationError::invalid_value(
                "tasks",
                format!("Task at index {index} missing required field 'name'"),
            ))
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(ValidationError::invalid_type(format!("{field}.name"), "a string", type_name(other))),
    };
    let deadline = match get(record, "deadline") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(ValidationError::invalid_type(format!("{field}.deadline"), "a string", type_name(other)))
        }
    };
    let effort = get(record, "effort")
        .map(|v| integer_value(v, &format!("{field}.effort")))
        .transpose()?;
    let importance = get(record, "importance")
        .map(|v| integer_value(v, &format!("{field}.importance")))
        .transpose()?;

    let extra = record
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "name" | "deadline" | "effort" | "importance"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(Task {
        name,
        deadline,
        effort,
        importance,
        extra,
    })
}

/// Parse a non-empty list of task records.
pub fn tasks(value: &Value) -> Result<Vec<Task>, ValidationError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(ValidationError::invalid_type("tasks", "a list", type_name(other))),
    };
    if items.is_empty() {
        return Err(ValidationError::invalid_value("tasks", "tasks list cannot be empty"));
    }
    items
        .iter()
        .enumerate()
        .map(|(index, value)| task(value, index))
        .collect()
}

/// Parse a `weights` mapping; unset keys keep their defaults.
pub fn weights(value: &Value) -> Result<PriorityWeights, ValidationError> {
    let map = object(value, "weights")?;
    let mut weights = PriorityWeights::default();
    for (key, slot) in [
        ("importance", &mut weights.importance),
        ("effort", &mut weights.effort),
        ("deadline", &mut weights.deadline),
    ] {
        match get(map, key) {
            None => {}
            Some(Value::Number(n)) => *slot = n.as_f64().unwrap_or(*slot),
            Some(other) => {
                return Err(ValidationError::invalid_type(format!("weights.{key}"), "a number", type_name(other)))
            }
        }
    }
    Ok(weights)
}

/// Parse `{tasks, method?, weights?}` into tasks and a configuration for today.
pub fn rank_request(args: &Value) -> Result<(Vec<Task>, RankingConfig), ValidationError> {
    let args = object(args, "arguments")?;
    let tasks = tasks(args.get("tasks").unwrap_or(&Value::Null))?;

    let method = opt_text(args, "method")?
        .map(str::parse::<RankMethod>)
        .transpose()?
        .unwrap_or_default();
    let weights = get(args, "weights").map(weights).transpose()?.unwrap_or_default();

    Ok((tasks, RankingConfig::new(method).with_weights(weights)))
}

/// Parse `{minutes_worked, energy_level, break_type?, seed?}`.
pub fn break_request(args: &Value) -> Result<BreakRequest, ValidationError> {
    let args = object(args, "arguments")?;
    let minutes_worked = integer(args, "minutes_worked")?;
    if minutes_worked < 0 {
        return Err(ValidationError::invalid_value(
            "minutes_worked",
            format!("minutes_worked cannot be negative, got {minutes_worked}"),
        ));
    }
    let minutes_worked = u32::try_from(minutes_worked).map_err(|_| {
        ValidationError::invalid_value("minutes_worked", format!("minutes_worked is too large: {minutes_worked}"))
    })?;
    let energy_level = integer(args, "energy_level")?;
    let break_type = opt_text(args, "break_type")?
        .map(str::parse::<BreakCategory>)
        .transpose()?;
    let seed = opt_seed(args)?;

    Ok(BreakRequest {
        minutes_worked,
        energy_level,
        break_type,
        seed,
    })
}

/// [`affirmation::select_affirmation`] over keyword arguments.
pub fn select_affirmation(args: &Value) -> Result<Affirmation, ValidationError> {
    affirmation::select_affirmation(&affirmation_request(args)?)
}

/// [`schedule::build_schedule`] over keyword arguments.
pub fn build_schedule(args: &Value) -> Result<Vec<ScheduleSession>, ValidationError> {
    schedule::build_schedule(&schedule_request(args)?)
}

/// [`prioritize::rank_tasks`] over keyword arguments, ranked as of today.
pub fn rank_tasks(args: &Value) -> Result<Vec<RankedTask>, ValidationError> {
    let (tasks, config) = rank_request(args)?;
    prioritize::rank_tasks(&tasks, &config)
}

/// [`breaks::suggest_break`] over keyword arguments.
pub fn suggest_break(args: &Value) -> Result<BreakActivity, ValidationError> {
    breaks::suggest_break(&break_request(args)?)
}
