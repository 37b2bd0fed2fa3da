//! Work/break session planning.
//!
//! Lays out alternating work and break sessions from minute 0 until a fixed
//! time budget is used up. The final session is cut short when it would run
//! past the budget, so the durations always sum to the budget exactly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ValidationError;

/// Default number of work sessions between long breaks.
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

/// Timing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "pomodoro")]
    Pomodoro,
    #[serde(rename = "52-17")]
    FiftyTwoSeventeen,
    #[serde(rename = "90-20")]
    NinetyTwenty,
    #[serde(rename = "custom")]
    Custom,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::Pomodoro,
        Technique::FiftyTwoSeventeen,
        Technique::NinetyTwenty,
        Technique::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Technique::Pomodoro => "pomodoro",
            Technique::FiftyTwoSeventeen => "52-17",
            Technique::NinetyTwenty => "90-20",
            Technique::Custom => "custom",
        }
    }

    /// Preset `(work, short_break)` lengths in minutes. `None` for custom.
    pub fn preset(self) -> Option<(u32, u32)> {
        match self {
            Technique::Pomodoro => Some((25, 5)),
            Technique::FiftyTwoSeventeen => Some((52, 17)),
            Technique::NinetyTwenty => Some((90, 20)),
            Technique::Custom => None,
        }
    }
}

impl Default for Technique {
    fn default() -> Self {
        Technique::Pomodoro
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Technique::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<_> = Technique::ALL.iter().map(|t| t.as_str()).collect();
                ValidationError::invalid_value(
                    "technique",
                    format!("Invalid technique '{s}'. Must be one of: {}", names.join(", ")),
                )
            })
    }
}

/// Kind of session in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    pub fn is_break(self) -> bool {
        !matches!(self, SessionType::Work)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Work => "work",
            SessionType::ShortBreak => "short_break",
            SessionType::LongBreak => "long_break",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous interval of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSession {
    /// 1-based position in the plan.
    pub session: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub duration_minutes: u32,
    /// Inclusive start, in minutes from the beginning of the plan.
    pub start_minute: u32,
    /// Exclusive end; `start_minute + duration_minutes`.
    pub end_minute: u32,
}

/// Input for [`build_schedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub total_minutes: u32,
    #[serde(default)]
    pub technique: Technique,
    /// Overrides the preset work length. Required for custom.
    #[serde(default)]
    pub work_length: Option<u32>,
    /// Overrides the preset short break. Required for custom.
    #[serde(default)]
    pub short_break: Option<u32>,
    /// Defaults to the short break length.
    #[serde(default)]
    pub long_break: Option<u32>,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_long_break_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}

impl ScheduleRequest {
    pub fn new(total_minutes: u32, technique: Technique) -> Self {
        Self {
            total_minutes,
            technique,
            work_length: None,
            short_break: None,
            long_break: None,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
        }
    }

    /// A custom plan with the given work and short break lengths.
    pub fn custom(total_minutes: u32, work_length: u32, short_break: u32) -> Self {
        Self {
            work_length: Some(work_length),
            short_break: Some(short_break),
            ..Self::new(total_minutes, Technique::Custom)
        }
    }

    pub fn with_long_break(mut self, minutes: u32) -> Self {
        self.long_break = Some(minutes);
        self
    }

    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval;
        self
    }

    /// Validate and resolve `(work, short_break, long_break)` lengths.
    fn resolve(&self) -> Result<(u32, u32, u32), ValidationError> {
        if self.total_minutes == 0 {
            return Err(ValidationError::invalid_value("total_minutes", "total_minutes must be > 0"));
        }
        for (field, value) in [
            ("work_length", self.work_length),
            ("short_break", self.short_break),
            ("long_break", self.long_break),
        ] {
            if value == Some(0) {
                return Err(ValidationError::invalid_value(field, format!("{field} must be > 0")));
            }
        }
        if self.long_break_interval == 0 {
            return Err(ValidationError::invalid_value(
                "long_break_interval",
                "long_break_interval must be >= 1",
            ));
        }

        let (work, short) = match self.technique.preset() {
            Some((work, short)) => (self.work_length.unwrap_or(work), self.short_break.unwrap_or(short)),
            None => {
                let work = self.work_length.ok_or_else(|| {
                    ValidationError::invalid_value("work_length", "work_length is required when technique is 'custom'")
                })?;
                let short = self.short_break.ok_or_else(|| {
                    ValidationError::invalid_value("short_break", "short_break is required when technique is 'custom'")
                })?;
                (work, short)
            }
        };
        Ok((work, short, self.long_break.unwrap_or(short)))
    }
}

/// Build the session plan for `request`.
///
/// Sessions alternate work and break starting with work at minute 0. Every
/// `long_break_interval`-th work session is followed by a long break. A
/// session that would overrun the budget is truncated and ends the plan.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] for a zero budget, a zero
/// length or interval, or a custom technique missing its lengths.
pub fn build_schedule(request: &ScheduleRequest) -> Result<Vec<ScheduleSession>, ValidationError> {
    let (work, short_break, long_break) = request.resolve()?;
    let total = request.total_minutes;

    let mut sessions = Vec::new();
    let mut clock = 0u32;
    let mut work_count = 0u32;
    let mut next = SessionType::Work;

    while clock < total {
        let nominal = match next {
            SessionType::Work => work,
            SessionType::ShortBreak => short_break,
            SessionType::LongBreak => long_break,
        };
        let duration = nominal.min(total - clock);
        if duration == 0 {
            break;
        }

        let session = ScheduleSession {
            session: sessions.len() as u32 + 1,
            session_type: next,
            duration_minutes: duration,
            start_minute: clock,
            end_minute: clock + duration,
        };
        trace!(?session, "planned session");
        clock = session.end_minute;
        sessions.push(session);

        next = match next {
            SessionType::Work => {
                work_count += 1;
                if work_count % request.long_break_interval == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };
    }

    debug!(
        technique = %request.technique,
        total_minutes = total,
        sessions = sessions.len(),
        work_sessions = work_count,
        "built schedule"
    );
    Ok(sessions)
}

/// Minutes spent in work sessions.
pub fn work_minutes(sessions: &[ScheduleSession]) -> u32 {
    sessions
        .iter()
        .filter(|s| s.session_type == SessionType::Work)
        .map(|s| s.duration_minutes)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pomodoro_two_hours() {
        let plan = build_schedule(&ScheduleRequest::new(120, Technique::Pomodoro)).unwrap();
        assert_eq!(
            plan[0],
            ScheduleSession {
                session: 1,
                session_type: SessionType::Work,
                duration_minutes: 25,
                start_minute: 0,
                end_minute: 25,
            }
        );
        let types: Vec<_> = plan.iter().map(|s| s.session_type).collect();
        use SessionType::*;
        assert_eq!(types, vec![Work, ShortBreak, Work, ShortBreak, Work, ShortBreak, Work, LongBreak]);
        assert_eq!(plan[7].duration_minutes, 5);
        assert_eq!(plan.last().unwrap().end_minute, 120);
    }

    #[test]
    fn budget_shorter_than_first_session() {
        let plan = build_schedule(&ScheduleRequest::new(15, Technique::Pomodoro)).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].session_type, SessionType::Work);
        assert_eq!((plan[0].duration_minutes, plan[0].start_minute, plan[0].end_minute), (15, 0, 15));
    }

    #[test]
    fn custom_lengths() {
        let plan = build_schedule(&ScheduleRequest::custom(60, 20, 5)).unwrap();
        let works: Vec<_> = plan.iter().filter(|s| s.session_type == SessionType::Work).collect();
        for w in &works[..works.len() - 1] {
            assert_eq!(w.duration_minutes, 20);
        }
        assert_eq!(plan.last().unwrap().end_minute, 60);
        assert_eq!(work_minutes(&plan), 20 + 20 + 10);
    }

    #[test]
    fn explicit_long_break_and_interval() {
        let request = ScheduleRequest::new(200, Technique::Pomodoro)
            .with_long_break(15)
            .with_long_break_interval(2);
        let plan = build_schedule(&request).unwrap();
        assert_eq!(plan[1].session_type, SessionType::ShortBreak);
        assert_eq!(plan[3].session_type, SessionType::LongBreak);
        assert_eq!(plan[3].duration_minutes, 15);
        assert_eq!(plan[7].session_type, SessionType::LongBreak);
    }

    #[test]
    fn interval_of_one_makes_every_break_long() {
        let request = ScheduleRequest::new(100, Technique::Pomodoro).with_long_break_interval(1);
        let plan = build_schedule(&request).unwrap();
        assert!(plan
            .iter()
            .filter(|s| s.session_type.is_break())
            .all(|s| s.session_type == SessionType::LongBreak));
    }

    #[test]
    fn presets() {
        let plan = build_schedule(&ScheduleRequest::new(200, Technique::NinetyTwenty)).unwrap();
        assert_eq!(plan[0].duration_minutes, 90);
        assert_eq!(plan[1].duration_minutes, 20);
        let plan = build_schedule(&ScheduleRequest::new(69, Technique::FiftyTwoSeventeen)).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].end_minute, 69);
    }

    #[test]
    fn session_numbers_are_sequential() {
        let plan = build_schedule(&ScheduleRequest::new(480, Technique::Pomodoro)).unwrap();
        for (i, s) in plan.iter().enumerate() {
            assert_eq!(s.session as usize, i + 1);
        }
    }

    #[test]
    fn validation_failures() {
        let err = build_schedule(&ScheduleRequest::new(0, Technique::Pomodoro)).unwrap_err();
        assert_eq!(err.field(), "total_minutes");

        let mut custom = ScheduleRequest::new(60, Technique::Custom);
        custom.short_break = Some(5);
        assert_eq!(build_schedule(&custom).unwrap_err().field(), "work_length");

        let err = build_schedule(&ScheduleRequest::custom(60, 0, 5)).unwrap_err();
        assert_eq!(err.field(), "work_length");

        let err = build_schedule(&ScheduleRequest::new(60, Technique::Pomodoro).with_long_break(0)).unwrap_err();
        assert_eq!(err.field(), "long_break");

        let err = build_schedule(&ScheduleRequest::new(60, Technique::Pomodoro).with_long_break_interval(0))
            .unwrap_err();
        assert_eq!(err.field(), "long_break_interval");
    }

    #[test]
    fn technique_parsing() {
        assert_eq!("52-17".parse::<Technique>().unwrap(), Technique::FiftyTwoSeventeen);
        assert_eq!("Pomodoro".parse::<Technique>().unwrap(), Technique::Pomodoro);
        let err = "bogus".parse::<Technique>().unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.field(), "technique");
    }

    #[test]
    fn serializes_wire_names() {
        let plan = build_schedule(&ScheduleRequest::new(30, Technique::Pomodoro)).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json[0]["type"], "work");
        assert_eq!(json[1]["type"], "short_break");
        assert_eq!(json[1]["start_minute"], 25);
    }
}
