//! # deepwork Core Library
//!
//! Small, stateless decision utilities for focused work. Every operation
//! takes plain input and returns plain records; the CLI is a thin layer over
//! the same functions.
//!
//! ## Components
//!
//! - **Affirmations**: weighted random pick of a personalized message from a
//!   static catalog, steered by mood, energy and an optional category
//! - **Schedule**: alternating work/break plan that exactly fills a time budget
//! - **Prioritize**: multi-criteria task ranking (`weighted` or `deadline`)
//! - **Breaks**: weighted random pick of a break activity
//!
//! Random draws use a generator created per call, so a seed always
//! reproduces the same result.
//!
//! ## Key Components
//!
//! - [`select_affirmation`], [`build_schedule`], [`rank_tasks`], [`suggest_break`]:
//!   typed entry points
//! - [`args`]: the same operations over loosely typed JSON arguments
//! - [`Config`]: user defaults stored as TOML

pub mod affirmation;
pub mod args;
pub mod breaks;
pub mod config;
pub mod draw;
pub mod energy;
pub mod error;
pub mod prioritize;
pub mod schedule;

pub use affirmation::{select_affirmation, Affirmation, AffirmationRequest, Category, Mood};
pub use breaks::{suggest_break, BreakActivity, BreakCategory, BreakRequest, Location};
pub use config::Config;
pub use energy::EnergyTier;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use prioritize::{rank_tasks, PriorityWeights, RankMethod, RankedTask, RankingConfig, Task};
pub use schedule::{build_schedule, ScheduleRequest, ScheduleSession, SessionType, Technique};
