use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use deepwork_core::prioritize::DEADLINE_FORMAT;
use deepwork_core::{args, rank_tasks, Config, RankMethod};

#[derive(Args)]
pub struct RankArgs {
    /// JSON file with an array of tasks ("-" or omitted reads stdin)
    file: Option<PathBuf>,
    /// weighted or deadline (defaults to ranking.method)
    #[arg(long, short)]
    method: Option<String>,
    /// Weight for importance
    #[arg(long)]
    importance_weight: Option<f64>,
    /// Weight for inverted effort
    #[arg(long)]
    effort_weight: Option<f64>,
    /// Weight for deadline urgency
    #[arg(long)]
    deadline_weight: Option<f64>,
    /// Rank as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<String>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn run(cli: RankArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(cli.file.as_ref())?;
    let value: serde_json::Value = serde_json::from_str(&input)?;
    let tasks = args::tasks(&value)?;

    let mut config = Config::load_or_default().ranking_config();
    if let Some(method) = cli.method.as_deref() {
        config.method = method.parse::<RankMethod>()?;
    }
    if let Some(w) = cli.importance_weight {
        config.weights.importance = w;
    }
    if let Some(w) = cli.effort_weight {
        config.weights.effort = w;
    }
    if let Some(w) = cli.deadline_weight {
        config.weights.deadline = w;
    }
    if let Some(today) = cli.today.as_deref() {
        config.today = NaiveDate::parse_from_str(today, DEADLINE_FORMAT)
            .map_err(|e| format!("invalid --today '{today}': {e}"))?;
    }

    tracing::debug!(tasks = tasks.len(), method = %config.method, today = %config.today, "ranking");
    let ranked = rank_tasks(&tasks, &config)?;

    if cli.json {
        super::print_json(&ranked)?;
        return Ok(());
    }

    let show_days = config.method == RankMethod::Deadline;
    println!("{:>4}  {:>7}  {:<10}  {}", "rank", "score", "deadline", "name");
    for t in &ranked {
        let days = match t.days_until_deadline {
            Some(Some(d)) if show_days => format!("  ({d}d)"),
            _ => String::new(),
        };
        println!(
            "{:>4}  {:>7.2}  {:<10}  {}{}",
            t.rank,
            t.priority_score,
            t.task.deadline.as_deref().unwrap_or("-"),
            t.task.name,
            days
        );
    }
    Ok(())
}
