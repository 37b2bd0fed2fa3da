use clap::Args;
use deepwork_core::schedule::work_minutes;
use deepwork_core::{build_schedule, Config, Technique};

#[derive(Args)]
pub struct PlanArgs {
    /// Total time available, in minutes
    total_minutes: u32,
    /// pomodoro, 52-17, 90-20 or custom (defaults to schedule.technique)
    #[arg(long, short)]
    technique: Option<String>,
    /// Work session length (required for custom)
    #[arg(long)]
    work_length: Option<u32>,
    /// Short break length (required for custom)
    #[arg(long)]
    short_break: Option<u32>,
    /// Long break length (defaults to the short break)
    #[arg(long)]
    long_break: Option<u32>,
    /// Work sessions between long breaks
    #[arg(long)]
    long_break_interval: Option<u32>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut request = config.schedule_request(args.total_minutes);
    if let Some(technique) = args.technique.as_deref() {
        request.technique = technique.parse::<Technique>()?;
    }
    request.work_length = args.work_length;
    request.short_break = args.short_break;
    if args.long_break.is_some() {
        request.long_break = args.long_break;
    }
    if let Some(interval) = args.long_break_interval {
        request.long_break_interval = interval;
    }

    tracing::debug!(?request, "building schedule");
    let sessions = build_schedule(&request)?;

    if args.json {
        super::print_json(&sessions)?;
        return Ok(());
    }

    println!("{:>3}  {:<12} {:>5}  {:>5}  {:>5}", "#", "type", "min", "start", "end");
    for s in &sessions {
        println!(
            "{:>3}  {:<12} {:>5}  {:>5}  {:>5}",
            s.session, s.session_type, s.duration_minutes, s.start_minute, s.end_minute
        );
    }
    println!(
        "\n{} sessions, {} of {} minutes focused ({})",
        sessions.len(),
        work_minutes(&sessions),
        args.total_minutes,
        request.technique
    );
    Ok(())
}
