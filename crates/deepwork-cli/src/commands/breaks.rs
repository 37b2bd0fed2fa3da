use clap::Args;
use deepwork_core::{suggest_break, BreakCategory, BreakRequest};

#[derive(Args)]
pub struct BreakArgs {
    /// Minutes worked since the last break
    #[arg(long, allow_negative_numbers = true)]
    minutes_worked: i64,
    /// Energy level from 1 to 10
    #[arg(long, allow_negative_numbers = true)]
    energy: i64,
    /// Restrict to a break type (active, relaxing, mental, social)
    #[arg(long = "type")]
    break_type: Option<String>,
    /// Seed for a reproducible pick
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: BreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.minutes_worked < 0 {
        return Err(format!("minutes_worked cannot be negative, got {}", args.minutes_worked).into());
    }
    let break_type = args.break_type.as_deref().map(str::parse::<BreakCategory>).transpose()?;

    let request = BreakRequest {
        minutes_worked: u32::try_from(args.minutes_worked)?,
        energy_level: args.energy,
        break_type,
        seed: args.seed.map(|s| s as u64),
    };
    let activity = suggest_break(&request)?;

    if args.json {
        super::print_json(&activity)?;
    } else {
        println!("{} ({} min, {})", activity.name, activity.duration_minutes, activity.category);
        println!("  {}", activity.description);
    }
    Ok(())
}
