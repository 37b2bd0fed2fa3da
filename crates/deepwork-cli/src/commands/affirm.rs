use clap::Args;
use deepwork_core::{select_affirmation, AffirmationRequest, Category, Config, Mood};

#[derive(Args)]
pub struct AffirmArgs {
    /// Current mood (happy, stressed, anxious, tired, frustrated, motivated, neutral)
    #[arg(long)]
    mood: String,
    /// Energy level from 1 to 10
    #[arg(long, allow_negative_numbers = true)]
    energy: i64,
    /// Name to personalize with (defaults to affirmation.default_name)
    #[arg(long)]
    name: Option<String>,
    /// Restrict to a category (motivation, confidence, persistence, self-care, growth)
    #[arg(long)]
    category: Option<String>,
    /// Seed for a reproducible pick
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: AffirmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mood: Mood = args.mood.parse()?;
    let category = args.category.as_deref().map(str::parse::<Category>).transpose()?;

    let request = AffirmationRequest {
        name: args.name.unwrap_or(config.affirmation.default_name),
        mood,
        energy: args.energy,
        category,
        seed: args.seed.map(|s| s as u64),
    };
    let affirmation = select_affirmation(&request)?;

    if args.json {
        super::print_json(&affirmation)?;
    } else {
        println!("{}", affirmation.text);
        println!("  category: {}  alignment: {:.2}", affirmation.category, affirmation.mood_alignment);
    }
    Ok(())
}
