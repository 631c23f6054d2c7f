use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use miette::{Result, bail};
use swiss_countdown::calendar::days_inclusive;
use swiss_countdown::render::{PageSize, PosterDocument, Standard14Metrics, render_posters};
use swiss_countdown::search::SolutionFinder;
use swiss_countdown::settings::SettingsOptions;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Paper {
    Letter,
    A4,
}

impl From<Paper> for PageSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::Letter => PageSize::Letter,
            Paper::A4 => PageSize::A4,
        }
    }
}

/// Print Swiss-cross countdown posters, one box per remaining day.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Day shown in the box counting 0 (YYYY-MM-DD)
    #[arg(long)]
    last_day: NaiveDate,

    /// First day of the countdown; defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Number of poster variants to produce
    #[arg(long, default_value_t = 10)]
    candidates: usize,

    #[arg(long, value_enum, default_value_t = Paper::Letter)]
    paper: Paper,

    /// Render exactly these arm proportions instead of searching
    #[arg(long, requires = "arm_height")]
    arm_width: Option<u32>,

    #[arg(long, requires = "arm_width")]
    arm_height: Option<u32>,

    /// Where to write the PDF
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let today = args.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let days = days_inclusive(today, args.last_day);
    tracing::info!(%today, last_day = %args.last_day, days, "counting down");

    let finder = SolutionFinder::new(days)?;
    let solutions = match (args.arm_width, args.arm_height) {
        (Some(width), Some(height)) => vec![finder.evaluate(width, height)],
        _ => finder.find_best_n(args.candidates)?,
    };
    if solutions.is_empty() {
        bail!("no cross proportions fit a countdown of {days} days");
    }

    let page_size = PageSize::from(args.paper).dimensions();
    let posters = render_posters(&solutions, SettingsOptions::new(args.last_day), page_size, &Standard14Metrics)?;

    let mut document = PosterDocument::new("Countdown")?;
    for poster in &posters {
        println!(
            "{}x{}: {} boxes, {} off, first day {}",
            poster.solution.top_arm_width,
            poster.solution.top_arm_height,
            poster.solution.count(),
            poster.solution.score(),
            poster.settings.first_day(),
        );
        document.add_page(poster.page_size, &poster.instructions);
    }

    let output = args.output.unwrap_or_else(|| std::env::temp_dir().join("swiss-countdown.pdf"));
    document.save(&output)?;
    println!("wrote {} pages to {}", posters.len(), output.display());
    Ok(())
}
