use std::fmt;

use chrono::{DateTime, Utc};
use rankquiz_core::model::{Branch, CompletedRun, QuizStats, RunId};
use storage::repository::StatsRepository;
use storage::sqlite::SqliteRepository;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    runs: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidRuns { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidRuns { raw } => write!(f, "invalid --runs value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("RANKQUIZ_DB_URL").unwrap_or_else(|_| "sqlite:dev.sqlite3".into());
        let mut runs = std::env::var("RANKQUIZ_SEED_RUNS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(3);
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--runs" => {
                    let value = require_value(&mut args, "--runs")?;
                    runs = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidRuns { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, runs, now })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>   SQLite URL (default: sqlite:dev.sqlite3)");
    eprintln!("  --runs <n>          Sample runs to fold into each branch (default: 3)");
    eprintln!("  --now <rfc3339>     Fixed current time for deterministic seeding");
    eprintln!("  -h, --help          Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  RANKQUIZ_DB_URL, RANKQUIZ_SEED_RUNS");
}

/// Derive a deterministic sample run from the loop index.
///
/// All arithmetic is `u64` with small moduli, so any `--runs` value stays in
/// range: scores land in 10..=19 and times in 31_000..=90_000 ms.
fn sample_run(i: u64, branch: Branch, total: u32) -> CompletedRun {
    let score = 10 + (i * 3 % 10) as u32;
    let elapsed_ms = 90_000 - i * 7_000 % 60_000;
    CompletedRun::new(RunId::new(i + 1), branch, score, total, elapsed_ms)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let repo = SqliteRepository::connect(&args.db_url).await?;
    repo.migrate().await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let names = ["alex", "sam", "jordan", "casey", "morgan"];
    for branch in Branch::ALL {
        let total = if branch == Branch::Combined { 57 } else { 19 };
        let mut stats = QuizStats::default();
        for i in 0..u64::from(args.runs) {
            let run = sample_run(i, branch, total);
            let name = names[(i % names.len() as u64) as usize];
            stats.apply_run(&run, name, now);
        }
        let payload = serde_json::to_string(&stats)?;
        repo.store(branch, &payload).await?;
        log::info!("seeded {branch} with {} runs", args.runs);
    }

    println!(
        "Seeded {} branches with {} runs each into {}",
        Branch::ALL.len(),
        args.runs,
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
