use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use tracing::info;

use jobmatch::error::MatchError;
use jobmatch::export::write_matches_csv;
use jobmatch::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use jobmatch::matching::{rank_postings, MatchEngine};
use jobmatch::{CandidateProfile, JobPosting, UserPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// Score and rank scraped job postings against a parsed candidate profile.
#[derive(Debug, Parser)]
#[command(name = "jobmatch", version)]
struct Cli {
    /// Candidate profile JSON (CV parser output).
    #[arg(long)]
    profile: PathBuf,

    /// User preferences JSON; defaults apply when omitted.
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Postings JSON array (spreadsheet export field names).
    #[arg(long)]
    postings: PathBuf,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Postings sometimes carry a posted date instead of a day count; fold it
/// into `days_since_posted` the way the tracker spreadsheet does.
#[derive(Debug, serde::Deserialize)]
struct RawPosting {
    #[serde(flatten)]
    posting: JobPosting,
    #[serde(rename = "Posted Date")]
    posted_date: Option<NaiveDate>,
}

fn load_postings(path: &PathBuf) -> Result<Vec<JobPosting>, MatchError> {
    let raw: Vec<RawPosting> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let today = Utc::now().date_naive();

    Ok(raw
        .into_iter()
        .map(|entry| {
            let mut posting = entry.posting;
            if posting.days_since_posted == 0 {
                if let Some(date) = entry.posted_date {
                    posting.days_since_posted =
                        (today - date).num_days().max(0) as u32;
                }
            }
            posting
        })
        .collect())
}

fn run(cli: Cli) -> Result<(), MatchError> {
    let profile: CandidateProfile =
        serde_json::from_reader(BufReader::new(File::open(&cli.profile)?))?;
    let preferences: UserPreferences = match &cli.preferences {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => UserPreferences::default(),
    };
    let postings = load_postings(&cli.postings)?;

    info!(
        skills = profile.skills.len(),
        postings = postings.len(),
        "scoring batch"
    );

    let engine = MatchEngine::from_env();
    let matches = rank_postings(&engine, &profile, &preferences, &postings);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &matches)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_matches_csv(&mut out, &matches)?,
    }

    info!(matches = matches.len(), "done");
    Ok(())
}

fn main() {
    dotenv().ok();
    init_tracing_subscriber("jobmatch");
    install_tracing_panic_hook("jobmatch");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "jobmatch failed");
        std::process::exit(1);
    }
}
