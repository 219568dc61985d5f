//! `courserec`: recommend similar course offerings.
//!
//! Usage:
//!   courserec recommend --course "Railroad Transportation Engrg" --instructor "Barkan, Christopher P"
//!   courserec recommend --course "Database Systems" --instructor "Chang, Kevin C" --format json
//!   courserec inspect --grades uiuc-gpa-dataset.csv --ratings profrating.csv

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use courserec_core::config::{CliOverrides, CourserecConfig};
use courserec_core::errors::{CourserecErrorCode, QueryError, RecommenderError};
use courserec_engine::{run, IndexBuilder};

#[derive(Parser)]
#[command(name = "courserec", version = courserec_core::constants::VERSION)]
#[command(about = "Recommend course offerings similar to a given course and instructor")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log verbosity: -v for debug, -vv for trace (overrides COURSEREC_LOG)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the offerings most similar to one course taught by one instructor
    Recommend {
        /// Course title, e.g. "Calculus 2"
        #[arg(long)]
        course: String,

        /// Instructor name, e.g. "Tyson, Kelly"
        #[arg(long)]
        instructor: String,

        /// Include row index and composite score
        #[arg(long)]
        scores: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print catalog and index statistics
    Inspect {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Config file (default: ./courserec.toml if present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Grade-distribution CSV
    #[arg(long)]
    grades: Option<PathBuf>,

    /// Instructor-rating CSV
    #[arg(long)]
    ratings: Option<PathBuf>,

    /// Number of recommendations
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Build the similarity matrix on all cores
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl CommonArgs {
    fn load_config(&self) -> anyhow::Result<CourserecConfig> {
        let overrides = CliOverrides {
            config_path: self.config.clone(),
            grades_path: self.grades.clone(),
            ratings_path: self.ratings.clone(),
            top_k: self.top_k,
            parallel: self.parallel.then_some(true),
        };
        let root = std::env::current_dir().context("resolving working directory")?;
        let config = CourserecConfig::load(&root, Some(&overrides))
            .map_err(RecommenderError::from)?;
        tracing::debug!(
            grades = %config.data.effective_grades_path().display(),
            ratings = %config.data.effective_ratings_path().display(),
            top_k = config.query.effective_top_k(),
            "configuration resolved"
        );
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.verbose {
        0 => courserec_core::tracing::init_tracing(),
        1 => courserec_core::tracing::init_tracing_with_filter("courserec=debug"),
        _ => courserec_core::tracing::init_tracing_with_filter("courserec=trace"),
    }

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn execute(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Recommend {
            course,
            instructor,
            scores,
            common,
        } => {
            let config = common.load_config()?;
            let (index, results) = run(&config, &course, &instructor)?;
            let rendered = if scores {
                let scored = index.recommend_scored(&course, &instructor)?;
                output::render_scored(&scored, common.format)?
            } else {
                output::render_recommendations(&results, common.format)?
            };
            println!("{rendered}");
        }
        Command::Inspect { common } => {
            let config = common.load_config()?;
            let index = IndexBuilder::from_config(&config).build_from_config(&config)?;
            println!("{}", output::render_stats(index.stats(), common.format)?);
        }
    }
    Ok(())
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(e) = err.downcast_ref::<RecommenderError>() {
        eprintln!("error: {}", e.tagged_string());
        return match e {
            RecommenderError::Query(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        };
    }
    if let Some(e) = err.downcast_ref::<QueryError>() {
        eprintln!("error: {}", e.tagged_string());
        return ExitCode::from(2);
    }
    eprintln!("error: {err:#}");
    ExitCode::FAILURE
}
