use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use handicap_engine::dto::HandicapReport;
use handicap_engine::scoring::format_to_par;
use handicap_engine::{
    HandicapConfig, HandicapDashboard, JsonFileRounds, RoundFilter, RoundsRepository,
};

#[derive(Parser, Debug)]
#[command(name = "handicap-engine", version, about = "Handicap index and round statistics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the handicap report for one player
    Report {
        /// JSON file with every player's rounds
        #[arg(short = 'r', long = "rounds")]
        rounds: PathBuf,

        #[arg(short = 'u', long = "user")]
        user: String,

        /// Only rounds played on or after this date
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only rounds played on or before this date
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long)]
        course: Option<String>,

        /// JSON config file
        #[arg(short = 'c', long = "config", env = "HANDICAP_CONFIG")]
        config: Option<PathBuf>,

        /// Apply the 0.96 bonus for excellence
        #[arg(long)]
        bonus_for_excellence: bool,

        /// Human readable summary instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        text: bool,

        #[arg(long)]
        pretty: bool,
    },
    /// Print the JSON schema of the report
    Schema,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    match Cli::parse().command {
        Command::Report {
            rounds,
            user,
            from,
            to,
            course,
            config,
            bonus_for_excellence,
            text,
            pretty,
        } => {
            let mut config =
                HandicapConfig::load(config.as_deref()).context("Could not load handicap config")?;
            config.apply_bonus_for_excellence |= bonus_for_excellence;

            let filter = RoundFilter { from, to, course };
            let rounds = JsonFileRounds::new(&rounds)
                .fetch_rounds(&user, &filter)
                .with_context(|| format!("Could not fetch rounds for {user}"))?;
            info!("Computing report for {user} over {} rounds", rounds.len());

            let report = HandicapDashboard::new(&config)
                .build(&rounds, Local::now().date_naive())
                .context("Could not build handicap report")?;

            if text {
                println!("{}", render_text(&report));
            } else if pretty {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", serde_json::to_string(&report)?);
            }
        }
        Command::Schema => {
            let schema = schemars::schema_for!(HandicapReport);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

fn one_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}

fn render_text(report: &HandicapReport) -> String {
    let scoring = &report.scoring;
    let mut lines = vec![
        format!("Handicap index: {}", one_decimal(report.current_index)),
        format!("Low index:      {}", one_decimal(report.low_index)),
        format!("Trend:          {:?}", report.trend),
        format!("Potential:      {}", one_decimal(report.potential_index)),
        format!("Rounds played:  {}", scoring.round_stats.rounds_played),
    ];
    if let Some(best) = scoring.best_hole {
        lines.push(format!("Best hole:      {best}"));
    }
    if let Some(worst) = scoring.worst_hole {
        lines.push(format!("Worst hole:     {worst}"));
    }
    lines.extend(scoring.per_par_type_stats.iter().filter_map(|par_type| {
        let most_common = par_type.distribution.most_common()?;
        Some(format!(
            "Par {}s:         {} avg to par, mostly {}",
            par_type.par,
            one_decimal(par_type.average_to_par),
            most_common.label()
        ))
    }));
    lines.push("Recent rounds:".to_string());
    lines.extend(scoring.score_to_par_trend.iter().rev().take(5).map(|point| {
        format!(
            "  {}  {} ({})",
            point.date,
            point.score,
            format_to_par(point.score_to_par)
        )
    }));
    lines.into_iter().join("\n")
}
