//! ads-control — local campaign tracking with filtered totals and a
//! proportional bar chart.

mod output;

use ads_core::types::{CampaignDraft, FilterCriteria, Surface};
use ads_core::AppConfig;
use ads_reporting::{export_csv, EXPORT_FILE_NAME};
use ads_store::{CampaignRepository, JsonFileStore};
use ads_view::ViewCoordinator;
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use output::TerminalSinks;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ads-control")]
#[command(about = "Basic campaign control: local store, filters, totals, bar chart")]
#[command(version)]
struct Cli {
    /// Store file path (overrides config)
    #[arg(long, env = "ADS_CONTROL__STORAGE__PATH")]
    store: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filtered table, totals, and bar chart
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Chart surface width in pixels (overrides config)
        #[arg(long)]
        width: Option<f64>,

        /// Chart surface height in pixels (overrides config)
        #[arg(long)]
        height: Option<f64>,
    },
    /// Filtered table and totals, no chart
    List(FilterArgs),
    /// Create a campaign
    Add(DraftArgs),
    /// Replace a campaign by id
    Edit {
        id: u64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a campaign (asks for confirmation)
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write the full collection as CSV
    Export {
        /// Output path (defaults to campaigns_export.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List distinct media channels in the store
    Media,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Free-text search over name and media channel
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Exact media channel
    #[arg(long)]
    media: Option<String>,

    /// Inclusive start-date lower bound (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Inclusive end-date upper bound (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,
}

#[derive(Args, Debug)]
struct DraftArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    media: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: String,

    /// Cost in currency units; unparseable values fall back to 0
    #[arg(long, default_value = "")]
    cost: String,

    /// Result count; unparseable values fall back to 0
    #[arg(long, default_value = "")]
    results: String,

    /// Reach count; unparseable values fall back to 0
    #[arg(long, default_value = "")]
    reach: String,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone().unwrap_or_default(),
            media: self.media.clone(),
            // Malformed bounds are "no constraint", not errors.
            from: self.from.as_deref().and_then(|s| s.parse().ok()),
            to: self.to.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

impl DraftArgs {
    fn to_draft(&self) -> anyhow::Result<CampaignDraft> {
        let start: NaiveDate = self
            .start
            .parse()
            .with_context(|| format!("invalid start date '{}'", self.start))?;
        let end: NaiveDate = self
            .end
            .parse()
            .with_context(|| format!("invalid end date '{}'", self.end))?;
        // Start after end is accepted; the original never validated it.
        Ok(CampaignDraft {
            name: self.name.clone(),
            media: self.media.clone(),
            start,
            end,
            cost: self.cost.parse::<Decimal>().unwrap_or(Decimal::ZERO),
            results: self.results.parse().unwrap_or(0),
            reach: self.reach.parse().unwrap_or(0),
        })
    }
}

fn confirm_delete(id: u64) -> anyhow::Result<bool> {
    print!("Delete campaign {id}? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(path) = cli.store {
        config.storage.path = path;
    }

    let backend = Box::new(JsonFileStore::new(&config.storage.path));
    let mut repo = CampaignRepository::open(backend, &config.storage.namespace)?;

    let surface = Surface {
        width: config.chart.width,
        height: config.chart.height,
    };
    let mut coordinator = ViewCoordinator::new(surface, config.debounce_ms);

    match cli.command {
        Command::Dashboard {
            filters,
            width,
            height,
        } => {
            let surface = Surface {
                width: width.unwrap_or(config.chart.width),
                height: height.unwrap_or(config.chart.height),
            };
            let mut coordinator = ViewCoordinator::new(surface, config.debounce_ms);
            let mut sinks = TerminalSinks::new(surface, true);
            coordinator.set_criteria(filters.criteria(), repo.records(), &mut sinks);
        }
        Command::List(args) => {
            let mut sinks = TerminalSinks::new(surface, false);
            coordinator.set_criteria(args.criteria(), repo.records(), &mut sinks);
        }
        Command::Add(args) => {
            let record = repo.create(args.to_draft()?)?;
            println!("Created campaign {} ({})", record.id, record.name);
            let mut sinks = TerminalSinks::new(surface, false);
            coordinator.on_records_changed(repo.records(), &mut sinks);
        }
        Command::Edit { id, draft } => {
            if repo.update(id, draft.to_draft()?)? {
                println!("Updated campaign {id}");
                let mut sinks = TerminalSinks::new(surface, false);
                coordinator.on_records_changed(repo.records(), &mut sinks);
            } else {
                anyhow::bail!("no campaign with id {id}");
            }
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm_delete(id)? {
                println!("Aborted.");
                return Ok(());
            }
            if repo.delete(id)? {
                println!("Deleted campaign {id}");
                let mut sinks = TerminalSinks::new(surface, false);
                coordinator.on_records_changed(repo.records(), &mut sinks);
            } else {
                anyhow::bail!("no campaign with id {id}");
            }
        }
        Command::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            let csv = export_csv(repo.records().list());
            std::fs::write(&path, csv)?;
            info!(path = %path.display(), "Exported collection");
            println!(
                "Exported {} campaigns to {}",
                repo.records().len(),
                path.display()
            );
        }
        Command::Media => {
            for channel in repo.records().media_channels() {
                println!("{channel}");
            }
        }
    }

    Ok(())
}
