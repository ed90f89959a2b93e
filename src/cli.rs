// ABOUTME: CLI definition and command dispatch for the leadscope dashboard.
// ABOUTME: Subcommands mirror the dashboard views: leads table, insights, CSV export, scoring.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use leadscope_client::{ApiClient, LeadQuery};
use leadscope_core::{
    LeadFilter, LeadView, ScoreBand, SortKey, SortOrder, SortSpec, export_csv, score_distribution,
};

use crate::render;

#[derive(Debug, Parser)]
#[command(name = "leadscope", about = "Terminal dashboard for a lead-scoring API")]
pub struct Cli {
    /// API base URL. Overrides LEADSCOPE_API_BASE.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch leads and render the filtered, searched, sorted table.
    Leads(ViewArgs),
    /// Render the score-distribution histogram for the filtered leads.
    Insights(FilterArgs),
    /// Write the filtered leads to a CSV file.
    Export(ExportArgs),
    /// Score a single lead: reads a JSON object from a file or stdin.
    Score(ScoreArgs),
}

/// Filter-bar criteria, shared by every view.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Keep only this industry (case-insensitive exact match).
    #[arg(long)]
    pub industry: Option<String>,

    /// Keep only this region (case-insensitive exact match).
    #[arg(long)]
    pub region: Option<String>,

    /// Keep only leads scoring at least this value (inclusive).
    #[arg(long, default_value_t = 0)]
    pub min_score: i64,
}

impl FilterArgs {
    fn to_filter(&self) -> LeadFilter {
        LeadFilter {
            industry: self.industry.clone(),
            region: self.region.clone(),
            min_score: self.min_score,
        }
    }
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Substring search over company, industry, and region.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort column. Score sorts highest-first by default; every other column
    /// starts ascending, as in the dashboard table.
    #[arg(long, value_enum, default_value_t = SortColumn::Score)]
    pub sort_by: SortColumn,

    /// Force ascending order.
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Force descending order.
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Company,
    Industry,
    Region,
    Revenue,
    Score,
}

impl SortColumn {
    fn key(self) -> SortKey {
        match self {
            SortColumn::Company => SortKey::CompanyName,
            SortColumn::Industry => SortKey::Industry,
            SortColumn::Region => SortKey::Region,
            SortColumn::Revenue => SortKey::RevenueEstimate,
            SortColumn::Score => SortKey::Score,
        }
    }
}

impl ViewArgs {
    fn sort_spec(&self) -> SortSpec {
        let key = self.sort_by.key();
        let order = if self.asc {
            SortOrder::Asc
        } else if self.desc {
            SortOrder::Desc
        } else if key == SortKey::Score {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        SortSpec { key, order }
    }
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output path for the CSV file.
    #[arg(long, default_value = "top_leads.csv")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Path to a JSON lead object. Reads stdin when omitted.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute the parsed command against the configured API.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = match cli.api_base {
        Some(base) => ApiClient::new(base),
        None => ApiClient::from_env(),
    };

    match cli.command {
        Command::Leads(args) => {
            let mut view = fetch_view(&client, &args.filter).await?;
            if let Some(search) = &args.search {
                view.set_query(search);
            }
            view.sort = args.sort_spec();
            println!("{}", render::lead_table(&view.visible()));
        }
        Command::Insights(filter) => {
            let view = fetch_view(&client, &filter).await?;
            let distribution = score_distribution(view.filtered());
            println!("{}", render::histogram(&distribution));
        }
        Command::Export(args) => {
            let view = fetch_view(&client, &args.filter).await?;
            let rows = view.filtered();
            let csv = export_csv(rows.iter().copied());
            std::fs::write(&args.output, csv)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            tracing::info!(path = %args.output.display(), count = rows.len(), "exported leads");
            println!("Exported {} leads to {}", rows.len(), args.output.display());
        }
        Command::Score(args) => {
            let raw = match &args.file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())
                    .context("failed to read lead JSON from stdin")?,
            };
            let payload: serde_json::Value =
                serde_json::from_str(&raw).context("lead input is not valid JSON")?;
            let resp = client
                .score_lead(&payload)
                .await
                .context("failed to score lead")?;
            println!("score: {} ({})", resp.score, ScoreBand::of(resp.score).label());
        }
    }

    Ok(())
}

/// Fetch the full lead list and wrap it in a view with the given filter
/// applied client-side, as the dashboard does.
async fn fetch_view(client: &ApiClient, filter: &FilterArgs) -> anyhow::Result<LeadView> {
    let leads = client
        .fetch_leads(&LeadQuery::default())
        .await
        .context("failed to fetch leads")?;
    let mut view = LeadView::new(leads);
    view.filter = filter.to_filter();
    Ok(view)
}
