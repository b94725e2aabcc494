use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use semtype_core::{
    profile_columns, sample_similarity, sample_topk_indicator, TypeCatalog, DEFAULT_TOP_K,
};
use semtype_dataset::ColumnTable;
use semtype_model::WordVectors;

/// Profile dataset columns against a type ontology using word embeddings
#[derive(Parser, Debug)]
#[command(name = "semtype")]
#[command(about = "Semantic column-type profiling for tabular datasets", long_about = None)]
struct Args {
    /// Path to the CSV dataset to profile
    #[arg(short, long)]
    dataset: PathBuf,

    /// Path to the word2vec text-format embeddings file
    #[arg(short, long)]
    embeddings: PathBuf,

    /// Path to the type ontology, one type label per line
    #[arg(short, long)]
    types: PathBuf,

    /// Per-sample scoring mode
    #[arg(long, value_enum, default_value_t = Scoring::Average)]
    scoring: Scoring,

    /// Neighborhood size for top-k scoring
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// How many types to report per column
    #[arg(long, default_value_t = 20)]
    report_top: usize,

    /// Keep columns that contain missing values
    #[arg(long)]
    keep_missing: bool,

    /// Write the full results as JSON to this path ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scoring {
    /// Average rescaled similarity per type
    Average,
    /// Share of samples ranking each type among the k nearest
    TopK,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting semtype v{}", env!("CARGO_PKG_VERSION"));

    let started = Instant::now();
    let model = WordVectors::load(&args.embeddings)?;
    info!(
        "Loaded {} word vectors of dimension {} in {:.2?}",
        model.len(),
        model.dim(),
        started.elapsed()
    );

    let labels: Vec<String> = fs::read_to_string(&args.types)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    let (catalog, dropped_labels) = TypeCatalog::from_labels(&labels, &model);
    info!(
        "Type catalog: {} of {} labels in vocabulary",
        catalog.len(),
        labels.len()
    );
    if !dropped_labels.is_empty() {
        info!("Dropped type labels: {:?}", dropped_labels);
    }

    let mut table = ColumnTable::from_path(&args.dataset)?;
    let non_text = table.retain_text_columns();
    if !non_text.is_empty() {
        info!("Dropped non-text columns: {:?}", non_text);
    }
    if !args.keep_missing {
        let missing = table.drop_missing_columns();
        if !missing.is_empty() {
            info!("Dropped columns with missing values: {:?}", missing);
        }
    }

    // Header names are profiling input too: score them as a pseudo-column
    // alongside the retained data columns.
    let columns: Vec<(&str, &[String])> = std::iter::once(("headers", table.header_row()))
        .chain(table.columns())
        .collect();

    let results = match args.scoring {
        Scoring::Average => profile_columns(columns, &catalog, &model, sample_similarity)?,
        Scoring::TopK => {
            let k = args.top_k;
            profile_columns(columns, &catalog, &model, |sample, cat, m| {
                sample_topk_indicator(sample, cat, m, k)
            })?
        }
    };

    for result in &results {
        println!("\ncolumn: {}", result.column);
        for (label, score) in result.top_types(args.report_top) {
            println!("  {:<40} {:.4}", label, score);
        }
    }

    if let Some(path) = &args.json {
        let rendered = serde_json::to_string_pretty(&results)?;
        if path.as_os_str() == "-" {
            println!("{rendered}");
        } else {
            fs::write(path, rendered)?;
            info!("Wrote JSON report to {}", path.display());
        }
    }

    Ok(())
}
