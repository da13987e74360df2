//! Parfum CLI
//!
//! Command-line interface for the olfactory classifier: classify note
//! compositions, resolve labels, browse vocabularies, validate product files
//! and filter catalogs by family.
//!
//! ## Environment Variables
//! - `PARFUM_OUTPUT`: `text` (default) or `json`
//! - `PARFUM_SHOW_IDS`: `1`/`true` to print note ids next to labels
//! - `RUST_LOG`: tracing filter (default: `parfum=info`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use parfum_cli::{
    parse_composition, parse_document, parse_note_list, read_source, render_classification,
    render_explanation, render_families, render_family_counts, render_labels, render_notes,
    render_products, validate_document, OutputConfig, OutputFormat,
};
use parfum_olfactory::{Catalog, Family, FamilySet, NoteCollection, Tier};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "parfum")]
#[command(author, version, about = "Olfactory classification for the perfume catalog", long_about = None)]
struct Cli {
    /// Output format (overrides PARFUM_OUTPUT)
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Print note ids next to their labels
    #[arg(long, global = true)]
    ids: bool,

    /// Compact JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// Disable colored status lines
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the olfactory families of a note composition
    Classify {
        /// Top notes, comma-separated
        #[arg(long, value_name = "IDS")]
        top: Option<String>,

        /// Heart notes, comma-separated
        #[arg(long, value_name = "IDS")]
        heart: Option<String>,

        /// Base notes, comma-separated
        #[arg(long, value_name = "IDS")]
        base: Option<String>,

        /// Product or {top, heart, base} JSON file (use - for stdin)
        #[arg(short, long, value_name = "FILE", conflicts_with_all = ["top", "heart", "base"])]
        file: Option<PathBuf>,

        /// Show which notes triggered each family
        #[arg(short, long)]
        explain: bool,
    },

    /// Resolve display labels for note ids
    Label {
        /// Tier: top, heart or base
        #[arg(value_parser = parse_tier)]
        tier: Tier,

        /// Note ids
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },

    /// List the notes of a tier
    Notes {
        /// Tier: top, heart or base
        #[arg(value_parser = parse_tier)]
        tier: Tier,

        /// Only notes whose id or label contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List the olfactory families and their qualifying notes
    Families,

    /// Check that a product (or every product of a catalog) can be saved
    Validate {
        /// Product, note collection or catalog JSON file (use - for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List catalog products matching any of the given families
    Filter {
        /// Catalog JSON file (array of products)
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Family label, e.g. "Boisé" or "woody" (repeatable)
        #[arg(short, long = "family", value_parser = parse_family)]
        families: Vec<Family>,

        /// Print product counts per family instead of products
        #[arg(long)]
        counts: bool,
    },
}

fn parse_tier(raw: &str) -> Result<Tier, String> {
    raw.parse().map_err(|e: parfum_olfactory::OlfactoryError| e.to_string())
}

fn parse_family(raw: &str) -> Result<Family, String> {
    raw.parse().map_err(|e: parfum_olfactory::OlfactoryError| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = build_config(&cli);

    let result = match &cli.command {
        Commands::Classify {
            top,
            heart,
            base,
            file,
            explain,
        } => classify_command(
            top.as_deref(),
            heart.as_deref(),
            base.as_deref(),
            file.as_deref(),
            *explain,
            &config,
        ),
        Commands::Label { tier, ids } => label_command(*tier, ids, &config),
        Commands::Notes { tier, search } => notes_command(*tier, search.as_deref(), &config),
        Commands::Families => families_command(&config),
        Commands::Validate { file } => validate_command(file, &config),
        Commands::Filter {
            catalog,
            families,
            counts,
        } => filter_command(catalog, families, *counts, &config),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "parfum=debug,parfum_cli=debug,parfum_olfactory=debug"
    } else {
        "parfum=info,parfum_cli=info,parfum_olfactory=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> OutputConfig {
    // Environment first, flags override
    let mut config = OutputConfig::from_env();

    if let Some(format) = cli.format {
        config.format = match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
    }

    if cli.ids {
        config.show_ids = true;
    }

    if cli.compact {
        config.pretty = false;
    }

    config
}

fn read_input(path: &Path) -> Result<String> {
    read_source(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn classify_command(
    top: Option<&str>,
    heart: Option<&str>,
    base: Option<&str>,
    file: Option<&Path>,
    explain: bool,
    config: &OutputConfig,
) -> Result<bool> {
    let (name, notes) = match file {
        Some(path) => {
            let source = read_input(path)?;
            let composition = parse_composition(&source)
                .with_context(|| format!("Invalid composition: {}", path.display()))?;
            (composition.name, composition.notes)
        }
        None => {
            let notes = NoteCollection::from_tiers(
                top.map(parse_note_list).unwrap_or_default(),
                heart.map(parse_note_list).unwrap_or_default(),
                base.map(parse_note_list).unwrap_or_default(),
            );
            (None, notes)
        }
    };

    tracing::debug!(notes = notes.len(), "classifying composition");

    let rendered = if explain {
        render_explanation(&notes, config)?
    } else {
        render_classification(name.as_deref(), &notes, config)?
    };
    println!("{rendered}");

    Ok(true)
}

fn label_command(tier: Tier, ids: &[String], config: &OutputConfig) -> Result<bool> {
    println!("{}", render_labels(tier, ids, config)?);
    Ok(true)
}

fn notes_command(tier: Tier, search: Option<&str>, config: &OutputConfig) -> Result<bool> {
    let notes = tier.search(search.unwrap_or_default());
    if notes.is_empty() && !config.is_json() {
        eprintln!("{} no {} note matches", "warning:".yellow().bold(), tier);
        return Ok(true);
    }

    println!("{}", render_notes(&notes, config)?);
    Ok(true)
}

fn families_command(config: &OutputConfig) -> Result<bool> {
    println!("{}", render_families(config)?);
    Ok(true)
}

fn validate_command(path: &Path, config: &OutputConfig) -> Result<bool> {
    let source = read_input(path)?;
    let document = parse_document(&source)
        .with_context(|| format!("Invalid document: {}", path.display()))?;

    let report = validate_document(&document, &path.display().to_string(), config)?;
    if !report.rendered.is_empty() {
        println!("{}", report.rendered);
    }

    if !config.is_json() {
        if report.is_valid() {
            eprintln!("{} {} checked", "valid".green().bold(), report.checked);
        } else {
            eprintln!(
                "{} {} of {} failed",
                "invalid".red().bold(),
                report.failed,
                report.checked
            );
        }
    }

    Ok(report.is_valid())
}

fn filter_command(
    path: &Path,
    families: &[Family],
    counts: bool,
    config: &OutputConfig,
) -> Result<bool> {
    let source = read_input(path)?;
    let catalog = Catalog::from_json(&source)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;

    if counts {
        println!("{}", render_family_counts(&catalog.family_counts(), config)?);
        return Ok(true);
    }

    let wanted: FamilySet = families.iter().copied().collect();
    let products = catalog.filter_by_families(&wanted);
    println!("{}", render_products(&products, config)?);

    Ok(true)
}
