//! Définition et implémentation de la commande de conversion
//!
//! CSV StoryMap → tableau JSON pour le front-end cartographique.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use storymap::StoryMapError;
use tracing::info;

use crate::config::Config;
use crate::export::export_to_json;
use crate::report::ConversionReport;

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Source CSV file (default: env STORYMAP_SOURCE, or "StoryMapData - Sheet1.csv" next to the binary)
    pub source: Option<PathBuf>,

    /// Output JSON file (default: env STORYMAP_OUTPUT, or "storymapdata_v3.json" next to the binary)
    pub output: Option<PathBuf>,

    /// Column mapping: preset name (storymap) or path to a JSON file
    #[arg(long)]
    pub columns: Option<String>,

    /// Field delimiter: a single ASCII character or "tab"
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Reject rows whose cell count differs from the header
    #[arg(long)]
    pub strict: bool,

    /// Save the conversion report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Read and build projects without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

/// Exécute la conversion
///
/// Retourne le rapport si au moins un projet a été construit. Un fichier
/// source absent et une table sans projet valide sont des erreurs
/// distinctes; dans les deux cas rien n'est écrit.
pub fn cmd_convert(args: &ConvertArgs) -> Result<ConversionReport> {
    let started = Instant::now();

    let config = Config::resolve(
        args.source.clone(),
        args.output.clone(),
        args.columns.as_deref(),
        args.delimiter.as_deref(),
        args.strict,
    )?;

    info!(
        source = %config.source.display(),
        output = %config.output.display(),
        dry_run = args.dry_run,
        "Starting conversion"
    );
    println!("Reading CSV from: {}", config.source.display());

    let mut report = ConversionReport::new(&config.source, &config.output);
    report.dry_run = args.dry_run;

    // Lecture + construction
    let result = storymap::parse(&config.source, &config.parse)?;
    report.record_parse(&result);

    if result.projects.is_empty() {
        report.set_duration(started.elapsed());
        report.finalize();
        save_report(&report, args.report.as_deref())?;
        return Err(StoryMapError::NoValidRecords(config.source.clone()).into());
    }

    println!("Converted {} projects", result.projects.len());

    // Écriture
    if args.dry_run {
        info!("Dry run, skipping output");
    } else {
        println!("Writing JSON to: {}", config.output.display());
        export_to_json(&result.projects, &config.output)?;
        report.record_written(result.projects.len());
    }

    report.set_duration(started.elapsed());
    report.finalize();
    report.display();
    save_report(&report, args.report.as_deref())?;

    info!("{}", report.summary());

    Ok(report)
}

fn save_report(report: &ConversionReport, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Report saved");
    }
    Ok(())
}
