//! `cintel analyze` command handler.

use std::cell::RefCell;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use cintel_analysis::AnalysisClient;
use cintel_core::{AnalysisResponse, AppConfig, LayeredCredentials, RosterInput, SettingsStore};
use cintel_graph::GraphClient;
use cintel_ingest::{InputFile, Normalizer};

use crate::pipeline::{Pipeline, PipelineOutcome};
use crate::view::{
    filter_creators, find_creator, render_summary, render_table, to_csv, to_json, Dashboard,
    DetailView, ViewState,
};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Roster text (handles, pasted CSV, notes); `-` reads it from stdin
    #[arg(long)]
    pub text: Option<String>,

    /// Roster file: csv, txt, xlsx, xls, ods, docx, pdf, or an image (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Only show creators whose handle or niche contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the full analysis for one creator
    #[arg(long, value_name = "HANDLE", conflicts_with = "details")]
    pub detail: Option<String>,

    /// Print the full analysis for every creator shown
    #[arg(long)]
    pub details: bool,

    /// Write the full report as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the raw report as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Skip live social-graph enrichment
    #[arg(long)]
    pub no_enrich: bool,
}

/// Runs one analysis and prints the report.
///
/// # Errors
///
/// Returns an error if a client cannot be built, the analysis halts, or an
/// export file cannot be written.
pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let input = gather_input(args)?;

    let analysis = AnalysisClient::from_config(config)?;
    let graph = if args.no_enrich {
        None
    } else {
        Some(GraphClient::from_config(config)?)
    };
    let credentials = LayeredCredentials::new(
        SettingsStore::new(config.settings_path.clone()),
        config.meta_access_token.clone(),
    );
    let pipeline = Pipeline {
        analysis: &analysis,
        graph: graph.as_ref(),
        credentials: &credentials,
        max_enrich: config.max_enrich,
    };

    let dashboard = RefCell::new(Dashboard::new());
    let ticket = dashboard.borrow_mut().begin();
    let run = pipeline.run(&input, |stage| {
        if dashboard.borrow_mut().set_stage(ticket, stage) {
            eprintln!("{stage}");
        }
    });
    let result = tokio::select! {
        outcome = run => outcome
            .map(|outcome| {
                report_gaps(&outcome);
                outcome.response
            })
            .map_err(|e| e.to_string()),
        _ = tokio::signal::ctrl_c() => {
            // Any result still in flight is discarded with the old ticket.
            dashboard.borrow_mut().reset();
            anyhow::bail!("analysis cancelled");
        }
    };

    let mut dashboard = dashboard.into_inner();
    dashboard.complete(ticket, result);

    match dashboard.state() {
        ViewState::Results(response) => present(response, args),
        ViewState::Failed(message) => anyhow::bail!("Analysis halted: {message}"),
        ViewState::Idle | ViewState::Loading { .. } => Ok(()),
    }
}

/// Merges `--text` and every `--file` into one payload. Unreadable or
/// unparseable files are reported and skipped.
fn gather_input(args: &AnalyzeArgs) -> anyhow::Result<RosterInput> {
    let mut normalizer = Normalizer::new();

    if let Some(text) = &args.text {
        if text == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read roster text from stdin")?;
            normalizer.push_text(&buf);
        } else {
            normalizer.push_text(text);
        }
    }

    for path in &args.files {
        match InputFile::from_path(path) {
            Ok(file) => normalizer.ingest(&file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read input file");
                eprintln!("skipped {}: {e}", path.display());
            }
        }
    }
    for failure in normalizer.failures() {
        eprintln!("skipped {}: {}", failure.name, failure.error);
    }
    for name in normalizer.skipped() {
        eprintln!("skipped {name}: unsupported file type");
    }

    Ok(normalizer.into_input())
}

fn report_gaps(outcome: &PipelineOutcome) {
    let failed = outcome.signals.iter().filter(|s| !s.is_ok()).count();
    if failed > 0 {
        eprintln!(
            "note: live signals unavailable for {failed} of {} looked-up creators",
            outcome.signals.len()
        );
    }
    if !outcome.violations.is_empty() {
        eprintln!(
            "note: {} value(s) in the report fall outside the rubric (see logs)",
            outcome.violations.len()
        );
    }
    if !outcome.reconciliation.missing.is_empty() {
        eprintln!(
            "note: {} of {} roster handles are missing from the report: {}",
            outcome.reconciliation.missing.len(),
            outcome.handles.len(),
            outcome.reconciliation.missing.join(", ")
        );
    }
}

/// Prints the report and writes the requested exports.
///
/// Exports are written first. An unknown `--detail` handle prints a note
/// and is otherwise ignored.
pub(crate) fn present(response: &AnalysisResponse, args: &AnalyzeArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.csv {
        write_export(path, &to_csv(response))?;
    }
    if let Some(path) = &args.json {
        write_export(path, &to_json(response)?)?;
    }

    let shown = filter_creators(&response.creators, args.filter.as_deref().unwrap_or(""));

    println!(
        "{}",
        render_summary(&response.summary, shown.len(), response.creators.len())
    );
    println!();
    println!("{}", render_table(&shown));

    if let Some(handle) = &args.detail {
        if let Some(creator) = find_creator(&response.creators, handle) {
            println!();
            print!("{}", DetailView(creator));
        } else {
            tracing::warn!(handle = %handle, "requested creator not in report");
            eprintln!("note: creator '{handle}' is not in the report; detail skipped");
        }
    } else if args.details {
        for creator in &shown {
            println!();
            print!("{}", DetailView(creator));
        }
    }

    Ok(())
}

fn write_export(path: &Path, body: &str) -> anyhow::Result<()> {
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = body.len(), "wrote export");
    eprintln!("wrote {}", path.display());
    Ok(())
}
