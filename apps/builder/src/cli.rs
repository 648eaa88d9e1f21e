//! Command-line host: owns file IO, credentials and the export gate.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::completion::compute_completion_report;
use crate::config::Config;
use crate::editor::{CollectionEditor, ExperienceEditor, ExperienceField, ResumeStore};
use crate::errors::AppError;
use crate::export::{ExportError, Exporter, FileSink, GlyphRasterizer, PdfAssembler};
use crate::llm_client::LlmClient;
use crate::logging::LogFormat;
use crate::models::resume::ResumeData;
use crate::preview::{render_interactive, render_print};
use crate::summary::SummaryGenerator;
use crate::validation::validate;

#[derive(Debug, Parser)]
#[command(name = "builder", version, about = "Validate, preview, export and summarize résumé JSON")]
pub struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the sample résumé as JSON
    Sample,
    /// List every validation problem in a résumé file
    Validate { file: PathBuf },
    /// Show per-section completion status
    Status { file: PathBuf },
    /// Print the rendered preview tree as JSON
    Preview {
        file: PathBuf,
        /// Render the print projection used for export
        #[arg(long)]
        export: bool,
    },
    /// Export a résumé to PDF
    Export {
        file: PathBuf,
        /// Export even when validation fails
        #[arg(long)]
        force: bool,
        /// Overrides RESUME_OUTPUT_DIR
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Generate a professional summary and print the updated résumé
    Summarize { file: PathBuf },
    /// Rewrite one experience description and print the updated résumé
    Improve {
        file: PathBuf,
        /// Zero-based position in the experience list
        #[arg(long)]
        index: usize,
    },
    /// Suggest changes that better match a job description
    Tailor {
        file: PathBuf,
        /// Plain-text job description
        #[arg(long)]
        job: PathBuf,
    },
}

pub fn load_resume(path: &Path) -> Result<ResumeData, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::InvalidInput(format!("{} is not a valid résumé: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

/// Blocks export while any validation rule fails, unless forced.
fn export_gate(data: &ResumeData, force: bool) -> Result<(), AppError> {
    let messages = validate(data);
    if messages.is_empty() || force {
        return Ok(());
    }
    Err(AppError::Validation(messages))
}

pub async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    match cli.command {
        Command::Sample => print_json(&ResumeData::sample()),

        Command::Validate { file } => {
            let messages = validate(&load_resume(&file)?);
            if !messages.is_empty() {
                return Err(AppError::Validation(messages));
            }
            println!("{} is valid", file.display());
            Ok(())
        }

        Command::Status { file } => print_json(&compute_completion_report(&load_resume(&file)?)),

        Command::Preview { file, export } => {
            let data = load_resume(&file)?;
            let doc = if export {
                render_print(&data)
            } else {
                render_interactive(&data)
            };
            print_json(&doc)
        }

        Command::Export {
            file,
            force,
            output_dir,
        } => {
            let data = load_resume(&file)?;
            export_gate(&data, force)?;

            let font = config.font_path.as_deref().ok_or(ExportError::FontMissing)?;
            let exporter = Exporter::new(
                GlyphRasterizer::from_file(font)?,
                PdfAssembler,
                FileSink::new(output_dir.unwrap_or(config.output_dir)),
            );
            let receipt = exporter.export(&data).await?;
            print_json(&receipt)
        }

        Command::Summarize { file } => {
            let store = ResumeStore::new(load_resume(&file)?);
            let generator = SummaryGenerator::new(LlmClient::new());
            generator
                .generate_into(&store, config.anthropic_api_key.as_ref())
                .await?;
            print_json(&store.snapshot())
        }

        Command::Improve { file, index } => {
            let mut data = load_resume(&file)?;
            let entry = data.experience.get(index).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "no experience entry at index {index} ({} entries)",
                    data.experience.len()
                ))
            })?;
            let context = format!("{} at {}", entry.position, entry.company);
            let id = entry.id;

            let generator = SummaryGenerator::new(LlmClient::new());
            let improved = generator
                .improve_description(&entry.description, &context, config.anthropic_api_key.as_ref())
                .await?;
            info!(index, "description improved");

            data.experience = ExperienceEditor::update(&data.experience, id, ExperienceField::Description(improved));
            print_json(&data)
        }

        Command::Tailor { file, job } => {
            let data = load_resume(&file)?;
            let job_text = std::fs::read_to_string(&job)
                .map_err(|e| AppError::InvalidInput(format!("cannot read {}: {e}", job.display())))?;

            let generator = SummaryGenerator::new(LlmClient::new());
            let suggestions = generator
                .suggest_tailoring(&data, &job_text, config.anthropic_api_key.as_ref())
                .await?;
            println!("{suggestions}");
            Ok(())
        }
    }
}
