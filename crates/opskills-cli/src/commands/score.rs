//! The `opskills score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use opskills_core::model::ScoreResult;
use opskills_core::parser::{self, AnswerSheet};
use opskills_core::report::{final_score_text, Band, BandThresholds, SessionRecord};

use crate::config::{OpskillsConfig, FORMATS};

#[derive(Serialize)]
struct ScoredSheet<'a> {
    path: String,
    sector: &'a str,
    role: &'a str,
    result: &'a ScoreResult,
}

pub fn execute(
    sheet_path: PathBuf,
    format: Option<String>,
    export: Option<PathBuf>,
    config: &OpskillsConfig,
) -> Result<()> {
    let format = format.unwrap_or_else(|| config.output_format.clone());
    anyhow::ensure!(
        FORMATS.contains(&format.as_str()),
        "unknown format '{format}', expected one of {FORMATS:?}"
    );

    let sheets = if sheet_path.is_dir() {
        parser::load_sheet_directory(&sheet_path)?
    } else {
        vec![(sheet_path.clone(), parser::parse_answer_sheet(&sheet_path)?)]
    };
    anyhow::ensure!(!sheets.is_empty(), "no answer sheets found in {}", sheet_path.display());
    tracing::debug!(count = sheets.len(), "loaded answer sheets");

    if export.is_some() && sheets.len() > 1 {
        anyhow::bail!("--export needs a single answer sheet, found {}", sheets.len());
    }

    let mut scored = Vec::with_capacity(sheets.len());
    for (path, sheet) in &sheets {
        for w in parser::validate_answer_sheet(sheet) {
            let prefix = w
                .label
                .as_ref()
                .map(|label| format!("  [{label}]"))
                .unwrap_or_else(|| "  ".to_string());
            eprintln!("{}:{prefix} WARNING: {}", path.display(), w.message);
        }
        scored.push((path, sheet, sheet.score()));
    }

    match format.as_str() {
        "json" => {
            let out: Vec<ScoredSheet<'_>> = scored
                .iter()
                .map(|(path, sheet, result)| ScoredSheet {
                    path: path.display().to_string(),
                    sector: &sheet.sector,
                    role: &sheet.role,
                    result,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        "markdown" | "md" => {
            for (_, sheet, result) in &scored {
                println!("{}", result.to_markdown(&sheet.sector, &sheet.role, &config.bands));
            }
        }
        _ => {
            for (path, sheet, result) in &scored {
                println!("{}", path.display());
                print_table(sheet, result, &config.bands);
            }
        }
    }

    if let Some(export_path) = export {
        let (_, sheet, result) = &scored[0];
        let mut record = SessionRecord::new(&sheet.sector, &sheet.role, &sheet.selections, result);
        if let Some(info) = &sheet.respondent {
            record = record.with_respondent(info.clone());
        }
        record.save_json(&export_path)?;
        eprintln!("Session record saved to: {}", export_path.display());
    }

    Ok(())
}

fn print_table(sheet: &AnswerSheet, result: &ScoreResult, bands: &BandThresholds) {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Matched", "Score", "Band"]);

    for c in &result.categories {
        table.add_row(vec![
            Cell::new(c.category.heading()),
            Cell::new(format!("{}/{}", c.matched, c.total)),
            Cell::new(format!("{}%", c.percent)),
            Cell::new(Band::for_percent(c.percent, bands)),
        ]);
    }

    println!("Role: {}  Sector: {}", sheet.role, sheet.sector);
    println!("{table}");
    println!("{}\n", final_score_text(result.final_score));
}
