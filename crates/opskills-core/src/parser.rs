//! TOML answer-sheet parser.
//!
//! An answer sheet is a finalized snapshot of one quiz session: the sector,
//! the role, and the labels picked under each category.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, ScoreResult, UserSelection};
use crate::reference::{catalog_label, category_of, listing_categories};
use crate::report::RespondentInfo;
use crate::resolver::lookup_context;
use crate::scoring::score;

/// Intermediate TOML structure for answer-sheet files.
#[derive(Debug, Deserialize)]
struct TomlAnswerSheet {
    sector: String,
    role: String,
    #[serde(default)]
    selections: BTreeMap<String, Vec<String>>,
    respondent: Option<RespondentInfo>,
}

/// One session's finalized inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    pub sector: String,
    pub role: String,
    pub selections: UserSelection,
    /// Job, industry and country, when the respondent gave them.
    pub respondent: Option<RespondentInfo>,
}

impl AnswerSheet {
    pub fn new(sector: impl Into<String>, role: impl Into<String>, selections: UserSelection) -> Self {
        Self {
            sector: sector.into(),
            role: role.into(),
            selections,
            respondent: None,
        }
    }

    /// Score this sheet against the answer key.
    pub fn score(&self) -> ScoreResult {
        score(&self.sector, &self.role, &self.selections)
    }
}

/// Parse a single TOML file into an `AnswerSheet`.
pub fn parse_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    parse_answer_sheet_str(&content, path)
}

/// Parse a TOML string into an `AnswerSheet` (useful for testing).
pub fn parse_answer_sheet_str(content: &str, source_path: &Path) -> Result<AnswerSheet> {
    let parsed: TomlAnswerSheet = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut selections = UserSelection::new();
    for (name, labels) in parsed.selections {
        let category: Category = name
            .parse()
            .with_context(|| format!("in [selections] of {}", source_path.display()))?;
        selections.select(category, labels);
    }

    Ok(AnswerSheet {
        sector: parsed.sector,
        role: parsed.role,
        selections,
        respondent: parsed.respondent,
    })
}

/// Recursively load all `.toml` answer sheets from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<(std::path::PathBuf, AnswerSheet)>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_answer_sheet(&path) {
                Ok(sheet) => sheets.push((path, sheet)),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sheets)
}

/// A warning from answer-sheet validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The label concerned (if applicable).
    pub label: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an answer sheet for common issues.
///
/// None of these stop a sheet from being scored; they explain why a score
/// may come out lower than expected.
pub fn validate_answer_sheet(sheet: &AnswerSheet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if let Err(e) = lookup_context(&sheet.sector, &sheet.role) {
        warnings.push(ValidationWarning {
            label: None,
            message: format!("{e}; every score will be 0"),
        });
    }

    for (category, label) in sheet.selections.entries() {
        let Some(known) = catalog_label(label) else {
            warnings.push(ValidationWarning {
                label: Some(label.to_string()),
                message: "not a skill in the catalog".into(),
            });
            continue;
        };

        if !listing_categories(known).contains(&category) {
            let owner = category_of(known)
                .map(|c| c.title())
                .unwrap_or("no category");
            warnings.push(ValidationWarning {
                label: Some(label.to_string()),
                message: format!(
                    "selected under {} but listed under {}; scored as {owner}",
                    category.title(),
                    listing_categories(known)
                        .iter()
                        .map(|c| c.title())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
sector = "FOOD SECTOR"
role = "SMART LINE OPERATOR"

[selections]
technical = ["Quality assessment", "Process awareness"]
"Collab/Comm" = ["Digital systems usage"]
operational = ["Task knowledge"]
"#;

    #[test]
    fn parse_valid_toml() {
        let sheet = parse_answer_sheet_str(VALID_TOML, &PathBuf::from("sheet.toml")).unwrap();
        assert_eq!(sheet.sector, "FOOD SECTOR");
        assert_eq!(sheet.role, "SMART LINE OPERATOR");
        assert_eq!(sheet.selections.len(), 4);
        assert!(sheet
            .selections
            .is_selected(Category::Collaboration, "Digital systems usage"));
    }

    #[test]
    fn parse_without_selections() {
        let toml = r#"
sector = "food"
role = "tech solver"
"#;
        let sheet = parse_answer_sheet_str(toml, &PathBuf::from("sheet.toml")).unwrap();
        assert!(sheet.selections.is_empty());
        assert_eq!(sheet.score().final_score, 0);
    }

    #[test]
    fn parse_respondent_table() {
        let toml = r#"
sector = "FOOD SECTOR"
role = "TECH SOLVER"

[respondent]
job_title = "Line lead"
country = "Italy"
"#;
        let sheet = parse_answer_sheet_str(toml, &PathBuf::from("sheet.toml")).unwrap();
        let info = sheet.respondent.unwrap();
        assert_eq!(info.job_title, "Line lead");
        assert_eq!(info.industry, "");
        assert_eq!(info.country, "Italy");

        let sheet = parse_answer_sheet_str(VALID_TOML, &PathBuf::from("sheet.toml")).unwrap();
        assert!(sheet.respondent.is_none());
    }

    #[test]
    fn parse_unknown_category_fails() {
        let toml = r#"
sector = "FOOD SECTOR"
role = "TECH SOLVER"

[selections]
leadership = ["Team management"]
"#;
        let err = parse_answer_sheet_str(toml, &PathBuf::from("sheet.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown category: leadership"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "sector = [not valid";
        assert!(parse_answer_sheet_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn sheet_scores_through_engine() {
        let sheet = parse_answer_sheet_str(VALID_TOML, &PathBuf::from("sheet.toml")).unwrap();
        let result = sheet.score();
        assert_eq!(result.category(Category::Technical).unwrap().matched, 3);
        assert_eq!(result.percent(Category::Operational), 25);
        assert_eq!(result.total_matched, 4);
    }

    #[test]
    fn validate_clean_sheet() {
        let sheet = AnswerSheet::new(
            "FOOD SECTOR",
            "TECH SOLVER",
            UserSelection::new().with(Category::Technical, ["Robot programming"]),
        );
        assert!(validate_answer_sheet(&sheet).is_empty());
    }

    #[test]
    fn validate_flags_unknown_context_and_labels() {
        let sheet = AnswerSheet::new(
            "MOON SECTOR",
            "TECH SOLVER",
            UserSelection::new()
                .with(Category::Personal, ["Juggling"])
                .with(Category::Management, ["quality assessment"]),
        );
        let warnings = validate_answer_sheet(&sheet);
        assert!(warnings.iter().any(|w| w.message.contains("sector not found")));
        assert!(warnings
            .iter()
            .any(|w| w.label.as_deref() == Some("Juggling") && w.message.contains("catalog")));
        assert!(warnings.iter().any(|w| {
            w.label.as_deref() == Some("quality assessment")
                && w.message.contains("scored as Technical")
        }));
    }

    #[test]
    fn collab_placement_is_not_flagged() {
        let sheet = AnswerSheet::new(
            "FOOD SECTOR",
            "SMART LINE OPERATOR",
            UserSelection::new().with(Category::Collaboration, ["Quality assessment"]),
        );
        assert!(validate_answer_sheet(&sheet).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "sector = ").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sheets = load_sheet_directory(dir.path()).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].1.sector, "FOOD SECTOR");
    }
}
