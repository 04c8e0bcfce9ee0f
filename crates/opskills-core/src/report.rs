//! Result presentation and the session-record export shape.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Category, ScoreResult, UserSelection};

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Display tier for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Medium,
    Low,
}

/// Lower bounds (inclusive) of the high and medium bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    #[serde(default = "default_high")]
    pub high: u8,
    #[serde(default = "default_medium")]
    pub medium: u8,
}

fn default_high() -> u8 {
    75
}

fn default_medium() -> u8 {
    50
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
        }
    }
}

impl Band {
    pub fn for_percent(percent: u8, thresholds: &BandThresholds) -> Self {
        if percent >= thresholds.high {
            Band::High
        } else if percent >= thresholds.medium {
            Band::Medium
        } else {
            Band::Low
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::High => write!(f, "high"),
            Band::Medium => write!(f, "medium"),
            Band::Low => write!(f, "low"),
        }
    }
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// The final-score line as shown to the user and stored in session records.
pub fn final_score_text(score: u8) -> String {
    format!("Final score: {score}% correct answers")
}

impl ScoreResult {
    /// Format the result as a markdown table, one row per category.
    pub fn to_markdown(&self, sector: &str, role: &str, thresholds: &BandThresholds) -> String {
        let mut md = String::new();

        md.push_str(&format!("**{role}** in **{sector}**\n\n"));
        md.push_str("| Category | Matched | Score | Band |\n");
        md.push_str("|----------|---------|-------|------|\n");
        for c in &self.categories {
            md.push_str(&format!(
                "| {} | {}/{} | {}% | {} |\n",
                c.category.heading(),
                c.matched,
                c.total,
                c.percent,
                Band::for_percent(c.percent, thresholds)
            ));
        }
        md.push('\n');
        md.push_str(&format!("**{}**\n", final_score_text(self.final_score)));

        md
    }
}

// ---------------------------------------------------------------------------
// Session record
// ---------------------------------------------------------------------------

/// Details a respondent adds after seeing their results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespondentInfo {
    pub job_title: String,
    pub industry: String,
    pub country: String,
}

/// Flat record of one finished session, keyed the way the external store
/// names its columns. Selections are comma-joined per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Final Score")]
    pub final_score: String,
    #[serde(rename = "Personal/Soft")]
    pub personal: String,
    #[serde(rename = "Management")]
    pub management: String,
    #[serde(rename = "Collab/Comm")]
    pub collaboration: String,
    #[serde(rename = "Interaction/UX")]
    pub interaction: String,
    #[serde(rename = "Analytical")]
    pub analytical: String,
    #[serde(rename = "Operational")]
    pub operational: String,
    #[serde(rename = "Technical")]
    pub technical: String,
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Context")]
    pub context: String,
    #[serde(rename = "Country")]
    pub country: String,
}

impl SessionRecord {
    pub fn new(sector: &str, role: &str, selections: &UserSelection, result: &ScoreResult) -> Self {
        let joined = |category: Category| selections.in_category(category).collect::<Vec<_>>().join(", ");

        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            role: role.to_string(),
            scenario: sector.to_string(),
            final_score: final_score_text(result.final_score),
            personal: joined(Category::Personal),
            management: joined(Category::Management),
            collaboration: joined(Category::Collaboration),
            interaction: joined(Category::Interaction),
            analytical: joined(Category::Analytical),
            operational: joined(Category::Operational),
            technical: joined(Category::Technical),
            job: String::new(),
            context: String::new(),
            country: String::new(),
        }
    }

    /// Fill in the respondent columns.
    pub fn with_respondent(mut self, info: RespondentInfo) -> Self {
        self.job = info.job_title;
        self.context = info.industry;
        self.country = info.country;
        self
    }

    /// Save the record as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write record: {}", path.display()))?;
        Ok(())
    }
}
