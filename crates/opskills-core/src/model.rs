//! Core data model types for opskills.
//!
//! The quiz works over three fixed enumerations (sectors, roles, skill
//! categories), a mutable per-session selection of skills, and the derived
//! score for that selection.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::normalize::canonicalize_key;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the seven skill groupings.
///
/// Declaration order is table order, which also decides ownership of labels
/// listed under more than one category (the later category wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Management,
    Collaboration,
    Interaction,
    Analytical,
    Operational,
    Technical,
}

impl Category {
    pub const COUNT: usize = 7;

    /// All categories in table order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Personal,
        Category::Management,
        Category::Collaboration,
        Category::Interaction,
        Category::Analytical,
        Category::Operational,
        Category::Technical,
    ];

    /// Title used as the key of the category table.
    pub fn title(self) -> &'static str {
        match self {
            Category::Personal => "Personal/Soft",
            Category::Management => "Management",
            Category::Collaboration => "Collab/Comm",
            Category::Interaction => "Interaction/UX",
            Category::Analytical => "Analytical",
            Category::Operational => "Operational",
            Category::Technical => "Technical",
        }
    }

    /// Short key used in score results and answer sheets.
    pub fn key(self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Management => "management",
            Category::Collaboration => "collaboration",
            Category::Interaction => "interaction",
            Category::Analytical => "analytical",
            Category::Operational => "operational",
            Category::Technical => "technical",
        }
    }

    /// Heading shown above the category's score.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Personal => "Personal/Soft Skills",
            Category::Management => "Management Skills",
            Category::Collaboration => "Collaboration and Communication Skills",
            Category::Interaction => "Interaction UX Skills",
            Category::Analytical => "Analytical Skills",
            Category::Operational => "Operational Skills",
            Category::Technical => "Technical Skills",
        }
    }

    /// Position in table order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = QuizError;

    /// Accepts the table title, the result key, or any spelling of either
    /// that agrees after key canonicalization ("Collab/Comm", "collab-comm",
    /// "collaboration" and "collab" all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = canonicalize_key(s);
        if wanted == "collab" {
            return Ok(Category::Collaboration);
        }
        Category::ALL
            .into_iter()
            .find(|c| canonicalize_key(c.title()) == wanted || c.key() == wanted)
            .ok_or_else(|| QuizError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Sector / Role
// ---------------------------------------------------------------------------

/// An industrial sector the quiz is played against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Food,
    Automotive,
    Logistic,
}

impl Sector {
    /// All sectors in selection-screen order.
    pub const ALL: [Sector; 3] = [Sector::Food, Sector::Automotive, Sector::Logistic];

    pub fn id(self) -> u8 {
        match self {
            Sector::Food => 1,
            Sector::Automotive => 2,
            Sector::Logistic => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Sector::Food => "FOOD SECTOR",
            Sector::Automotive => "AUTOMOTIVE SECTOR",
            Sector::Logistic => "LOGISTIC SECTOR",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Sector::Food => {
                "Products arrive from the field in boxes and bins of varying size, are sorted \
                 gently by dimension and packed to market requirements. Automated sorting and \
                 packing rely on new gripping concepts."
            }
            Sector::Automotive => {
                "Order preparation for part delivery, kitting and assembly. Robots sort, \
                 identify and pack parts for shipment while reducing errors."
            }
            Sector::Logistic => {
                "A wide variety of products. AI-enhanced robots streamline order preparation \
                 and stock management across diverse product characteristics."
            }
        }
    }

    /// Look a sector up by its selection-screen id.
    pub fn from_id(id: u8) -> Result<Self, QuizError> {
        Sector::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| QuizError::UnknownSector(id.to_string()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Sector {
    type Err = QuizError;

    /// Accepts the title in any casing or punctuation, or the bare sector
    /// name ("food", "Automotive").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = canonicalize_key(s);
        Sector::ALL
            .into_iter()
            .find(|sector| {
                let key = canonicalize_key(sector.title());
                key == wanted || key.strip_suffix("sector") == Some(wanted.as_str())
            })
            .ok_or_else(|| QuizError::UnknownSector(s.to_string()))
    }
}

/// An operator role the quiz is played as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SmartLineOperator,
    PlantFlowKeeper,
    TechSolver,
}

impl Role {
    /// All roles in selection-screen order.
    pub const ALL: [Role; 3] = [Role::SmartLineOperator, Role::PlantFlowKeeper, Role::TechSolver];

    pub fn id(self) -> u8 {
        match self {
            Role::SmartLineOperator => 1,
            Role::PlantFlowKeeper => 2,
            Role::TechSolver => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::SmartLineOperator => "SMART LINE OPERATOR",
            Role::PlantFlowKeeper => "PLANT FLOW-KEEPER",
            Role::TechSolver => "TECH SOLVER",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::SmartLineOperator => {
                "Works alongside robots in shared areas, supervises their operations and \
                 performs basic troubleshooting."
            }
            Role::PlantFlowKeeper => {
                "Manages and coordinates the team and work area, supervises production flows \
                 and supports operators and robots."
            }
            Role::TechSolver => {
                "The reference for robot programming, system configuration, maintenance and \
                 technical issue resolution."
            }
        }
    }

    /// Look a role up by its selection-screen id.
    pub fn from_id(id: u8) -> Result<Self, QuizError> {
        Role::ALL
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| QuizError::UnknownRole(id.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Role {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = canonicalize_key(s);
        Role::ALL
            .into_iter()
            .find(|r| canonicalize_key(r.title()) == wanted)
            .ok_or_else(|| QuizError::UnknownRole(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// UserSelection
// ---------------------------------------------------------------------------

/// The skills a user has picked, grouped by the category they were picked
/// under.
///
/// Labels are stored as given. Placement is only bookkeeping: scoring
/// flattens every category into one set of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSelection {
    by_category: BTreeMap<Category, BTreeSet<String>>,
}

impl UserSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a label on or off under `category`. Returns `true` if the label
    /// is selected afterwards.
    pub fn toggle(&mut self, category: Category, label: impl Into<String>) -> bool {
        let label = label.into();
        let set = self.by_category.entry(category).or_default();
        let selected = if set.remove(&label) {
            false
        } else {
            set.insert(label);
            true
        };
        if set.is_empty() {
            self.by_category.remove(&category);
        }
        selected
    }

    /// Select every label in `labels` under `category`.
    pub fn select<I, S>(&mut self, category: Category, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.by_category.entry(category).or_default();
        set.extend(labels.into_iter().map(Into::into));
        if set.is_empty() {
            self.by_category.remove(&category);
        }
    }

    /// Builder form of [`UserSelection::select`].
    pub fn with<I, S>(mut self, category: Category, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(category, labels);
        self
    }

    pub fn is_selected(&self, category: Category, label: &str) -> bool {
        self.by_category
            .get(&category)
            .is_some_and(|set| set.contains(label))
    }

    /// Labels picked under one category, in sorted order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &str> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Every (category, label) pair.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> {
        self.by_category
            .iter()
            .flat_map(|(category, set)| set.iter().map(move |label| (*category, label.as_str())))
    }

    /// Every selected label across all categories.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(_, label)| label)
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Drop every selection, as when the user returns to the start.
    pub fn clear(&mut self) {
        self.by_category.clear();
    }
}

// ---------------------------------------------------------------------------
// ScoreResult
// ---------------------------------------------------------------------------

/// Score for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// Correct skills of this category the user selected.
    pub matched: u32,
    /// Correct skills of this category for the context.
    pub total: u32,
    /// `round(100 * matched / total)`, or 0 when `total` is 0.
    pub percent: u8,
}

/// Per-category and aggregate scores for one set of selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// One entry per category, in table order.
    pub categories: Vec<CategoryScore>,
    /// `round(100 * total_matched / total_correct)`, or 0.
    pub final_score: u8,
    pub total_correct: u32,
    pub total_matched: u32,
}

impl ScoreResult {
    /// A result with every score at zero.
    pub fn zero() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|category| CategoryScore {
                    category,
                    matched: 0,
                    total: 0,
                    percent: 0,
                })
                .collect(),
            final_score: 0,
            total_correct: 0,
            total_matched: 0,
        }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|s| s.category == category)
    }

    /// Percentage for a category, 0 if absent.
    pub fn percent(&self, category: Category) -> u8 {
        self.category(category).map(|s| s.percent).unwrap_or(0)
    }

    /// Categories that have at least one correct skill for the context.
    pub fn applicable(&self) -> impl Iterator<Item = &CategoryScore> {
        self.categories.iter().filter(|s| s.total > 0)
    }
}
