//! Data-quality checks over the static reference tables.
//!
//! Scoring tolerates both kinds of defect reported here. The audit exists so
//! they can be seen and fixed in the tables rather than discovered through
//! unexpectedly low scores.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::model::Category;
use crate::reference::{catalog_label, category_of, listing_categories, ANSWER_KEY, SKILL_CATALOG};

/// One defect found in the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditFinding {
    /// A correct-answer label with no exact match in the catalog. It is
    /// dropped from scoring for that context.
    UnmappedCorrectSkill {
        sector: &'static str,
        role: &'static str,
        label: &'static str,
        /// Catalog spelling that matches after trimming and lowercasing.
        near_match: Option<&'static str>,
    },
    /// A catalog label listed under more than one category.
    SharedLabel {
        label: &'static str,
        listed_under: Vec<Category>,
        owner: Category,
    },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditFinding::UnmappedCorrectSkill {
                sector,
                role,
                label,
                near_match,
            } => {
                write!(f, "{sector} / {role}: {label:?} is not in the catalog")?;
                if let Some(m) = near_match {
                    write!(f, " (did you mean {m:?}?)")?;
                }
                Ok(())
            }
            AuditFinding::SharedLabel {
                label,
                listed_under,
                owner,
            } => {
                let titles: Vec<&str> = listed_under.iter().map(|c| c.title()).collect();
                write!(
                    f,
                    "{label:?} is listed under {}; scored as {owner}",
                    titles.join(", ")
                )
            }
        }
    }
}

/// Audit the compiled-in tables.
pub fn audit_reference_data() -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for &(sector, roles) in ANSWER_KEY {
        for &(role, skills) in roles {
            for &label in skills {
                if category_of(label).is_none() {
                    findings.push(AuditFinding::UnmappedCorrectSkill {
                        sector,
                        role,
                        label,
                        near_match: catalog_label(label),
                    });
                }
            }
        }
    }

    let mut seen = BTreeSet::new();
    for (_, labels) in SKILL_CATALOG {
        for &label in *labels {
            if !seen.insert(label) {
                continue;
            }
            let listed_under = listing_categories(label);
            if listed_under.len() > 1 {
                if let Some(owner) = category_of(label) {
                    findings.push(AuditFinding::SharedLabel {
                        label,
                        listed_under,
                        owner,
                    });
                }
            }
        }
    }

    findings
}
