//! Scoring engine.
//!
//! Grades a user's selections against the answer key for a context. Matching
//! is by canonical label only: the category the user filed a skill under is
//! ignored, and every correct skill counts toward the category that owns it
//! in the catalog.

use std::collections::HashSet;

use crate::model::{Category, CategoryScore, ScoreResult, UserSelection};
use crate::normalize::canonicalize_label;
use crate::reference::category_of;
use crate::resolver::resolve_correct_skills;

/// Integer percentage `round(100 * matched / total)`, rounding halves up.
///
/// Returns 0 when `total` is 0.
pub fn percent(matched: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let m = u64::from(matched.min(total));
    let t = u64::from(total);
    ((200 * m + t) / (2 * t)) as u8
}

/// Score `selections` for the context named by `sector_title` and `role_title`.
///
/// Never fails. An unknown context scores zero in every category.
pub fn score(sector_title: &str, role_title: &str, selections: &UserSelection) -> ScoreResult {
    let correct = resolve_correct_skills(sector_title, role_title);
    let result = score_against(&correct, selections);
    tracing::debug!(
        sector = sector_title,
        role = role_title,
        matched = result.total_matched,
        correct = result.total_correct,
        "final score {}%",
        result.final_score
    );
    result
}

/// Score `selections` against an explicit list of correct labels.
///
/// Labels with no owning category are dropped from both numerator and
/// denominator.
pub fn score_against(correct: &[&str], selections: &UserSelection) -> ScoreResult {
    let user_canon: HashSet<String> = selections.labels().map(canonicalize_label).collect();

    let mut totals = [0u32; Category::COUNT];
    let mut matches = [0u32; Category::COUNT];

    for skill in correct {
        let Some(category) = category_of(skill) else {
            continue;
        };
        let i = category.index();
        totals[i] += 1;
        if user_canon.contains(&canonicalize_label(skill)) {
            matches[i] += 1;
        }
    }

    let categories: Vec<CategoryScore> = Category::ALL
        .into_iter()
        .map(|category| {
            let i = category.index();
            CategoryScore {
                category,
                matched: matches[i],
                total: totals[i],
                percent: percent(matches[i], totals[i]),
            }
        })
        .collect();

    let total_correct: u32 = totals.iter().sum();
    let total_matched: u32 = matches.iter().sum();

    ScoreResult {
        categories,
        final_score: percent(total_matched, total_correct),
        total_correct,
        total_matched,
    }
}
