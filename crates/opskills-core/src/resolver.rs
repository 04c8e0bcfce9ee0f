//! Context resolution: (sector title, role title) -> correct skills.

use crate::error::LookupError;
use crate::normalize::canonicalize_key;
use crate::reference::ANSWER_KEY;

/// A context found in the answer key, with the keys as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedContext {
    pub sector: &'static str,
    pub role: &'static str,
    pub skills: &'static [&'static str],
}

/// Find the answer-key entry for a sector and role.
///
/// Both titles are compared after [`canonicalize_key`], so casing, spacing
/// and punctuation are ignored. The first matching key in table order wins.
pub fn lookup_context(sector_title: &str, role_title: &str) -> Result<ResolvedContext, LookupError> {
    let wanted_sector = canonicalize_key(sector_title);
    let &(sector, roles) = ANSWER_KEY
        .iter()
        .find(|(key, _)| canonicalize_key(key) == wanted_sector)
        .ok_or_else(|| LookupError::UnknownSector(sector_title.to_string()))?;

    let wanted_role = canonicalize_key(role_title);
    let &(role, skills) = roles
        .iter()
        .find(|(key, _)| canonicalize_key(key) == wanted_role)
        .ok_or_else(|| LookupError::UnknownRole {
            sector: sector.to_string(),
            role: role_title.to_string(),
        })?;

    Ok(ResolvedContext {
        sector,
        role,
        skills,
    })
}

/// Correct skill labels for a context, exactly as stored in the answer key.
///
/// An unknown or empty title is not an error here: it logs a warning and
/// yields an empty list, which scores as zero everywhere.
pub fn resolve_correct_skills(sector_title: &str, role_title: &str) -> Vec<&'static str> {
    match lookup_context(sector_title, role_title) {
        Ok(ctx) => ctx.skills.to_vec(),
        Err(e) => {
            tracing::warn!("scoring lookup failed: {e}");
            Vec::new()
        }
    }
}
