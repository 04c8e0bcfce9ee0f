//! The `opskills audit` command.

use anyhow::Result;

use opskills_core::audit::{audit_reference_data, AuditFinding};

pub fn execute(fail_on_findings: bool) -> Result<()> {
    let findings = audit_reference_data();

    let (unmapped, shared): (Vec<&AuditFinding>, Vec<&AuditFinding>) = findings
        .iter()
        .partition(|f| matches!(f, AuditFinding::UnmappedCorrectSkill { .. }));

    if !unmapped.is_empty() {
        println!("Correct answers missing from the catalog:");
        for f in &unmapped {
            println!("  {f}");
        }
    }

    if !shared.is_empty() {
        println!("\nSkills listed under more than one category:");
        for f in &shared {
            println!("  {f}");
        }
    }

    if findings.is_empty() {
        println!("Reference data is clean.");
    } else {
        println!("\n{} finding(s).", findings.len());
    }

    if fail_on_findings && !findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
