//! The `opskills contexts` command.

use anyhow::Result;

use opskills_core::model::{Role, Sector};
use opskills_core::resolver::lookup_context;

pub fn execute() -> Result<()> {
    println!("Sectors:");
    for sector in Sector::ALL {
        println!("  {} {} - {}", sector.id(), sector.title(), sector.description());
    }

    println!("\nRoles:");
    for role in Role::ALL {
        println!("  {} {} - {}", role.id(), role.title(), role.description());
    }

    println!("\nAnswer key coverage:");
    for sector in Sector::ALL {
        for role in Role::ALL {
            let count = lookup_context(sector.title(), role.title())
                .map(|ctx| ctx.skills.len())
                .unwrap_or(0);
            println!("  {sector} / {role}: {count} correct skill(s)");
        }
    }

    Ok(())
}
