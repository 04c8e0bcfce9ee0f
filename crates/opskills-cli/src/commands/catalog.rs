//! The `opskills catalog` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use opskills_core::model::Category;
use opskills_core::reference::{category_of, skills_in};

pub fn execute(category: Option<String>) -> Result<()> {
    let categories = match category {
        Some(name) => vec![name.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let mut table = Table::new();
        table.set_header(vec!["Skill", "Scored as"]);

        for label in skills_in(category) {
            let owner = category_of(label)
                .map(|c| c.title())
                .unwrap_or("-");
            table.add_row(vec![Cell::new(label), Cell::new(owner)]);
        }

        println!("{} ({} skills)", category.title(), skills_in(category).len());
        println!("{table}\n");
    }

    Ok(())
}
