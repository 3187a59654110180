//! Sectioned alphabetic building listing.
//!
//! Renders the directory as an indexed list: one section per index letter,
//! rows showing the building name and category.

use anyhow::{bail, Result};

use crate::directory::Directory;
use crate::index::build_index;

/// CLI entry point for `atlas list`.
pub fn run_list(directory: &Directory, letter: Option<char>) -> Result<()> {
    let index = build_index(directory.names());

    match letter {
        Some(l) => {
            let l = l.to_ascii_uppercase();
            let Some(names) = index.names_for(l) else {
                bail!(
                    "no buildings start with '{}'. Sections: {}",
                    l,
                    index
                        .letters()
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            };
            print_section(directory, l, names);
        }
        None => {
            for l in index.letters() {
                if let Some(names) = index.names_for(*l) {
                    print_section(directory, *l, names);
                }
            }
            println!();
            println!(
                "{} buildings in {} sections",
                directory.len(),
                index.len()
            );
        }
    }

    Ok(())
}

fn print_section(directory: &Directory, letter: char, names: &[String]) {
    println!("[{}]", letter);
    for name in names {
        let category = directory
            .get(name)
            .map(|b| b.category.as_str())
            .unwrap_or_default();
        println!("  {:<44} {}", name, category);
    }
}
