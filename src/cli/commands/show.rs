//! Show command implementation - Display the parsed metadata of a recipe

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::Context;
use crate::model::Document;
use crate::parser::ParseOptions;

/// Execute the show command
pub fn execute(ctx: &Context, path: &Path, opts: &ParseOptions) -> Result<()> {
    let doc = ctx.parse_recipe(path, opts)?;

    if ctx.json {
        return ctx.print_json(&doc);
    }

    print_document(&doc);
    Ok(())
}

fn field(label: &str, value: &str) {
    println!("{:<12} {}", format!("{}:", label).cyan(), value);
}

fn print_document(doc: &Document) {
    println!(
        "{} {}",
        doc.pkgname.white().bold(),
        doc.full_version().dimmed()
    );
    field("pkgdesc", &doc.pkgdesc);
    field("url", &doc.url);
    field("arch", &doc.arch.join(" "));
    field("depends", &doc.depends.join(" "));

    if !doc.maintainers.is_empty() {
        field("maintainers", &doc.maintainers.join(", "));
    }
    if let Some(reason) = &doc.archived {
        println!("{:<12} {}", "archived:".yellow(), reason.replace('\n', " / "));
    }

    if !doc.subpackages.is_empty() {
        println!("{}", "subpackages:".cyan());
        let width = doc.subpackages.keys().map(str::len).max().unwrap_or(0);
        for (name, metadata) in doc.subpackages.iter() {
            match metadata {
                Some(metadata) => println!("  {:<width$}  {}", name, metadata.pkgdesc),
                None => println!(
                    "  {:<width$}  {}",
                    name,
                    "(function not found)".dimmed()
                ),
            }
        }
    }

    if !doc.attributes.is_empty() {
        println!("{}", "attributes:".cyan());
        for (key, value) in &doc.attributes {
            println!("  {} = {}", key, value.dimmed());
        }
    }
}
