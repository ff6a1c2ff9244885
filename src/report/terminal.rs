use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Project, RiskResult};
use crate::report::messages::render;

/// Render a colored terminal report.
pub fn render_report(
    results: &[RiskResult],
    project: &Project,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let worst = results
        .iter()
        .max_by(|a, b| a.risk_value().total_cmp(&b.risk_value()));

    if quiet {
        if let Some(worst) = worst {
            println!(
                "Categories: {}  Highest risk: {} ({})",
                results.len(),
                format!("{:.4}", worst.risk_value()).bold(),
                worst.category()
            );
        }
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-riskr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        " Project: {} v{} ({} license(s), {} component binding(s), redistribution: {})\n",
        project.name(),
        project.version(),
        project.licenses().len(),
        project.bill().len(),
        project.redistribution().as_str()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Risk category").add_attribute(Attribute::Bold),
            Cell::new("Exposure").add_attribute(Attribute::Bold),
            Cell::new("Impact").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
        ]);

    for result in results {
        table.add_row(vec![
            Cell::new(result.category().to_string()),
            Cell::new(format!("{:.4}", result.exposure())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", result.impact())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", result.risk_value()))
                .fg(risk_color(result.risk_value()))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}\n", table);

    for result in results {
        let heading = format!(" ■ {}", result.category());
        let heading = match risk_color(result.risk_value()) {
            Color::Green => heading.green(),
            Color::Yellow => heading.yellow(),
            _ => heading.red(),
        };
        println!("{}", heading.bold());

        for cause in result.root_causes() {
            println!("   {} {}", "✗".red(), render(cause));
        }
        for warning in result.warnings() {
            println!("   {} {}", "⚠".yellow(), render(warning));
        }
        if verbose {
            for good in result.good_things() {
                println!("   {} {}", "✓".green(), render(good));
            }
        }
        for tip in result.tips() {
            println!("   {} {}", "»".cyan(), render(tip));
        }
        println!();
    }

    Ok(())
}

fn risk_color(risk: f64) -> Color {
    if risk < 0.1 {
        Color::Green
    } else if risk < 0.4 {
        Color::Yellow
    } else {
        Color::Red
    }
}
