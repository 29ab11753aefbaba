use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use fwkit_lib::review::session::columns;
use fwkit_lib::{
    export_filename, read_policy_csv, ClassifiedRule, Result, ReviewConfig, ReviewStore,
    RuleCategory, RuleClassifier,
};
use serde_json::json;
use std::path::PathBuf;

pub fn handle_review_command(
    file: PathBuf,
    config_path: Option<PathBuf>,
    export: bool,
    output: Option<PathBuf>,
    json: bool,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let config = ReviewConfig::load(config_path.as_deref())?;
    if verbose {
        println!(
            "{} Weak protocols: {}",
            style(">>>").cyan(),
            config.weak_protocols.join(", ")
        );
    }

    let table = read_policy_csv(&file)?;
    let classifier = RuleClassifier::new(&config);
    let rules = classifier.classify_table(&table);

    if json {
        println!("{}", render_json(&rules)?);
    } else if !quiet {
        render_table(&rules);
        render_summary(&rules);
    }

    if export || output.is_some() {
        let mut store = ReviewStore::new();
        let session_id = store.insert(rules);
        let csv = store.export_csv(session_id)?;

        let path =
            output.unwrap_or_else(|| PathBuf::from(export_filename(chrono::Utc::now())));
        std::fs::write(&path, csv)?;

        if !quiet {
            println!(
                "{} Classified rules exported to {}",
                style("✓").green(),
                path.display()
            );
        }
    }

    Ok(())
}

fn render_table(rules: &[ClassifiedRule]) {
    let cols = columns(rules);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header: Vec<Cell> = cols.iter().map(|c| Cell::new(c).fg(Color::Cyan)).collect();
    header.push(Cell::new("Categories").fg(Color::Cyan));
    table.set_header(header);

    for rule in rules {
        if rule.is_section {
            let name = rule.section_display_name.as_deref().unwrap_or("");
            let mut cells = vec![Cell::new(name).fg(Color::Cyan)];
            cells.extend(cols.iter().skip(1).map(|_| Cell::new("")));
            cells.push(Cell::new(RuleCategory::SectionHeader.as_str()).fg(Color::Cyan));
            table.add_row(cells);
        } else {
            let mut cells: Vec<Cell> = cols.iter().map(|c| Cell::new(rule.row.get(c))).collect();
            cells.push(Cell::new(rule.categories_display()).fg(category_color(&rule.categories)));
            table.add_row(cells);
        }
    }

    println!("{table}");
}

fn category_color(categories: &[RuleCategory]) -> Color {
    if categories.contains(&RuleCategory::Disabled)
        || categories.contains(&RuleCategory::WeakProtocol)
    {
        Color::Red
    } else if categories.contains(&RuleCategory::ZeroHits)
        || categories.contains(&RuleCategory::AnyEndpoint)
    {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn render_summary(rules: &[ClassifiedRule]) {
    println!("\n{} {} rows reviewed", style("✓").green(), rules.len());

    let counts = [
        RuleCategory::Disabled,
        RuleCategory::ZeroHits,
        RuleCategory::AnyEndpoint,
        RuleCategory::WeakProtocol,
        RuleCategory::Normal,
        RuleCategory::SectionHeader,
    ];
    for category in counts {
        let count = rules
            .iter()
            .filter(|r| r.categories.contains(&category))
            .count();
        if count > 0 {
            println!("  {}: {}", category.as_str(), style(count).yellow());
        }
    }
}

fn render_json(rules: &[ClassifiedRule]) -> Result<String> {
    let mut rows = Vec::new();
    for rule in rules {
        let mut fields = serde_json::Map::new();
        for (column, value) in rule.row.iter() {
            fields.insert(
                column.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }

        rows.push(json!({
            "fields": fields,
            "is_section": rule.is_section,
            "section_display_name": rule.section_display_name.clone(),
            "categories": rule.categories.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        }));
    }

    let report = json!({
        "rules": rows,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
