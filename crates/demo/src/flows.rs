//! The three demonstration scenarios.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use patternforge_core::{Entity, Prototype};
use patternforge_orders::{Discount, LineItem, Order};
use patternforge_reporting::{ReportBuilder, ReportFormat, assemble, print_report};
use patternforge_settings::{SettingsCell, SettingsError, SharedSettings};

fn print_settings<W: Write>(out: &mut W, settings: &SharedSettings) -> anyhow::Result<()> {
    let store = settings.snapshot()?;
    writeln!(out, "\n=== All settings ===")?;
    write!(out, "{}", store.dump())?;
    writeln!(out, "====================\n")?;
    Ok(())
}

/// Shared store: two handles, save, reload, strict lookup of an absent key.
pub fn settings_flow<W: Write>(
    out: &mut W,
    cell: &SettingsCell,
    settings_file: &Path,
) -> anyhow::Result<()> {
    writeln!(out, "--- 1. SHARED SETTINGS ---")?;

    let config1 = cell.instance();
    config1.load_defaults()?;
    config1.set("app.theme", "dark")?;
    config1.set("app.language", "en")?;
    print_settings(out, &config1)?;

    let config2 = cell.instance();
    let theme = config2.get("app.theme")?;
    writeln!(out, "app.theme read through second handle = {theme}")?;
    writeln!(out, "same instance? {}", config1.same_instance(&config2))?;

    config1
        .save_to_file(settings_file)
        .with_context(|| format!("saving settings to {}", settings_file.display()))?;

    let config3 = cell.instance();
    config3
        .load_from_file(settings_file)
        .with_context(|| format!("reloading settings from {}", settings_file.display()))?;
    print_settings(out, &config3)?;

    let snapshot = config3.snapshot()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;

    match config1.get("nonexistent.key") {
        Err(err @ SettingsError::KeyNotFound(_)) => writeln!(out, "handled: {err}")?,
        Err(err) => return Err(err.into()),
        Ok(value) => writeln!(out, "unexpected value: {value}")?,
    }

    Ok(())
}

/// Same inputs assembled in every report format.
pub fn report_flow<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "\n--- 2. REPORTS ---")?;

    for format in ReportFormat::ALL {
        let document = assemble(
            ReportBuilder::new(format),
            "Monthly report",
            "Sales grew 20% in January. New customers: 150.",
            "Prepared by: Administrator",
        );
        print_report(out, &document, format.title())?;
    }

    Ok(())
}

/// Build an order, duplicate it, diverge the duplicate.
pub fn order_flow<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "\n--- 3. ORDER DUPLICATION ---")?;

    let mut original = Order::new("ORD-001");
    original.add_item(LineItem::new("Laptop", 450_000.0, 1));
    original.add_item(LineItem::new("Mouse", 15_000.0, 2));
    original.add_item(LineItem::new("Keyboard", 25_000.0, 1));
    original.set_delivery_cost(5_000.0);
    original.set_discount(Discount::new("New Year", 10.0));
    original.set_payment_method("Bank transfer");

    writeln!(out, "ORIGINAL ORDER:\n{original}\n")?;

    let mut copy = original.duplicate();
    copy.remove_items_named("Mouse");
    copy.add_item(LineItem::new("Wireless Mouse", 18_000.0, 1));
    copy.set_discount(Discount::new("Club", 5.0));
    copy.set_payment_method("Card");

    writeln!(out, "DUPLICATED ORDER (modified):\n{copy}\n")?;
    writeln!(out, "ORIGINAL ORDER (unchanged):\n{original}\n")?;
    writeln!(out, "same order? {}", original.id() == copy.id())?;

    tracing::info!(
        original = %original.id(),
        original_total = original.compute_total(),
        duplicate = %copy.id(),
        duplicate_total = copy.compute_total(),
        "order scenario finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_flow_saves_reloads_and_reports_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        let cell = SettingsCell::new();
        let mut out = Vec::new();

        settings_flow(&mut out, &cell, &path).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("app.theme read through second handle = dark"));
        assert!(text.contains("same instance? true"));
        assert!(text.contains("handled: setting not found: nonexistent.key"));
        assert!(text.contains("\"app.language\": \"en\""));

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("app.name = MyApplication\n"));
        assert!(saved.contains("app.theme = dark\n"));
    }

    #[test]
    fn report_flow_prints_every_format() {
        let mut out = Vec::new();
        report_flow(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== TEXT REPORT ===\n=== Monthly report ===\n"));
        assert!(text.contains("<h1>Monthly report</h1>\n"));
        assert!(text.contains("<content>Sales grew 20% in January. New customers: 150.</content>\n"));
    }

    #[test]
    fn order_flow_keeps_original_total() {
        let mut out = Vec::new();
        order_flow(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n--- 3. ORDER DUPLICATION ---\n"));
        assert!(text.contains("=== ORDER: ORD-001_copy ==="));
        assert_eq!(text.matches("TOTAL: 459000.00").count(), 2);
        assert!(text.contains("TOTAL: 473100.00"));
        assert!(text.contains("same order? false"));
    }
}
