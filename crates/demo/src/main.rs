use std::io::Write;

use patternforge_demo::{DemoConfig, flows};
use patternforge_settings::SettingsCell;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    patternforge_observability::init_with(&config.observability);

    tracing::info!(settings_file = %config.settings_file.display(), "starting demo");

    // The entry point owns the only settings cell; flows receive it by reference.
    let settings = SettingsCell::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "========================================")?;
    writeln!(out, "CREATIONAL PATTERNS: DEMONSTRATION")?;
    writeln!(out, "========================================\n")?;

    flows::settings_flow(&mut out, &settings, &config.settings_file)?;
    flows::report_flow(&mut out)?;
    flows::order_flow(&mut out)?;

    out.flush()?;
    Ok(())
}
