use anyhow::Result;

use crate::formatting::{formatter_for, FormattingConfig, NumStrFormatSpec, OutputFormatter};
use crate::symbols::SymbolPreset;

/// Pure function to render one preset row
pub fn preset_row(preset: SymbolPreset, sample: &str) -> String {
    let rendered = NumStrFormatSpec::from_preset(preset)
        .format(sample)
        .unwrap_or_else(|e| format!("<{}>", e));
    format!("{:<16} {:<20} {}", preset.as_str(), rendered, preset.description())
}

pub fn handle_presets(sample: &str) -> Result<()> {
    let formatter = formatter_for(FormattingConfig::from_env());
    print_presets(formatter.as_ref(), sample);
    Ok(())
}

fn print_presets(formatter: &dyn OutputFormatter, sample: &str) {
    println!("{}", formatter.header("Symbol presets"));
    for preset in SymbolPreset::all() {
        println!("  {}", preset_row(*preset, sample));
    }
    println!(
        "{}",
        formatter.dim("Use with: numstr format <VALUE> --preset <NAME>")
    );
}
