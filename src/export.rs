use crate::model::ColorCombination;
use crate::palette::{self, PaletteEntry};
use anyhow::Result;
use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Serialize)]
struct PaletteExport {
    name: &'static str,
    version: &'static str,
    backgrounds: Vec<EntryExport>,
    elements: Vec<EntryExport>,
}

#[derive(Serialize)]
struct EntryExport {
    name: &'static str,
    hex: &'static str,
}

fn entry_exports(entries: &[PaletteEntry]) -> Vec<EntryExport> {
    entries
        .iter()
        .map(|e| EntryExport {
            name: e.name,
            hex: e.hex,
        })
        .collect()
}

/// The full catalog as a pretty JSON document.
pub fn palette_json() -> Result<String> {
    let export = PaletteExport {
        name: "Huekit Professional Palette",
        version: env!("CARGO_PKG_VERSION"),
        backgrounds: entry_exports(&palette::BACKGROUNDS),
        elements: entry_exports(&palette::ELEMENTS),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// The catalog as a CSS custom-property block, backgrounds first.
pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");
    for entry in palette::all_entries() {
        let var_name = format!("--hk-{}", entry.name.to_lowercase().replace(' ', "-"));
        css.push_str(&format!("  {}: {};\n", var_name, entry.hex));
    }
    css.push('}');
    css
}

// Export records carry everything except the internal id; timestamps are
// rendered as ISO-8601 with second precision.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CombinationExport<'a> {
    name: &'a str,
    background_color: &'a str,
    element_color: &'a str,
    description: &'a str,
    date_created: String,
}

/// Saved combinations as a pretty JSON array.
pub fn combinations_json(combinations: &[ColorCombination]) -> Result<String> {
    let records: Vec<CombinationExport> = combinations
        .iter()
        .map(|c| CombinationExport {
            name: &c.name,
            background_color: &c.background_color,
            element_color: &c.element_color,
            description: &c.description,
            date_created: c.date_created.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
