use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use huekit::color::Color;
use huekit::config::Config;
use huekit::export;
use huekit::model::ColorCombination;
use huekit::palette;
use huekit::snippet::SnippetKind;
use huekit::store::CombinationStore;

#[derive(Parser)]
#[command(name = "huekit", version)]
#[command(about = "Color reference and developer utility toolbox")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hex, RGB, HSL and SwiftUI forms of a color
    Convert {
        /// Color in hex notation (3, 6 or 8 digits, leading # optional)
        hex: String,
    },

    /// Derive complementary and analogous colors
    Harmony {
        /// Base color in hex notation
        hex: String,
    },

    /// List the built-in palette groups
    Palette,

    /// Print a ready-to-paste code snippet for a color
    Snippet {
        /// Color in hex notation
        hex: String,

        /// Snippet flavor: swiftui, uikit, css or android-xml
        #[arg(short, long, default_value = "swiftui")]
        kind: SnippetKind,
    },

    /// Save a color combination
    Save {
        /// Background color in hex notation
        hex: String,

        /// Name for the combination
        #[arg(short, long)]
        name: String,

        /// Element color (defaults to the background color)
        #[arg(short, long)]
        element: Option<String>,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List saved combinations
    List,

    /// Delete a saved combination by id
    Delete {
        /// Id printed by `huekit list`
        id: String,
    },

    /// Delete all saved combinations and reset preferences
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Export the palette or the saved combinations
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Show or update preferences
    Prefs {
        /// Set the preferred background hex
        #[arg(long)]
        background: Option<String>,

        /// Enable or disable educational tips (true/false)
        #[arg(long)]
        tips: Option<bool>,
    },
}

#[derive(Subcommand)]
enum ExportTarget {
    /// Palette as JSON
    PaletteJson,
    /// Palette as CSS custom properties
    CssVars,
    /// Saved combinations as JSON
    Combinations,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("huekit=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("huekit=info")
            .init();
    }

    match cli.command {
        Commands::Convert { hex } => convert(&hex),
        Commands::Harmony { hex } => harmony(&hex),
        Commands::Palette => show_palette(),
        Commands::Snippet { hex, kind } => {
            println!("{}", kind.render(Color::from_hex(&hex)));
            Ok(())
        }
        Commands::Save {
            hex,
            name,
            element,
            description,
        } => save(&hex, &name, element.as_deref(), &description),
        Commands::List => list(),
        Commands::Delete { id } => delete(&id),
        Commands::Clear { yes } => clear(yes),
        Commands::Export { target } => run_export(target),
        Commands::Prefs { background, tips } => prefs(background.as_deref(), tips),
    }
}

fn convert(hex: &str) -> Result<()> {
    let color = Color::from_hex(hex);
    let hsl = color.to_hsl();

    println!("{:<8} {}", "HEX", color.to_hex());
    println!(
        "{:<8} rgb({:.0}, {:.0}, {:.0})",
        "RGB",
        color.r * 255.0,
        color.g * 255.0,
        color.b * 255.0
    );
    println!(
        "{:<8} hsl({:.0}°, {:.0}%, {:.0}%)",
        "HSL", hsl.hue, hsl.saturation, hsl.lightness
    );
    println!(
        "{:<8} Color(.sRGB, red: {:.3}, green: {:.3}, blue: {:.3})",
        "SwiftUI", color.r, color.g, color.b
    );
    Ok(())
}

fn harmony(hex: &str) -> Result<()> {
    let base = Color::from_hex(hex);
    let [plus, minus] = palette::analogous(base);

    println!("{:<16} {}", "Base", base.to_hex());
    println!("{:<16} {}", "Complementary", palette::complementary(base).to_hex());
    println!("{:<16} {}", "Analogous +30°", plus.to_hex());
    println!("{:<16} {}", "Analogous -30°", minus.to_hex());
    Ok(())
}

fn show_palette() -> Result<()> {
    let config = Config::load();

    println!("Backgrounds:");
    for entry in palette::BACKGROUNDS {
        print_entry(&entry, &config.preferred_background);
    }
    println!("Elements:");
    for entry in palette::ELEMENTS {
        print_entry(&entry, &config.preferred_background);
    }
    Ok(())
}

fn print_entry(entry: &palette::PaletteEntry, preferred: &str) {
    let marker = if entry.hex.eq_ignore_ascii_case(preferred) {
        "  (preferred)"
    } else {
        ""
    };
    println!(
        "  {:<14} {}  rgb({}, {}, {}){}",
        entry.name,
        entry.hex,
        entry.color.r8(),
        entry.color.g8(),
        entry.color.b8(),
        marker
    );
}

fn save(hex: &str, name: &str, element: Option<&str>, description: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("a combination needs a non-empty name");
    }

    // Canonicalize whatever notation came in to uppercase #RRGGBB
    let background = Color::from_hex(hex).to_hex();
    let element = match element {
        Some(e) => Color::from_hex(e).to_hex(),
        None => background.clone(),
    };

    let combination = ColorCombination::new(name.trim(), &background, &element, description);
    let id = combination.id.clone();
    CombinationStore::add(combination)?;
    println!("Saved '{}' as {}", name.trim(), id);
    Ok(())
}

fn list() -> Result<()> {
    let combinations = CombinationStore::load();
    if combinations.is_empty() {
        println!("No saved combinations.");
        return Ok(());
    }

    for c in combinations {
        println!("{}  {}", c.id, c.name);
        println!(
            "    {} on {}  {}  {}",
            c.element_color,
            c.background_color,
            c.date_created.format("%Y-%m-%d %H:%M"),
            c.description
        );
    }
    Ok(())
}

fn delete(id: &str) -> Result<()> {
    if CombinationStore::remove(id)? {
        println!("Deleted {}", id);
        Ok(())
    } else {
        bail!("no saved combination with id {}", id)
    }
}

fn clear(yes: bool) -> Result<()> {
    if !yes {
        bail!("this deletes every saved combination and resets preferences; pass --yes to confirm");
    }
    CombinationStore::clear()?;
    Config::reset()?;
    println!("Cleared saved combinations and reset preferences.");
    Ok(())
}

fn run_export(target: ExportTarget) -> Result<()> {
    let output = match target {
        ExportTarget::PaletteJson => export::palette_json()?,
        ExportTarget::CssVars => export::css_variables(),
        ExportTarget::Combinations => export::combinations_json(&CombinationStore::load())?,
    };
    println!("{}", output);
    Ok(())
}

fn prefs(background: Option<&str>, tips: Option<bool>) -> Result<()> {
    let mut config = Config::load();
    let mut changed = false;

    if let Some(bg) = background {
        config.preferred_background = Color::from_hex(bg).to_hex();
        changed = true;
    }
    if let Some(t) = tips {
        config.show_educational_tips = t;
        changed = true;
    }
    if changed {
        config.save()?;
    }

    println!("preferred-background: {}", config.preferred_background);
    println!("show-educational-tips: {}", config.show_educational_tips);
    Ok(())
}
