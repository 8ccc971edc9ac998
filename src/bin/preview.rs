//! Preview harness for sidedrawer
//!
//! Assembles a drawer from a YAML config (or defaults), runs toggle cycles,
//! and prints the projected state after each step. Stands in for a document
//! embedding during development.
//!
//! Usage:
//!   cargo run --bin sidedrawer-preview
//!   cargo run --bin sidedrawer-preview -- drawer.yaml --toggles 2
//!   cargo run --bin sidedrawer-preview -- --edge right --size 250px --markup

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sidedrawer::config::DrawerConfig;
use sidedrawer::drawer::Drawer;
use sidedrawer::tracing::DrawerSnapshot;

#[derive(Parser, Debug)]
#[command(
    name = "sidedrawer-preview",
    version,
    about = "Preview a drawer's projected geometry"
)]
struct Args {
    /// Path to a drawer config YAML file (falls back to the user config,
    /// then to defaults)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the anchor edge (top, right, bottom, left)
    #[arg(long, value_name = "EDGE")]
    edge: Option<String>,

    /// Override the panel size, e.g. 250px
    #[arg(long, value_name = "SIZE")]
    size: Option<String>,

    /// Number of toggle cycles to run
    #[arg(long, default_value_t = 2, value_name = "N")]
    toggles: usize,

    /// Print rendered markup instead of state summaries
    #[arg(long)]
    markup: bool,
}

fn main() -> Result<()> {
    sidedrawer::tracing::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let mut drawer = Drawer::new(config).context("failed to assemble drawer")?;

    if let Some(edge) = &args.edge {
        drawer.position(edge.as_str());
    }
    if let Some(size) = &args.size {
        drawer.size(size.as_str());
    }

    print_step(&drawer, "assembled", args.markup);

    let mut previous = DrawerSnapshot::from_drawer(&drawer);
    for step in 1..=args.toggles {
        drawer.toggle();
        let current = DrawerSnapshot::from_drawer(&drawer);
        if let Some(diff) = previous.diff(&current) {
            eprintln!("  toggle {step}: {diff}");
        }
        previous = current;
        print_step(&drawer, &format!("after toggle {step}"), args.markup);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DrawerConfig> {
    if let Some(path) = path {
        return DrawerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match sidedrawer::config_paths::config_file() {
        Some(path) if path.exists() => DrawerConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        _ => Ok(DrawerConfig::default()),
    }
}

fn print_step(drawer: &Drawer, label: &str, markup: bool) {
    println!("== {label} ==");
    if markup {
        println!("{}", drawer.to_markup());
    } else {
        let snapshot = DrawerSnapshot::from_drawer(drawer);
        println!(
            "{} at {}: {:?} (panel {}, button {}, icon {})",
            drawer.id(),
            drawer.edge(),
            drawer.state(),
            snapshot.panel_offset.as_deref().unwrap_or("(unset)"),
            snapshot.button_offset.as_deref().unwrap_or("(unset)"),
            snapshot.icon.as_deref().unwrap_or("(unset)")
        );
    }
}
