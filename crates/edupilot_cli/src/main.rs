//! EduPilot CLI
//!
//! Headless preview of the site's views. Each command mounts a view, drives
//! it with a simulated frame clock and prints the resulting render state.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use edupilot_app::{App, AppConfig};
use edupilot_widgets::Route;

mod render;

/// Simulated frame length, roughly 60 Hz
const FRAME_MS: u32 = 16;

#[derive(Parser)]
#[command(name = "edupilot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "EduPilot headless view preview", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./edupilot.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the course catalog
    Courses {
        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show the landing slides after some simulated time
    About {
        /// Simulated milliseconds since the page mounted
        #[arg(short, long, default_value = "0")]
        elapsed_ms: u32,

        /// 1-based slide to show
        #[arg(short, long, default_value = "1")]
        slide: usize,

        /// Open this FAQ entry (1-based)
        #[arg(long)]
        faq: Option<usize>,
    },

    /// Show the member dashboard
    Home {
        /// Local hour (0-23) used for the greeting
        #[arg(long, default_value = "9")]
        hour: u32,

        /// Simulated milliseconds since the dashboard mounted
        #[arg(short, long, default_value = "0")]
        elapsed_ms: u32,

        /// Toggle these to-do items (1-based, repeatable)
        #[arg(long)]
        todo: Vec<usize>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Courses { page } => cmd_courses(config, page, cli.format),
        Commands::About {
            elapsed_ms,
            slide,
            faq,
        } => cmd_about(config, elapsed_ms, slide, faq, cli.format),
        Commands::Home {
            hour,
            elapsed_ms,
            todo,
        } => cmd_home(config, hour, elapsed_ms, &todo, cli.format),
        Commands::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            AppConfig::load_from_dir(&cwd)
        }
    }
}

/// Convert a 1-based CLI index into a 0-based one
fn zero_based(value: usize, what: &str) -> Result<usize> {
    value
        .checked_sub(1)
        .with_context(|| format!("{what} numbers start at 1"))
}

/// Feed `elapsed_ms` to the app in fixed-size frames
fn drive(app: &mut App, elapsed_ms: u32) -> Result<()> {
    let mut left = elapsed_ms;
    let mut frames = 0u32;
    while left > 0 {
        let dt = left.min(FRAME_MS);
        app.frame(dt)?;
        left -= dt;
        frames += 1;
    }
    debug!(elapsed_ms, frames, "simulated clock drained");
    Ok(())
}

fn cmd_courses(config: AppConfig, page: usize, format: Format) -> Result<()> {
    let page = zero_based(page, "page")?;
    let mut app = App::new(config)?;
    app.login()?;
    app.navigate(Route::Courses)?;
    app.courses_mut()?
        .go_to_page(page)
        .with_context(|| format!("Cannot show page {}", page + 1))?;

    info!(page = page + 1, "rendering courses");
    emit(&app, format)
}

fn cmd_about(
    config: AppConfig,
    elapsed_ms: u32,
    slide: usize,
    faq: Option<usize>,
    format: Format,
) -> Result<()> {
    let slide = zero_based(slide, "slide")?;
    let mut app = App::new(config)?;

    let about = app.about_mut()?;
    about
        .show_slide(slide)
        .with_context(|| format!("Cannot show slide {}", slide + 1))?;
    if let Some(faq) = faq {
        let index = zero_based(faq, "FAQ")?;
        about
            .toggle_faq(index)
            .with_context(|| format!("Cannot open FAQ {faq}"))?;
    }

    drive(&mut app, elapsed_ms)?;
    emit(&app, format)
}

fn cmd_home(
    config: AppConfig,
    hour: u32,
    elapsed_ms: u32,
    todos: &[usize],
    format: Format,
) -> Result<()> {
    let mut app = App::new(config)?;
    app.set_hour(hour)?;
    app.login()?;

    let home = app.home_mut()?;
    for &todo in todos {
        let index = zero_based(todo, "to-do")?;
        home.toggle_todo(index)
            .with_context(|| format!("Cannot toggle to-do {todo}"))?;
    }

    drive(&mut app, elapsed_ms)?;
    emit(&app, format)
}

fn cmd_config(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn emit(app: &App, format: Format) -> Result<()> {
    let snapshot = app.snapshot();
    match format {
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
            println!("{json}");
        }
        Format::Text => print!("{}", render::text(&snapshot)),
    }
    Ok(())
}
