//! # Zenith - Dashboard Appearance Settings
//!
//! Drives the settings store and theme applicator from the command line,
//! standing in for the dashboard page.
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the stored settings
//! cargo run -- show
//!
//! # Switch to the rose theme with header navigation
//! cargo run -- set --theme rose --nav header
//!
//! # Print the generated stylesheet, resolving `system` as dark
//! cargo run -- --prefers-dark css
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zenith_core::{
    layout::NAV_ITEMS, AppConfig, Catalog, ColorScheme, EventBus, EventHandler, FileStorage,
    FontScale, LayoutShell, NavigationMode, SettingsEvent, SettingsStore,
};
use zenith_theme::{FixedPreference, ThemeApplicator, ThemeRegistry, VirtualDocument, THEME_STYLESHEET_ID};

/// Zenith - project dashboard appearance settings
#[derive(Parser, Debug)]
#[command(name = "zenith")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Storage file holding persisted settings
    #[arg(long, value_name = "FILE", global = true)]
    storage: Option<PathBuf>,

    /// Config file (default: <config dir>/zenith/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Resolve the `system` color scheme as dark
    #[arg(long, global = true)]
    prefers_dark: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Print the current settings
    Show,

    /// Change one or more settings
    Set {
        #[arg(long)]
        theme: Option<String>,

        /// sidebar | header
        #[arg(long, value_parser = parse_navigation_mode)]
        nav: Option<NavigationMode>,

        /// light | dark | system
        #[arg(long, value_parser = parse_color_scheme)]
        scheme: Option<ColorScheme>,

        /// sm | md | lg
        #[arg(long, value_parser = parse_font_scale)]
        font: Option<FontScale>,
    },

    /// Cycle the color scheme light -> dark -> system
    ToggleScheme,

    /// List available themes
    Themes,

    /// Print the classes and stylesheet the current settings produce
    Css,

    /// Show navigation state for a page
    Layout {
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// List projects, or show one
    Projects {
        #[arg(long)]
        id: Option<String>,
    },

    /// Write the effective config to the config file
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_navigation_mode(s: &str) -> Result<NavigationMode, String> {
    match s {
        "sidebar" => Ok(NavigationMode::Sidebar),
        "header" => Ok(NavigationMode::Header),
        _ => Err(format!("expected sidebar or header, got {s:?}")),
    }
}

fn parse_color_scheme(s: &str) -> Result<ColorScheme, String> {
    ColorScheme::ALL
        .into_iter()
        .find(|scheme| scheme.as_str() == s)
        .ok_or_else(|| format!("expected light, dark or system, got {s:?}"))
}

fn parse_font_scale(s: &str) -> Result<FontScale, String> {
    FontScale::parse(s).ok_or_else(|| format!("expected sm, md or lg, got {s:?}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Zenith v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load(),
    };

    let storage_path = match args.storage.clone().or(config.storage_path.clone()) {
        Some(path) => path,
        None => FileStorage::default_path()?,
    };
    tracing::info!("Settings storage: {}", storage_path.display());

    let mut registry = ThemeRegistry::builtin();
    if let Some(path) = &config.theme_file {
        let extra = ThemeRegistry::load(path)
            .with_context(|| format!("Failed to load themes from {}", path.display()))?;
        registry.extend(extra)?;
    }

    let preference = FixedPreference {
        prefers_dark: args.prefers_dark || config.prefers_dark,
    };

    let bus = EventBus::new();
    let mut events = EventHandler::new(bus.subscribe());
    let mut store =
        SettingsStore::open(FileStorage::new(storage_path.clone())).with_event_bus(bus);
    let applicator = Rc::new(RefCell::new(ThemeApplicator::new(
        registry,
        preference,
        VirtualDocument::new(),
    )));
    let layout = Rc::new(RefCell::new(LayoutShell::new()));
    store.subscribe(applicator.clone());
    store.subscribe(layout.clone());

    match args.command.unwrap_or(Commands::Show) {
        Commands::Show => print_settings(&store)?,
        Commands::Set {
            theme,
            nav,
            scheme,
            font,
        } => {
            let mut settings = store.get();
            if let Some(theme) = theme {
                if applicator.borrow().registry().get(&theme).is_none() {
                    tracing::warn!("Unknown theme {:?}, the first theme will be shown", theme);
                }
                settings.theme = theme;
            }
            if let Some(nav) = nav {
                settings.navigation_mode = nav;
            }
            if let Some(scheme) = scheme {
                settings.color_scheme = scheme;
            }
            if let Some(font) = font {
                settings.font_scale = font;
            }
            store.set(settings).context("Failed to save settings")?;
            print_settings(&store)?;
        }
        Commands::ToggleScheme => {
            store
                .toggle_color_scheme()
                .context("Failed to save settings")?;
            println!("{}", store.settings().color_scheme.as_str());
        }
        Commands::Themes => {
            let current = store.settings().theme.clone();
            for theme in applicator.borrow().registry().iter() {
                let marker = if theme.name == current { "*" } else { " " };
                println!("{} {:<10} {}", marker, theme.name, theme.label);
            }
        }
        Commands::Css => {
            let applicator = applicator.borrow();
            let doc = applicator.document();
            println!(
                "/* html: {} */",
                doc.root_classes().collect::<Vec<_>>().join(" ")
            );
            println!(
                "/* body: {} */",
                doc.body_classes().collect::<Vec<_>>().join(" ")
            );
            print!("{}", doc.stylesheet(THEME_STYLESHEET_ID).unwrap_or_default());
        }
        Commands::Layout { path } => {
            let layout = layout.borrow();
            println!("navigation: {}", layout.navigation_mode().as_str());
            println!("sidebar open: {}", layout.sidebar_open());
            println!("header nav visible: {}", layout.header_nav_visible());
            for item in &NAV_ITEMS {
                let marker = if item.is_active(&path) { ">" } else { " " };
                println!("{} {:<10} {}", marker, item.label, item.href);
            }
        }
        Commands::Projects { id } => {
            let catalog = Catalog::sample();
            match id {
                Some(id) => {
                    let project = catalog
                        .project_by_id(Some(id.as_str()))
                        .with_context(|| format!("No project with id {id}"))?;
                    println!("{} ({}%)", project.name, project.progress);
                    println!("{}", project.description);
                    println!("{} members", project.team.len());
                    for member in &project.team {
                        let initial = member.initial().unwrap_or('?');
                        println!("  ({}) {:<16} {}", initial, member.name, member.role);
                    }
                    for m in project.active_milestones().chain(project.finished_milestones()) {
                        println!("  [{:<11}] {:>3}% {}", m.status.label(), m.progress, m.title);
                    }
                }
                None => {
                    for project in catalog.projects() {
                        println!("{:<8} {:>3}%  {}", project.id, project.progress, project.name);
                    }
                }
            }
        }
        Commands::InitConfig { force } => {
            let path = match &args.config {
                Some(path) => path.clone(),
                None => AppConfig::default_path()?,
            };
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to replace it)", path.display());
            }
            let effective = AppConfig {
                storage_path: Some(storage_path),
                prefers_dark: preference.prefers_dark,
                theme_file: config.theme_file.clone(),
            };
            effective
                .save_to(&path)
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            println!("{}", path.display());
        }
    }

    while let Some(event) = events.try_next() {
        match event {
            SettingsEvent::Loaded(settings) => {
                tracing::debug!("Settings loaded: theme={}", settings.theme)
            }
            SettingsEvent::Changed(settings) => tracing::info!(
                "Settings changed: theme={} nav={} scheme={} font={}",
                settings.theme,
                settings.navigation_mode.as_str(),
                settings.color_scheme.as_str(),
                settings.font_scale.as_str()
            ),
        }
    }

    Ok(())
}

fn print_settings(store: &SettingsStore<FileStorage>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(store.settings())?);
    Ok(())
}
