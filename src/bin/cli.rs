//! Studio Energiya CLI
//!
//! Inspect the site document from the command line:
//! - Resolve a URL path to the page it renders
//! - List every page path
//! - Normalize an asset reference
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use energiya::assets::{normalize, AssetKind, AssetRef};
use energiya::config::{generate_default_config, LoggingConfig};
use energiya::pages::{render_route, Page, PageState};
use energiya::routes::{site_paths, Route};
use energiya::site::SiteDocument;

#[derive(Parser)]
#[command(name = "energiya-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the Studio Energiya site document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site document
    #[arg(long, default_value = "data/site.json", global = true)]
    pub data: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the page a URL path renders
    Resolve {
        /// Path, e.g. /trainer/anna/lesson/Yoga
        path: String,
    },

    /// List every page path of the document
    Routes,

    /// Normalize an asset reference
    Asset {
        /// Raw path, URL or JSON wrapper object
        reference: String,
        /// Context: photo, cert, gallery, cup, video
        #[arg(short, long, default_value = "photo")]
        kind: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    energiya::logging::init(&LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    });

    let json = cli.format == "json";

    match cli.command {
        Commands::Resolve { path } => {
            let doc = load(&cli.data)?;
            let route = Route::parse(&path);
            let page = render_route(&doc, &route);

            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_page(&route, &page);
            }
        }

        Commands::Routes => {
            let doc = load(&cli.data)?;
            let paths = site_paths(&doc);

            if json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                for path in paths {
                    println!("{}", path);
                }
            }
        }

        Commands::Asset { reference, kind } => {
            let kind = AssetKind::from_name(&kind)
                .with_context(|| format!("Unknown asset kind: {}", kind))?;

            // Wrapper objects are passed as JSON, everything else is a path
            let asset: AssetRef = if reference.trim_start().starts_with('{') {
                serde_json::from_str(&reference).context("Invalid asset wrapper JSON")?
            } else {
                AssetRef::from(reference)
            };

            println!("{}", normalize(&asset, kind));
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<SiteDocument> {
    SiteDocument::load(path).with_context(|| format!("Cannot load site document {:?}", path))
}

fn print_page(route: &Route, page: &Page) {
    println!("Route: {} ({})", route.name(), route.path());
    println!();

    match page {
        Page::Home(home) => {
            println!("{}", home.title);
            println!("{}", home.description);
            println!();
            println!("{:<16} {:<24} {}", "ID", "Name", "Role");
            println!("{}", "-".repeat(60));
            for card in &home.trainers {
                println!("{:<16} {:<24} {}", card.id, card.name, card.role);
            }
            println!();
            println!("Achievements: {}", home.achievements.len());
            println!("Gallery: {}", home.gallery.len());
            if let Some(location) = &home.location {
                println!("Address: {}", location.address_text);
            }
        }
        Page::Trainer(PageState::Found(trainer)) => {
            println!("{} - {}", trainer.name, trainer.role);
            println!("Photo: {}", trainer.photo);
            if let Some(instagram) = &trainer.instagram {
                println!("Instagram: {}", instagram);
            }
            if trainer.has_certs() {
                println!("Certificates: {}", trainer.certs.len());
            }
            if trainer.has_videos() {
                println!("Videos: {}", trainer.videos.len());
            }
            println!();
            for lesson in &trainer.lessons {
                println!("  {:<30} {}", lesson.title, lesson.href);
            }
        }
        Page::Lesson(PageState::Found(lesson)) => {
            println!("{} (with {})", lesson.title, lesson.trainer_name);
            println!();
            for line in &lesson.details {
                println!("  {}", line);
            }
            if let Some(prices) = &lesson.prices {
                println!();
                println!("Prices:");
                for line in prices {
                    println!("  {}", line);
                }
            }
        }
        Page::Trainer(PageState::NotFound) | Page::Lesson(PageState::NotFound) | Page::NotFound => {
            println!("Not found");
        }
        Page::Admin => {
            println!("Content editor area (not rendered by the site)");
        }
    }
}
