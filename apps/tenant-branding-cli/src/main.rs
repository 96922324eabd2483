mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use static_directory_plugin::StaticTenantDirectory;
use tenant_branding::domain::persistence::{load_snapshot, save_snapshot};
use tenant_branding::domain::recovery::recovery_screen;
use tenant_branding::{
    BrandingEngine, FileKeyValueStore, InMemoryDocument, InMemoryKeyValueStore,
    ResolutionOutcome,
};
use tenant_branding_sdk::{BrandingSnapshot, KeyValueStore, Location, TenantDirectory};

use crate::config::AppConfig;

/// Tenant branding - resolve tenants and preview their branding
#[derive(Parser)]
#[command(name = "tenant-branding")]
#[command(about = "Tenant branding - resolve tenants and preview their branding")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Branding store file (overrides `store.path`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a visit and print the outcome and resulting document
    Resolve {
        /// Full URL of the visit, e.g. <https://bils.locadoras.com/equipamentos>
        #[arg(long, conflicts_with_all = ["host", "path"], required_unless_present = "host")]
        url: Option<String>,
        /// Request hostname
        #[arg(long)]
        host: Option<String>,
        /// Request path
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print the "tenant not found" screen for a slug
    Recovery {
        /// Slug that failed to resolve
        #[arg(long)]
        slug: Option<String>,
    },
    /// Write the persisted branding snapshot; omitted values are removed
    Persist {
        /// Custom CSS text
        #[arg(long, conflicts_with = "css_file")]
        css: Option<String>,
        /// Read custom CSS from a file
        #[arg(long)]
        css_file: Option<PathBuf>,
        /// Tenant marker override
        #[arg(long)]
        slug: Option<String>,
        /// Page background value
        #[arg(long)]
        background: Option<String>,
    },
    /// Validate configuration and exit
    Check,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    #[serde(flatten)]
    outcome: &'a ResolutionOutcome,
    document: &'a InMemoryDocument,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.store.clone() {
        config.store.path = Some(path);
    }
    logging::init_logging(&config.logging, cli.verbose, cli.json_logs)?;

    tracing::debug!(
        tenants = config.directory.tenants.len(),
        root_domain = %config.branding.root_domain,
        "configuration loaded"
    );

    match cli.command {
        Commands::Resolve { url, host, path } => {
            let location = match url {
                Some(url) => location_from_url(&url)?,
                None => Location::new(host.unwrap_or_default(), path),
            };
            resolve(&config, &location)
        }
        Commands::Recovery { slug } => recovery(&config, slug.as_deref()),
        Commands::Persist {
            css,
            css_file,
            slug,
            background,
        } => {
            let custom_css = match css_file {
                Some(file) => Some(
                    std::fs::read_to_string(&file)
                        .with_context(|| format!("failed to read {}", file.display()))?,
                ),
                None => css,
            };
            persist(
                &config,
                &BrandingSnapshot {
                    custom_css,
                    tenant_slug: slug,
                    background_value: background,
                },
            )
        }
        Commands::Check => check(&config),
    }
}

fn location_from_url(raw: &str) -> Result<Location> {
    let url = url::Url::parse(raw).with_context(|| format!("invalid url: {raw}"))?;
    let Some(host) = url.host_str() else {
        anyhow::bail!("url has no host: {raw}");
    };
    let path = match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    };
    Ok(Location::new(host, path))
}

fn open_store(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>> {
    Ok(match &config.store.path {
        Some(path) => Arc::new(
            FileKeyValueStore::open(path)
                .with_context(|| format!("failed to open store {}", path.display()))?,
        ),
        None => Arc::new(InMemoryKeyValueStore::new()),
    })
}

fn resolve(config: &AppConfig, location: &Location) -> Result<()> {
    let directory = Arc::new(StaticTenantDirectory::from_config(&config.directory));
    let engine = BrandingEngine::new(config.branding.clone(), directory, open_store(config)?)?;

    let mut document = InMemoryDocument::new();
    let outcome = engine.navigate(location, &mut document);

    let report = ResolveReport {
        outcome: &outcome,
        document: &document,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn recovery(config: &AppConfig, slug: Option<&str>) -> Result<()> {
    let directory = StaticTenantDirectory::from_config(&config.directory);
    let screen = recovery_screen(slug, &directory.tenants(), &config.branding);
    println!("{}", serde_json::to_string_pretty(&screen)?);
    Ok(())
}

fn persist(config: &AppConfig, snapshot: &BrandingSnapshot) -> Result<()> {
    if config.store.path.is_none() {
        anyhow::bail!("persist needs a store file: pass --store or set store.path");
    }
    let store = open_store(config)?;
    let keys = &config.branding.storage_keys;
    save_snapshot(store.as_ref(), keys, snapshot).context("failed to write snapshot")?;
    tracing::info!("branding snapshot written");

    println!("{}", serde_json::to_string_pretty(&load_snapshot(store.as_ref(), keys))?);
    Ok(())
}

fn check(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // AppConfig::load already validated the branding section.
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}
