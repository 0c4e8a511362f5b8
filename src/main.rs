// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;
use wildatlas::{
    AppError, AppState, CachedSpeciesSource, CommandLineInput, CuratedFallback, CuratedPolicy,
    RedListHttpClient, RedListRepository, ResponseCache, ScrapingSource, ServiceConfig,
    SourceKind, SpeciesAggregator, SpeciesSource,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("wildatlas.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stdout", Box::new(stdout_appender)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the species source stack the configuration asks for.
///
/// Order, innermost first: data source, response cache, curated records.
fn assemble_source(config: &ServiceConfig) -> Result<Arc<dyn SpeciesSource>, AppError> {
    let mut source: Arc<dyn SpeciesSource> = match config.source {
        SourceKind::Iucn => {
            log::info!("Species source: Red List API at {}", config.upstream_url);
            let client: Arc<dyn RedListRepository> = Arc::new(RedListHttpClient::with_base_url(
                &config.upstream_url,
                config.token.clone(),
                config.timeout,
            )?);
            Arc::new(SpeciesAggregator::connect(client, &config.aggregation))
        }
        SourceKind::Scrape => {
            log::info!("Species source: wiki pages under {}", config.wiki_url);
            Arc::new(
                ScrapingSource::with_base_url(&config.wiki_url, config.timeout)?
                    .with_max_species(config.aggregation.max_species),
            )
        }
    };

    match &config.cache {
        Some(settings) => {
            log::info!(
                "Response cache enabled (capacity: {}, TTL: {}s)",
                settings.capacity,
                settings.ttl.as_secs()
            );
            source = Arc::new(CachedSpeciesSource::new(
                source,
                ResponseCache::new(settings.capacity, settings.ttl),
            ));
        }
        None => log::info!("Response cache disabled"),
    }

    if config.curated != CuratedPolicy::Off {
        log::info!("Curated records: {:?}", config.curated);
        source = Arc::new(CuratedFallback::new(source, config.curated));
    }

    Ok(source)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown requested"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ServiceConfig::resolve(cli).context("Invalid configuration")?;
    log::debug!(
        "Upstream timeout {}s, {} species max, {} lookups in flight",
        config.timeout.as_secs(),
        config.aggregation.max_species,
        config.aggregation.concurrency
    );

    let source = assemble_source(&config).context("Failed to set up species source")?;
    let state = AppState::new(source);
    let app = match &config.static_dir {
        Some(dir) => {
            log::info!("Serving static files from {}", dir.display());
            wildatlas::router_with_static(state, dir)
        }
        None => wildatlas::router(state),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_addr))?;

    wildatlas::serve(listener, app, shutdown_signal()).await?;

    Ok(())
}
