// src/config.rs
use crate::constants::{
    IUCN_API_BASE_URL, MAX_SPECIES_PER_COUNTRY, RESPONSE_CACHE_CAPACITY, RESPONSE_CACHE_TTL_SECS,
    SCRAPE_REQUEST_TIMEOUT_SECS, TAXON_FETCH_CONCURRENCY, TAXON_FETCH_CONCURRENCY_LIMIT,
    UPSTREAM_REQUEST_TIMEOUT_SECS, WIKIPEDIA_BASE_URL,
};
use crate::error::AppError;
use crate::pipeline::{AggregationSettings, CuratedPolicy};
use crate::types::ApiToken;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the Red List API token.
pub const API_TOKEN_ENV: &str = "IUCN_API_TOKEN";

/// Where species records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Live aggregation against the Red List API
    #[default]
    Iucn,
    /// Wikipedia lists with bundled sample data as fallback
    Scrape,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Species data source
    #[arg(long, value_enum, default_value_t = SourceKind::Iucn)]
    pub source: SourceKind,

    /// Red List API base URL
    #[arg(long, env = "IUCN_API_URL", default_value = IUCN_API_BASE_URL)]
    pub upstream_url: String,

    /// Wiki base URL for the scrape source
    #[arg(long, default_value = WIKIPEDIA_BASE_URL)]
    pub wiki_url: String,

    /// Per-request upstream timeout in seconds (default: 15, or 30 for the scrape source)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Maximum species per country
    #[arg(long, default_value_t = MAX_SPECIES_PER_COUNTRY)]
    pub max_species: usize,

    /// Concurrent taxonomy lookups per request (max 32)
    #[arg(long, default_value_t = TAXON_FETCH_CONCURRENCY)]
    pub concurrency: usize,

    /// Memoize country records (always on for the scrape source)
    #[arg(long, default_value_t = false)]
    pub cache: bool,

    /// Response cache TTL in seconds (0 = never expire)
    #[arg(long, default_value_t = RESPONSE_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Maximum number of cached country records
    #[arg(long, default_value_t = RESPONSE_CACHE_CAPACITY)]
    pub cache_capacity: usize,

    /// When to serve curated records for showcase countries
    #[arg(long, value_enum, default_value_t = CuratedPolicy::Off)]
    pub curated: CuratedPolicy,

    /// Directory of static frontend files served at `/`
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Response cache settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub capacity: usize,
    /// Zero disables expiry.
    pub ttl: Duration,
}

/// Resolved service configuration, validated and ready to assemble the server.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub source: SourceKind,
    pub upstream_url: String,
    pub wiki_url: String,
    pub token: Option<ApiToken>,
    pub timeout: Duration,
    pub aggregation: AggregationSettings,
    /// `None` when records are not memoized.
    pub cache: Option<CacheSettings>,
    pub curated: CuratedPolicy,
    pub static_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl ServiceConfig {
    /// Resolves the configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(API_TOKEN_ENV).ok();
        Self::resolve_with_token(cli, token)
    }

    /// Resolves the configuration with an explicitly supplied raw token.
    ///
    /// A blank token counts as absent; a malformed one is rejected.
    pub fn resolve_with_token(
        cli: CommandLineInput,
        raw_token: Option<String>,
    ) -> Result<Self, AppError> {
        let token = match raw_token.filter(|t| !t.trim().is_empty()) {
            Some(raw) => Some(ApiToken::new(raw)?),
            None => None,
        };

        if cli.max_species == 0 {
            return Err(AppError::MissingConfiguration(
                "--max-species must be at least 1".to_string(),
            ));
        }

        let concurrency = cli.concurrency.clamp(1, TAXON_FETCH_CONCURRENCY_LIMIT);
        if concurrency != cli.concurrency {
            log::warn!(
                "Concurrency {} out of range; using {}",
                cli.concurrency,
                concurrency
            );
        }

        let default_timeout = match cli.source {
            SourceKind::Iucn => UPSTREAM_REQUEST_TIMEOUT_SECS,
            SourceKind::Scrape => SCRAPE_REQUEST_TIMEOUT_SECS,
        };
        let timeout = Duration::from_secs(cli.timeout_secs.unwrap_or(default_timeout).max(1));

        let cache = (cli.cache || cli.source == SourceKind::Scrape).then(|| CacheSettings {
            capacity: cli.cache_capacity,
            ttl: Duration::from_secs(cli.cache_ttl),
        });

        Ok(ServiceConfig {
            listen_addr: SocketAddr::new(cli.bind, cli.port),
            source: cli.source,
            upstream_url: cli.upstream_url,
            wiki_url: cli.wiki_url,
            token,
            timeout,
            aggregation: AggregationSettings {
                max_species: cli.max_species,
                concurrency,
                ..AggregationSettings::default()
            },
            cache,
            curated: cli.curated,
            static_dir: cli.static_dir,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["wildatlas"];
        argv.extend_from_slice(args);
        CommandLineInput::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_live_pipeline() {
        let config = ServiceConfig::resolve_with_token(parse(&[]), Some("abcd1234".into())).unwrap();

        assert_eq!(config.source, SourceKind::Iucn);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.aggregation, AggregationSettings::default());
        assert!(config.cache.is_none());
        assert_eq!(config.curated, CuratedPolicy::Off);
        assert_eq!(config.token.unwrap().as_str(), "abcd1234");
    }

    #[test]
    fn scrape_source_always_caches() {
        let config =
            ServiceConfig::resolve_with_token(parse(&["--source", "scrape", "--cache-ttl", "0"]), None)
                .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.cache,
            Some(CacheSettings {
                capacity: RESPONSE_CACHE_CAPACITY,
                ttl: Duration::ZERO,
            })
        );
    }

    #[test]
    fn concurrency_is_clamped() {
        let config =
            ServiceConfig::resolve_with_token(parse(&["--concurrency", "500"]), None).unwrap();
        assert_eq!(config.aggregation.concurrency, TAXON_FETCH_CONCURRENCY_LIMIT);
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = ServiceConfig::resolve_with_token(parse(&[]), Some("   ".into())).unwrap();
        assert!(config.token.is_none());
    }

    #[test]
    fn malformed_token_is_rejected() {
        let err = ServiceConfig::resolve_with_token(parse(&[]), Some("two words".into())).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn curated_policy_parses() {
        let config =
            ServiceConfig::resolve_with_token(parse(&["--curated", "on-failure"]), None).unwrap();
        assert_eq!(config.curated, CuratedPolicy::OnFailure);
    }
}
