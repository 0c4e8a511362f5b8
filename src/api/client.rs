// src/api/client.rs
//! HTTP gateway to the Red List API.
//!
//! A thin wrapper around reqwest: it builds URLs, attaches the token, sends a
//! single request with a fixed timeout and hands the raw body to the parser.

use super::parser::parse_api_response;
use super::responses::{CountryListResponse, CountryResponse, TaxonResponse};
use super::types::CountryAssessments;
use crate::constants::{IUCN_API_BASE_URL, UPSTREAM_REQUEST_TIMEOUT_SECS};
use crate::error::AppError;
use crate::model::TaxonDetail;
use crate::types::{ApiToken, CountryCode, ScientificName};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// A thin wrapper around reqwest Client for Red List API requests.
#[derive(Clone)]
pub struct RedListHttpClient {
    client: Client,
    base_url: Url,
    token: Option<ApiToken>,
}

impl RedListHttpClient {
    /// Creates a client for the public Red List API.
    pub fn new(token: Option<ApiToken>) -> Result<Self, AppError> {
        Self::with_base_url(
            IUCN_API_BASE_URL,
            token,
            Duration::from_secs(UPSTREAM_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Creates a client for any Red List compatible endpoint.
    pub fn with_base_url(
        base_url: &str,
        token: Option<ApiToken>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid upstream URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::MissingConfiguration(format!(
                "Upstream URL '{}' cannot be used as a base",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        if token.is_none() {
            log::warn!("Red List client created without an API token; upstream calls will likely be rejected");
        }

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Builds the URL for `segments` under the base path, with the token appended.
    ///
    /// Segments are percent-encoded, so user input can never alter the path.
    fn endpoint_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::MissingConfiguration(format!("Bad upstream URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() || self.token.is_some() {
            let mut pairs = url.query_pairs_mut();
            pairs.extend_pairs(query);
            if let Some(token) = &self.token {
                pairs.append_pair("token", token.as_str());
            }
        }

        Ok(url)
    }

    /// Sends a single GET and returns the endpoint label with the raw response.
    ///
    /// Transport errors drop their URL so the token never reaches a log line.
    async fn send(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<(String, Response), AppError> {
        let endpoint = segments.join("/");
        let url = self.endpoint_url(segments, query)?;

        log::debug!("GET {} {:?}", endpoint, query);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| AppError::UpstreamUnavailable {
                endpoint: endpoint.clone(),
                source: source.without_url(),
            })?;

        log::debug!("{} responded {}", endpoint, response.status());
        Ok((endpoint, response))
    }

    /// Sends a GET and decodes the body as `T`.
    async fn get_json<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let (endpoint, response) = self.send(segments, query).await?;
        let result = extract_response_text(endpoint, response).await?;
        parse_api_response(result)
    }
}

#[async_trait::async_trait]
impl super::RedListRepository for RedListHttpClient {
    /// A non-success status counts as unavailable here: the index has no
    /// use for the distinction.
    async fn list_countries(&self) -> Result<HashMap<String, String>, AppError> {
        let (endpoint, response) = self.send(&["countries"], &[]).await?;
        let response = response
            .error_for_status()
            .map_err(|source| AppError::UpstreamUnavailable {
                endpoint: endpoint.clone(),
                source: source.without_url(),
            })?;
        let result = extract_response_text(endpoint, response).await?;
        let countries: CountryListResponse = parse_api_response(result)?;
        Ok(countries.into_name_map())
    }

    async fn country_assessments(
        &self,
        code: &CountryCode,
    ) -> Result<CountryAssessments, AppError> {
        let response: CountryResponse = self.get_json(&["countries", code.as_str()], &[]).await?;
        Ok(response.into())
    }

    async fn taxon_detail(&self, name: &ScientificName) -> Result<TaxonDetail, AppError> {
        let response: TaxonResponse = self
            .get_json(
                &["taxa", "scientific_name"],
                &[("genus_name", name.genus()), ("species_name", name.species())],
            )
            .await?;
        Ok(response.into())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    /// Path label used in logs and errors; never contains the token.
    pub endpoint: String,
}

/// Reads the whole body. A connection dropped mid-body counts as unavailable.
pub async fn extract_response_text(
    endpoint: String,
    response: Response,
) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let data = match response.text().await {
        Ok(text) => text,
        Err(source) => {
            return Err(AppError::UpstreamUnavailable {
                endpoint,
                source: source.without_url(),
            })
        }
    };

    Ok(ApiResponse {
        data,
        status,
        endpoint,
    })
}
