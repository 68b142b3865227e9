//! Remote API client
//!
//! [`ChartSource`] is the seam between the pipeline and the network: one
//! method per endpoint, so tests can swap in canned pages and errors.

use super::types::{Account, ChartPage, ChartQuery, Team, TeamList};
use crate::config::Config;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use async_trait::async_trait;
use tracing::debug;

/// Read access to the chart hosting API
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// `GET /charts` for one page
    async fn fetch_charts_page(&self, query: &ChartQuery) -> Result<ChartPage>;

    /// `GET /me`
    async fn fetch_me(&self) -> Result<Account>;

    /// `GET /teams`
    async fn fetch_teams(&self) -> Result<Vec<Team>>;
}

/// [`ChartSource`] backed by the Datawrapper REST API
#[derive(Debug, Clone)]
pub struct DatawrapperClient {
    http: HttpClient,
}

impl DatawrapperClient {
    /// Create a client for the configured API base and token
    pub fn new(config: &Config) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(&config.api_base)
            .bearer_token(&config.token)
            .header("Accept", "application/json")
            .timeout(config.request_timeout)
            .build();

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
        })
    }

    /// Query parameters for a charts page request
    pub fn charts_request(query: &ChartQuery) -> RequestConfig {
        let config = RequestConfig::new()
            .query("offset", query.offset.to_string())
            .query("limit", query.limit.to_string())
            .query("orderBy", "publishedAt")
            .query("order", "DESC")
            .query_opt("authorId", query.author_id.as_deref())
            .query_opt("teamId", query.team_id.as_deref());

        if query.published_only {
            config.query("published", "true")
        } else {
            config
        }
    }
}

#[async_trait]
impl ChartSource for DatawrapperClient {
    async fn fetch_charts_page(&self, query: &ChartQuery) -> Result<ChartPage> {
        debug!(
            offset = query.offset,
            limit = query.limit,
            author = ?query.author_id,
            team = ?query.team_id,
            "Requesting charts page"
        );
        self.http
            .get_json_with_config("/charts", Self::charts_request(query))
            .await
    }

    async fn fetch_me(&self) -> Result<Account> {
        self.http.get_json("/me").await
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let teams: TeamList = self.http.get_json("/teams").await?;
        Ok(teams.list)
    }
}
