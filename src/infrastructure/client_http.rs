use std::sync::Arc;

use anyhow::Context;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::{CodeSearch, RequestOptionsProvider, ResultItem, ResultPage, SearchRequest, StdResult};

/// The public cloud host of the service.
pub const CLOUD_HOST: &str = "dev.azure.com";

/// The search endpoint host serving the public cloud service.
const CLOUD_SEARCH_HOST: &str = "almsearch.dev.azure.com";

/// The API version sent with every search request.
const API_VERSION: &str = "6.0-preview.1";

/// The number of results requested per page.
const PAGE_SIZE: u64 = 1000;

/// Search error
#[derive(Error, Debug)]
pub enum SearchError {
    /// The server answered a page request with a status other than 200.
    #[error("code search failed with response status {0}")]
    UnexpectedStatus(u16),
}

/// The JSON body of a page request.
#[derive(Serialize, Debug)]
struct PageQuery {
    #[serde(rename = "searchText")]
    search_text: String,

    #[serde(rename = "$skip")]
    skip: u64,

    #[serde(rename = "$top")]
    top: u64,
}

/// Queries the code search HTTP API, one page at a time.
pub struct HttpCodeSearchClient {
    client: Client,
    options_provider: Arc<dyn RequestOptionsProvider>,
}

impl HttpCodeSearchClient {
    /// Creates a new `HttpCodeSearchClient` with the given request options provider.
    pub fn try_new(options_provider: Arc<dyn RequestOptionsProvider>) -> StdResult<Self> {
        let client = Client::builder()
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self {
            client,
            options_provider,
        })
    }

    /// Builds the search endpoint URL for the given request, picking the fixed public
    /// search host for the cloud service and the configured host otherwise.
    fn search_url(&self, request: &SearchRequest) -> String {
        let host = request.host_config().host();
        let search_host = match host == CLOUD_HOST {
            true => CLOUD_SEARCH_HOST,
            false => host,
        };

        format!(
            "https://{search_host}/{}/{}/_apis/search/codesearchresults?api-version={API_VERSION}",
            request.organization(),
            request.project()
        )
    }

    async fn fetch_page(
        &self,
        url: &str,
        request: &SearchRequest,
        skip: u64,
    ) -> StdResult<ResultPage> {
        let query = PageQuery {
            search_text: request.search_text(),
            skip,
            top: PAGE_SIZE,
        };
        let mut http_request = self.client.post(url).json(&query);
        for (name, value) in self
            .options_provider
            .request_options(request.host_config())?
        {
            http_request = http_request.header(name.as_str(), value.as_str());
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to send search request to {url}"))?;
        if response.status() != StatusCode::OK {
            return Err(SearchError::UnexpectedStatus(response.status().as_u16()).into());
        }

        response
            .json::<ResultPage>()
            .await
            .with_context(|| "Failed to parse search response body")
    }

    async fn search_paginated(
        &self,
        url: &str,
        request: &SearchRequest,
    ) -> StdResult<Vec<ResultItem>> {
        let mut items: Vec<ResultItem> = vec![];

        loop {
            let page = self.fetch_page(url, request, items.len() as u64).await?;
            let count = page.count();
            items.extend(page.into_results());
            debug!("Fetched page: declared_total={count}, accumulated={}", items.len());
            if count <= items.len() as u64 {
                break;
            }
        }

        Ok(items)
    }
}

#[async_trait::async_trait]
impl CodeSearch for HttpCodeSearchClient {
    async fn search(&self, request: &SearchRequest) -> StdResult<Vec<ResultItem>> {
        let url = self.search_url(request);

        self.search_paginated(&url, request).await
    }
}
