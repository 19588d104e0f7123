//! Public site API client (display frontend → arcsite server).

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::document::SiteDocument;
use crate::objects::site::{ContactLinks, SectionsResponse};

/// Typed HTTP client for the read-only **Site API**.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: Client,
    base_url: Url,
}

impl SiteClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /api/v1/site/settings` – the merged site document.
    pub async fn settings(&self) -> Result<SiteDocument, ClientError> {
        let url = self.base_url.join("/api/v1/site/settings")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/site/sections` – sections to render, in order.
    pub async fn sections(&self) -> Result<SectionsResponse, ClientError> {
        let url = self.base_url.join("/api/v1/site/sections")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/site/contact` – contact links.
    pub async fn contact(&self) -> Result<ContactLinks, ClientError> {
        let url = self.base_url.join("/api/v1/site/contact")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }
}
