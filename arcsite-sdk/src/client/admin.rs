//! Admin API client (admin panel → arcsite server).
//!
//! Requests authenticate either with the plaintext admin secret in the
//! `Arcsite-Admin-Authorization` header, or with a session token obtained
//! from [`AdminClient::login`].

use reqwest::{Client, RequestBuilder};
use url::Url;

use super::{ClientError, parse_response};
use crate::document::SiteDocument;
use crate::edit::EditOp;
use crate::objects::admin::{
    ApplyEditsRequest, LegalDocuments, LoginRequest, LoginResponse, OverviewResponse,
    WriteOutcome,
};
use crate::signature::ADMIN_AUTH_HEADER;

#[derive(Debug, Clone)]
enum Credential {
    Secret(String),
    Session(String),
}

/// Typed HTTP client for the arcsite **Admin API**.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
    credential: Credential,
}

impl AdminClient {
    /// Create a new `AdminClient` authenticating with the plaintext secret.
    pub fn new(base_url: Url, admin_secret: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            credential: Credential::Secret(admin_secret.into()),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::Secret(secret) => req.header(ADMIN_AUTH_HEADER, secret),
            Credential::Session(token) => req.bearer_auth(token),
        }
    }

    /// `POST /api/v1/admin/login` – exchange the secret for a session
    /// token. Subsequent calls on this client use the token.
    pub async fn login(&mut self) -> Result<LoginResponse, ClientError> {
        let Credential::Secret(secret) = &self.credential else {
            return Err(ClientError::Api {
                status: reqwest::StatusCode::BAD_REQUEST,
                body: "client already holds a session".to_string(),
            });
        };
        let url = self.base_url.join("/api/v1/admin/login")?;
        let resp = self
            .http
            .post(url)
            .json(&LoginRequest {
                secret: secret.clone(),
            })
            .send()
            .await?;
        let login: LoginResponse = parse_response(resp).await?;
        self.credential = Credential::Session(login.token.clone());
        Ok(login)
    }

    /// `GET /api/v1/admin/settings` – the current merged document, used to
    /// seed an editor working copy.
    pub async fn settings(&self) -> Result<SiteDocument, ClientError> {
        let url = self.base_url.join("/api/v1/admin/settings")?;
        let resp = self.authorize(self.http.get(url)).send().await?;
        parse_response(resp).await
    }

    /// `PUT /api/v1/admin/settings` – replace the whole document.
    ///
    /// A remote write failure is reported as [`ClientError::Api`] with
    /// status 502; the server has still applied the document locally.
    pub async fn replace_settings(&self, doc: &SiteDocument) -> Result<WriteOutcome, ClientError> {
        let url = self.base_url.join("/api/v1/admin/settings")?;
        let resp = self.authorize(self.http.put(url)).json(doc).send().await?;
        parse_response(resp).await
    }

    /// `POST /api/v1/admin/settings/edits` – apply a batch of edits to the
    /// current document and commit the result.
    pub async fn apply_edits(&self, edits: Vec<EditOp>) -> Result<WriteOutcome, ClientError> {
        let url = self.base_url.join("/api/v1/admin/settings/edits")?;
        let resp = self
            .authorize(self.http.post(url))
            .json(&ApplyEditsRequest { edits })
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/admin/overview` – dashboard counters.
    pub async fn overview(&self) -> Result<OverviewResponse, ClientError> {
        let url = self.base_url.join("/api/v1/admin/overview")?;
        let resp = self.authorize(self.http.get(url)).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/admin/legal/defaults` – built-in legal texts.
    pub async fn default_legal_documents(&self) -> Result<LegalDocuments, ClientError> {
        let url = self.base_url.join("/api/v1/admin/legal/defaults")?;
        let resp = self.authorize(self.http.get(url)).send().await?;
        parse_response(resp).await
    }

    /// `POST /api/v1/admin/legal/sync` – overwrite the stored legal texts
    /// with the built-in ones.
    pub async fn sync_legal_documents(&self) -> Result<WriteOutcome, ClientError> {
        let url = self.base_url.join("/api/v1/admin/legal/sync")?;
        let resp = self.authorize(self.http.post(url)).send().await?;
        parse_response(resp).await
    }
}
