//! Client for the travel journal API and the two demo services.
//!
//! One [`TravelClient`] is built per process with the base URL and the
//! `apiKey` default header. The bearer token is read from the shared
//! [`SessionStore`] at call time, so every page observes the same session.

use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, Response, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use shared::{
    config::client::ClientConfig,
    models::{
        AddCartRequest, CartResponse, Category, Envelope, ErrorResponse, LoginRequest,
        LoginResponse, Product, Promo, RegisterForm, RegisterResponse, Todo,
    },
    session::SessionStore,
};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::ClientError;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "apikey";
/// Header carrying the per-action idempotency token.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Remote operations the pages depend on.
#[cfg_attr(test, mockall::automock)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TravelApi {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;

    /// `POST /register` as a multipart form.
    async fn register(&self, form: &RegisterForm) -> Result<RegisterResponse, ClientError>;

    /// `GET /promos`.
    async fn promos(&self) -> Result<Vec<Promo>, ClientError>;

    /// `GET /categories`.
    async fn categories(&self) -> Result<Vec<Category>, ClientError>;

    /// `POST /add-cart` tagged with `idempotency_key`.
    async fn add_cart(
        &self,
        request: &AddCartRequest,
        idempotency_key: Uuid,
    ) -> Result<CartResponse, ClientError>;

    /// Demo catalogue listing.
    async fn products(&self) -> Result<Vec<Product>, ClientError>;

    /// Demo catalogue entry.
    async fn product(&self, id: u64) -> Result<Product, ClientError>;

    /// Demo todo item.
    async fn todo(&self, id: u64) -> Result<Todo, ClientError>;
}

/// reqwest-backed [`TravelApi`].
#[derive(Clone, Debug)]
pub struct TravelClient {
    config: Arc<ClientConfig>,
    api: Client,
    demo: Client,
    session: SessionStore,
}

impl TravelClient {
    /// Build the client once for the whole process.
    ///
    /// # Errors
    /// Returns [`ClientError::Validation`] when the API key is not a valid
    /// header value, or [`ClientError::Network`] when the HTTP backend cannot
    /// be initialised.
    pub fn new(config: ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            ClientError::Validation("API key contains invalid header characters".to_string())
        })?;
        headers.insert(API_KEY_HEADER, api_key);

        let api = with_timeout(Client::builder().default_headers(headers), &config).build()?;
        let demo = with_timeout(Client::builder(), &config).build()?;

        Ok(Self {
            config: Arc::new(config),
            api,
            demo,
            session,
        })
    }

    /// Attach the current credentials. Returns the token sent as bearer so a
    /// 401 drops that session only, and can be told apart from a failed login.
    fn authorize(&self, request: RequestBuilder) -> (RequestBuilder, Option<String>) {
        let session = self.session.get();
        let mut request = request;
        if let Some(key) = session.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }
        match (session.bearer(), session.token()) {
            (Some(bearer), Some(token)) => {
                (request.header(AUTHORIZATION, bearer), Some(token.to_string()))
            }
            _ => (request, None),
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        sent_token: Option<&str>,
        endpoint: &'static str,
    ) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|err| {
            error!(endpoint, error = %err, "API request failed");
            ClientError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(endpoint, status = status.as_u16(), "API request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let problem = ErrorResponse::from_body(&body);
        error!(endpoint, status = status.as_u16(), error = %problem, "API error");

        if status == StatusCode::UNAUTHORIZED {
            if let Some(token) = sent_token {
                if !self.session.invalidate(token) {
                    debug!(endpoint, "rejected token was already replaced");
                }
                return Err(ClientError::Unauthorized);
            }
        }

        Err(ClientError::Status {
            status,
            message: problem.message.filter(|message| !message.trim().is_empty()),
        })
    }

    async fn list<T: DeserializeOwned>(
        &self,
        path: &'static str,
        what: &'static str,
    ) -> Result<Vec<T>, ClientError> {
        let (request, token) = self.authorize(self.api.get(self.config.api_url(path)));
        let envelope: Envelope = self.send(request, token.as_deref(), path).await?.json().await?;
        Ok(envelope.into_list(what)?)
    }

    async fn demo_get<T: DeserializeOwned>(
        &self,
        url: String,
        endpoint: &'static str,
    ) -> Result<T, ClientError> {
        Ok(self.send(self.demo.get(url), None, endpoint).await?.json().await?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_timeout(builder: reqwest::ClientBuilder, config: &ClientConfig) -> reqwest::ClientBuilder {
    match config.request_timeout_secs {
        Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
        None => builder,
    }
}

#[cfg(target_arch = "wasm32")]
fn with_timeout(builder: reqwest::ClientBuilder, _config: &ClientConfig) -> reqwest::ClientBuilder {
    builder
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TravelApi for TravelClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let builder = self.api.post(self.config.api_url("login")).json(request);
        Ok(self.send(builder, None, "login").await?.json().await?)
    }

    async fn register(&self, form: &RegisterForm) -> Result<RegisterResponse, ClientError> {
        let mut multipart = Form::new();
        for (name, value) in form.text_fields() {
            multipart = multipart.text(name, value);
        }
        if let Some(upload) = &form.profile_picture {
            let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
            if let Some(content_type) = &upload.content_type {
                part = part.mime_str(content_type)?;
            }
            multipart = multipart.part("profilePicture", part);
        }

        let (builder, token) =
            self.authorize(self.api.post(self.config.api_url("register")).multipart(multipart));
        let response = self.send(builder, token.as_deref(), "register").await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(RegisterResponse::default());
        }
        serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
    }

    async fn promos(&self) -> Result<Vec<Promo>, ClientError> {
        self.list("promos", "Promotions").await
    }

    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.list("categories", "Categories").await
    }

    async fn add_cart(
        &self,
        request: &AddCartRequest,
        idempotency_key: Uuid,
    ) -> Result<CartResponse, ClientError> {
        let builder = self
            .api
            .post(self.config.api_url("add-cart"))
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key.to_string())
            .json(request);
        let (builder, token) = self.authorize(builder);
        Ok(self.send(builder, token.as_deref(), "add-cart").await?.json().await?)
    }

    async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.demo_get(self.config.products_url("products"), "products")
            .await
    }

    async fn product(&self, id: u64) -> Result<Product, ClientError> {
        self.demo_get(self.config.products_url(&format!("products/{id}")), "product")
            .await
    }

    async fn todo(&self, id: u64) -> Result<Todo, ClientError> {
        self.demo_get(self.config.todos_url(&format!("todos/{id}")), "todo")
            .await
    }
}
