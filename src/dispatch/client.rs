//! Authenticated HTTP client.
//!
//! Wraps `reqwest` with the per-request behavior every console call needs:
//! token selection from the resource indicator, the `Accept-Language` header,
//! and the uniform error policy on failed responses. Feature code gets the
//! standard verb methods plus JSON helpers and never touches tokens itself.

use std::sync::Arc;
use std::time::Duration;

use http::header::ACCEPT_LANGUAGE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::auth::{RequestErrorBody, ResourceIndicator, SessionProvider};
use crate::config::{ApiSettings, TenantContext};
use crate::dispatch::interceptor::{
    ConsoleErrorInterceptor, ErrorOutcome, ResponseInterceptor,
};
use crate::dispatch::route::RequestConfig;
use crate::errors::{Error, Result};
use crate::i18n::{Localizer, StaticLocalizer};
use crate::ui::{ConfirmDialog, NotificationSink};

/// Builder for [`ApiClient`].
///
/// `session` and `prefix config` are mandatory; everything else has a
/// default. `hide_error_toast` drops the interceptor entirely, so errors
/// reject silently for callers that render failures themselves.
pub struct ApiClientBuilder {
    config: RequestConfig,
    session: Arc<dyn SessionProvider>,
    localizer: Arc<dyn Localizer>,
    interceptor: Option<Arc<dyn ResponseInterceptor>>,
    timeout: Duration,
}

impl ApiClientBuilder {
    pub fn new(config: RequestConfig, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            config,
            session,
            localizer: Arc::new(StaticLocalizer::default()),
            interceptor: None,
            timeout: ApiSettings::default().timeout(),
        }
    }

    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(ApiClient {
            client,
            prefix_url: self.config.prefix_url,
            resource_indicator: self.config.resource_indicator,
            session: self.session,
            localizer: self.localizer,
            interceptor: self.interceptor,
        })
    }
}

/// Configured HTTP client for one tenant's management API.
pub struct ApiClient {
    client: Client,
    prefix_url: Url,
    resource_indicator: ResourceIndicator,
    session: Arc<dyn SessionProvider>,
    localizer: Arc<dyn Localizer>,
    interceptor: Option<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Build a client for the current tenant with the production error
    /// policy attached.
    ///
    /// Resolves the request configuration from the settings' deployment mode,
    /// so a non-default tenant in self-hosted mode fails here, before any
    /// network activity.
    #[allow(clippy::too_many_arguments)]
    pub fn for_tenant(
        settings: &ApiSettings,
        context: &TenantContext,
        session: Arc<dyn SessionProvider>,
        notifications: Arc<dyn NotificationSink>,
        dialog: Arc<dyn ConfirmDialog>,
        localizer: Arc<dyn Localizer>,
        hide_error_toast: bool,
    ) -> Result<Self> {
        let config = RequestConfig::resolve(settings.mode, context, &settings.console_origin)?;

        let mut builder = ApiClientBuilder::new(config, session.clone())
            .localizer(localizer.clone())
            .timeout(settings.timeout());

        if !hide_error_toast {
            builder = builder.interceptor(Arc::new(ConsoleErrorInterceptor::new(
                session,
                notifications,
                dialog,
                localizer,
                settings.post_sign_out_redirect_uri.clone(),
            )));
        }

        builder.build()
    }

    /// Base URL requests are resolved against
    pub fn prefix_url(&self) -> &Url {
        &self.prefix_url
    }

    /// Audience tokens are scoped to
    pub fn resource_indicator(&self) -> &ResourceIndicator {
        &self.resource_indicator
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    /// Send a POST request with a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Send a PUT request with a JSON body
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// Send a PATCH request with a JSON body
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(Method::DELETE, path, None::<&()>).await
    }

    /// Send a GET request and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Self::into_json(self.get(path).await?).await
    }

    /// Send a POST request with JSON body and deserialize the response
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        Self::into_json(self.post(path, body).await?).await
    }

    /// Send a PUT request with JSON body and deserialize the response
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        Self::into_json(self.put(path, body).await?).await
    }

    /// Send a PATCH request with JSON body and deserialize the response
    pub async fn patch_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        Self::into_json(self.patch(path, body).await?).await
    }

    /// Send a DELETE request and deserialize the JSON response
    pub async fn delete_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        Self::into_json(self.delete(path).await?).await
    }

    /// Send a DELETE request that expects no content response (204)
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        self.delete(path).await?;
        Ok(())
    }

    async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(response.json::<T>().await?)
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.join_url(path)?;
        debug!(%method, %url, "Dispatching request");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder = self.authorize(builder).await?;

        let response = builder.send().await?;
        self.check(response).await
    }

    /// Attach the bearer token and language header for authenticated
    /// sessions. Unauthenticated sessions send the request bare.
    async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        if !self.session.is_authenticated() {
            return Ok(builder);
        }

        let token = match self.resource_indicator.organization_id() {
            Some(org_id) => self.session.organization_token(&org_id).await?,
            None => self.session.access_token(&self.resource_indicator).await?,
        };

        Ok(builder
            .bearer_auth(token)
            .header(ACCEPT_LANGUAGE, self.localizer.language()))
    }

    /// Run the error policy on non-success responses and reject the call.
    ///
    /// The body is buffered once; the interceptor and the returned error both
    /// work from that copy, so neither consumes anything from the other.
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!(status = status.as_u16(), "Request failed");
        let bytes = response.bytes().await.unwrap_or_default();
        let parsed = serde_json::from_slice::<RequestErrorBody>(&bytes).ok();

        if let Some(interceptor) = &self.interceptor {
            if interceptor.on_error(status, &bytes).await == ErrorOutcome::SignedOut {
                return Err(Error::session_terminated(format!(
                    "request to this tenant rejected with status {}",
                    status.as_u16()
                )));
            }
        }

        Err(Error::request(status.as_u16(), parsed))
    }

    fn join_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.prefix_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }
}
