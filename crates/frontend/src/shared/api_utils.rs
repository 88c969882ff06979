//! HTTP client wrapper for the REST backend.
//!
//! Every call goes through [`ApiClient`], which attaches the bearer token,
//! turns non-2xx responses into [`ApiError`] using the body's `detail` or
//! `message`, and ends the session on 401.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionContext;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    use_mock_data: bool,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionContext) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            use_mock_data: config.api.use_mock_data,
            session,
        }
    }

    /// Whether lists and dashboards should be served from sample data.
    pub fn use_mock_data(&self) -> bool {
        self.use_mock_data
    }

    pub fn session(&self) -> SessionContext {
        self.session
    }

    /// Full URL for an API path such as `/api/orders`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.authorization_header() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    /// Checks the status and returns the response for body decoding.
    async fn check(
        &self,
        result: Result<Response, gloo_net::Error>,
        method: &str,
        path: &str,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let response = result.map_err(|e| {
            log::error!("{} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            self.session.touch();
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::http(status, &body, fallback);
        log::warn!("{} {} -> HTTP {}: {}", method, path, status, error);
        if error.is_unauthorized() {
            self.session.expire("server rejected the token");
        }
        Err(error)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let result = self.authorize(Request::get(&self.url(path))).send().await;
        let response = self.check(result, "GET", path, fallback).await?;
        Self::decode(response).await
    }

    /// GET with query parameters encoded by `serde_qs`.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
        let full_path = if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        };
        self.get_json(&full_path, fallback).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self.check(request.send().await, "POST", path, fallback).await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self.check(request.send().await, "PUT", path, fallback).await?;
        Self::decode(response).await
    }

    /// PUT whose response body is ignored.
    pub async fn put_no_content<B: Serialize>(&self, path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        self.check(request.send().await, "PUT", path, fallback).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let result = self.authorize(Request::delete(&self.url(path))).send().await;
        self.check(result, "DELETE", path, fallback).await?;
        Ok(())
    }

    /// Multipart POST. Returns the raw body text, which is not schema-checked.
    pub async fn post_form(&self, path: &str, form: FormData, fallback: &str) -> Result<String, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self.check(request.send().await, "POST", path, fallback).await?;
        Ok(response.text().await.unwrap_or_default())
    }

    /// GET whose body is ignored; only the status matters.
    pub async fn get_ok(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let result = self.authorize(Request::get(&self.url(path))).send().await;
        self.check(result, "GET", path, fallback).await?;
        Ok(())
    }

    /// GET returning raw bytes (file downloads).
    pub async fn get_bytes(&self, path: &str, fallback: &str) -> Result<Vec<u8>, ApiError> {
        let result = self.authorize(Request::get(&self.url(path))).send().await;
        let response = self.check(result, "GET", path, fallback).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}

/// Builds a multipart body from text fields and an optional file.
pub fn form_data(fields: &[(&str, String)], file: Option<(&str, &web_sys::File)>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    }
    if let Some((name, file)) = file {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    }
    Ok(form)
}

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
