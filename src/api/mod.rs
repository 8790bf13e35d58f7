//! Backend API Bindings
//!
//! Thin async wrappers over the restaurant REST API, organized by domain.
//! Every call resolves to `ApiResult`; views turn the error into banner text.

mod auth;
mod orders;
mod menu;
mod cart;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use rms_domain::{ApiError, ApiResult, auth_header};

use crate::config;

// Re-export all public items
pub use auth::*;
pub use orders::*;
pub use menu::*;
pub use cart::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

/// Fail early when a call needs a session and there is none
pub(crate) fn require_token(token: Option<&str>) -> ApiResult<&str> {
    token.filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)
}

fn builder(verb: Verb, path: &str, token: Option<&str>) -> RequestBuilder {
    let url = config::get().endpoint(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match token {
        Some(token) => builder.header("Authorization", &auth_header(token)),
        None => builder,
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    match e {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

fn check(verb: Verb, path: &str, response: Response, context: &str) -> ApiResult<Response> {
    if response.ok() {
        log::debug!("[API] {} {} -> {}", verb.as_str(), path, response.status());
        Ok(response)
    } else {
        log::warn!("[API] {} {} -> {}", verb.as_str(), path, response.status());
        Err(ApiError::from_status(response.status(), context))
    }
}

/// Send a request without body. `context` words the non-2xx error.
pub(crate) async fn send_empty(verb: Verb, path: &str, token: Option<&str>, context: &str) -> ApiResult<Response> {
    let response = builder(verb, path, token).send().await.map_err(|e| {
        log::warn!("[API] {} {} failed: {}", verb.as_str(), path, e);
        transport(e)
    })?;
    check(verb, path, response, context)
}

/// Send a request with a JSON body
pub(crate) async fn send_json<B: Serialize + ?Sized>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: &B,
    context: &str,
) -> ApiResult<Response> {
    let request = builder(verb, path, token)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::warn!("[API] {} {} failed: {}", verb.as_str(), path, e);
        transport(e)
    })?;
    check(verb, path, response, context)
}

/// Decode a JSON response body
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(transport)
}

/// GET and decode in one step
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>, context: &str) -> ApiResult<T> {
    let response = send_empty(Verb::Get, path, token, context).await?;
    decode(response).await
}
