//! Auth Endpoints
//!
//! Token login/logout and the current user's profile.

use serde::{Deserialize, Serialize};

use rms_domain::{ApiResult, Profile};
use super::{Verb, decode, get_json, require_token, send_empty, send_json};

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    auth_token: String,
}

/// Fetch the profile tied to `token`
pub async fn fetch_profile(token: Option<&str>) -> ApiResult<Profile> {
    let token = require_token(token)?;
    get_json("/auth/users/me", Some(token), "Failed to fetch user role.").await
}

/// Exchange credentials for a token
pub async fn login(username: &str, password: &str) -> ApiResult<String> {
    let response = send_json(
        Verb::Post,
        "/auth/token/login/",
        None,
        &LoginArgs { username, password },
        "Invalid username or password.",
    )
    .await?;
    let body: LoginResponse = decode(response).await?;
    Ok(body.auth_token)
}

/// Ask the backend to invalidate `token`
pub async fn logout(token: &str) -> ApiResult<()> {
    send_empty(Verb::Post, "/auth/token/logout/", Some(token), "Failed to sign out.").await?;
    Ok(())
}
