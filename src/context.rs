//! Session Context
//!
//! Single owner of the session cookie and the signed-in profile, provided to
//! every view via the Leptos Context API. Nothing else touches `document.cookie`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use rms_domain::{Profile, Role, expired_session_cookie, session_cookie, token_from_cookies};

use crate::api;

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Token from the session cookie - read
    pub token: ReadSignal<Option<String>>,
    /// Token from the session cookie - write
    set_token: WriteSignal<Option<String>>,
    /// Profile of the signed-in user, once fetched - read
    pub profile: ReadSignal<Option<Profile>>,
    /// Profile of the signed-in user, once fetched - write
    set_profile: WriteSignal<Option<Profile>>,
}

impl SessionContext {
    /// Build the session from the current cookie jar
    pub fn from_document() -> Self {
        let (token, set_token) = signal(token_from_cookies(&read_cookies()));
        let (profile, set_profile) = signal(None::<Profile>);
        Self { token, set_token, profile, set_profile }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Token for an outgoing request (untracked)
    pub fn token_value(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn username(&self) -> Option<String> {
        self.profile.with(|p| p.as_ref().map(|p| p.username.clone()))
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.with(|p| p.as_ref().map(Profile::role))
    }

    /// Re-read the cookie jar, e.g. after another tab signed out
    pub fn resync(&self) {
        let current = token_from_cookies(&read_cookies());
        if current != self.token.get_untracked() {
            log::debug!("[SESSION] Cookie changed outside the app");
            self.set_token.set(current);
            self.set_profile.set(None);
            self.refresh_profile();
        }
    }

    /// Fetch the profile for the current token. Failures are logged and
    /// leave the profile unset; there is no retry.
    pub fn refresh_profile(&self) {
        let Some(token) = self.token_value() else {
            return;
        };
        let set_profile = self.set_profile;
        let current = self.token;
        spawn_local(async move {
            match api::fetch_profile(Some(&token)).await {
                Ok(profile) => {
                    // Ignore answers for a token that was replaced meanwhile
                    if current.get_untracked().as_deref() == Some(token.as_str()) {
                        log::debug!("[SESSION] Signed in as {} ({})", profile.username, profile.role().label());
                        set_profile.set(Some(profile));
                    }
                }
                // A rejected token stays in the cookie; the backend decides
                Err(e) if e.is_unauthorized() => log::warn!("[SESSION] Token rejected: {}", e),
                Err(e) => log::error!("[SESSION] Error fetching user data: {}", e),
            }
        });
    }

    /// Store a freshly issued token and load its profile
    pub fn sign_in(&self, token: String) {
        write_cookie(&session_cookie(&token));
        self.set_profile.set(None);
        self.set_token.set(Some(token));
        self.refresh_profile();
    }

    /// Drop the session locally and ask the backend to invalidate the token.
    /// The cookie is cleared first, whatever the backend answers.
    pub fn sign_out(&self) {
        let token = self.token.get_untracked();
        write_cookie(&expired_session_cookie());
        self.set_token.set(None);
        self.set_profile.set(None);

        if let Some(token) = token {
            // Not tied to any view: must finish even if the navbar unmounts
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = api::logout(&token).await {
                    log::warn!("[SESSION] Token invalidation failed: {}", e);
                }
            });
        }
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

fn read_cookies() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

fn write_cookie(assignment: &str) {
    match html_document() {
        Some(doc) => {
            if let Err(e) = doc.set_cookie(assignment) {
                log::error!("[SESSION] Failed to write cookie: {:?}", e);
            }
        }
        None => log::error!("[SESSION] No document to write cookie to"),
    }
}
