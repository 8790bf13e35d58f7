//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::use_session;
use crate::lifecycle::MountGuard;
use crate::models::AppRoute;

/// Trimmed credentials, or the message to show instead
fn credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Username and password are required.");
    }
    Ok((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let guard = MountGuard::new();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (user, pass) = match credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_submitting.set(true);
        let guard = guard.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&user, &pass).await;
            if !guard.check("login") {
                return;
            }
            set_submitting.set(false);
            match result {
                Ok(token) => {
                    log::info!("[LOGIN] Signed in as {}", user);
                    session.sign_in(token);
                    navigate(AppRoute::Menu.path(), Default::default());
                }
                Err(e) => {
                    set_password.set(String::new());
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="container py-5" style="max-width: 420px">
            <h1 class="mb-4">"Login"</h1>
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label class="form-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="form-control"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form-control"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|message| view! {
                    <div class="text-danger mb-3">{message}</div>
                })}
                <button class="btn btn-dark w-100" type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_trim_username() {
        assert_eq!(
            credentials("  mario ", "secret"),
            Ok(("mario".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_credentials_required() {
        assert!(credentials("", "secret").is_err());
        assert!(credentials("   ", "secret").is_err());
        assert!(credentials("mario", "").is_err());
    }
}
