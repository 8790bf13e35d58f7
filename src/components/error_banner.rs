//! Error Banner Component
//!
//! Inline, per-view error display. The rest of the view keeps rendering.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    /// When given, the banner gets a dismiss button
    #[prop(optional)]
    set_error: Option<WriteSignal<Option<String>>>,
) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="alert alert-danger d-flex justify-content-between" role="alert">
                    <span>{message}</span>
                    {set_error.map(|set_error| view! {
                        <button type="button" class="btn-close" on:click=move |_| set_error.set(None)>
                            "×"
                        </button>
                    })}
                </div>
            }
        })
    }
}
