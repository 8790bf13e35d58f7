//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer bg-dark text-light text-center py-3 mt-5">
            <small>"RMS · Restaurant Management System"</small>
        </footer>
    }
}
