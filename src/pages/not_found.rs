use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::AppRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container py-5 text-center">
            <h1>"404"</h1>
            <p class="text-muted">"Page not found."</p>
            <A href=AppRoute::Menu.path() attr:class="btn btn-dark">"Back to menu"</A>
        </div>
    }
}
