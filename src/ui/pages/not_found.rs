//! Not found page component
//!
//! Shown for any path other than `/`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::sections::Footer;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found | FlowShot"/>
        <Meta name="robots" content="noindex"/>

        <main class="not-found">
            <p class="not-found-code">"404"</p>
            <h1 class="not-found-title">"Page Not Found"</h1>
            <p class="not-found-text">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="btn btn-primary btn-lg">
                "Back to FlowShot"
            </A>
        </main>
        <Footer/>
    }
}
