//! Inline status messages

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message with an alert icon, hidden while `error` is `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success panel with a check mark
#[component]
pub fn SuccessMessage(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="success-message" role="status">
            <div class="success-badge">
                <Icon name=icons::CHECK class="icon-lg"/>
            </div>
            <p class="success-title">{title}</p>
            <p class="success-detail">{detail}</p>
        </div>
    }
}
