use leptos::prelude::*;

/// Small circular spinner for buttons and inline text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Screen reader text
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("spinner spinner-inline {}", class) role="status" aria-live="polite">
            <span class="spinner-circle-inner"></span>
            <span class="sr-only">{label}</span>
        </span>
    }
}
