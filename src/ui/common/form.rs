use crate::ui::icon::{Icon, icons};
use leptos::html;
use leptos::prelude::*;

/// Labelled text input with an inline error line
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `id` and `name` of the input
    name: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error to show under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Handle to the underlying input, e.g. for focusing it
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_default();
    let error_id = format!("{}-error", name);
    let described_by = error_id.clone();

    view! {
        <div class="form-field">
            <label class="form-label" for=name>{label}</label>
            <input
                node_ref=node_ref
                id=name
                name=name
                type=input_type
                class="form-input"
                class:form-input-invalid=move || error.with(Option::is_some)
                placeholder=placeholder
                autocomplete=autocomplete
                aria-invalid=move || if error.with(Option::is_some) { "true" } else { "false" }
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.get().map(|err| view! {
                    <p id=error_id.clone() class="form-error" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </p>
                })
            }}
        </div>
    }
}
