use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::{wasm_bindgen::JsCast, web_sys};

/// Modal dialog shell: backdrop, close button, Escape to close
#[component]
pub fn BaseModal(
    /// Accessible label of the dialog
    label: &'static str,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    let on_backdrop_click = move |e: leptos::ev::MouseEvent| {
        if !close_on_backdrop {
            return;
        }
        #[cfg(not(feature = "ssr"))]
        {
            let on_backdrop = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|element| element.class_list().contains("modal-backdrop"));
            if on_backdrop {
                on_close.run(());
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = e;
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=on_backdrop_click>
                <div class="modal-panel" role="dialog" aria-modal="true" aria-label=label>
                    <button
                        class="modal-close"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close"
                    >
                        <Icon name=icons::X class="icon"/>
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
