//! Waitlist modal
//!
//! One modal instance lives at the app root. Any call-to-action opens it
//! through [`WaitlistContext`]; the form state itself is
//! [`crate::core::waitlist::WaitlistForm`].

use crate::core::waitlist::{Field, SubmissionStatus, WaitlistForm};
use crate::ui::common::{BaseModal, ErrorMessage, FormField, InlineSpinner, SuccessMessage};
use crate::ui::icon::{Icon, icons};
use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::waitlist::{SubmitError, WaitlistEntry, WaitlistTransport};

/// Delay before the name input takes focus, so the open transition can start
pub const AUTOFOCUS_DELAY_MS: u64 = 100;

/// Same-origin relay endpoint
pub const RELAY_ENDPOINT: &str = "/api/waitlist";

/// Open/closed state of the waitlist modal
#[derive(Clone, Copy)]
pub struct WaitlistContext {
    open: RwSignal<bool>,
}

impl WaitlistContext {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    /// Closing keeps whatever the user typed
    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }
}

impl Default for WaitlistContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the modal context; call once at the app root
pub fn provide_waitlist_context() -> WaitlistContext {
    let ctx = WaitlistContext::new();
    provide_context(ctx);
    ctx
}

/// Get the modal context, creating one if the root forgot to
pub fn use_waitlist() -> WaitlistContext {
    use_context::<WaitlistContext>().unwrap_or_else(|| {
        leptos::logging::warn!("WaitlistContext missing; providing a detached one");
        provide_waitlist_context()
    })
}

/// Posts entries to the server relay
#[cfg(not(feature = "ssr"))]
pub struct BrowserTransport {
    endpoint: &'static str,
}

#[cfg(not(feature = "ssr"))]
impl Default for BrowserTransport {
    fn default() -> Self {
        Self {
            endpoint: RELAY_ENDPOINT,
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl WaitlistTransport for BrowserTransport {
    async fn send(&self, entry: &WaitlistEntry) -> Result<(), SubmitError> {
        use gloo_net::http::Request;

        let request = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .json(entry)
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}

/// Label of the submit button for a given status
pub fn submit_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Submitting => "Submitting...",
        SubmissionStatus::Error => "Try again",
        SubmissionStatus::Idle | SubmissionStatus::Success => "Join the waitlist",
    }
}

#[component]
pub fn WaitlistModal() -> impl IntoView {
    let waitlist = use_waitlist();
    let form = RwSignal::new(WaitlistForm::new());
    let name_input = NodeRef::<html::Input>::new();

    let status = Memo::new(move |_| form.with(WaitlistForm::status));
    let locked = Signal::derive(move || form.with(WaitlistForm::is_locked));
    let name = Signal::derive(move || form.with(|f| f.name().to_string()));
    let email = Signal::derive(move || form.with(|f| f.email().to_string()));
    let name_error = Signal::derive(move || {
        form.with(|f| f.field_errors().message(Field::Name).map(str::to_string))
    });
    let email_error = Signal::derive(move || {
        form.with(|f| f.field_errors().message(Field::Email).map(str::to_string))
    });
    let submit_error =
        Signal::derive(move || form.with(|f| f.error_message().map(str::to_string)));

    // Focus the name input shortly after opening
    Effect::new(move |_| {
        if waitlist.is_open().get() && !form.with_untracked(WaitlistForm::is_locked) {
            set_timeout(
                move || {
                    if let Some(input) = name_input.get_untracked() {
                        let _ = input.focus();
                    }
                },
                std::time::Duration::from_millis(AUTOFOCUS_DELAY_MS),
            );
        }
    });

    // Pending close-after-success; dropping it cancels the timer
    #[cfg(not(feature = "ssr"))]
    let success_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(not(feature = "ssr"))]
    on_cleanup(move || {
        let _ = success_timer.try_update_value(|slot| slot.take());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(entry)) = form.try_update(WaitlistForm::begin_submit) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::waitlist::SUCCESS_DISPLAY_DURATION;
            use gloo_timers::callback::Timeout;
            use leptos::task::spawn_local;

            spawn_local(async move {
                let result = BrowserTransport::default().send(&entry).await;
                let sent = result.is_ok();
                // The modal may be gone by the time the request settles
                if form.try_update(|f| f.finish_submit(result)).is_none() || !sent {
                    return;
                }

                let timer = Timeout::new(SUCCESS_DISPLAY_DURATION.as_millis() as u32, move || {
                    if form.try_update(WaitlistForm::complete) == Some(true) {
                        waitlist.close();
                    }
                });
                let _ = success_timer.try_set_value(Some(timer));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = entry;
        }
    };

    let on_name = Callback::new(move |value: String| {
        form.update(|f| {
            f.retry();
            f.set_name(value);
        })
    });
    let on_email = Callback::new(move |value: String| {
        form.update(|f| {
            f.retry();
            f.set_email(value);
        })
    });

    view! {
        <BaseModal
            label="Join the waitlist"
            is_open=waitlist.is_open()
            on_close=Callback::new(move |_| waitlist.close())
        >
            <Show
                when=move || status.get() == SubmissionStatus::Success
                fallback=move || view! {
                    <div class="waitlist-header">
                        <div class="waitlist-icon">
                            <Icon name=icons::MAIL class="icon-lg"/>
                        </div>
                        <h2 class="waitlist-title">"Launching soon!"</h2>
                        <p class="waitlist-lead">
                            "The service is in its final stage of development and testing. "
                            "Leave your email and we'll notify you when the service goes live."
                            <strong>" First users will get several months free."</strong>
                        </p>
                    </div>

                    <form class="waitlist-form" on:submit=on_submit novalidate=true>
                        <FormField
                            label="Name"
                            name="waitlist-name"
                            placeholder="Your name"
                            autocomplete="name"
                            value=name
                            on_input=on_name
                            disabled=locked
                            error=name_error
                            node_ref=name_input
                        />
                        <FormField
                            label="Email"
                            name="waitlist-email"
                            input_type="email"
                            placeholder="your@email.com"
                            autocomplete="email"
                            value=email
                            on_input=on_email
                            disabled=locked
                            error=email_error
                        />

                        <ErrorMessage error=submit_error/>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || locked.get()
                        >
                            <Show when=move || status.get() == SubmissionStatus::Submitting>
                                <InlineSpinner class="spinner-on-primary" label="Submitting"/>
                            </Show>
                            <span>{move || submit_label(status.get())}</span>
                        </button>
                    </form>
                }
            >
                <SuccessMessage
                    title="Thank you!"
                    detail="We'll send you an email when the service launches"
                />
            </Show>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_submit_label_follows_status() {
        assert_eq!(submit_label(SubmissionStatus::Idle), "Join the waitlist");
        assert_eq!(submit_label(SubmissionStatus::Submitting), "Submitting...");
        assert_eq!(submit_label(SubmissionStatus::Error), "Try again");
        assert_eq!(submit_label(SubmissionStatus::Success), "Join the waitlist");
    }

    #[test]
    fn test_context_open_close() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_waitlist_context();
            assert!(!ctx.is_open().get_untracked());

            ctx.open();
            assert!(use_waitlist().is_open().get_untracked());

            use_waitlist().close();
            assert!(!ctx.is_open().get_untracked());
        });
    }

    #[test]
    fn test_use_waitlist_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = use_waitlist();
            ctx.open();
            // The fallback context is provided, so later lookups share it
            assert!(use_waitlist().is_open().get_untracked());
        });
    }
}
