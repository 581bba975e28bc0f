//! Password reset request page.
//!
//! The backend emails the reset link; this page only collects the address and
//! echoes whatever confirmation the backend returns.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::config::LOGIN_ROUTE;
use crate::pages::login::looks_like_email;

const MISSING_EMAIL_MESSAGE: &str = "Enter the email address you sign in with.";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

pub(crate) fn validate_reset_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL_MESSAGE);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL_MESSAGE);
    }
    Ok(email.to_owned())
}

/// Outcome line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Sent(String),
    Failed(String),
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_reset_input(&email.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                notice.set(Some(Notice::Failed(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(message) => notice.set(Some(Notice::Sent(message))),
                Err(e) => {
                    log::warn!("password reset request failed: {e:?}");
                    notice.set(Some(Notice::Failed(e.to_string())));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    let notice_view = move || {
        notice.get().map(|n| match n {
            Notice::Sent(text) => view! { <p class="login-message login-message--ok">{text}</p> }.into_any(),
            Notice::Failed(text) => view! { <p class="login-message login-message--error">{text}</p> }.into_any(),
        })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset your password"</h1>
                <p class="login-card__subtitle">"We will email you a link to choose a new one."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@store.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                {notice_view}
                <a class="login-link" href=LOGIN_ROUTE>
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
