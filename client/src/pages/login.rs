//! Login page supporting email + password and Google OAuth sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::{FORGOT_PASSWORD_ROUTE, RETURN_TO_PARAM};
use crate::state::auth::{AuthSnapshot, AuthState};
use crate::util::auth::return_target;

const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
#[cfg(any(test, feature = "hydrate"))]
const NOT_MERCHANT_MESSAGE: &str = "This account does not have access to the merchant console.";

/// Loose shape check; the backend is the authority on what is registered.
pub(crate) fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
}

/// Trim the email and require both fields before calling the API.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let target = Memo::new(move |_| query.with(|q| return_target(q.get(RETURN_TO_PARAM).as_deref())));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // A sign-out redirect ends here; from now on the gate redirects as usual.
    if auth.with_untracked(|a| a.signed_out) {
        auth.update(AuthState::finish_sign_out);
    }

    // Signed-in merchants (restored session or fresh login) go straight to
    // where they were headed.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && AuthSnapshot::from_state(&state).is_authorized_merchant() {
            navigate(&target.get_untracked(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked())
        {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(session) if AuthSnapshot::from_session(&session).is_merchant => {
                    log::info!("signed in as {}", session.user.id);
                    auth.update(|a| a.sign_in(session));
                }
                Ok(session) => {
                    log::info!("rejected non-merchant sign-in for {}", session.user.id);
                    crate::net::api::logout().await;
                    error.set(Some(NOT_MERCHANT_MESSAGE.to_owned()));
                }
                Err(e) => {
                    log::warn!("login failed: {e:?}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_google = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let origin = window.location().origin().unwrap_or_default();
            let url = crate::net::api::google_sign_in_url(&format!("{origin}{}", target.get_untracked()));
            if window.location().set_href(&url).is_err() {
                error.set(Some("Could not start Google sign-in.".to_owned()));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Merchant Console"</h1>
                <p class="login-card__subtitle">"Sign in to manage your store"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@store.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <a class="login-link" href=FORGOT_PASSWORD_ROUTE>
                    "Forgot password?"
                </a>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <button class="login-button login-button--google" type="button" on:click=on_google>
                    "Continue with Google"
                </button>
            </div>
        </div>
    }
}
