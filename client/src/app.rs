//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::session_gate::SessionGate;
use crate::config::DEFAULT_LANDING_ROUTE;
use crate::pages::{business::SectionPage, forgot_password::ForgotPasswordPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::session::bootstrap_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn to_landing() -> impl IntoView {
    view! { <Redirect path=DEFAULT_LANDING_ROUTE/> }
}

/// Root application component.
///
/// Owns the single auth signal and starts the session check; everything under
/// `/business` goes through `SessionGate`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::bootstrapping());
    provide_context(auth);
    bootstrap_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/merchant-console.css"/>
        <Title text="Merchant Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("") view=to_landing/>
                <ParentRoute path=StaticSegment("business") view=SessionGate>
                    <Route path=StaticSegment("") view=to_landing/>
                    <Route path=StaticSegment("dashboard") view=SectionPage/>
                    <Route path=(StaticSegment("catalog"), StaticSegment("products")) view=SectionPage/>
                    <Route path=(StaticSegment("catalog"), StaticSegment("categories")) view=SectionPage/>
                    <Route path=(StaticSegment("catalog"), StaticSegment("attributes")) view=SectionPage/>
                    <Route path=StaticSegment("orders") view=SectionPage/>
                    <Route path=StaticSegment("inventory") view=SectionPage/>
                    <Route path=StaticSegment("customers") view=SectionPage/>
                    <Route path=StaticSegment("payments") view=SectionPage/>
                    <Route path=StaticSegment("promotions") view=SectionPage/>
                    <Route path=StaticSegment("reviews") view=SectionPage/>
                    <Route path=StaticSegment("reports") view=SectionPage/>
                    <Route path=StaticSegment("support") view=SectionPage/>
                    <Route path=StaticSegment("settings") view=SectionPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
