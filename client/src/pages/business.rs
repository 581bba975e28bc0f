//! Placeholder content for the console sections.
//!
//! Every business route renders this inside the shell's `<Outlet/>` until the
//! section gets a real screen.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::navigation::{BUSINESS_NAVIGATION, page_title};

#[component]
pub fn SectionPage() -> impl IntoView {
    let route = use_location().pathname;
    let heading = move || route.with(|r| page_title(BUSINESS_NAVIGATION, r).unwrap_or("Business").to_owned());

    view! {
        <section class="section-page">
            <h2 class="section-page__title">{heading}</h2>
            <p class="section-page__empty">"Nothing here yet."</p>
        </section>
    }
}
