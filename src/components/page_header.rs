//! Page Header Component
//!
//! Logo plus an optional link back to the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PageHeader(
    /// Show the "back to home" link
    #[prop(optional)]
    back_link: bool,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <img src="/assets/logo.svg" alt="ECollectorPoint" />
            {back_link.then(|| view! {
                <A href="/">
                    <span class="back-arrow">"←"</span>
                    " Voltar para home"
                </A>
            })}
        </header>
    }
}
