//! Collector Point App
//!
//! Client-side router with the landing page and the registration form.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CreateCollectorPoint, Home};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-collector-point") view=CreateCollectorPoint />
            </Routes>
        </Router>
    }
}
