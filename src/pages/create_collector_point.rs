//! Collector Point Registration Page
//!
//! Owns one form session: state is created on mount and dropped when the
//! route is left.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use collector_form::{FormEvent, FormState, SubmissionStatus};

use crate::components::{AddressFieldset, ContactFieldset, ItemGrid, PageHeader};
use crate::config::CONFIG;
use crate::context::FormContext;

#[component]
pub fn CreateCollectorPoint() -> impl IntoView {
    let (state, startup) = FormState::mount(CONFIG.map.default_center);
    let navigate = use_navigate();
    let ctx = FormContext::new(signal(state), move || navigate("/", Default::default()));
    provide_context(ctx);
    ctx.run(startup);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(FormEvent::Submitted);
    };

    let submitting = move || ctx.state.with(|s| *s.submission() == SubmissionStatus::Submitting);
    let submit_error = move || {
        ctx.state.with(|s| match s.submission() {
            SubmissionStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        })
    };

    view! {
        <div id="page-create-collector-point">
            <PageHeader back_link=true />

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                <ContactFieldset />
                <AddressFieldset />
                <ItemGrid />

                {move || submit_error().map(|err| view! {
                    <p class="submit-error">"Não foi possível cadastrar o ponto: " {err}</p>
                })}

                <button type="submit" disabled=submitting>
                    "Cadastrar ponto de coleta"
                </button>
            </form>
        </div>
    }
}
