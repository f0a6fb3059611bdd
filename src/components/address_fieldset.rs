//! Address Fieldset Component
//!
//! Map plus the dependent UF -> city selects of the "Endereço" section.

use leptos::prelude::*;

use collector_form::{FetchStatus, FormEvent, UNSELECTED};

use super::CollectorMap;
use crate::context::use_form_context;

/// Inline note for a read request that failed
fn fetch_error(status: &FetchStatus, what: &str) -> Option<String> {
    status.error().map(|err| format!("Não foi possível carregar {}: {}", what, err))
}

#[component]
pub fn AddressFieldset() -> impl IntoView {
    let ctx = use_form_context();

    let ufs = Memo::new(move |_| ctx.state.with(|s| s.subdivisions().to_vec()));
    let cities = Memo::new(move |_| ctx.state.with(|s| s.localities().to_vec()));

    let on_uf_change = move |ev: web_sys::Event| {
        ctx.dispatch(FormEvent::SubdivisionSelected(event_target_value(&ev)));
    };
    let on_city_change = move |ev: web_sys::Event| {
        ctx.dispatch(FormEvent::LocalitySelected(event_target_value(&ev)));
    };

    view! {
        <fieldset>
            <legend>
                <h2>"Endereço"</h2>
                <span>"Selecione o endereço no mapa"</span>
            </legend>

            <CollectorMap />

            <div class="field-group">
                <div class="field">
                    <label for="uf">"Estado (UF)"</label>
                    <select
                        name="uf"
                        id="uf"
                        prop:value=move || ctx.state.with(|s| s.selected_uf().to_string())
                        on:change=on_uf_change
                    >
                        <option value=UNSELECTED>"Selecione uma UF"</option>
                        {move || ufs.get().into_iter().map(|uf| {
                            let label = uf.clone();
                            view! { <option value=uf>{label}</option> }
                        }).collect_view()}
                    </select>
                    {move || ctx.state.with(|s| fetch_error(s.subdivision_status(), "os estados"))
                        .map(|msg| view! { <p class="fetch-error">{msg}</p> })}
                </div>
                <div class="field">
                    <label for="city">"Cidade"</label>
                    <select
                        name="city"
                        id="city"
                        class:loading=move || ctx.state.with(|s| s.locality_status().is_loading())
                        prop:value=move || ctx.state.with(|s| s.selected_city().to_string())
                        on:change=on_city_change
                    >
                        <option value=UNSELECTED>"Selecione uma Cidade"</option>
                        {move || cities.get().into_iter().map(|city| {
                            let label = city.clone();
                            view! { <option value=city>{label}</option> }
                        }).collect_view()}
                    </select>
                    {move || ctx.state.with(|s| fetch_error(s.locality_status(), "as cidades"))
                        .map(|msg| view! { <p class="fetch-error">{msg}</p> })}
                </div>
            </div>
        </fieldset>
    }
}
