//! Item Grid Component
//!
//! Selectable cards for the "Itens de Coleta" section.

use leptos::prelude::*;

use collector_form::{FormEvent, ItemCategory};

use crate::context::use_form_context;

#[component]
fn ItemCard(item: ItemCategory) -> impl IntoView {
    let ctx = use_form_context();
    let id = item.id;
    let is_selected = move || ctx.state.with(|s| s.selected_items().contains(id));

    view! {
        <li
            class=move || if is_selected() { "selected" } else { "" }
            on:click=move |_| ctx.dispatch(FormEvent::ItemToggled(id))
        >
            <img src=item.image_url alt=item.title.clone() />
            <span>{item.title}</span>
        </li>
    }
}

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_form_context();
    let items = Memo::new(move |_| ctx.state.with(|s| s.item_categories().to_vec()));

    view! {
        <fieldset>
            <legend>
                <h2>"Itens de Coleta"</h2>
                <span>"Selecione um ou mais itens abaixo"</span>
            </legend>

            <ul class="items-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </ul>

            {move || ctx.state.with(|s| s.item_status().error().map(|err| err.to_string()))
                .map(|err| view! {
                    <p class="fetch-error">"Não foi possível carregar os itens: " {err}</p>
                })}
        </fieldset>
    }
}
