//! Contact Fieldset Component
//!
//! Name, e-mail and WhatsApp inputs of the "Dados" section.

use leptos::prelude::*;

use collector_form::{FieldName, FormEvent};

use crate::context::use_form_context;

/// Labeled text input bound to one contact field
#[component]
fn ContactInput(field: FieldName, label: &'static str) -> impl IntoView {
    let ctx = use_form_context();
    let name = field.as_str();

    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                type="text"
                name=name
                id=name
                prop:value=move || ctx.state.with(|s| s.fields().get(field).to_string())
                on:input=move |ev| {
                    // Merge by the input's name attribute
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    match input.name().parse::<FieldName>() {
                        Ok(field) => ctx.dispatch(FormEvent::FieldChanged { field, value: input.value() }),
                        Err(err) => log::warn!("[FORM] {}", err),
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn ContactFieldset() -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>

            <ContactInput field=FieldName::Name label="Nome da entidade" />

            <div class="field-group">
                <ContactInput field=FieldName::Email label="E-mail" />
                <ContactInput field=FieldName::Whatsapp label="Whatsapp" />
            </div>
        </fieldset>
    }
}
