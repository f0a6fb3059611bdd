//! Form Context
//!
//! The form session state provided via Leptos Context API, plus the
//! runner that performs the effects its transitions request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use collector_form::{ApiError, FormEffect, FormEvent, FormState, LocalityTicket};

use crate::api::{CollectorApi, GeographyApi};
use crate::geolocation;

/// Form-session signals provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Current form state - read
    pub state: ReadSignal<FormState>,
    /// Current form state - write, only through `dispatch`
    set_state: WriteSignal<FormState>,
    /// Router navigation back to the landing page
    go_home: StoredValue<Box<dyn Fn()>, LocalStorage>,
}

impl FormContext {
    pub fn new(
        state: (ReadSignal<FormState>, WriteSignal<FormState>),
        go_home: impl Fn() + 'static,
    ) -> Self {
        let go_home: Box<dyn Fn()> = Box::new(go_home);
        Self {
            state: state.0,
            set_state: state.1,
            go_home: StoredValue::new_local(go_home),
        }
    }

    /// Apply `event` to the state and run whatever it asks for
    pub fn dispatch(&self, event: FormEvent) {
        // The session may already be gone when a late response arrives
        let effects = self
            .set_state
            .try_update(|state| state.apply(event))
            .unwrap_or_default();
        self.run(effects);
    }

    pub fn run(&self, effects: Vec<FormEffect>) {
        let ctx = *self;
        for effect in effects {
            if let Some(request) =
                effect_request(&effect, &CollectorApi::from_config(), &GeographyApi::from_config())
            {
                log::debug!("[FORM] {} -> {:?}", effect_name(&effect), request);
            }
            match effect {
                FormEffect::FetchItemCategories => spawn_local(async move {
                    let result = CollectorApi::from_config().list_item_types().await;
                    ctx.dispatch(FormEvent::ItemCategoriesLoaded(result));
                }),
                FormEffect::FetchSubdivisions => spawn_local(async move {
                    let result = GeographyApi::from_config().list_states().await;
                    ctx.dispatch(FormEvent::SubdivisionsLoaded(result));
                }),
                FormEffect::ProbeGeolocation => spawn_local(async move {
                    let result = geolocation::current_position().await;
                    ctx.dispatch(FormEvent::PositionResolved(result));
                }),
                FormEffect::FetchLocalities(ticket) => spawn_local(async move {
                    let result = GeographyApi::from_config().list_cities(&ticket.uf).await;
                    ctx.dispatch(localities_loaded(ticket, result));
                }),
                FormEffect::CreateCollectorPoint(payload) => spawn_local(async move {
                    let result = CollectorApi::from_config().create_collector_point(&payload).await;
                    ctx.dispatch(FormEvent::SubmissionFinished(result));
                }),
                FormEffect::NavigateHome => {
                    if ctx.go_home.try_with_value(|go_home| go_home()).is_none() {
                        log::warn!("[FORM] Session closed before navigation");
                    }
                }
            }
        }
    }
}

/// HTTP request an effect performs
#[derive(Debug, Clone, PartialEq)]
enum EffectRequest {
    Get(String),
    Post(String),
}

fn effect_request(
    effect: &FormEffect,
    collector: &CollectorApi,
    geography: &GeographyApi,
) -> Option<EffectRequest> {
    match effect {
        FormEffect::FetchItemCategories => Some(EffectRequest::Get(collector.item_types_url())),
        FormEffect::FetchSubdivisions => Some(EffectRequest::Get(geography.states_url())),
        FormEffect::FetchLocalities(ticket) => Some(EffectRequest::Get(geography.cities_url(&ticket.uf))),
        FormEffect::CreateCollectorPoint(_) => Some(EffectRequest::Post(collector.collector_points_url())),
        FormEffect::ProbeGeolocation | FormEffect::NavigateHome => None,
    }
}

fn effect_name(effect: &FormEffect) -> &'static str {
    match effect {
        FormEffect::FetchItemCategories => "FetchItemCategories",
        FormEffect::FetchSubdivisions => "FetchSubdivisions",
        FormEffect::ProbeGeolocation => "ProbeGeolocation",
        FormEffect::FetchLocalities(_) => "FetchLocalities",
        FormEffect::CreateCollectorPoint(_) => "CreateCollectorPoint",
        FormEffect::NavigateHome => "NavigateHome",
    }
}

/// The city response goes back with the ticket it was requested under
fn localities_loaded(ticket: LocalityTicket, result: Result<Vec<String>, ApiError>) -> FormEvent {
    FormEvent::LocalitiesLoaded { ticket, result }
}

/// Get the form context provided by the form page
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
