//! Collector Map Component
//!
//! Interactive map: centered on the initial position, marker on the
//! clicked point (on the center before the first click), clicks
//! reported as `MapClicked`.

use leptos::html::Div;
use leptos::prelude::*;

use collector_form::FormEvent;

use crate::config::CONFIG;
use crate::context::use_form_context;
use crate::map::{LeafletMap, MapWidget};

#[component]
pub fn CollectorMap() -> impl IntoView {
    let ctx = use_form_context();
    let container = NodeRef::<Div>::new();

    let center = Memo::new(move |_| ctx.state.with(|s| s.initial_position()));
    let marker_at = Memo::new(move |_| ctx.state.with(|s| s.marker_position()));

    // The widget lives in the effect's own value between runs
    Effect::new(move |widget: Option<Option<LeafletMap>>| {
        let center = center.get();
        let marker_at = marker_at.get();
        let mut widget = widget.flatten().or_else(|| {
            let element = container.get()?;
            LeafletMap::mount(&element, &CONFIG.map, center, marker_at, move |position| {
                ctx.dispatch(FormEvent::MapClicked(position))
            })
            .map_err(|err| log::error!("[MAP] Failed to mount map: {:?}", err))
            .ok()
        });
        if let Some(map) = widget.as_mut() {
            map.center_on(center);
            map.place_marker(marker_at);
        }
        widget
    });

    view! { <div id="map" class="collector-map" node_ref=container></div> }
}
