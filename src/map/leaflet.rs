//! Leaflet Binding
//!
//! Wraps the global `L` object loaded by `index.html`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use collector_form::Coordinate;

use super::MapWidget;
use crate::config::MapConfig;

#[wasm_bindgen]
extern "C" {
    type Map;
    type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container: &web_sys::HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method, js_name = off)]
    fn off_all(this: &Map) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Layer, position: &JsValue) -> Layer;
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

fn lat_lng(at: Coordinate) -> JsValue {
    js_sys::Array::of2(&at.latitude.into(), &at.longitude.into()).into()
}

/// Read `event.latlng` from a Leaflet mouse event
fn clicked_position(event: &JsValue) -> Option<Coordinate> {
    let latlng = js_sys::Reflect::get(event, &"latlng".into()).ok()?;
    let lat = js_sys::Reflect::get(&latlng, &"lat".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&latlng, &"lng".into()).ok()?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}

pub struct LeafletMap {
    map: Map,
    marker: Layer,
    center: Coordinate,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl LeafletMap {
    /// Create the map inside `container` and report clicks to `on_click`
    pub fn mount(
        container: &web_sys::HtmlElement,
        config: &MapConfig,
        center: Coordinate,
        marker_at: Coordinate,
        on_click: impl Fn(Coordinate) + 'static,
    ) -> Result<Self, JsValue> {
        let map = new_map(container);
        map.set_view(&lat_lng(center), config.default_zoom);

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution: &config.attribution })
            .map_err(JsValue::from)?;
        tile_layer(&config.tile_url, &options).add_to(&map);

        let marker = marker(&lat_lng(marker_at));
        marker.add_to(&map);

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match clicked_position(&event) {
                Some(position) => on_click(position),
                None => log::warn!("[MAP] Click event without latlng"),
            }
        });
        map.on("click", handler.as_ref().unchecked_ref());
        log::info!("[MAP] Leaflet map mounted at {}", center);

        Ok(Self { map, marker, center, _on_click: handler })
    }
}

impl MapWidget for LeafletMap {
    fn center_on(&mut self, center: Coordinate) {
        if center == self.center {
            return;
        }
        self.center = center;
        let zoom = self.map.get_zoom();
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn place_marker(&mut self, position: Coordinate) {
        self.marker.set_lat_lng(&lat_lng(position));
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        self.map.off_all();
        self.map.remove();
    }
}
