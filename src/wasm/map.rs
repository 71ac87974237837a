use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::Behavior;
use crate::config::MapConfig;
use crate::error::{PageError, Result};

// Leaflet, loaded globally as `L` by the page.
#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type TileLayer;
    type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &LeafletMap) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(at: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Result<Marker, JsValue>;
}

/// Static location map with a single marker whose popup starts open.
pub struct MapWidget {
    config: MapConfig,
}

impl MapWidget {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }
}

impl Behavior for MapWidget {
    const NAME: &'static str = "map widget";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;
        if document.get_element_by_id(config.element_id).is_none() {
            return Err(PageError::missing(format!("#{}", config.element_id)));
        }
        let (lat, lng) = config.center;
        let center = Array::of2(&lat.into(), &lng.into());

        let map = leaflet(leaflet_map(config.element_id))?;
        leaflet(map.set_view(&center, config.zoom))?;

        let options = Object::new();
        Reflect::set(&options, &"attribution".into(), &config.attribution.into())?;
        leaflet(leaflet(tile_layer(config.tile_url, &options))?.add_layer_to(&map))?;

        let pin = leaflet(marker(&center))?;
        leaflet(pin.add_marker_to(&map))?;
        leaflet(pin.bind_popup(config.popup))?;
        leaflet(pin.open_popup())?;

        log::info!("map centered on {lat}, {lng}");
        Ok(())
    }
}

fn leaflet<T>(result: Result<T, JsValue>) -> Result<T> {
    result.map_err(|err| PageError::Map(err.as_string().unwrap_or_else(|| format!("{err:?}"))))
}
