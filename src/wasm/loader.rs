use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlElement};

use super::{dom, Behavior};
use crate::config::LoaderConfig;
use crate::error::Result;

/// Fades the splash overlay out on page load, then hands over to `on_hidden`.
pub struct Loader<F> {
    config: LoaderConfig,
    on_hidden: F,
}

impl<F: FnOnce() + 'static> Loader<F> {
    pub fn new(config: LoaderConfig, on_hidden: F) -> Self {
        Self { config, on_hidden }
    }
}

impl<F: FnOnce() + 'static> Behavior for Loader<F> {
    const NAME: &'static str = "loading gate";

    fn attach(self, document: &Document) -> Result<()> {
        let Self { config, on_hidden } = self;
        let overlay = document
            .get_element_by_id(config.overlay_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if overlay.is_none() {
            log::warn!("no #{} overlay, starting without splash", config.overlay_id);
        }

        let dismiss = move || -> Result<()> {
            if let Some(overlay) = &overlay {
                dom::set_style(overlay, "opacity", "0")?;
            }
            dom::after(config.hide_delay_ms, move || {
                if let Some(overlay) = overlay {
                    if let Err(err) = dom::set_style(&overlay, "display", "none") {
                        log::warn!("could not hide loader: {err}");
                    }
                }
                on_hidden();
            })?;
            Ok(())
        };

        // The module may start after `load` has already fired.
        if dom::is_loaded(document) {
            return dismiss();
        }
        let on_load = Closure::once_into_js(move || {
            if let Err(err) = dismiss() {
                log::error!("loader dismissal failed: {err}");
            }
        });
        dom::window()?.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
        Ok(())
    }
}
