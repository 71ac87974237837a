use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{dom, Behavior};
use crate::config::ModalConfig;
use crate::error::Result;
use crate::modal::ModalState;

pub fn open(document: &Document, id: &str) -> Result<()> {
    set_state(document, id, ModalState::Open)
}

pub fn close(document: &Document, id: &str) -> Result<()> {
    set_state(document, id, ModalState::Closed)
}

pub fn state(document: &Document, id: &str) -> Result<ModalState> {
    let modal: HtmlElement = dom::by_id(document, id)?;
    Ok(ModalState::from_display(
        &modal.style().get_property_value("display")?,
    ))
}

fn set_state(document: &Document, id: &str, state: ModalState) -> Result<()> {
    let modal: HtmlElement = dom::by_id(document, id)?;
    dom::set_style(&modal, "display", state.display())?;
    log::debug!("modal #{id}: {state:?}");
    Ok(())
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) -> Result<(), JsValue> {
    open(&dom::document()?, id)?;
    Ok(())
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) -> Result<(), JsValue> {
    close(&dom::document()?, id)?;
    Ok(())
}

/// Overlay panels: declarative open/close triggers plus backdrop dismissal.
pub struct Modals {
    config: ModalConfig,
}

impl Modals {
    pub fn new(config: ModalConfig) -> Self {
        Self { config }
    }
}

impl Behavior for Modals {
    const NAME: &'static str = "modal controller";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;

        // Only a click landing on the backdrop itself closes; content clicks
        // target a descendant.
        dom::listen(document, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
                return;
            };
            if dom::has_class(&target, config.backdrop_class) {
                if let Err(err) = dom::set_style(&target, "display", ModalState::Closed.display()) {
                    log::warn!("modal backdrop: {err}");
                }
            }
        })?;

        bind_triggers(document, config.open_attribute, open)?;
        bind_triggers(document, config.close_attribute, close)?;
        Ok(())
    }
}

fn bind_triggers(
    document: &Document,
    attribute: &'static str,
    action: fn(&Document, &str) -> Result<()>,
) -> Result<()> {
    let triggers: Vec<Element> = dom::elements(document.query_selector_all(&format!("[{attribute}]"))?);
    for trigger in triggers {
        let Some(id) = trigger.get_attribute(attribute) else {
            continue;
        };
        let document = document.clone();
        dom::listen(&trigger, "click", move |_| {
            if let Err(err) = action(&document, &id) {
                log::error!("modal #{id}: {err}");
            }
        })?;
    }
    Ok(())
}
