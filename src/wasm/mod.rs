//! Browser wiring. Every behavior is an owned value that subscribes itself to
//! the document in [`Behavior::attach`] and then lives as long as the page.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::PageConfig;
use crate::error::{PageError, Result};

pub mod contact;
pub mod cursor;
pub mod dom;
pub mod filter;
pub mod hero;
pub mod loader;
pub mod map;
pub mod modal;
pub mod nav;
pub mod render;
pub mod reveal;

pub trait Behavior {
    const NAME: &'static str;

    fn attach(self, document: &Document) -> Result<()>;
}

/// Attach `behavior`, reporting a failure without taking the page down.
pub fn attach<B: Behavior>(document: &Document, behavior: B) -> bool {
    match behavior.attach(document) {
        Ok(()) => true,
        Err(err) => {
            log::error!("{} not attached: {err}", B::NAME);
            false
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or(PageError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(PageError::MissingGlobal("document"))?;
    let config = PageConfig::default();

    // The hero waits behind the loader so WebGL sees a settled layout.
    let hero = hero::Hero::new(config.hero);
    let hero_document = document.clone();
    attach(
        &document,
        loader::Loader::new(config.loader, move || {
            attach(&hero_document, hero);
        }),
    );
    attach(&document, cursor::Cursor::new(config.cursor));
    attach(&document, reveal::Reveal::new(config.reveal));
    attach(&document, filter::ProjectFilter::new(config.filter));
    attach(&document, modal::Modals::new(config.modal));
    attach(&document, map::MapWidget::new(config.map));
    attach(&document, contact::ContactForm::new(config.contact));
    attach(&document, nav::NavToggle::new(config.nav));

    log::info!("portfolio page ready");
    Ok(())
}
