use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{dom, Behavior};
use crate::config::RevealConfig;
use crate::error::Result;

/// Scroll reveal: marks targets visible once enough of them is on screen and
/// fills any skill bars they contain.
pub struct Reveal {
    config: RevealConfig,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }
}

impl Behavior for Reveal {
    const NAME: &'static str = "scroll reveal";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    reveal(&entry.target(), &config);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        let targets: Vec<Element> = dom::elements(document.query_selector_all(config.target_selector)?);
        for target in &targets {
            observer.observe(target);
        }
        log::debug!("observing {} reveal targets", targets.len());
        Ok(())
    }
}

/// Apply the visible class and, for targets holding progress bars, set each
/// bar's width to its `data-percent`. Safe to repeat.
pub fn reveal(target: &Element, config: &RevealConfig) {
    if let Err(err) = target.class_list().add_1(config.visible_class) {
        log::warn!("reveal: {err:?}");
    }
    match target.query_selector(config.fill_selector) {
        Ok(Some(_)) => {
            if let Err(err) = fill_bars(target, config) {
                log::warn!("skill bars: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => log::warn!("reveal: {err:?}"),
    }
}

fn fill_bars(target: &Element, config: &RevealConfig) -> Result<()> {
    let bars: Vec<Element> = dom::elements(target.query_selector_all(config.bar_selector)?);
    for bar in bars {
        let Some(percent) = bar.get_attribute(config.percent_attribute) else {
            log::warn!("skill bar without {}", config.percent_attribute);
            continue;
        };
        match bar
            .query_selector(config.fill_selector)?
            .and_then(|fill| fill.dyn_into::<HtmlElement>().ok())
        {
            Some(fill) => dom::set_style(&fill, "width", &percent)?,
            None => log::warn!("skill bar without {}", config.fill_selector),
        }
    }
    Ok(())
}
