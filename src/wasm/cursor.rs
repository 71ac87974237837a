use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{dom, Behavior};
use crate::config::CursorConfig;
use crate::error::Result;
use crate::viewport::Pointer;

/// Custom cursor: a lead dot pinned to the pointer and a follower that trails
/// it by a fixed delay.
pub struct Cursor {
    config: CursorConfig,
}

impl Cursor {
    pub fn new(config: CursorConfig) -> Self {
        Self { config }
    }
}

impl Behavior for Cursor {
    const NAME: &'static str = "cursor follower";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;
        let lead: HtmlElement = dom::query(document, config.lead_selector)?;
        let trail: HtmlElement = dom::query(document, config.trail_selector)?;

        {
            let trail = trail.clone();
            dom::listen(document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = Pointer::new(event.client_x() as f32, event.client_y() as f32);
                if let Err(err) = place(&lead, pointer) {
                    log::warn!("cursor: {err}");
                }

                // Earlier moves still land; rapid motion may briefly reorder the trail.
                let trail = trail.clone();
                let scheduled = dom::after(config.trail_delay_ms, move || {
                    if let Err(err) = place(&trail, pointer) {
                        log::warn!("cursor follower: {err}");
                    }
                });
                if let Err(err) = scheduled {
                    log::warn!("cursor follower not scheduled: {err}");
                }
            })?;
        }

        let interactive: Vec<Element> =
            dom::elements(document.query_selector_all(config.interactive_selector)?);
        for element in &interactive {
            let hover = trail.class_list();
            dom::listen(element, "mouseenter", move |_| {
                hover.add_1(config.hover_class).ok();
            })?;
            let hover = trail.class_list();
            dom::listen(element, "mouseleave", move |_| {
                hover.remove_1(config.hover_class).ok();
            })?;
        }
        log::debug!("cursor hover bound to {} elements", interactive.len());
        Ok(())
    }
}

fn place(indicator: &HtmlElement, pointer: Pointer) -> Result<()> {
    let (left, top) = pointer.css();
    dom::set_style(indicator, "left", &left)?;
    dom::set_style(indicator, "top", &top)
}
