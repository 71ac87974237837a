//! Thin helpers over `web-sys` shared by every behavior.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{PageError, Result};
use crate::viewport::Viewport;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::MissingGlobal("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(PageError::MissingGlobal("document"))
}

pub fn viewport(window: &Window) -> Result<Viewport> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(Viewport::new(width as f32, height as f32))
}

/// `true` once the `load` event has already fired.
pub fn is_loaded(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

/// Required element by id.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PageError::missing(format!("#{id}")))
}

/// Required first match for `selector`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PageError::missing(selector))
}

/// Nodes of `list` that are `T`, in document order.
pub fn elements<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Subscribe `handler` to `event` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`. Timers are never cancelled.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(f);
    let handle = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(handle)
}
