use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlCanvasElement, MouseEvent};

use super::render::PointsRenderer;
use super::{dom, Behavior};
use crate::config::HeroConfig;
use crate::error::{PageError, Result};
use crate::particles::ParticleField;
use crate::viewport::Pointer;

/// Hero particle field: a slowly rotating point cloud that leans toward the
/// pointer. Once attached it renders every frame until the page unloads.
pub struct Hero {
    config: HeroConfig,
}

impl Hero {
    pub fn new(config: HeroConfig) -> Self {
        Self { config }
    }
}

impl Behavior for Hero {
    const NAME: &'static str = "hero particle field";

    fn attach(self, document: &Document) -> Result<()> {
        let window = dom::window()?;
        let container = document
            .get_element_by_id(self.config.container_id)
            .ok_or_else(|| PageError::missing(format!("#{}", self.config.container_id)))?;

        let viewport = dom::viewport(&window)?;
        let field = ParticleField::new(self.config, viewport, js_sys::Math::random);
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| PageError::Graphics("canvas element has unexpected type".into()))?;
        let renderer = PointsRenderer::new(canvas, field.cloud(), field.config())?;
        renderer.set_size(viewport);
        container.append_child(renderer.canvas())?;

        let count = field.cloud().len();
        let field = Rc::new(RefCell::new(field));
        let renderer = Rc::new(renderer);

        {
            let field = field.clone();
            let window = window.clone();
            dom::listen(document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = Pointer::new(event.client_x() as f32, event.client_y() as f32);
                match dom::viewport(&window) {
                    Ok(viewport) => field.borrow_mut().set_pointer(pointer, viewport),
                    Err(err) => log::warn!("pointer ignored: {err}"),
                }
            })?;
        }

        {
            let field = field.clone();
            let renderer = renderer.clone();
            let resized = window.clone();
            dom::listen(&window, "resize", move |_| match dom::viewport(&resized) {
                Ok(viewport) => {
                    field.borrow_mut().resize(viewport);
                    renderer.set_size(viewport);
                }
                Err(err) => log::warn!("resize ignored: {err}"),
            })?;
        }

        run(field, renderer)?;
        log::info!("hero particle field running with {count} points");
        Ok(())
    }
}

/// Per-frame loop. There is no stop handle; it ends with the page.
fn run(field: Rc<RefCell<ParticleField>>, renderer: Rc<PointsRenderer>) -> Result<()> {
    // `f` holds the animation-frame closure so it can keep re-requesting
    // itself; the `Option` lets the closure exist before it refers to itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let uniforms = field.borrow_mut().frame();
        renderer.draw(&uniforms, field.borrow().viewport());

        if let Err(err) = request_frame(f.borrow().as_ref()) {
            log::error!("hero animation stopped: {err}");
        }
    }) as Box<dyn FnMut()>));

    request_frame(g.borrow().as_ref())
}

fn request_frame(callback: Option<&Closure<dyn FnMut()>>) -> Result<()> {
    let callback = callback.ok_or_else(|| PageError::Js("animation frame callback dropped".into()))?;
    dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
