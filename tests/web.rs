#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Promise;
use portfolio_wasm::config::{
    ContactConfig, CursorConfig, FilterConfig, HeroConfig, LoaderConfig, ModalConfig, NavConfig,
    RevealConfig,
};
use portfolio_wasm::modal::ModalState;
use portfolio_wasm::particles::ParticleCloud;
use portfolio_wasm::viewport::Viewport;
use portfolio_wasm::wasm::contact::ContactForm;
use portfolio_wasm::wasm::cursor::Cursor;
use portfolio_wasm::wasm::filter::ProjectFilter;
use portfolio_wasm::wasm::hero::Hero;
use portfolio_wasm::wasm::loader::Loader;
use portfolio_wasm::wasm::modal::{self, Modals};
use portfolio_wasm::wasm::nav::NavToggle;
use portfolio_wasm::wasm::render::PointsRenderer;
use portfolio_wasm::wasm::reveal::reveal;
use portfolio_wasm::wasm::Behavior;
use portfolio_wasm::PageError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> (Document, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    (document, root)
}

fn html(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .expect(selector)
        .dyn_into()
        .unwrap()
}

fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test(async)]
async fn cursor_lead_is_immediate_and_trail_lags() {
    let (document, root) = fixture(
        r##"<div class="t-cursor"></div><div class="t-follower"></div><a class="t-link" href="#">link</a>"##,
    );
    let config = CursorConfig {
        lead_selector: ".t-cursor",
        trail_selector: ".t-follower",
        interactive_selector: ".t-link",
        ..CursorConfig::default()
    };
    Cursor::new(config).attach(&document).unwrap();

    let init = MouseEventInit::new();
    init.set_client_x(120);
    init.set_client_y(48);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    document.dispatch_event(&event).unwrap();

    let lead = html(&document, ".t-cursor");
    let trail = html(&document, ".t-follower");
    assert_eq!(style(&lead, "left"), "120px");
    assert_eq!(style(&lead, "top"), "48px");
    assert_eq!(style(&trail, "left"), "");

    sleep(config.trail_delay_ms + 50).await;
    assert_eq!(style(&trail, "left"), "120px");
    assert_eq!(style(&trail, "top"), "48px");

    let link = html(&document, ".t-link");
    link.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert!(trail.class_list().contains("cursor-hover"));
    link.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert!(!trail.class_list().contains("cursor-hover"));

    root.remove();
}

fn filter_config() -> FilterConfig {
    FilterConfig {
        button_selector: ".t-filter",
        card_selector: ".t-card",
        ..FilterConfig::default()
    }
}

#[wasm_bindgen_test(async)]
async fn filter_clicks_keep_one_active_button_and_match_exactly() {
    let (document, root) = fixture(
        r#"
        <button class="t-filter active" data-filter="all">All</button>
        <button class="t-filter" data-filter="web">Web</button>
        <div class="t-card" id="t-card-web" data-category="web"></div>
        <div class="t-card" id="t-card-sys" data-category="systems"></div>
        <div class="t-card" id="t-card-upper" data-category="Web"></div>
        "#,
    );
    ProjectFilter::new(filter_config()).attach(&document).unwrap();
    let active_count = || document.query_selector_all(".t-filter.active").unwrap().length();

    html(&document, r#".t-filter[data-filter="web"]"#).click();
    assert_eq!(active_count(), 1);
    assert!(html(&document, r#".t-filter[data-filter="web"]"#)
        .class_list()
        .contains("active"));

    let web = html(&document, "#t-card-web");
    let sys = html(&document, "#t-card-sys");
    let upper = html(&document, "#t-card-upper");
    assert_eq!(style(&web, "display"), "block");
    assert_eq!(style(&sys, "opacity"), "0");
    assert_eq!(style(&sys, "display"), "");

    sleep(350).await;
    assert_eq!(style(&web, "opacity"), "1");
    assert_eq!(style(&sys, "display"), "none");
    assert_eq!(style(&upper, "display"), "none");

    html(&document, r#".t-filter[data-filter="all"]"#).click();
    assert_eq!(active_count(), 1);
    sleep(150).await;
    for card in [&web, &sys, &upper] {
        assert_eq!(style(card, "display"), "block");
        assert_eq!(style(card, "opacity"), "1");
    }

    root.remove();
}

#[wasm_bindgen_test(async)]
async fn button_without_filter_value_shows_uncategorized_cards() {
    let (document, root) = fixture(
        r#"
        <button class="t-filter active" data-filter="all">All</button>
        <button class="t-filter" id="t-bare">Other</button>
        <div class="t-card" id="t-card-bare"></div>
        <div class="t-card" id="t-card-tagged" data-category="web"></div>
        "#,
    );
    ProjectFilter::new(filter_config()).attach(&document).unwrap();

    html(&document, "#t-bare").click();
    sleep(350).await;
    let bare = html(&document, "#t-card-bare");
    let tagged = html(&document, "#t-card-tagged");
    assert_eq!(style(&bare, "display"), "block");
    assert_eq!(style(&bare, "opacity"), "1");
    assert_eq!(style(&tagged, "display"), "none");

    root.remove();
}

#[wasm_bindgen_test]
fn filter_without_active_button_is_reported() {
    let (document, root) = fixture(r#"<button class="t-filter" data-filter="all">All</button>"#);
    let result = ProjectFilter::new(filter_config()).attach(&document);
    assert!(matches!(result, Err(PageError::NoActiveFilter)));
    root.remove();
}

#[wasm_bindgen_test]
fn modal_open_close_and_backdrop_clicks() {
    let (document, root) = fixture(
        r#"
        <button id="t-open" data-modal-open="t-modal">Open</button>
        <div id="t-modal" class="modal">
          <div class="modal-content">
            <p id="t-inside">content</p>
            <span id="t-close" class="close-modal" data-modal-close="t-modal">x</span>
          </div>
        </div>
        "#,
    );
    Modals::new(ModalConfig::default()).attach(&document).unwrap();

    modal::open(&document, "t-modal").unwrap();
    modal::open(&document, "t-modal").unwrap();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Open);

    html(&document, "#t-inside").click();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Open);

    html(&document, "#t-modal").click();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Closed);

    modal::close(&document, "t-modal").unwrap();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Closed);

    html(&document, "#t-open").click();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Open);
    html(&document, "#t-close").click();
    assert_eq!(modal::state(&document, "t-modal").unwrap(), ModalState::Closed);

    root.remove();
}

#[wasm_bindgen_test]
fn hamburger_toggles_menu() {
    let (document, root) = fixture(r#"<button class="t-hamburger"></button><ul class="t-links"></ul>"#);
    let config = NavConfig {
        toggle_selector: ".t-hamburger",
        menu_selector: ".t-links",
        ..NavConfig::default()
    };
    NavToggle::new(config).attach(&document).unwrap();

    let menu = html(&document, ".t-links");
    html(&document, ".t-hamburger").click();
    assert!(menu.class_list().contains("nav-active"));
    html(&document, ".t-hamburger").click();
    assert!(!menu.class_list().contains("nav-active"));

    root.remove();
}

#[wasm_bindgen_test]
fn reveal_marks_visible_once_and_fills_bars() {
    let (document, root) = fixture(
        r#"
        <section id="t-skills">
          <div class="skill-bar-container" data-percent="90%"><div class="progress"></div></div>
          <div class="skill-bar-container" data-percent="40%"><div class="progress"></div></div>
        </section>
        <div id="t-plain" class="hidden-element"></div>
        "#,
    );
    let config = RevealConfig::default();
    let skills: Element = html(&document, "#t-skills").into();
    reveal(&skills, &config);
    reveal(&skills, &config);
    assert_eq!(skills.class_name(), "visible");

    let bars = document.query_selector_all("#t-skills .progress").unwrap();
    let width = |i| style(&bars.item(i).unwrap().dyn_into().unwrap(), "width");
    assert_eq!(width(0), "90%");
    assert_eq!(width(1), "40%");

    let plain: Element = html(&document, "#t-plain").into();
    reveal(&plain, &config);
    assert!(plain.class_list().contains("visible"));

    root.remove();
}

fn contact_fixture() -> (Document, HtmlElement) {
    fixture(
        r#"
        <form id="t-form">
          <input id="t-name">
          <input id="t-email">
          <button type="submit">Send</button>
        </form>
        "#,
    )
}

fn contact_config() -> ContactConfig {
    ContactConfig {
        form_id: "t-form",
        name_id: "t-name",
        email_id: "t-email",
        ..ContactConfig::default()
    }
}

fn submit(document: &Document) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    html(document, "#t-form").dispatch_event(&event).unwrap()
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test(async)]
async fn contact_submission_confirms_after_delay_and_resets() {
    let (document, root) = contact_fixture();
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();
    let config = contact_config();
    ContactForm::with_notifier(config, move |message| sink.borrow_mut().push(message.to_owned()))
        .attach(&document)
        .unwrap();

    input(&document, "t-name").set_value("Alex");
    input(&document, "t-email").set_value("a@b.com");
    assert!(!submit(&document), "default navigation must be prevented");

    let button = html(&document, "#t-form button");
    assert_eq!(button.inner_text(), "Sent!");
    assert!(!style(&button, "background").is_empty());
    assert!(messages.borrow().is_empty());

    sleep(config.reset_delay_ms + 100).await;
    assert_eq!(
        *messages.borrow(),
        vec!["Thanks Alex! I'll get back to you at a@b.com soon.".to_owned()]
    );
    assert_eq!(input(&document, "t-name").value(), "");
    assert_eq!(input(&document, "t-email").value(), "");
    assert_eq!(button.inner_text(), "Send");
    assert_eq!(style(&button, "background"), "");
    assert_eq!(style(&button, "color"), "");

    root.remove();
}

#[wasm_bindgen_test(async)]
async fn contact_with_empty_name_does_nothing() {
    let (document, root) = contact_fixture();
    let notified = Rc::new(Cell::new(false));
    let flag = notified.clone();
    let config = contact_config();
    ContactForm::with_notifier(config, move |_| flag.set(true))
        .attach(&document)
        .unwrap();

    input(&document, "t-email").set_value("a@b.com");
    assert!(!submit(&document));

    let button = html(&document, "#t-form button");
    assert_eq!(button.inner_text(), "Send");
    sleep(config.reset_delay_ms + 100).await;
    assert!(!notified.get());
    assert_eq!(input(&document, "t-email").value(), "a@b.com");

    root.remove();
}

#[wasm_bindgen_test(async)]
async fn loader_hides_overlay_then_starts_next_stage() {
    let (document, root) = fixture(r#"<div id="t-loader"></div>"#);
    let started = Rc::new(Cell::new(false));
    let flag = started.clone();
    let config = LoaderConfig {
        overlay_id: "t-loader",
        ..LoaderConfig::default()
    };
    Loader::new(config, move || flag.set(true))
        .attach(&document)
        .unwrap();

    sleep(config.hide_delay_ms + 100).await;
    let overlay = html(&document, "#t-loader");
    assert_eq!(style(&overlay, "opacity"), "0");
    assert_eq!(style(&overlay, "display"), "none");
    assert!(started.get());

    root.remove();
}

#[wasm_bindgen_test]
fn hero_without_container_fails_fast() {
    let document = web_sys::window().unwrap().document().unwrap();
    let config = HeroConfig {
        container_id: "t-no-such-container",
        ..HeroConfig::default()
    };
    let result = Hero::new(config).attach(&document);
    assert!(matches!(result, Err(PageError::MissingElement(_))));
}

#[wasm_bindgen_test]
fn renderer_output_follows_viewport_resize() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    let config = HeroConfig::default();
    let cloud = ParticleCloud::seeded(16, config.spread, js_sys::Math::random);
    let renderer = PointsRenderer::new(canvas.clone(), &cloud, &config).unwrap();

    renderer.set_size(Viewport::new(1920.0, 1080.0));
    assert_eq!((canvas.width(), canvas.height()), (1920, 1080));

    renderer.set_size(Viewport::new(800.0, 600.0));
    assert_eq!((canvas.width(), canvas.height()), (800, 600));
}

#[wasm_bindgen_test]
fn hero_canvas_tracks_window_size() {
    let (document, root) = fixture(r#"<div id="t-hero"></div>"#);
    let config = HeroConfig {
        container_id: "t-hero",
        ..HeroConfig::default()
    };
    Hero::new(config).attach(&document).unwrap();

    let window = web_sys::window().unwrap();
    let size = |window: &web_sys::Window| {
        (
            window.inner_width().unwrap().as_f64().unwrap() as u32,
            window.inner_height().unwrap().as_f64().unwrap() as u32,
        )
    };
    let canvas: HtmlCanvasElement = document
        .query_selector("#t-hero canvas")
        .unwrap()
        .expect("hero canvas appended")
        .dyn_into()
        .unwrap();
    assert_eq!((canvas.width(), canvas.height()), size(&window));

    canvas.set_width(1);
    canvas.set_height(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), size(&window));

    root.remove();
}
