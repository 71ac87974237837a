use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::{dom, Behavior};
use crate::config::ContactConfig;
use crate::contact::Submission;
use crate::error::{PageError, Result};

/// Contact form with simulated submission: nothing leaves the page.
pub struct ContactForm {
    config: ContactConfig,
    notify: Rc<dyn Fn(&str)>,
}

impl ContactForm {
    /// Confirms through `window.alert`.
    pub fn new(config: ContactConfig) -> Self {
        Self::with_notifier(config, alert)
    }

    pub fn with_notifier(config: ContactConfig, notify: impl Fn(&str) + 'static) -> Self {
        Self {
            config,
            notify: Rc::new(notify),
        }
    }
}

impl Behavior for ContactForm {
    const NAME: &'static str = "contact form";

    fn attach(self, document: &Document) -> Result<()> {
        let Self { config, notify } = self;
        let form: HtmlFormElement = dom::by_id(document, config.form_id)?;

        let target = form.clone();
        let document = document.clone();
        dom::listen(&target, "submit", move |event| {
            event.prevent_default();
            if let Err(err) = submit(&document, &form, &config, &notify) {
                log::error!("contact form: {err}");
            }
        })?;
        Ok(())
    }
}

fn submit(
    document: &Document,
    form: &HtmlFormElement,
    config: &ContactConfig,
    notify: &Rc<dyn Fn(&str)>,
) -> Result<()> {
    let name: HtmlInputElement = dom::by_id(document, config.name_id)?;
    let email: HtmlInputElement = dom::by_id(document, config.email_id)?;
    // Empty fields are silently ignored.
    let Some(submission) = Submission::from_fields(&name.value(), &email.value()) else {
        return Ok(());
    };

    let button: HtmlButtonElement = form
        .query_selector("button")?
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| PageError::missing(format!("#{} button", config.form_id)))?;
    let original = button.inner_text();
    button.set_inner_text(config.sent_label);
    dom::set_style(&button, "background", config.sent_background)?;
    dom::set_style(&button, "color", config.sent_color)?;
    log::debug!("contact form accepted for {}", submission.email);

    let form = form.clone();
    let notify = notify.clone();
    dom::after(config.reset_delay_ms, move || {
        form.reset();
        button.set_inner_text(&original);
        let style = button.style();
        style.remove_property("background").ok();
        style.remove_property("color").ok();
        notify(&submission.confirmation());
    })?;
    Ok(())
}

fn alert(message: &str) {
    let shown = dom::window()
        .and_then(|window| window.alert_with_message(message).map_err(PageError::from));
    if let Err(err) = shown {
        log::warn!("confirmation not shown: {err}");
    }
}
