use web_sys::{Document, Element};

use super::{dom, Behavior};
use crate::config::NavConfig;
use crate::error::Result;

/// Hamburger button that shows and hides the nav menu on small screens.
pub struct NavToggle {
    config: NavConfig,
}

impl NavToggle {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }
}

impl Behavior for NavToggle {
    const NAME: &'static str = "mobile nav";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;
        let toggle: Element = dom::query(document, config.toggle_selector)?;
        let menu = dom::query::<Element>(document, config.menu_selector)?.class_list();
        dom::listen(&toggle, "click", move |_| {
            if let Err(err) = menu.toggle(config.open_class) {
                log::warn!("nav toggle: {err:?}");
            }
        })
    }
}
