use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::{dom, Behavior};
use crate::config::FilterConfig;
use crate::error::{PageError, Result};
use crate::filter::{CardTransition, FilterBar};

/// Category buttons over the project grid; exactly one is active.
pub struct ProjectFilter {
    config: FilterConfig,
}

impl ProjectFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }
}

impl Behavior for ProjectFilter {
    const NAME: &'static str = "project filter";

    fn attach(self, document: &Document) -> Result<()> {
        let config = self.config;
        let buttons: Vec<Element> = dom::elements(document.query_selector_all(config.button_selector)?);
        let cards: Vec<HtmlElement> = dom::elements(document.query_selector_all(config.card_selector)?);

        let active = buttons
            .iter()
            .position(|button| dom::has_class(button, config.active_class))
            .ok_or(PageError::NoActiveFilter)?;
        let bar = FilterBar::new(buttons.len(), active).ok_or(PageError::NoActiveFilter)?;
        // Only the first marked button stays active.
        for button in buttons.iter().skip(active + 1) {
            button.class_list().remove_1(config.active_class)?;
        }

        let bar = Rc::new(Cell::new(bar));
        let buttons = Rc::new(buttons);
        let cards = Rc::new(cards);
        for (index, button) in buttons.iter().enumerate() {
            let bar = bar.clone();
            let buttons = buttons.clone();
            let cards = cards.clone();
            dom::listen(button, "click", move |_| {
                if let Err(err) = select(index, &bar, &buttons, &cards, &config) {
                    log::error!("project filter: {err}");
                }
            })?;
        }
        log::debug!("project filter over {} cards", cards.len());
        Ok(())
    }
}

fn select(
    index: usize,
    bar: &Cell<FilterBar>,
    buttons: &[Element],
    cards: &[HtmlElement],
    config: &FilterConfig,
) -> Result<()> {
    let mut state = bar.get();
    let Some(previous) = state.select(index) else {
        return Ok(());
    };
    bar.set(state);
    buttons[previous].class_list().remove_1(config.active_class)?;
    let button = &buttons[index];
    button.class_list().add_1(config.active_class)?;

    let filter = button.get_attribute(config.filter_attribute);
    log::debug!("project filter: {filter:?}");
    for card in cards {
        let category = card.get_attribute(config.category_attribute);
        let transition = CardTransition::for_card(filter.as_deref(), category.as_deref());
        let (property, value) = transition.immediate();
        dom::set_style(card, property, value)?;

        let card = card.clone();
        let (property, value) = transition.delayed();
        dom::after(
            transition.delay_ms(config.show_delay_ms, config.hide_delay_ms),
            move || {
                if let Err(err) = dom::set_style(&card, property, value) {
                    log::warn!("project card: {err}");
                }
            },
        )?;
    }
    Ok(())
}
