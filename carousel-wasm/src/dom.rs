use carousel_core::{Item, Surface, TaskHandle, Transition};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::constants::{
    CARD_ID_ATTR, CARD_SELECTOR, CONTAINER_SELECTOR, ITEMS_SELECTOR, TRACK_SELECTOR,
};

/// `Surface` backed by the page's carousel markup. Any element that is
/// missing simply turns the matching operation into a no-op.
pub struct DomSurface {
    window: Window,
    document: Document,
    container: Option<HtmlElement>,
    track: Option<HtmlElement>,
    items: Option<HtmlElement>,
    // Shared by every scheduled reset; must outlive any pending timeout.
    reset_transition: Option<Closure<dyn FnMut()>>,
}

impl DomSurface {
    pub fn locate(window: Window, document: Document) -> Self {
        let container = query_html(&document, CONTAINER_SELECTOR);
        let track = query_html(&document, TRACK_SELECTOR);
        let items = query_html(&document, ITEMS_SELECTOR);
        for (sel, el) in [
            (CONTAINER_SELECTOR, &container),
            (TRACK_SELECTOR, &track),
            (ITEMS_SELECTOR, &items),
        ] {
            if el.is_none() {
                log::warn!("{sel} not found; carousel degrades to a static layout");
            }
        }
        let reset_transition = items.clone().map(|row| {
            Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let _ = row.style().set_property("transition", "none");
            }))
        });
        Self {
            window,
            document,
            container,
            track,
            items,
            reset_transition,
        }
    }

    pub fn track(&self) -> Option<&HtmlElement> {
        self.track.as_ref()
    }

    pub fn items_element(&self) -> Option<&HtmlElement> {
        self.items.as_ref()
    }

    fn build_card(&self, item: &Item) -> Result<Element, JsValue> {
        let card = self.element("div", "carousel-item", None)?;
        card.set_attribute(CARD_ID_ATTR, &item.id.to_string())?;
        let body = self.element("div", "item-card", None)?;
        let image = self.element("div", "item-image", Some(&item.icon))?;
        let content = self.element("div", "item-content", None)?;
        content.append_child(&*self.element("h3", "item-title", Some(&item.title))?)?;
        content.append_child(&*self.element("p", "item-description", Some(&item.description))?)?;
        content.append_child(&*self.element("span", "item-badge", Some(&item.badge))?)?;
        body.append_child(&image)?;
        body.append_child(&content)?;
        card.append_child(&body)?;
        Ok(card)
    }

    fn element(&self, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        if text.is_some() {
            el.set_text_content(text);
        }
        Ok(el)
    }
}

impl Surface for DomSurface {
    fn track_width(&self) -> Option<f64> {
        self.track.as_ref().map(|t| t.offset_width() as f64)
    }

    fn content_width(&self) -> Option<f64> {
        self.items.as_ref().map(|i| i.scroll_width() as f64)
    }

    fn render_items(&mut self, items: &[Item]) {
        let Some(row) = self.items.as_ref() else {
            return;
        };
        row.set_text_content(None);
        for item in items {
            let appended = self.build_card(item).and_then(|card| row.append_child(&card));
            if let Err(e) = appended {
                log::error!("failed to render item {}: {:?}", item.id, e);
            }
        }
    }

    fn apply_offset(&mut self, offset: f64, transition: Option<&Transition>) {
        let Some(row) = self.items.as_ref() else {
            return;
        };
        let style = row.style();
        if let Some(t) = transition {
            let _ = style.set_property("transition", &t.css());
        }
        let _ = style.set_property("transform", &translate_x(offset));
    }

    fn clear_transition(&mut self) {
        if let Some(row) = self.items.as_ref() {
            let _ = row.style().set_property("transition", "none");
        }
    }

    fn schedule_transition_reset(&mut self, delay_ms: u32) -> Option<TaskHandle> {
        let reset = self.reset_transition.as_ref()?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map(TaskHandle)
            .map_err(|e| log::warn!("could not schedule transition reset: {e:?}"))
            .ok()
    }

    fn cancel_task(&mut self, task: TaskHandle) {
        self.window.clear_timeout_with_handle(task.0);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        if let Some(track) = self.track.as_ref() {
            let cursor = if grabbing { "grabbing" } else { "grab" };
            let _ = track.style().set_property("cursor", cursor);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let Some(container) = self.container.as_ref() else {
            return;
        };
        let style = container.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// CSS transform that shifts the item row left by `offset` pixels.
pub fn translate_x(offset: f64) -> String {
    // avoid printing "-0px"
    let x = if offset == 0.0 { 0.0 } else { -offset };
    format!("translateX({x}px)")
}

/// Id of the card an event landed on, if any.
pub fn card_id(target: Option<EventTarget>) -> Option<u32> {
    let el = target?.dyn_into::<Element>().ok()?;
    let card = el.closest(CARD_SELECTOR).ok()??;
    parse_card_id(&card.get_attribute(CARD_ID_ATTR)?)
}

pub fn parse_card_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
