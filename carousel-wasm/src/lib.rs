//! Browser front-end of the item carousel: renders the cards into the page,
//! wires mouse/touch/wheel/keyboard input to the core state machine and
//! re-broadcasts its notifications as `CustomEvent`s on `window`.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::{CarouselController, ItemCatalog};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent,
    WheelEvent, Window,
};

mod constants;
mod dom;
mod events;
mod state;
mod utils;

use crate::constants::{CLOSE_SELECTOR, CLOSED_EVENT, ITEM_SELECTED_EVENT};
use crate::dom::{DomSurface, card_id};
use crate::state::{STATE, SharedWidget, with_mounted, with_widget};

/// Register `handler` for `event`. `passive` is passed through as a listener
/// option when given; wheel and touchmove need `Some(false)` to be able to
/// cancel page scrolling.
fn listen(
    target: &EventTarget,
    event: &str,
    passive: Option<bool>,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    match passive {
        Some(passive) => {
            let opts = AddEventListenerOptions::new();
            opts.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                cb.as_ref().unchecked_ref(),
                &opts,
            )?;
        }
        None => target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?,
    }
    cb.forget();
    Ok(())
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|t| t.client_x() as f64)
}

fn attach_ui(state: &SharedWidget, window: &Window, document: &Document) -> Result<(), JsValue> {
    let (track, row) = {
        let w = state.borrow();
        (w.surface().track().cloned(), w.surface().items_element().cloned())
    };

    // Close button
    if let Some(btn) = document.query_selector(CLOSE_SELECTOR)? {
        let st = state.clone();
        listen(&btn, "click", None, move |_e| {
            with_widget(&st, "close", |w| w.close());
        })?;
    }

    if let Some(track) = track.as_ref() {
        // Mouse drag
        let st = state.clone();
        listen(track, "mousedown", None, move |e| {
            let e: MouseEvent = e.unchecked_into();
            with_widget(&st, "mousedown", |w| w.begin_drag(e.client_x() as f64));
        })?;
        let st = state.clone();
        listen(track, "mousemove", None, move |e| {
            let e: MouseEvent = e.unchecked_into();
            with_widget(&st, "mousemove", |w| w.update_drag(e.client_x() as f64));
        })?;
        let st = state.clone();
        listen(track, "mouseup", None, move |_e| {
            with_widget(&st, "mouseup", |w| w.end_drag());
        })?;
        let st = state.clone();
        listen(track, "mouseleave", None, move |_e| {
            with_widget(&st, "mouseleave", |w| w.pointer_leave());
        })?;

        // Touch drag
        let st = state.clone();
        listen(track, "touchstart", Some(true), move |e| {
            let e: TouchEvent = e.unchecked_into();
            if let Some(x) = first_touch_x(&e) {
                with_widget(&st, "touchstart", |w| w.begin_drag(x));
            }
        })?;
        let st = state.clone();
        listen(track, "touchmove", Some(false), move |e| {
            let e: TouchEvent = e.unchecked_into();
            let Some(x) = first_touch_x(&e) else {
                return;
            };
            with_widget(&st, "touchmove", |w| {
                if w.is_dragging() {
                    // keep the page from scrolling under the gesture
                    e.prevent_default();
                    w.update_drag(x);
                }
            });
        })?;
        for name in ["touchend", "touchcancel"] {
            let st = state.clone();
            listen(track, name, None, move |_e| {
                with_widget(&st, "touchend", |w| w.end_drag());
            })?;
        }

        // Trackpad / wheel
        let st = state.clone();
        listen(track, "wheel", Some(false), move |e| {
            let e: WheelEvent = e.unchecked_into();
            e.prevent_default();
            with_widget(&st, "wheel", |w| w.on_wheel(e.delta_x(), e.delta_y()));
        })?;
    }

    // Card activation, delegated to the item row
    if let Some(row) = row.as_ref() {
        let st = state.clone();
        listen(row, "click", None, move |e| {
            if let Some(id) = card_id(e.target()) {
                with_widget(&st, "item click", |w| w.handle_item_activation(id));
            }
        })?;
    }

    // Keyboard
    {
        let st = state.clone();
        listen(document, "keydown", None, move |e| {
            let e: KeyboardEvent = e.unchecked_into();
            with_widget(&st, "keydown", |w| w.on_key(&e.key()));
        })?;
    }

    // Layout changes
    {
        let st = state.clone();
        listen(window, "resize", None, move |_e| {
            with_widget(&st, "resize", |w| w.relayout());
        })?;
    }

    Ok(())
}

fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    let config = utils::load_config(&window);
    let surface = DomSurface::locate(window.clone(), document.clone());
    let mut widget = CarouselController::new(surface, ItemCatalog::bundled(), config);

    let win = window.clone();
    widget.on_item_selected(move |item| {
        if let Err(e) = events::dispatch_item_selected(&win, item) {
            log::error!("failed to dispatch {ITEM_SELECTED_EVENT}: {e:?}");
        }
    });
    let win = window.clone();
    widget.on_closed(move || {
        if let Err(e) = events::dispatch_closed(&win) {
            log::error!("failed to dispatch {CLOSED_EVENT}: {e:?}");
        }
    });
    widget.initialize();

    let state = Rc::new(RefCell::new(widget));
    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(&state, &window, &document)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    utils::init_logging(&window);

    if document.ready_state() == "loading" {
        let (win, doc) = (window.clone(), document.clone());
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount(win, doc) {
                log::error!("carousel mount failed: {e:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    mount(window, document)
}

/// Eased scroll by `distance` pixels (positive moves toward later items).
#[wasm_bindgen]
pub fn carousel_scroll_by(distance: f64) {
    with_mounted("carousel_scroll_by", |w| w.scroll_by(distance));
}

#[wasm_bindgen]
pub fn carousel_close() {
    with_mounted("carousel_close", |w| w.close());
}

/// Re-measure the track, e.g. after the host changed the carousel's size.
#[wasm_bindgen]
pub fn carousel_relayout() {
    with_mounted("carousel_relayout", |w| w.relayout());
}

/// Current offset in pixels, or `undefined` while the carousel is unmounted
/// or busy dispatching an event.
#[wasm_bindgen]
pub fn carousel_current_scroll() -> Option<f64> {
    with_mounted("carousel_current_scroll", |w| w.current_scroll())
}
