use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::CarouselController;

use crate::dom::DomSurface;

/// The mounted carousel, shared across the WASM callbacks.
pub type Widget = CarouselController<DomSurface>;

pub type SharedWidget = Rc<RefCell<Widget>>;

/// Thread local storage for the single mounted carousel.
thread_local! {
    pub static STATE: RefCell<Option<SharedWidget>> = const { RefCell::new(None) };
}

/// Run `f` on the widget unless it is already borrowed, which happens when
/// host JS calls back into us from inside an `item-selected` or
/// `carousel-closed` listener.
pub fn with_widget<R>(
    state: &SharedWidget,
    what: &str,
    f: impl FnOnce(&mut Widget) -> R,
) -> Option<R> {
    match state.try_borrow_mut() {
        Ok(mut w) => Some(f(&mut w)),
        Err(_) => {
            log::warn!("{what} ignored: carousel is busy dispatching an event");
            None
        }
    }
}

/// Like [`with_widget`], for the globally mounted carousel.
pub fn with_mounted<R>(what: &str, f: impl FnOnce(&mut Widget) -> R) -> Option<R> {
    let state = STATE.with(|st| st.borrow().clone());
    match state {
        Some(state) => with_widget(&state, what, f),
        None => {
            log::warn!("{what} ignored: carousel is not mounted");
            None
        }
    }
}
