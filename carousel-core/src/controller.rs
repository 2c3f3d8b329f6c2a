use crate::config::CarouselConfig;
use crate::input::{key_scroll_distance, wheel_delta};
use crate::item::{Item, ItemCatalog, ItemDataSource};
use crate::scroll::{DragPhase, ScrollState};
use crate::surface::{Surface, TaskHandle};

type ItemListener = Box<dyn FnMut(&Item)>;
type CloseListener = Box<dyn FnMut()>;

/// Drag/scroll state machine of one carousel instance.
///
/// Input handlers translate pointer, wheel and keyboard input into a clamped
/// horizontal offset and push it to the [`Surface`]. Item activations and
/// closing are reported to listeners registered with [`on_item_selected`]
/// and [`on_closed`].
///
/// [`on_item_selected`]: CarouselController::on_item_selected
/// [`on_closed`]: CarouselController::on_closed
pub struct CarouselController<S: Surface, D: ItemDataSource = ItemCatalog> {
    surface: S,
    items: D,
    config: CarouselConfig,
    scroll: ScrollState,
    pending_reset: Option<TaskHandle>,
    // set when a drag that travelled past the click slop ends
    swallow_click: bool,
    closed: bool,
    item_listeners: Vec<ItemListener>,
    close_listeners: Vec<CloseListener>,
}

impl<S: Surface, D: ItemDataSource> CarouselController<S, D> {
    pub fn new(surface: S, items: D, config: CarouselConfig) -> Self {
        Self {
            surface,
            items,
            config,
            scroll: ScrollState::default(),
            pending_reset: None,
            swallow_click: false,
            closed: false,
            item_listeners: Vec::new(),
            close_listeners: Vec::new(),
        }
    }

    /// Render every item, measure the layout and rewind to the start.
    /// Also reopens a closed carousel.
    pub fn initialize(&mut self) {
        self.cancel_pending_reset();
        self.scroll.reset();
        self.swallow_click = false;
        self.closed = false;
        self.surface.set_visible(true);
        self.surface.render_items(self.items.items());
        self.surface.clear_transition();
        self.surface.set_grabbing(false);
        self.measure();
        self.surface.apply_offset(self.scroll.current(), None);
        log::debug!(
            "carousel initialized: {} items, max scroll {}px",
            self.items.items().len(),
            self.scroll.max()
        );
    }

    /// Re-measure after the layout may have changed (e.g. a window resize).
    pub fn relayout(&mut self) {
        if self.closed {
            return;
        }
        let before = self.scroll.current();
        self.measure();
        if self.scroll.current() != before {
            self.surface.apply_offset(self.scroll.current(), None);
        }
        log::debug!("carousel relayout: max scroll {}px", self.scroll.max());
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.ignored("begin_drag") {
            return;
        }
        if self.cancel_pending_reset() {
            self.surface.clear_transition();
        }
        self.scroll.drag = DragPhase::Dragging {
            start_pointer: pointer_x,
            start_scroll: self.scroll.current(),
            travel: 0.0,
        };
        self.swallow_click = false;
        self.surface.set_grabbing(true);
        log::debug!("drag started at x={pointer_x}");
    }

    /// Follow the pointer while dragging. Returns `false` when idle, in which
    /// case the movement is not a scroll gesture.
    pub fn update_drag(&mut self, pointer_x: f64) -> bool {
        if self.closed {
            return false;
        }
        let DragPhase::Dragging {
            start_pointer,
            start_scroll,
            travel,
        } = self.scroll.drag
        else {
            return false;
        };
        let delta = start_pointer - pointer_x;
        self.scroll.set_clamped(start_scroll + delta);
        if delta.is_finite() {
            self.scroll.drag = DragPhase::Dragging {
                start_pointer,
                start_scroll,
                travel: travel.max(delta.abs()),
            };
        }
        self.surface.apply_offset(self.scroll.current(), None);
        true
    }

    pub fn end_drag(&mut self) {
        let DragPhase::Dragging { travel, .. } = self.scroll.drag else {
            return;
        };
        self.scroll.drag = DragPhase::Idle;
        self.swallow_click = travel > self.config.click_slop_px;
        self.surface.set_grabbing(false);
        self.bounce_back();
        log::debug!("drag ended at {}px (travel {travel}px)", self.scroll.current());
    }

    /// The pointer left the track; an active drag ends as if released.
    pub fn pointer_leave(&mut self) {
        if self.scroll.is_dragging() {
            self.end_drag();
        }
    }

    /// Discrete, eased step (keyboard or host call).
    pub fn scroll_by(&mut self, distance: f64) {
        if self.ignored("scroll_by") {
            return;
        }
        self.cancel_pending_reset();
        let before = self.scroll.current();
        let target = before + distance;
        if self.config.clamp_discrete_scroll {
            self.scroll.set_clamped(target);
        } else {
            self.scroll.set_unclamped(target);
        }
        self.shift_drag_anchor(self.scroll.current() - before);
        let transition = &self.config.transition;
        self.surface.apply_offset(self.scroll.current(), Some(transition));
        self.pending_reset = self.surface.schedule_transition_reset(transition.duration_ms);
    }

    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64) {
        if self.ignored("wheel") {
            return;
        }
        if self.cancel_pending_reset() {
            self.surface.clear_transition();
        }
        let before = self.scroll.current();
        self.scroll.set_clamped(before + wheel_delta(delta_x, delta_y));
        self.shift_drag_anchor(self.scroll.current() - before);
        self.surface.apply_offset(self.scroll.current(), None);
    }

    /// Handle a `KeyboardEvent.key`. Returns whether the key scrolled.
    pub fn on_key(&mut self, key: &str) -> bool {
        match key_scroll_distance(key, self.config.key_step_px) {
            Some(distance) if !self.closed => {
                self.scroll_by(distance);
                true
            }
            _ => false,
        }
    }

    /// A click/tap landed on the card with `id`.
    pub fn handle_item_activation(&mut self, id: u32) {
        if self.ignored("item activation") {
            return;
        }
        if self.scroll.is_dragging() {
            log::debug!("activation of item {id} suppressed: drag in progress");
            return;
        }
        if std::mem::take(&mut self.swallow_click) {
            log::debug!("activation of item {id} suppressed: end of drag gesture");
            return;
        }
        let Some(item) = self.items.find(id) else {
            log::warn!("activation of unknown item {id}");
            return;
        };
        log::info!("item selected: {} ({})", item.id, item.title);
        for listener in self.item_listeners.iter_mut() {
            listener(item);
        }
    }

    /// Hide the carousel and notify close listeners. Every call notifies.
    pub fn close(&mut self) {
        self.cancel_pending_reset();
        self.scroll.drag = DragPhase::Idle;
        self.swallow_click = false;
        self.closed = true;
        self.surface.set_grabbing(false);
        self.surface.set_visible(false);
        log::debug!("carousel closed");
        for listener in self.close_listeners.iter_mut() {
            listener();
        }
    }

    pub fn on_item_selected(&mut self, listener: impl FnMut(&Item) + 'static) {
        self.item_listeners.push(Box::new(listener));
    }

    pub fn on_closed(&mut self, listener: impl FnMut() + 'static) {
        self.close_listeners.push(Box::new(listener));
    }

    pub fn current_scroll(&self) -> f64 {
        self.scroll.current()
    }

    pub fn max_scroll(&self) -> f64 {
        self.scroll.max()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroll.is_dragging()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn measure(&mut self) {
        let track = self.surface.track_width();
        let content = self.surface.content_width();
        self.scroll.set_extent(track, content);
    }

    // Continuous clamping already keeps a drag in bounds; this only matters
    // after an unclamped discrete scroll left the offset outside them.
    fn bounce_back(&mut self) {
        let before = self.scroll.current();
        if self.scroll.set_clamped(before) != before {
            self.surface.apply_offset(self.scroll.current(), None);
        }
    }

    // A discrete step during a drag moves the drag's anchor with it, so the
    // next pointer move continues from the stepped offset.
    fn shift_drag_anchor(&mut self, shift: f64) {
        if let DragPhase::Dragging { start_scroll, .. } = &mut self.scroll.drag {
            *start_scroll += shift;
        }
    }

    fn cancel_pending_reset(&mut self) -> bool {
        match self.pending_reset.take() {
            Some(task) => {
                self.surface.cancel_task(task);
                true
            }
            None => false,
        }
    }

    fn ignored(&self, what: &str) -> bool {
        if self.closed {
            log::warn!("{what} ignored: carousel is closed");
        }
        self.closed
    }
}
