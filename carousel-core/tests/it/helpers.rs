//! Test fixtures: a `Surface` that records what the controller asked of it.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::{
    CarouselConfig, CarouselController, Item, ItemCatalog, Surface, TaskHandle, Transition,
};

#[derive(Debug, Default)]
pub struct FakeSurface {
    pub track: Option<f64>,
    pub content: Option<f64>,
    pub rendered: Vec<u32>,
    /// Every offset applied, with whether it was eased.
    pub offsets: Vec<(f64, bool)>,
    pub transition: Option<String>,
    pub scheduled: Vec<TaskHandle>,
    pub cancelled: Vec<TaskHandle>,
    pub grabbing: bool,
    pub visible: bool,
    next_task: i32,
}

impl FakeSurface {
    pub fn sized(track: f64, content: f64) -> Self {
        Self {
            track: Some(track),
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn last_offset(&self) -> Option<f64> {
        self.offsets.last().map(|(px, _)| *px)
    }

    /// Simulate the deferred reset firing.
    pub fn fire_pending(&mut self) {
        self.transition = None;
    }
}

impl Surface for FakeSurface {
    fn track_width(&self) -> Option<f64> {
        self.track
    }

    fn content_width(&self) -> Option<f64> {
        self.content
    }

    fn render_items(&mut self, items: &[Item]) {
        self.rendered = items.iter().map(|i| i.id).collect();
    }

    fn apply_offset(&mut self, offset: f64, transition: Option<&Transition>) {
        if let Some(t) = transition {
            self.transition = Some(t.css());
        }
        self.offsets.push((offset, transition.is_some()));
    }

    fn clear_transition(&mut self) {
        self.transition = None;
    }

    fn schedule_transition_reset(&mut self, _delay_ms: u32) -> Option<TaskHandle> {
        self.next_task += 1;
        let task = TaskHandle(self.next_task);
        self.scheduled.push(task);
        Some(task)
    }

    fn cancel_task(&mut self, task: TaskHandle) {
        self.cancelled.push(task);
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

pub type TestCarousel = CarouselController<FakeSurface>;

/// Initialized carousel over the bundled catalog with the given layout.
pub fn carousel(track: f64, content: f64) -> TestCarousel {
    carousel_with(track, content, CarouselConfig::default())
}

pub fn carousel_with(track: f64, content: f64, config: CarouselConfig) -> TestCarousel {
    let mut c = CarouselController::new(
        FakeSurface::sized(track, content),
        ItemCatalog::bundled(),
        config,
    );
    c.initialize();
    c
}

/// Collects every selected item.
pub fn record_selections(c: &mut TestCarousel) -> Rc<RefCell<Vec<Item>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    c.on_item_selected(move |item| sink.borrow_mut().push(item.clone()));
    seen
}

/// Counts close notifications.
pub fn record_closes(c: &mut TestCarousel) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    c.on_closed(move || *sink.borrow_mut() += 1);
    count
}
