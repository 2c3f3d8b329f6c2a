use crate::config::Transition;
use crate::item::Item;

/// Opaque id of a deferred task scheduled on a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub i32);

/// Rendering, measurement and timer capabilities the controller drives.
///
/// Implementations must tolerate missing presentation elements: measuring
/// returns `None` and mutations silently do nothing.
pub trait Surface {
    /// Visible width of the track viewport.
    fn track_width(&self) -> Option<f64>;

    /// Total width of all rendered cards laid out in a row.
    fn content_width(&self) -> Option<f64>;

    /// Replace the rendered cards with one card per item, in order.
    fn render_items(&mut self, items: &[Item]);

    /// Translate the item row by `-offset` pixels, eased when `transition`
    /// is given. Without one the current transition style is left alone.
    fn apply_offset(&mut self, offset: f64, transition: Option<&Transition>);

    /// Remove any transition style so later offsets apply instantly.
    fn clear_transition(&mut self);

    /// Arrange for `clear_transition` to happen after `delay_ms`.
    fn schedule_transition_reset(&mut self, delay_ms: u32) -> Option<TaskHandle>;

    /// Cancel a task returned by `schedule_transition_reset`. Cancelling a
    /// task that already ran is harmless.
    fn cancel_task(&mut self, task: TaskHandle);

    /// Cursor feedback while a drag is active.
    fn set_grabbing(&mut self, grabbing: bool);

    fn set_visible(&mut self, visible: bool);
}
