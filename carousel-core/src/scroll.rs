/// Pointer gesture state of the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer x at `begin_drag`.
        start_pointer: f64,
        /// Scroll offset at `begin_drag`.
        start_scroll: f64,
        /// Farthest distance the pointer has travelled from `start_pointer`.
        travel: f64,
    },
}

/// Horizontal scroll offset and its bounds, in pixels.
///
/// `0 <= current <= max` holds after every mutation made through this type,
/// except `set_unclamped`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    current: f64,
    max: f64,
    pub drag: DragPhase,
}

impl ScrollState {
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    /// Recompute the extent from layout measurements and pull the offset back
    /// inside it. Missing or non-finite widths count as zero.
    pub fn set_extent(&mut self, track_width: Option<f64>, content_width: Option<f64>) {
        let track = finite_or_zero(track_width);
        let content = finite_or_zero(content_width);
        self.max = (content - track).max(0.0);
        self.current = self.clamp(self.current);
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.max)
    }

    /// Store `value` clamped to `[0, max]`. Non-finite values are ignored.
    pub fn set_clamped(&mut self, value: f64) -> f64 {
        if value.is_finite() {
            self.current = self.clamp(value);
        }
        self.current
    }

    /// Store `value` as-is (overscroll allowed). Non-finite values are ignored.
    pub fn set_unclamped(&mut self, value: f64) -> f64 {
        if value.is_finite() {
            self.current = value;
        }
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
        self.drag = DragPhase::Idle;
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    v.filter(|w| w.is_finite()).unwrap_or(0.0)
}
