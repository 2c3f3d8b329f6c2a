/// Signed scroll distance for a `KeyboardEvent.key` value, if the key
/// scrolls the carousel at all.
pub fn key_scroll_distance(key: &str, step: f64) -> Option<f64> {
    match key {
        "ArrowLeft" => Some(-step),
        "ArrowRight" => Some(step),
        _ => None,
    }
}

/// Horizontal wheel delta wins; vertical wheels scroll sideways otherwise.
pub fn wheel_delta(delta_x: f64, delta_y: f64) -> f64 {
    if delta_x != 0.0 && !delta_x.is_nan() {
        delta_x
    } else {
        delta_y
    }
}
