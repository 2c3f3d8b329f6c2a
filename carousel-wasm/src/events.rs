use carousel_core::Item;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Window};

use crate::constants::{CLOSED_EVENT, ITEM_SELECTED_EVENT};

/// Dispatch `item-selected` on `window` with the item record as `detail`.
pub fn dispatch_item_selected(window: &Window, item: &Item) -> Result<(), JsValue> {
    let json = serde_json::to_string(item).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let detail = js_sys::JSON::parse(&json)?;
    dispatch(window, ITEM_SELECTED_EVENT, Some(&detail))
}

pub fn dispatch_closed(window: &Window) -> Result<(), JsValue> {
    dispatch(window, CLOSED_EVENT, None)
}

fn dispatch(window: &Window, name: &str, detail: Option<&JsValue>) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(detail);
    }
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}
