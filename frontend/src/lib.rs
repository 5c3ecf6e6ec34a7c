extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod cart;
pub mod connection;
pub mod controller;
pub mod event;
pub mod favorites;
pub mod lazy;
pub mod listing;
pub mod persisted;
pub mod render;
pub mod store;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use web_sys::Storage;

use crate::controller::Page;
use crate::persisted::LocalStorageFavorites;
use crate::store::Store;

pub const EVENTS_URL: &'static str = "http://localhost:3000/events";
pub const FAVORITES_LOCAL_STORAGE_KEY: &'static str = "favorites";

pub const EVENT_LIST_ID: &'static str = "event-list";
pub const CART_ITEMS_ID: &'static str = "cart-items";
pub const CART_TOTAL_ID: &'static str = "cart-total";
pub const LOCATION_FILTER_ID: &'static str = "location-filter";
pub const SORT_ID: &'static str = "sort";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn error(contents: &str);
}

/// Where the page fetches from, where it persists, and which elements it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub events_url: String,
    pub favorites_key: &'static str,
    pub event_list_id: &'static str,
    pub cart_items_id: &'static str,
    pub cart_total_id: &'static str,
    pub location_filter_id: &'static str,
    pub sort_id: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            events_url: EVENTS_URL.to_owned(),
            favorites_key: FAVORITES_LOCAL_STORAGE_KEY,
            event_list_id: EVENT_LIST_ID,
            cart_items_id: CART_ITEMS_ID,
            cart_total_id: CART_TOTAL_ID,
            location_filter_id: LOCATION_FILTER_ID,
            sort_id: SORT_ID,
        }
    }
}

pub fn get_local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[wasm_bindgen]
pub fn bootstrap() -> Result<(), JsValue> {
    start(PageConfig::default())?;
    Ok(())
}

#[wasm_bindgen]
pub fn bootstrap_with_endpoint(events_url: &str) -> Result<(), JsValue> {
    start(PageConfig {
        events_url: events_url.to_owned(),
        ..PageConfig::default()
    })?;
    Ok(())
}

/// Builds the page against the current document, wires its controls and
/// starts the initial fetch.
pub fn start(config: PageConfig) -> Result<Rc<Page>, JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let favorites = LocalStorageFavorites::from_window(config.favorites_key)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let store = Store::new(favorites);

    let page = Page::new(document, config, store)?;
    page.attach()?;
    page.update_cart_ui()?;
    page.load();

    Ok(page)
}
