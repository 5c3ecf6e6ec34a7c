use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlSelectElement};

use crate::event::EventId;
use crate::lazy::LazyImages;
use crate::listing::{ListingView, LocationFilter, SortKey};
use crate::persisted::LocalStorageFavorites;
use crate::render::{
    self, CartAction, ACTION_ATTRIBUTE, ADD_TO_CART_BUTTON_CLASS, FAVORITE_BUTTON_CLASS,
    ID_ATTRIBUTE,
};
use crate::store::Store;
use crate::{connection, error, log, PageConfig};

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

/// Owns the page state and the elements it renders into.
pub struct Page {
    config: PageConfig,
    document: Document,
    store: RefCell<Store<LocalStorageFavorites>>,
    view: RefCell<ListingView>,
    event_list: Element,
    cart_items: Element,
    cart_total: Element,
    location_filter: Element,
    sort: Element,
    lazy_images: LazyImages,
}

impl Page {
    pub fn new(
        document: Document,
        config: PageConfig,
        store: Store<LocalStorageFavorites>,
    ) -> Result<Rc<Self>, JsValue> {
        let page = Page {
            event_list: element_by_id(&document, config.event_list_id)?,
            cart_items: element_by_id(&document, config.cart_items_id)?,
            cart_total: element_by_id(&document, config.cart_total_id)?,
            location_filter: element_by_id(&document, config.location_filter_id)?,
            sort: element_by_id(&document, config.sort_id)?,
            lazy_images: LazyImages::new()?,
            store: RefCell::new(store),
            view: RefCell::new(ListingView::default()),
            config,
            document,
        };

        Ok(Rc::new(page))
    }

    /// Registers the listeners that live as long as the page.
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let page = self.clone();
        listen(&self.location_filter, "change", move |event| {
            if let Some(value) = select_value(&event) {
                page.set_location_filter(&value);
            }
        })?;

        let page = self.clone();
        listen(&self.sort, "change", move |event| {
            if let Some(value) = select_value(&event) {
                page.set_sort(&value);
            }
        })?;

        let page = self.clone();
        listen(&self.event_list, "click", move |event| {
            if let Some(button) = clicked_button(&event) {
                page.on_event_button(&button);
            }
        })?;

        let page = self.clone();
        listen(&self.cart_items, "click", move |event| {
            if let Some(button) = clicked_button(&event) {
                page.on_cart_button(&button);
            }
        })?;

        Ok(())
    }

    /// Fetches the events in the background and renders them once they arrive.
    pub fn load(self: &Rc<Self>) {
        let page = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            log(&format!("fetching events from {}", page.config.events_url));

            match connection::fetch_events(&page.config.events_url).await {
                Ok(events) => {
                    log(&format!("fetched {} events", events.len()));
                    page.show_events(events);
                }
                Err(err) => error(&format!("Error fetching events: {}", err)),
            }
        });
    }

    pub fn show_events(&self, events: Vec<crate::event::Event>) {
        self.store.borrow_mut().set_events(events);
        self.refresh_events();
    }

    pub fn set_location_filter(&self, value: &str) {
        self.view.borrow_mut().filter = LocationFilter::from_select_value(value);
        self.refresh_events();
    }

    pub fn set_sort(&self, value: &str) {
        self.view.borrow_mut().sort = SortKey::from_select_value(value);
        self.refresh_events();
    }

    pub fn toggle_favorite(&self, id: EventId) {
        let toggled = self.store.borrow_mut().toggle_favorite(id);
        if let Err(err) = toggled {
            error(&format!("could not save favorites: {}", err));
        }
        self.refresh_events();
    }

    pub fn add_to_cart(&self, id: EventId) {
        let added = self.store.borrow_mut().add_to_cart(id);
        match added {
            Ok(()) => self.refresh_cart(),
            Err(err) => error(&format!("could not add to cart: {}", err)),
        }
    }

    pub fn update_cart(&self, action: CartAction, id: EventId) {
        {
            let mut store = self.store.borrow_mut();
            match action {
                CartAction::Increase => store.increase_cart_item(id),
                CartAction::Decrease => store.decrease_cart_item(id),
                CartAction::Remove => store.remove_from_cart(id),
            }
        }
        self.refresh_cart();
    }

    pub fn display_events(&self) -> Result<(), JsValue> {
        let store = self.store.borrow();
        let view = self.view.borrow();
        let visible = store.listing(&view);

        self.lazy_images.reset();
        render::render_event_list(&self.document, &self.event_list, &visible, store.favorites())?;
        self.lazy_images.observe_within(&self.event_list)
    }

    pub fn update_cart_ui(&self) -> Result<(), JsValue> {
        let store = self.store.borrow();
        render::render_cart(&self.document, &self.cart_items, &self.cart_total, store.cart())
    }

    fn refresh_events(&self) {
        if let Err(err) = self.display_events() {
            error(&format!("could not render events: {:?}", err));
        }
    }

    fn refresh_cart(&self) {
        if let Err(err) = self.update_cart_ui() {
            error(&format!("could not render cart: {:?}", err));
        }
    }

    fn on_event_button(&self, button: &Element) {
        let Some(id) = button_id(button) else {
            return;
        };

        if has_class(button, FAVORITE_BUTTON_CLASS) {
            self.toggle_favorite(id);
        } else if has_class(button, ADD_TO_CART_BUTTON_CLASS) {
            self.add_to_cart(id);
        }
    }

    fn on_cart_button(&self, button: &Element) {
        let action = button
            .get_attribute(ACTION_ATTRIBUTE)
            .and_then(|action| CartAction::parse(&action));

        if let (Some(action), Some(id)) = (action, button_id(button)) {
            self.update_cart(action, id);
        }
    }
}

fn listen<F>(target: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

fn clicked_button(event: &Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
}

fn has_class(element: &Element, class: &str) -> bool {
    element
        .class_name()
        .split_whitespace()
        .any(|candidate| candidate == class)
}

fn button_id(button: &Element) -> Option<EventId> {
    button
        .get_attribute(ID_ATTRIBUTE)
        .and_then(|id| id.trim().parse().ok())
}
