use crate::cart::Cart;
use crate::event::{Event, EventId};
use crate::favorites::{Favorites, FavoritesStorage, StorageError};
use crate::listing::ListingView;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("no event with id {0}")]
    UnknownEvent(EventId),
}

/// Everything the page knows: fetched events, the cart and the favorites.
///
/// Mutations are synchronous; the caller re-renders afterwards.
pub struct Store<S: FavoritesStorage> {
    events: Vec<Event>,
    cart: Cart,
    favorites: Favorites,
    storage: S,
}

impl<S: FavoritesStorage> Store<S> {
    pub fn new(storage: S) -> Self {
        let favorites = Favorites::from_ids(storage.load());

        Store {
            events: Vec::new(),
            cart: Cart::default(),
            favorites,
            storage,
        }
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn listing(&self, view: &ListingView) -> Vec<&Event> {
        view.apply(&self.events)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: EventId) -> bool {
        self.favorites.contains(id)
    }

    /// Flips membership and persists the whole set. On a failed write the
    /// in-memory set keeps the new state.
    pub fn toggle_favorite(&mut self, id: EventId) -> Result<bool, StorageError> {
        let is_favorite = self.favorites.toggle(id);
        self.storage.save(self.favorites.ids())?;
        Ok(is_favorite)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, id: EventId) -> Result<(), StoreError> {
        let event = self
            .events
            .iter()
            .find(|event| event.id == id)
            .ok_or(StoreError::UnknownEvent(id))?;
        self.cart.add(event);
        Ok(())
    }

    pub fn increase_cart_item(&mut self, id: EventId) {
        self.cart.increase(id);
    }

    pub fn decrease_cart_item(&mut self, id: EventId) {
        self.cart.decrease(id);
    }

    pub fn remove_from_cart(&mut self, id: EventId) {
        self.cart.remove(id);
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }
}
