use crate::event::{CartItem, Event, EventId};

/// Line items keyed by event id, in the order they were first added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, id: EventId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn item_mut(&mut self, id: EventId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn add(&mut self, event: &Event) {
        if let Some(item) = self.item_mut(event.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::new(event.clone()));
        }
    }

    pub fn increase(&mut self, id: EventId) {
        if let Some(item) = self.item_mut(id) {
            item.quantity += 1;
        }
    }

    // quantity never drops below 1; the line goes away instead
    pub fn decrease(&mut self, id: EventId) {
        let Some(item) = self.item_mut(id) else {
            return;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.remove(id);
        }
    }

    pub fn remove(&mut self, id: EventId) {
        self.items.retain(|item| item.id() != id);
    }

    // starts from +0.0 so an empty cart never totals -0
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + item.subtotal())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
