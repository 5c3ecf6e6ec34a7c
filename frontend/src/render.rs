use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::cart::Cart;
use crate::event::{CartItem, Event};
use crate::favorites::Favorites;
use crate::lazy::LAZY_SRC_ATTRIBUTE;

pub const FAVORITE_BUTTON_CLASS: &str = "favorite-btn";
pub const ADD_TO_CART_BUTTON_CLASS: &str = "add-to-cart-btn";
pub const ID_ATTRIBUTE: &str = "data-id";
pub const ACTION_ATTRIBUTE: &str = "data-action";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
}

impl CartAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CartAction::Increase => "increase",
            CartAction::Decrease => "decrease",
            CartAction::Remove => "remove",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "increase" => Some(CartAction::Increase),
            "decrease" => Some(CartAction::Decrease),
            "remove" => Some(CartAction::Remove),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CartAction::Increase => "+",
            CartAction::Decrease => "-",
            CartAction::Remove => "Remove",
        }
    }
}

// whole amounts print without a fraction, like `${price}` in a browser
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_owned();
    }
    format!("{}", amount)
}

pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from Favorites"
    } else {
        "Add to Favorites"
    }
}

pub fn cart_heading(item: &CartItem) -> String {
    format!("{} ({})", item.event.title, item.quantity)
}

pub fn total_label(total: f64) -> String {
    format!("Total: ${}", format_amount(total))
}

fn append_text(
    document: &Document,
    parent: &Element,
    tag: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_text_content(Some(text));
    parent.append_child(&element)?;
    Ok(element)
}

fn event_card(document: &Document, event: &Event, is_favorite: bool) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("event-card");

    let image = document.create_element("img")?;
    image.set_attribute(LAZY_SRC_ATTRIBUTE, &event.image_url)?;
    image.set_attribute("alt", &event.title)?;
    card.append_child(&image)?;

    append_text(document, &card, "h2", &event.title)?;
    append_text(document, &card, "p", &format!("Price: ${}", format_amount(event.price)))?;
    append_text(document, &card, "p", &format!("Date: {}", event.date))?;
    append_text(document, &card, "p", &format!("Location: {}", event.location))?;

    let id = event.id.to_string();

    let favorite = append_text(document, &card, "button", favorite_label(is_favorite))?;
    favorite.set_class_name(FAVORITE_BUTTON_CLASS);
    favorite.set_attribute(ID_ATTRIBUTE, &id)?;

    let add_to_cart = append_text(document, &card, "button", "Add to Cart")?;
    add_to_cart.set_class_name(ADD_TO_CART_BUTTON_CLASS);
    add_to_cart.set_attribute(ID_ATTRIBUTE, &id)?;

    Ok(card)
}

/// Replaces the contents of `container` with one card per event.
pub fn render_event_list(
    document: &Document,
    container: &Element,
    events: &[&Event],
    favorites: &Favorites,
) -> Result<(), JsValue> {
    container.set_inner_html("");

    for event in events {
        let card = event_card(document, event, favorites.contains(event.id))?;
        container.append_child(&card)?;
    }
    Ok(())
}

fn cart_row(document: &Document, item: &CartItem) -> Result<Element, JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("cart-item");

    append_text(document, &row, "h3", &cart_heading(item))?;
    append_text(document, &row, "p", &format!("Price: ${}", format_amount(item.subtotal())))?;

    let id = item.id().to_string();
    for action in [CartAction::Increase, CartAction::Decrease, CartAction::Remove] {
        let button = append_text(document, &row, "button", action.label())?;
        button.set_attribute(ACTION_ATTRIBUTE, action.as_str())?;
        button.set_attribute(ID_ATTRIBUTE, &id)?;
    }

    Ok(row)
}

/// Rebuilds the cart rows and the total line.
pub fn render_cart(
    document: &Document,
    items_container: &Element,
    total: &Element,
    cart: &Cart,
) -> Result<(), JsValue> {
    items_container.set_inner_html("");

    for item in cart.items() {
        let row = cart_row(document, item)?;
        items_container.append_child(&row)?;
    }

    total.set_text_content(Some(&total_label(cart.total())));
    Ok(())
}
