pub type EventId = u64;

/// A listing as served by the events endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub price: f64,
    pub date: String,
    pub location: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub event: Event,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(event: Event) -> Self {
        CartItem { event, quantity: 1 }
    }

    pub fn id(&self) -> EventId {
        self.event.id
    }

    pub fn subtotal(&self) -> f64 {
        self.event.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoint_payload() {
        let body = r#"[{"id":1,"title":"Jazz Night","price":25,"date":"2024-06-01","location":"NY, Blue Note","imageUrl":"img/jazz.jpg"}]"#;
        let events: Vec<Event> = serde_json::from_str(body).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].price, 25.0);
        assert_eq!(events[0].image_url, "img/jazz.jpg");
    }

    #[test]
    fn cart_item_serializes_flat() {
        let event = Event {
            id: 3,
            title: "Expo".into(),
            price: 4.5,
            date: "2024-01-01".into(),
            location: "LA".into(),
            image_url: "expo.png".into(),
        };
        let mut item = CartItem::new(event);
        item.quantity = 2;

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["imageUrl"], "expo.png");
        assert_eq!(value["quantity"], 2);
        assert_eq!(item.subtotal(), 9.0);
    }
}
