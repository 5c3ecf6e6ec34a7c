use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Select value meaning "no location filter".
pub const ALL_LOCATIONS: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Containing(String),
}

impl LocationFilter {
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_LOCATIONS {
            LocationFilter::All
        } else {
            LocationFilter::Containing(value.to_owned())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Containing(needle) => event.location.contains(needle.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Date,
}

impl SortKey {
    /// `None` for anything other than `price` or `date`, which keeps fetch order.
    pub fn from_select_value(value: &str) -> Option<Self> {
        match value {
            "price" => Some(SortKey::Price),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }

    pub fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Date => match (parse_event_date(&a.date), parse_event_date(&b.date)) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS]` and plain `YYYY-MM-DD`.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// The active location filter and sort mode. Both stay applied across
/// re-renders, so changing the sort or toggling a favorite keeps the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingView {
    pub filter: LocationFilter,
    pub sort: Option<SortKey>,
}

impl ListingView {
    /// Filters, then stably sorts, leaving `events` untouched.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut visible: Vec<&Event> = events
            .iter()
            .filter(|event| self.filter.matches(event))
            .collect();

        if let Some(key) = self.sort {
            visible.sort_by(|a, b| key.compare(a, b));
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u64, price: f64, date: &str, location: &str) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            price,
            date: date.into(),
            location: location.into(),
            image_url: String::new(),
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, 30.0, "2024-07-04", "NY, Madison Square"),
            event(2, 10.0, "2024-03-15", "LA, The Forum"),
            event(3, 20.0, "2024-05-01T19:30:00", "Brooklyn NY"),
            event(4, 10.0, "not a date", "Chicago"),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<u64> {
        events.iter().map(|event| event.id).collect()
    }

    #[test]
    fn filter_by_location_substring() {
        let events = sample();
        let view = ListingView {
            filter: LocationFilter::from_select_value("NY"),
            sort: None,
        };

        let visible = view.apply(&events);
        assert_eq!(ids(&visible), vec![1, 3]);
        assert!(visible.iter().all(|event| event.location.contains("NY")));
    }

    #[test]
    fn all_returns_full_list_unchanged() {
        let events = sample();
        let view = ListingView {
            filter: LocationFilter::from_select_value(ALL_LOCATIONS),
            sort: None,
        };

        assert_eq!(ids(&view.apply(&events)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_by_price_is_non_decreasing_and_stable() {
        let events = sample();
        let view = ListingView {
            filter: LocationFilter::All,
            sort: SortKey::from_select_value("price"),
        };

        let visible = view.apply(&events);
        assert!(visible.windows(2).all(|pair| pair[0].price <= pair[1].price));
        // 2 and 4 tie at 10.0
        assert_eq!(ids(&visible), vec![2, 4, 3, 1]);
    }

    #[test]
    fn sort_by_date_puts_unparsable_last() {
        let events = sample();
        let view = ListingView {
            filter: LocationFilter::All,
            sort: Some(SortKey::Date),
        };

        let visible = view.apply(&events);
        assert_eq!(ids(&visible), vec![2, 3, 1, 4]);

        let parsed: Vec<_> = visible[..3]
            .iter()
            .map(|event| parse_event_date(&event.date).unwrap())
            .collect();
        assert!(parsed.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn unknown_sort_value_keeps_fetch_order() {
        assert_eq!(SortKey::from_select_value("popularity"), None);

        let events = sample();
        let view = ListingView {
            filter: LocationFilter::from_select_value("NY"),
            sort: SortKey::from_select_value(""),
        };
        assert_eq!(ids(&view.apply(&events)), vec![1, 3]);
    }

    #[test]
    fn parses_common_date_shapes() {
        assert!(parse_event_date("2024-05-01").is_some());
        assert!(parse_event_date("2024-05-01T10:00").is_some());
        assert!(parse_event_date("2024-05-01T10:00:00Z").is_some());
        assert!(parse_event_date("May 1st").is_none());
    }
}
