use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::event::Event;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("no window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Request(String),
    #[error("Failed to fetch events data (status {0})")]
    Status(u16),
    #[error("response body was not text")]
    Body,
    #[error("could not parse events: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    fn request(err: JsValue) -> Self {
        FetchError::Request(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

pub fn parse_events(body: &str) -> Result<Vec<Event>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// GETs `url` and decodes the body as a list of events.
pub async fn fetch_events(url: &str) -> Result<Vec<Event>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(FetchError::request)?
        .dyn_into()
        .map_err(FetchError::request)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(FetchError::request)?)
        .await
        .map_err(FetchError::request)?;
    let body = text.as_string().ok_or(FetchError::Body)?;

    parse_events(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_is_a_parse_error() {
        assert!(matches!(
            parse_events("{\"events\": []}"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(parse_events("[{\"id\": 1}]"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn empty_array_is_no_events() {
        assert!(parse_events("[]").unwrap().is_empty());
    }
}
