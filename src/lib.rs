extern crate env_logger;
extern crate log;
extern crate reqwest;
extern crate serde_json;

use std::io::Write;

use log::debug;
use reqwest::StatusCode;

pub const POSTS_URL: &'static str = "https://jsonplaceholder.typicode.com/posts";

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Network response was not ok ({0})")]
    Status(StatusCode),
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Picks the URL from the first command-line argument, if any.
pub fn url_from_args(mut args: impl Iterator<Item = String>) -> String {
    args.nth(1).unwrap_or_else(|| POSTS_URL.to_owned())
}

/// GETs `url` and decodes the body as JSON. Non-success statuses are errors.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
) -> Result<serde_json::Value, FetchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json().await?)
}
