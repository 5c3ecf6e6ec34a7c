extern crate event_listing;
extern crate tokio;

use log::{error, info};

#[tokio::main]
async fn main() {
    event_listing::init_logger();
    let url = event_listing::url_from_args(std::env::args());
    let client = reqwest::Client::new();

    match event_listing::fetch_json(&client, &url).await {
        Ok(data) => info!("Data fetched successfully: {}", data),
        Err(err) => error!("Error fetching data: {}", err),
    }
}
