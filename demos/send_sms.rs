use std::env;

use simple_azure_sms::{Acs, SmsMessage};

// Before run this demo, export ACS_ENDPOINT, ACS_ACCESS_KEY, ACS_FROM and ACS_TO.
#[tokio::main]
async fn main() {
    env_logger::init();

    let endpoint = env::var("ACS_ENDPOINT").expect("ACS_ENDPOINT");
    let access_key = env::var("ACS_ACCESS_KEY").expect("ACS_ACCESS_KEY");
    let from = env::var("ACS_FROM").expect("ACS_FROM");
    let to = env::var("ACS_TO").expect("ACS_TO");

    let acs = Acs::new(endpoint, access_key);
    let sms = SmsMessage::new(from, to, "Hello from Rust via ACS REST");
    let req = acs.send_sms_request(&sms).unwrap();

    let res = reqwest::Client::new().execute(req).await.unwrap();
    println!("Status: {}", res.status());
    println!("Response: {}", res.text().await.unwrap());
}
