// src/net.rs
// Single GET against the presence page. One bounded timeout, no retry.
// The body is decoded per the response's declared charset, with lossy UTF-8
// replacement for anything undecodable (reqwest's `text()` semantics).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::error::ScrapeError;
use crate::params;

pub fn fetch_html(url: &str) -> Result<String, ScrapeError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(params::TIMEOUT_SECS))
        .build()?;

    let response = client
        .get(url)
        .header(USER_AGENT, params::USER_AGENT)
        .send()?
        .error_for_status()?;

    Ok(response.text()?)
}
