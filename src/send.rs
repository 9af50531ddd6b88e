use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::model::SleepReport;
use crate::validate::validate;

/// Fixed path of the bot ingest endpoint
pub const INGEST_PATH: &str = "/ingest-sleep";

/// Hard cap on the whole round trip; no retry on expiry
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client with the fixed request timeout
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(Error::Http)
}

/// Resolves the full ingest URL for a host, tolerating a trailing slash
pub fn ingest_url(host: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), INGEST_PATH)
}

/// Success line printed to stdout after a 200 response
pub fn success_line(report: &SleepReport) -> String {
    format!(
        "✓ Successfully sent sleep data: {} - {} minutes for device {}",
        report.date, report.sleep_minutes, report.device_id
    )
}

/// Sends one sleep report to the bot ingest endpoint.
///
/// The report is validated first, so a bad date or out-of-range minutes
/// never produces an outbound request. Exactly one POST is attempted; any
/// status other than 200 is a failure, redirects and client errors included.
pub async fn send_report(
    client: &Client,
    host: &str,
    token: &str,
    report: &SleepReport,
) -> Result<()> {
    validate(report)?;

    let url = ingest_url(host);

    debug!("Sending POST to: {}", url);
    debug!("Query params: token={}", token);
    debug!("Payload: {}", serde_json::to_string_pretty(report)?);

    let response = client
        .post(&url)
        .query(&[("token", token)])
        .header(header::CONTENT_TYPE, "application/json")
        .json(report)
        .send()
        .await
        .map_err(|e| classify_send_error(e, &url))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    debug!("Response status: {}", status);
    debug!("Response body: {}", body);

    if status != StatusCode::OK {
        return Err(Error::Status { status, body });
    }

    println!("{}", success_line(report));

    Ok(())
}

fn classify_send_error(err: reqwest::Error, url: &str) -> Error {
    if err.is_connect() {
        debug!("Connection failure detail: {}", err);
        Error::Connection {
            url: url.to_string(),
        }
    } else if err.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
            secs: REQUEST_TIMEOUT.as_secs(),
        }
    } else {
        Error::Http(err)
    }
}
