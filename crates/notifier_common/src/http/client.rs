use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Creates a new HTTP client.
///
/// # Arguments
///
/// * `timeout` - Overall request timeout. `None` leaves requests unbounded, which is
///   what the live-changes endpoint needs: it scrapes an external site and routinely
///   takes tens of seconds.
/// * `follow_redirects` - Whether the client should follow redirects
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(
    timeout: Option<Duration>,
    follow_redirects: bool,
) -> Result<Client, ReqwestError> {
    let mut builder = Client::builder().redirect(if follow_redirects {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    });
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
