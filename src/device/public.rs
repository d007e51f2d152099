//! Public IPv4 address as seen by an echo service.

use crate::calculator::parse_address;
use crate::config::{Settings, UNKNOWN};
use colored::Colorize;
use std::error::Error;

/// Fetch the public IP, or [`UNKNOWN`] when the service cannot be reached or
/// answers with something that is not an IPv4 address.
pub async fn public_ip_address(settings: &Settings) -> String {
    match fetch_public_ip(settings).await {
        Ok(ip) => ip,
        Err(e) => {
            log::warn!(
                "{failed} to get public ip from {url}: {e}",
                failed = "failed".on_red(),
                url = settings.public_ip_url
            );
            UNKNOWN.to_string()
        }
    }
}

async fn fetch_public_ip(settings: &Settings) -> Result<String, Box<dyn Error>> {
    log::debug!("GET {}", settings.public_ip_url);
    let client = reqwest::Client::builder()
        .timeout(settings.http_timeout)
        .build()?;
    let body = client
        .get(&settings.public_ip_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_public_ip(&body).ok_or_else(|| format!("Not an IPv4 address: '{}'", body.trim()).into())
}

fn parse_public_ip(body: &str) -> Option<String> {
    let body = body.trim();
    parse_address(body).ok().map(|ip| ip.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_public_ip() {
        assert_eq!(parse_public_ip("203.0.113.7\n").as_deref(), Some("203.0.113.7"));
        assert_eq!(parse_public_ip("<html>rate limited</html>"), None);
        assert_eq!(parse_public_ip(""), None);
    }

    #[tokio::test]
    #[ignore = "opens a TCP connection to 127.0.0.1:9"]
    async fn test_unreachable_service_is_unknown() {
        let settings = Settings {
            public_ip_url: "http://127.0.0.1:9/".to_string(),
            http_timeout: Duration::from_secs(1),
            ..Settings::default()
        };
        assert_eq!(public_ip_address(&settings).await, UNKNOWN);
    }
}
