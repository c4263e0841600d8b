//! Quote fetching from the remote price service.
//!
//! One blocking GET per run, bounded by a timeout and never retried; the external
//! scheduler retries by running the binary again.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use ticker_common::config::USER_AGENT;
use ticker_common::{Quote, Result, TickerError};

/// Source of the current market quotes.
pub trait QuoteSource {
    /// Returns the full quote list, or `Network`/`MalformedResponse` on failure.
    fn fetch(&self) -> Result<Vec<Quote>>;
}

/// Fetches `[{symbol, price}]` from an HTTP endpoint.
pub struct HttpQuoteSource {
    url: String,
    timeout: Duration,
}

impl HttpQuoteSource {
    /// Creates a source for `url` with the given request timeout.
    pub fn new(url: &str, timeout: Duration) -> Self {
        HttpQuoteSource {
            url: String::from(url),
            timeout,
        }
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TickerError::Network(e.to_string()))?;

        debug!("GET {}", self.url);
        let response = client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| TickerError::Network(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| TickerError::Network(e.to_string()))?;

        parse_quotes(&body)
    }
}

/// Decodes a response body into quotes.
pub fn parse_quotes(body: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(body).map_err(|e| TickerError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves a single canned HTTP response and hands back the raw request.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/v3/ticker/price", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (url, handle)
    }

    fn source(url: &str) -> HttpQuoteSource {
        HttpQuoteSource::new(url, Duration::from_secs(5))
    }

    #[test]
    fn fetches_full_market_list() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"symbol":"ETHBTC","price":"0.05120000"},{"symbol":"BTCUSDT","price":"64000.01000000"}]"#,
        );
        let quotes = source(&url).fetch().unwrap();
        assert_eq!(
            quotes,
            vec![
                Quote::new("ETHBTC", "0.05120000"),
                Quote::new("BTCUSDT", "64000.01000000")
            ]
        );

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /api/v3/ticker/price "));
        assert!(request.to_ascii_lowercase().contains("user-agent: cryptoticker/1.0"));
    }

    #[test]
    fn non_success_status_is_network_error() {
        let (url, server) = serve_once("500 Internal Server Error", r#"{"code":-1}"#);
        assert!(matches!(source(&url).fetch(), Err(TickerError::Network(_))));
        server.join().unwrap();
    }

    #[test]
    fn unexpected_body_is_malformed() {
        let (url, server) = serve_once("200 OK", r#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert!(matches!(
            source(&url).fetch(),
            Err(TickerError::MalformedResponse(_))
        ));
        server.join().unwrap();
    }

    #[test]
    fn refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        assert!(matches!(source(&url).fetch(), Err(TickerError::Network(_))));
    }

    #[test]
    fn parse_quotes_accepts_empty_array() {
        assert!(parse_quotes("[]").unwrap().is_empty());
        assert!(matches!(
            parse_quotes("[{\"symbol\":\"BTCUSDT\"}]"),
            Err(TickerError::MalformedResponse(_))
        ));
    }
}
