use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use super::{SearchBackend, SearchError, parse_response};
use crate::types::SearchResult;

/// Timeout applied to each request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Queries the DataLab `/api/search` endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
	client: Client,
	endpoint: Url,
}

impl HttpSearchBackend {
	pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SearchError> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("datalab-search/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(SearchError::transport)?;
		Ok(Self { client, endpoint })
	}

	#[must_use]
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Full request url for `query`, with the text percent-encoded into `q`.
	#[must_use]
	pub fn request_url(&self, query: &str) -> String {
		let separator = if self.endpoint.query().is_some() { '&' } else { '?' };
		format!(
			"{}{separator}q={}",
			self.endpoint,
			urlencoding::encode(query)
		)
	}
}

impl SearchBackend for HttpSearchBackend {
	fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
		let url = self.request_url(query);
		debug!(%url, "requesting search endpoint");
		let response = self
			.client
			.get(&url)
			.header(ACCEPT, "application/json")
			.send()
			.map_err(SearchError::transport)?;

		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text().map_err(SearchError::transport)?;
		parse_response(&body)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::sync::mpsc;
	use std::thread;

	use super::super::FailureKind;
	use super::*;

	/// Serve exactly one canned response and report the request line.
	fn serve_once(status_line: &'static str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			let mut reader = BufReader::new(stream.try_clone().unwrap());
			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			loop {
				let mut header = String::new();
				if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
					break;
				}
			}
			let response = format!(
				"{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).unwrap();
			stream.flush().unwrap();
			tx.send(request_line.trim_end().to_string()).unwrap();
		});
		let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/api/search")).unwrap();
		(endpoint, rx)
	}

	#[test]
	fn request_url_escapes_the_query() {
		let endpoint = Url::parse("http://localhost:5000/api/search").unwrap();
		let backend = HttpSearchBackend::new(endpoint, DEFAULT_TIMEOUT).unwrap();
		assert_eq!(
			backend.request_url("análisis & agua"),
			"http://localhost:5000/api/search?q=an%C3%A1lisis%20%26%20agua"
		);
	}

	#[test]
	fn request_url_appends_to_existing_query_string() {
		let endpoint = Url::parse("http://localhost:5000/api/search?scope=all").unwrap();
		let backend = HttpSearchBackend::new(endpoint, DEFAULT_TIMEOUT).unwrap();
		assert!(backend.request_url("par").ends_with("?scope=all&q=par"));
	}

	#[test]
	fn successful_response_yields_results() {
		let (endpoint, requests) = serve_once(
			"HTTP/1.1 200 OK",
			r#"{"results":[{"title":"Pedido 001","url":"/pedidos/1"}]}"#,
		);
		let backend = HttpSearchBackend::new(endpoint, DEFAULT_TIMEOUT).unwrap();

		let results = backend.search("par").unwrap();

		assert_eq!(results, vec![SearchResult::new("Pedido 001", "/pedidos/1")]);
		assert_eq!(requests.recv().unwrap(), "GET /api/search?q=par HTTP/1.1");
	}

	#[test]
	fn server_error_is_reported_as_status() {
		let (endpoint, _requests) = serve_once(
			"HTTP/1.1 500 Internal Server Error",
			r#"{"error":"boom"}"#,
		);
		let backend = HttpSearchBackend::new(endpoint, DEFAULT_TIMEOUT).unwrap();

		let err = backend.search("par").unwrap_err();

		assert_eq!(err, SearchError::Status { status: 500 });
	}

	#[test]
	fn malformed_body_is_reported_as_parse_failure() {
		let (endpoint, _requests) = serve_once("HTTP/1.1 200 OK", "not json");
		let backend = HttpSearchBackend::new(endpoint, DEFAULT_TIMEOUT).unwrap();

		let err = backend.search("par").unwrap_err();

		assert!(matches!(err, SearchError::Parse { .. }));
	}

	#[test]
	fn unanswered_request_times_out_as_transport_failure() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		thread::spawn(move || {
			let (stream, _) = listener.accept().unwrap();
			thread::sleep(Duration::from_secs(2));
			drop(stream);
		});
		let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/api/search")).unwrap();
		let backend = HttpSearchBackend::new(endpoint, Duration::from_millis(100)).unwrap();

		let err = backend.search("par").unwrap_err();

		assert!(matches!(err, SearchError::Transport { .. }));
		assert_eq!(err.kind(), FailureKind::Transport);
	}

	#[test]
	fn refused_connection_is_a_transport_failure() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		drop(listener);
		let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/api/search")).unwrap();
		let backend = HttpSearchBackend::new(endpoint, Duration::from_secs(1)).unwrap();

		let err = backend.search("par").unwrap_err();

		assert!(matches!(err, SearchError::Transport { .. }));
	}
}
