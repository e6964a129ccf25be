//! Fetches query results from the public Wikidata SPARQL endpoint.
//!
//! This is the only asynchronous boundary in the app: the query text goes
//! out as an opaque string and a fully materialized [`ResultSet`] comes
//! back. Everything downstream is synchronous and pure.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::results::{ParseError, ResultSet, parse_results};

pub const ENDPOINT: &str = "https://query.wikidata.org/sparql";

#[derive(Debug, Error)]
pub enum QueryError {
	#[error("Error {status}: {status_text}")]
	Http { status: u16, status_text: String },
	#[error("network error: {0}")]
	Network(String),
	#[error("browser API unavailable: {0}")]
	Browser(String),
	#[error("invalid response: {0}")]
	Parse(#[from] ParseError),
}

fn js_detail(value: JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}

/// A successful execution: the parsed result set plus wall-clock duration.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOutcome {
	pub results: ResultSet,
	pub elapsed_ms: u32,
}

/// Runs a SPARQL query against [`ENDPOINT`] and parses the JSON results.
pub async fn execute(query: &str) -> Result<QueryOutcome, QueryError> {
	let started = js_sys::Date::now();

	let encoded = String::from(js_sys::encode_uri_component(query));
	let url = format!("{ENDPOINT}?query={encoded}&format=json");

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::Cors);

	let request = Request::new_with_str_and_init(&url, &opts)
		.map_err(|e| QueryError::Browser(js_detail(e)))?;
	request
		.headers()
		.set("Accept", "application/sparql-results+json")
		.map_err(|e| QueryError::Browser(js_detail(e)))?;

	let window = web_sys::window().ok_or_else(|| QueryError::Browser("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| QueryError::Network(js_detail(e)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| QueryError::Browser("fetch did not yield a Response".into()))?;

	if !response.ok() {
		return Err(QueryError::Http {
			status: response.status(),
			status_text: response.status_text(),
		});
	}

	let body = JsFuture::from(
		response
			.text()
			.map_err(|e| QueryError::Browser(js_detail(e)))?,
	)
	.await
	.map_err(|e| QueryError::Network(js_detail(e)))?;
	let body = body
		.as_string()
		.ok_or_else(|| QueryError::Browser("response body is not text".into()))?;

	let results = parse_results(&body)?;
	log::info!(
		"query returned {} rows over {} variables",
		results.rows.len(),
		results.variables.len()
	);

	Ok(QueryOutcome {
		results,
		elapsed_ms: (js_sys::Date::now() - started).max(0.0) as u32,
	})
}
