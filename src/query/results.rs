//! Typed model for SPARQL JSON result sets.
//!
//! The wire format (`application/sparql-results+json`) is loosely typed, so
//! everything is validated once at this boundary: values that do not conform
//! are skipped, never trusted downstream.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("response is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Kind tag of a single bound value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
	Uri,
	Literal,
	BlankNode,
}

/// One value bound to a variable in one solution row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundValue {
	pub kind: TermKind,
	pub value: String,
	/// Natural-language tag (`xml:lang`), literals only.
	pub lang: Option<String>,
	/// Datatype IRI for typed literals. Unused by the views but carried so
	/// the JSON export stays lossless.
	pub datatype: Option<String>,
}

impl BoundValue {
	pub fn uri(value: impl Into<String>) -> Self {
		Self {
			kind: TermKind::Uri,
			value: value.into(),
			lang: None,
			datatype: None,
		}
	}

	pub fn literal(value: impl Into<String>) -> Self {
		Self {
			kind: TermKind::Literal,
			value: value.into(),
			lang: None,
			datatype: None,
		}
	}

	pub fn literal_with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
		Self {
			lang: Some(lang.into()),
			..Self::literal(value)
		}
	}

	pub fn blank(value: impl Into<String>) -> Self {
		Self {
			kind: TermKind::BlankNode,
			value: value.into(),
			lang: None,
			datatype: None,
		}
	}

	/// Last path segment of the value, for compact display of long URIs.
	/// Falls back to the whole value when there is no separator or the
	/// value ends in one.
	pub fn short_form(&self) -> &str {
		match self.value.rsplit_once('/') {
			Some((_, tail)) if !tail.is_empty() => tail,
			_ => &self.value,
		}
	}
}

/// One solution: variable name to bound value. A variable missing from the
/// map is unbound in this row, which is distinct from an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Row {
	bindings: HashMap<String, BoundValue>,
}

impl Row {
	pub fn get(&self, variable: &str) -> Option<&BoundValue> {
		self.bindings.get(variable)
	}

	pub fn values(&self) -> impl Iterator<Item = &BoundValue> {
		self.bindings.values()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

impl FromIterator<(String, BoundValue)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, BoundValue)>>(iter: I) -> Self {
		Self {
			bindings: iter.into_iter().collect(),
		}
	}
}

/// An immutable query result: declared variables (column order) plus solution
/// rows. Replaced wholesale on each execution, never updated in place.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ResultSet {
	pub variables: Vec<String>,
	pub rows: Vec<Row>,
}

impl ResultSet {
	pub fn new(variables: Vec<String>, rows: Vec<Row>) -> Self {
		Self { variables, rows }
	}

	/// Serializes back into the original `head`/`results.bindings` shape,
	/// pretty-printed, with binding keys in declared variable order.
	pub fn to_json(&self) -> String {
		let bindings: Vec<Value> = self
			.rows
			.iter()
			.map(|row| {
				let mut obj = Map::new();
				for variable in &self.variables {
					if let Some(value) = row.get(variable) {
						obj.insert(variable.clone(), term_to_json(value));
					}
				}
				Value::Object(obj)
			})
			.collect();

		let doc = json!({
			"head": { "vars": self.variables.clone() },
			"results": { "bindings": bindings },
		});
		// json! output of plain data cannot fail to serialize
		serde_json::to_string_pretty(&doc).unwrap_or_default()
	}
}

fn term_to_json(value: &BoundValue) -> Value {
	let mut obj = Map::new();
	let kind = match value.kind {
		TermKind::Uri => "uri",
		TermKind::Literal => "literal",
		TermKind::BlankNode => "bnode",
	};
	obj.insert("type".into(), Value::String(kind.into()));
	obj.insert("value".into(), Value::String(value.value.clone()));
	if let Some(lang) = &value.lang {
		obj.insert("xml:lang".into(), Value::String(lang.clone()));
	}
	if let Some(datatype) = &value.datatype {
		obj.insert("datatype".into(), Value::String(datatype.clone()));
	}
	Value::Object(obj)
}

#[derive(Deserialize, Default)]
struct WireHead {
	#[serde(default)]
	vars: Vec<String>,
}

#[derive(Deserialize, Default)]
struct WireBindings {
	#[serde(default)]
	bindings: Vec<Value>,
}

#[derive(Deserialize)]
struct WireResults {
	#[serde(default)]
	head: WireHead,
	#[serde(default)]
	results: WireBindings,
}

/// Parses a SPARQL JSON results document. Only non-JSON input is an error;
/// rows and values that do not match the expected shape are dropped.
pub fn parse_results(body: &str) -> Result<ResultSet, ParseError> {
	let wire: WireResults = serde_json::from_str(body)?;
	let variables = wire.head.vars;

	let rows = wire
		.results
		.bindings
		.into_iter()
		.filter_map(|row| match row {
			Value::Object(obj) => Some(parse_row(obj, &variables)),
			_ => {
				log::warn!("skipping non-object binding row");
				None
			}
		})
		.collect();

	Ok(ResultSet::new(variables, rows))
}

fn parse_row(obj: Map<String, Value>, variables: &[String]) -> Row {
	obj.into_iter()
		.filter_map(|(variable, raw)| {
			if !variables.iter().any(|v| *v == variable) {
				log::warn!("skipping binding for undeclared variable ?{variable}");
				return None;
			}
			parse_term(&raw).map(|value| (variable, value))
		})
		.collect()
}

fn parse_term(raw: &Value) -> Option<BoundValue> {
	let obj = raw.as_object()?;
	let value = obj.get("value")?.as_str()?.to_string();
	let kind = match obj.get("type")?.as_str()? {
		"uri" => TermKind::Uri,
		"literal" | "typed-literal" => TermKind::Literal,
		"bnode" => TermKind::BlankNode,
		other => {
			log::warn!("skipping binding with unknown term type {other:?}");
			return None;
		}
	};
	Some(BoundValue {
		kind,
		value,
		lang: obj.get("xml:lang").and_then(Value::as_str).map(Into::into),
		datatype: obj.get("datatype").and_then(Value::as_str).map(Into::into),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_uris_literals_and_bnodes() {
		let body = r#"{
			"head": { "vars": ["item", "label", "node"] },
			"results": { "bindings": [
				{
					"item": { "type": "uri", "value": "http://www.wikidata.org/entity/Q736" },
					"label": { "type": "literal", "value": "Ecuador", "xml:lang": "es" },
					"node": { "type": "bnode", "value": "b0" }
				}
			] }
		}"#;

		let results = parse_results(body).unwrap();
		assert_eq!(results.variables, vec!["item", "label", "node"]);
		assert_eq!(results.rows.len(), 1);

		let row = &results.rows[0];
		assert_eq!(
			row.get("item"),
			Some(&BoundValue::uri("http://www.wikidata.org/entity/Q736"))
		);
		assert_eq!(
			row.get("label"),
			Some(&BoundValue::literal_with_lang("Ecuador", "es"))
		);
		assert_eq!(row.get("node"), Some(&BoundValue::blank("b0")));
	}

	#[test]
	fn carries_datatype_through() {
		let body = r#"{
			"head": { "vars": ["fecha"] },
			"results": { "bindings": [
				{ "fecha": { "type": "literal", "value": "1822-05-24",
					"datatype": "http://www.w3.org/2001/XMLSchema#date" } }
			] }
		}"#;
		let results = parse_results(body).unwrap();
		let value = results.rows[0].get("fecha").unwrap();
		assert_eq!(
			value.datatype.as_deref(),
			Some("http://www.w3.org/2001/XMLSchema#date")
		);
	}

	#[test]
	fn skips_malformed_rows_and_values() {
		let body = r#"{
			"head": { "vars": ["a"] },
			"results": { "bindings": [
				"not an object",
				{ "a": "not an object either" },
				{ "a": { "type": "uri" } },
				{ "a": { "value": "missing type" } },
				{ "a": { "type": "galaxy", "value": "x" } },
				{ "undeclared": { "type": "uri", "value": "http://x/y" } },
				{ "a": { "type": "literal", "value": "kept" } }
			] }
		}"#;

		let results = parse_results(body).unwrap();
		// the string row is dropped entirely, the rest survive with bad values removed
		assert_eq!(results.rows.len(), 6);
		let bound: Vec<_> = results.rows.iter().filter(|r| !r.is_empty()).collect();
		assert_eq!(bound.len(), 1);
		assert_eq!(bound[0].get("a"), Some(&BoundValue::literal("kept")));
	}

	#[test]
	fn missing_head_or_results_yields_empty_set() {
		let results = parse_results("{}").unwrap();
		assert!(results.variables.is_empty());
		assert!(results.rows.is_empty());
	}

	#[test]
	fn rejects_non_json() {
		assert!(parse_results("<html>not json</html>").is_err());
	}

	#[test]
	fn short_form_takes_last_segment() {
		assert_eq!(BoundValue::uri("http://example.org/a/b").short_form(), "b");
		assert_eq!(BoundValue::literal("Quito").short_form(), "Quito");
		// trailing separator falls back to the whole value
		assert_eq!(
			BoundValue::uri("http://example.org/").short_form(),
			"http://example.org/"
		);
	}

	#[test]
	fn json_export_round_trips() {
		let original = ResultSet::new(
			vec!["s".into(), "o".into()],
			vec![
				Row::from_iter([
					("s".to_string(), BoundValue::uri("http://x/a")),
					("o".to_string(), BoundValue::literal_with_lang("hola", "es")),
				]),
				Row::from_iter([("s".to_string(), BoundValue::uri("http://x/b"))]),
			],
		);

		let reparsed = parse_results(&original.to_json()).unwrap();
		assert_eq!(reparsed, original);
	}
}
