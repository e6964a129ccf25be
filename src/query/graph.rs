//! Projects a result set into a small entity graph for the graph tab.
//!
//! One pass in row-major order: every distinct bound value becomes a node
//! (identity is the raw value string, first occurrence wins the label), and
//! every unordered pair of distinct values co-occurring in a row becomes an
//! edge, deduplicated across the whole result set. Layout is a fixed circle
//! in derivation order, so the same result set always renders identically.

use std::collections::HashSet;
use std::f64::consts::PI;

use super::results::{ResultSet, TermKind};

pub const LABEL_MAX_CHARS: usize = 20;

const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 200.0;
const LAYOUT_RADIUS: f64 = 150.0;

/// Rendering kind. Everything that is not a URI draws as a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Uri,
	Literal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Identity key: the full original value string.
	pub key: String,
	pub label: String,
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	pub from: String,
	pub to: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GraphModel {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

fn display_label(value: &str) -> String {
	let segment = match value.rsplit_once('/') {
		Some((_, tail)) if !tail.is_empty() => tail,
		_ => value,
	};
	if segment.chars().count() > LABEL_MAX_CHARS {
		let truncated: String = segment.chars().take(LABEL_MAX_CHARS).collect();
		format!("{truncated}...")
	} else {
		segment.to_string()
	}
}

/// Derives nodes and edges from a result set and lays the nodes out on a
/// circle. Pure and deterministic: same input, same output.
pub fn derive_graph(results: &ResultSet) -> GraphModel {
	let mut nodes: Vec<GraphNode> = Vec::new();
	let mut seen: HashSet<String> = HashSet::new();
	let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
	let mut edges: Vec<GraphEdge> = Vec::new();

	for row in &results.rows {
		// bound values in declared variable order, duplicates preserved
		let bound: Vec<_> = results
			.variables
			.iter()
			.filter_map(|variable| row.get(variable))
			.collect();

		for value in &bound {
			if seen.insert(value.value.clone()) {
				nodes.push(GraphNode {
					key: value.value.clone(),
					label: display_label(&value.value),
					kind: if value.kind == TermKind::Uri {
						NodeKind::Uri
					} else {
						NodeKind::Literal
					},
					x: 0.0,
					y: 0.0,
				});
			}
		}

		for i in 0..bound.len() {
			for j in (i + 1)..bound.len() {
				let (a, b) = (&bound[i].value, &bound[j].value);
				if a == b {
					continue;
				}
				let pair = if a <= b {
					(a.clone(), b.clone())
				} else {
					(b.clone(), a.clone())
				};
				if seen_pairs.insert(pair) {
					edges.push(GraphEdge {
						from: a.clone(),
						to: b.clone(),
					});
				}
			}
		}
	}

	let n = nodes.len();
	for (i, node) in nodes.iter_mut().enumerate() {
		let angle = (i as f64 / n as f64) * 2.0 * PI;
		node.x = CENTER_X + LAYOUT_RADIUS * angle.cos();
		node.y = CENTER_Y + LAYOUT_RADIUS * angle.sin();
	}

	GraphModel { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::results::{BoundValue, Row};

	fn row(pairs: &[(&str, BoundValue)]) -> Row {
		pairs
			.iter()
			.map(|(v, b)| (v.to_string(), b.clone()))
			.collect()
	}

	fn festival_results() -> ResultSet {
		ResultSet::new(
			vec!["festival".into(), "lugar".into()],
			vec![
				row(&[
					("festival", BoundValue::uri("http://x/FiestaDeLaMadre")),
					("lugar", BoundValue::uri("http://x/Loja")),
				]),
				row(&[
					("festival", BoundValue::uri("http://x/FiestaDeLaMadre")),
					("lugar", BoundValue::uri("http://x/Loja")),
				]),
				row(&[
					("festival", BoundValue::uri("http://x/Inti_Raymi")),
					("lugar", BoundValue::uri("http://x/Loja")),
				]),
			],
		)
	}

	#[test]
	fn one_node_per_distinct_value() {
		let graph = derive_graph(&festival_results());
		assert_eq!(graph.nodes.len(), 3);
		let keys: Vec<_> = graph.nodes.iter().map(|n| n.key.as_str()).collect();
		assert_eq!(
			keys,
			vec![
				"http://x/FiestaDeLaMadre",
				"http://x/Loja",
				"http://x/Inti_Raymi"
			]
		);
	}

	#[test]
	fn edges_dedup_by_unordered_pair() {
		// the same pair in both orders across rows is still one edge
		let results = ResultSet::new(
			vec!["a".into(), "b".into()],
			vec![
				row(&[
					("a", BoundValue::literal("x")),
					("b", BoundValue::literal("y")),
				]),
				row(&[
					("a", BoundValue::literal("y")),
					("b", BoundValue::literal("x")),
				]),
			],
		);
		let graph = derive_graph(&results);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(
			graph.edges[0],
			GraphEdge {
				from: "x".into(),
				to: "y".into()
			}
		);
	}

	#[test]
	fn no_self_edges() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into()],
			vec![row(&[
				("a", BoundValue::literal("mismo")),
				("b", BoundValue::literal("mismo")),
			])],
		);
		let graph = derive_graph(&results);
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn all_variable_pairs_in_a_row_connect() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into(), "c".into()],
			vec![row(&[
				("a", BoundValue::literal("1")),
				("b", BoundValue::literal("2")),
				("c", BoundValue::literal("3")),
			])],
		);
		// C(3,2) candidate pairs, all distinct
		assert_eq!(derive_graph(&results).edges.len(), 3);
	}

	#[test]
	fn unbound_variables_are_skipped() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into(), "c".into()],
			vec![row(&[
				("a", BoundValue::literal("solo")),
				("c", BoundValue::literal("par")),
			])],
		);
		let graph = derive_graph(&results);
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.edges.len(), 1);
	}

	#[test]
	fn layout_is_deterministic_and_circular() {
		let first = derive_graph(&festival_results());
		let second = derive_graph(&festival_results());
		assert_eq!(first, second);

		for node in &first.nodes {
			let (dx, dy) = (node.x - CENTER_X, node.y - CENTER_Y);
			let r = (dx * dx + dy * dy).sqrt();
			assert!((r - LAYOUT_RADIUS).abs() < 1e-9);
		}
		// first node sits at angle zero
		assert!((first.nodes[0].x - (CENTER_X + LAYOUT_RADIUS)).abs() < 1e-9);
		assert!((first.nodes[0].y - CENTER_Y).abs() < 1e-9);
	}

	#[test]
	fn labels_truncate_and_keep_last_segment() {
		let results = ResultSet::new(
			vec!["a".into()],
			vec![row(&[(
				"a",
				BoundValue::uri("http://x/EsteEsUnNombreDeEntidadMuyLargo"),
			)])],
		);
		let graph = derive_graph(&results);
		assert_eq!(graph.nodes[0].label, "EsteEsUnNombreDeEnti...");
		assert_eq!(graph.nodes[0].key, "http://x/EsteEsUnNombreDeEntidadMuyLargo");
	}

	#[test]
	fn first_occurrence_wins_and_blank_nodes_render_as_literals() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into()],
			vec![row(&[
				("a", BoundValue::blank("b0")),
				("b", BoundValue::uri("http://x/Quito")),
			])],
		);
		let graph = derive_graph(&results);
		assert_eq!(graph.nodes[0].kind, NodeKind::Literal);
		assert_eq!(graph.nodes[1].kind, NodeKind::Uri);
	}

	#[test]
	fn empty_result_set_is_an_empty_graph() {
		let graph = derive_graph(&ResultSet::default());
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
	}
}
