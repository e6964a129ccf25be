//! Filterable, paginated view over a result set, plus the pure export
//! serializers. Everything here is recomputed in full from the immutable
//! [`ResultSet`]; there is no incremental state.

use super::results::{ResultSet, Row};

pub const PAGE_SIZE: usize = 20;

/// Display-ready slice of a result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
	pub rows: Vec<Row>,
	/// 1-based, already clamped into `[1, total_pages]`.
	pub page: usize,
	pub total_pages: usize,
	pub total_filtered: usize,
}

fn row_matches(row: &Row, needle: &str) -> bool {
	row.values().any(|v| v.value.to_lowercase().contains(needle))
}

/// Filters by case-insensitive substring and slices out the requested page.
/// An empty or whitespace-only term matches every row. A page past the end
/// clamps to the last page rather than coming back empty.
pub fn derive_view(results: &ResultSet, term: &str, page: usize) -> TableView {
	let needle = term.trim().to_lowercase();
	let filtered: Vec<&Row> = results
		.rows
		.iter()
		.filter(|row| needle.is_empty() || row_matches(row, &needle))
		.collect();

	let total_filtered = filtered.len();
	let total_pages = total_filtered.div_ceil(PAGE_SIZE).max(1);
	let page = page.clamp(1, total_pages);

	let rows = filtered
		.into_iter()
		.skip((page - 1) * PAGE_SIZE)
		.take(PAGE_SIZE)
		.cloned()
		.collect();

	TableView {
		rows,
		page,
		total_pages,
		total_filtered,
	}
}

fn csv_cell(value: &str) -> String {
	format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV over the full, unfiltered result set. Header row is the variable
/// names; every data cell is quoted with inner quotes doubled; unbound
/// variables become empty cells.
pub fn to_csv(results: &ResultSet) -> String {
	let mut lines = vec![results.variables.join(",")];
	for row in &results.rows {
		let cells: Vec<String> = results
			.variables
			.iter()
			.map(|variable| csv_cell(row.get(variable).map(|v| v.value.as_str()).unwrap_or("")))
			.collect();
		lines.push(cells.join(","));
	}
	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::results::BoundValue;

	fn city_row(name: &str) -> Row {
		Row::from_iter([("x".to_string(), BoundValue::literal(name))])
	}

	fn cities(names: &[&str]) -> ResultSet {
		ResultSet::new(
			vec!["x".into()],
			names.iter().map(|n| city_row(n)).collect(),
		)
	}

	#[test]
	fn filter_is_case_insensitive_and_keeps_order() {
		let results = cities(&["Quito", "Loja", "Quito Norte"]);
		let view = derive_view(&results, "quito", 1);
		assert_eq!(view.total_filtered, 2);
		assert_eq!(view.rows, vec![city_row("Quito"), city_row("Quito Norte")]);
	}

	#[test]
	fn whitespace_term_matches_everything() {
		let results = cities(&["Quito", "Loja"]);
		assert_eq!(derive_view(&results, "   ", 1).total_filtered, 2);
		assert_eq!(derive_view(&results, "", 1).total_filtered, 2);
	}

	#[test]
	fn pagination_clamps_out_of_range_pages() {
		let names: Vec<String> = (0..45).map(|i| format!("ciudad {i}")).collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let results = cities(&refs);

		let page3 = derive_view(&results, "", 3);
		assert_eq!(page3.total_pages, 3);
		assert_eq!(page3.rows.len(), 5);

		// page 4 does not exist; it must clamp to page 3's content
		let page4 = derive_view(&results, "", 4);
		assert_eq!(page4.page, 3);
		assert_eq!(page4.rows, page3.rows);
	}

	#[test]
	fn empty_result_set_still_has_one_page() {
		let view = derive_view(&ResultSet::default(), "", 1);
		assert_eq!(view.total_pages, 1);
		assert_eq!(view.page, 1);
		assert!(view.rows.is_empty());
	}

	#[test]
	fn filter_change_reclamps_page() {
		let names: Vec<String> = (0..45).map(|i| format!("item {i}")).collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let results = cities(&refs);

		// "item 1" matches item 1, 10..19: 11 rows, a single page
		let view = derive_view(&results, "item 1", 3);
		assert_eq!(view.total_filtered, 11);
		assert_eq!(view.page, 1);
	}

	#[test]
	fn csv_quotes_commas_and_doubles_quotes() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into()],
			vec![Row::from_iter([
				("a".to_string(), BoundValue::literal("hola, mundo")),
				("b".to_string(), BoundValue::literal("di \"hola\"")),
			])],
		);
		assert_eq!(
			to_csv(&results),
			"a,b\n\"hola, mundo\",\"di \"\"hola\"\"\""
		);
	}

	#[test]
	fn csv_leaves_unbound_cells_empty() {
		let results = ResultSet::new(
			vec!["a".into(), "b".into()],
			vec![Row::from_iter([(
				"b".to_string(),
				BoundValue::literal("solo"),
			)])],
		);
		assert_eq!(to_csv(&results), "a,b\n\"\",\"solo\"");
	}

	#[test]
	fn empty_export_is_just_the_header() {
		let results = ResultSet::new(vec!["a".into(), "b".into()], vec![]);
		assert_eq!(to_csv(&results), "a,b");
	}
}
