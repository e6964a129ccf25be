//! Enriched tab: one card per row, listing only the bound variables.

use leptos::prelude::*;

use super::table::BindingCell;
use crate::query::{ResultSet, TableView};

#[component]
pub fn EnrichedTab(results: StoredValue<ResultSet>, view: Memo<TableView>) -> impl IntoView {
	let variables = results.with_value(|r| r.variables.clone());

	view! {
		<div class="enriched-grid">
			{move || {
				let vars = variables.clone();
				view
					.get()
					.rows
					.into_iter()
					.map(|row| {
						view! {
							<div class="card enriched-card">
								{vars
									.iter()
									.filter_map(|variable| {
										row.get(variable)
											.cloned()
											.map(|value| {
												view! {
													<div class="enriched-field">
														<div class="enriched-variable">{variable.clone()}</div>
														<BindingCell value=Some(value) />
													</div>
												}
											})
									})
									.collect_view()}
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}
