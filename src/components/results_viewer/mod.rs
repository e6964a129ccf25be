//! Tabbed viewer over a query outcome: table, graph, enriched cards, and
//! raw JSON, plus the export buttons. All derived data comes from the pure
//! core; this module only wires signals to it.

mod enriched;
mod graph_view;
mod table;

use leptos::prelude::*;

use enriched::EnrichedTab;
use graph_view::GraphTab;
use table::TableTab;

use super::export::{js_text, save_text_file};
use super::feedback::Toasts;
use crate::query::{QueryOutcome, derive_graph, derive_view, to_csv};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
	Table,
	Graph,
	Enriched,
	Raw,
}

#[component]
pub fn ResultsViewer(outcome: QueryOutcome, query: RwSignal<String>) -> impl IntoView {
	let toasts = expect_context::<Toasts>();
	let results = StoredValue::new(outcome.results);
	let elapsed_ms = outcome.elapsed_ms;
	let total_rows = results.with_value(|r| r.rows.len());

	let tab = RwSignal::new(Tab::Table);
	let search = RwSignal::new(String::new());
	let page = RwSignal::new(1usize);

	let table = Memo::new(move |_| {
		results.with_value(|r| derive_view(r, &search.get(), page.get()))
	});
	let graph = Memo::new(move |_| results.with_value(derive_graph));
	let raw = Memo::new(move |_| results.with_value(|r| r.to_json()));

	let export_query = move |_| match save_text_file("consulta.sparql", "text/plain", &query.get())
	{
		Ok(()) => toasts.notify("Exportado", "La consulta SPARQL ha sido exportada."),
		Err(e) => toasts.error("Error", js_text(e)),
	};
	let export_csv = move |_| {
		let csv = results.with_value(to_csv);
		match save_text_file("resultados-sparql.csv", "text/csv", &csv) {
			Ok(()) => toasts.notify("Exportado", "Los resultados han sido exportados a CSV."),
			Err(e) => toasts.error("Error", js_text(e)),
		}
	};
	let export_json = move |_| {
		let json = results.with_value(|r| r.to_json());
		match save_text_file("resultados-sparql.json", "application/json", &json) {
			Ok(()) => toasts.notify("Exportado", "Los resultados han sido exportados a JSON."),
			Err(e) => toasts.error("Error", js_text(e)),
		}
	};

	view! {
		<div class="card results-card">
			<div class="card-header">
				<div>
					<span class="card-title">"Resultados de la Consulta"</span>
					<div class="results-meta">
						<span>{format!("{total_rows} resultados")}</span>
						<span>{format!("{elapsed_ms} ms")}</span>
					</div>
				</div>
				<div class="button-row">
					<button class="btn btn-outline" on:click=export_query>"Consulta"</button>
					<button class="btn btn-outline" on:click=export_csv>"CSV"</button>
					<button class="btn btn-outline" on:click=export_json>"JSON"</button>
				</div>
			</div>

			<div class="tab-list">
				<button
					class="tab"
					class:tab-active=move || tab.get() == Tab::Table
					on:click=move |_| tab.set(Tab::Table)
				>
					"Tabla"
				</button>
				<button
					class="tab"
					class:tab-active=move || tab.get() == Tab::Graph
					on:click=move |_| tab.set(Tab::Graph)
				>
					"Grafo"
				</button>
				<button
					class="tab"
					class:tab-active=move || tab.get() == Tab::Enriched
					on:click=move |_| tab.set(Tab::Enriched)
				>
					"Vista Enriquecida"
				</button>
				<button
					class="tab"
					class:tab-active=move || tab.get() == Tab::Raw
					on:click=move |_| tab.set(Tab::Raw)
				>
					"Datos Crudos"
				</button>
			</div>

			{move || match tab.get() {
				Tab::Table => {
					view! { <TableTab results=results search=search page=page view=table /> }
						.into_any()
				}
				Tab::Graph => view! { <GraphTab graph=graph.get() /> }.into_any(),
				Tab::Enriched => view! { <EnrichedTab results=results view=table /> }.into_any(),
				Tab::Raw => {
					view! {
						<pre class="raw-json">
							<code>{raw.get()}</code>
						</pre>
					}
						.into_any()
				}
			}}
		</div>
	}
}
