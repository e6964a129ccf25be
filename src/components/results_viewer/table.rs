//! Table tab: search box, the paginated grid, and the page controls.

use leptos::prelude::*;

use crate::query::{BoundValue, ResultSet, TableView, TermKind};

/// One table/card cell. URIs render as external links showing their last
/// path segment; unbound variables render as a muted dash.
#[component]
pub fn BindingCell(value: Option<BoundValue>) -> impl IntoView {
	match value {
		None => view! { <span class="unbound">"-"</span> }.into_any(),
		Some(value) => {
			let lang = value.lang.clone();
			let inner = if value.kind == TermKind::Uri {
				let label = value.short_form().to_string();
				view! {
					<a
						href=value.value.clone()
						target="_blank"
						rel="noopener noreferrer"
						class="uri-link"
					>
						{label}
					</a>
				}
					.into_any()
			} else {
				view! { <span>{value.value.clone()}</span> }.into_any()
			};
			view! {
				<span class="cell">
					{inner}
					{lang.map(|lang| view! { <span class="lang-badge">{lang}</span> })}
				</span>
			}
				.into_any()
		}
	}
}

#[component]
pub fn TableTab(
	results: StoredValue<ResultSet>,
	search: RwSignal<String>,
	page: RwSignal<usize>,
	view: Memo<TableView>,
) -> impl IntoView {
	let variables = results.with_value(|r| r.variables.clone());
	let total = results.with_value(|r| r.rows.len());
	let header_vars = variables.clone();

	let prev = move |_| {
		page.update(|p| *p = p.saturating_sub(1).max(1));
	};
	let next = move |_| {
		let last = view.with_untracked(|v| v.total_pages);
		page.update(|p| *p = (*p + 1).min(last));
	};

	view! {
		<div class="table-tab">
			<div class="table-toolbar">
				<input
					class="text-input search-input"
					placeholder="Buscar en resultados..."
					prop:value=move || search.get()
					on:input=move |ev| {
						search.set(event_target_value(&ev));
						page.set(1);
					}
				/>
				<span class="badge">
					{move || view.with(|v| format!("{} de {}", v.total_filtered, total))}
				</span>
			</div>

			<table class="results-table">
				<thead>
					<tr>
						{header_vars.into_iter().map(|variable| view! { <th>{variable}</th> }).collect_view()}
					</tr>
				</thead>
				<tbody>
					{move || {
						let vars = variables.clone();
						view
							.get()
							.rows
							.into_iter()
							.map(|row| {
								view! {
									<tr>
										{vars
											.iter()
											.map(|variable| {
												view! {
													<td>
														<BindingCell value=row.get(variable).cloned() />
													</td>
												}
											})
											.collect_view()}
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>

			{move || {
				(view.with(|v| v.total_pages) > 1)
					.then(|| {
						view! {
							<div class="pagination">
								<button
									class="btn btn-outline"
									disabled=move || view.with(|v| v.page <= 1)
									on:click=prev
								>
									"Anterior"
								</button>
								<span class="page-indicator">
									{move || view.with(|v| format!("Página {} de {}", v.page, v.total_pages))}
								</span>
								<button
									class="btn btn-outline"
									disabled=move || view.with(|v| v.page >= v.total_pages)
									on:click=next
								>
									"Siguiente"
								</button>
							</div>
						}
					})
			}}
		</div>
	}
}
