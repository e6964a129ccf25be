use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::assistant::Assistant;
use crate::components::editor::SparqlEditor;
use crate::components::feedback::{ErrorDisplay, LoadingSpinner};
use crate::components::navbar::Navbar;
use crate::components::results_viewer::ResultsViewer;
use crate::components::suggested::SuggestedQueries;
use crate::query::QueryOutcome;
use crate::query::client;
use crate::query::share::decode_share_token;

/// Main page: editor and results in the center, assistant and suggested
/// queries in the sidebar.
#[component]
pub fn Home() -> impl IntoView {
	let query = RwSignal::new(String::new());
	let outcome = RwSignal::new(None::<QueryOutcome>);
	let loading = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);

	// restore a shared query from ?q=<token>
	let params = use_query_map();
	Effect::new(move |_| {
		if let Some(token) = params.with(|p| p.get("q")) {
			if query.get_untracked().is_empty() {
				if let Some(restored) = decode_share_token(&token) {
					query.set(restored);
				} else {
					log::warn!("ignoring unreadable share token");
				}
			}
		}
	});

	let run = move |text: String| {
		if text.trim().is_empty() {
			return;
		}
		loading.set(true);
		error.set(None);
		outcome.set(None);
		spawn_local(async move {
			match client::execute(&text).await {
				Ok(result) => outcome.set(Some(result)),
				Err(e) => {
					log::warn!("query failed: {e}");
					error.set(Some(e.to_string()));
				}
			}
			loading.set(false);
		});
	};
	let on_execute = Callback::new(run);

	view! {
		<Navbar />
		<main class="container">
			<div class="layout">
				<div class="main-column">
					<SparqlEditor query=query loading=loading on_execute=on_execute />
					{move || loading.get().then(|| view! { <LoadingSpinner /> })}
					{move || error.get().map(|e| view! { <ErrorDisplay error=e /> })}
					{move || {
						outcome.get().map(|o| view! { <ResultsViewer outcome=o query=query /> })
					}}
				</div>
				<aside class="sidebar">
					<Assistant query=query />
					<SuggestedQueries query=query />
				</aside>
			</div>
		</main>
	}
}
