use leptos::prelude::*;

/// 404 fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"Esta página no existe."</p>
			<a href="/">"Volver al inicio"</a>
		</div>
	}
}
