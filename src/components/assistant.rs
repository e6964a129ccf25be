//! Assistant panel: free-text description in, SPARQL template out. The
//! actual selection lives in [`crate::query::generate`]; this is just the
//! input card around it.

use leptos::prelude::*;

use super::feedback::Toasts;
use crate::query::generate::generate_query;

#[component]
pub fn Assistant(query: RwSignal<String>) -> impl IntoView {
	let toasts = expect_context::<Toasts>();
	let input = RwSignal::new(String::new());

	let generate = move || {
		let description = input.get();
		if description.trim().is_empty() {
			return;
		}
		query.set(generate_query(&description).to_string());
		input.set(String::new());
		toasts.notify(
			"Consulta generada",
			"Se ha generado una consulta SPARQL basada en tu descripción.",
		);
	};

	view! {
		<div class="card sidebar-card">
			<div class="card-header">
				<span class="card-title">"Asistente"</span>
			</div>
			<p class="card-hint">
				"Describe lo que quieres buscar y se generará una consulta SPARQL."
			</p>
			<input
				class="text-input"
				placeholder="Ej: Buscar festividades religiosas en Ecuador"
				prop:value=move || input.get()
				on:input=move |ev| input.set(event_target_value(&ev))
				on:keydown=move |ev| {
					if ev.key() == "Enter" {
						generate();
					}
				}
			/>
			<button
				class="btn btn-accent"
				disabled=move || input.get().trim().is_empty()
				on:click=move |_| generate()
			>
				"Generar Consulta"
			</button>
			<div class="card-examples">
				<strong>"Ejemplos:"</strong>
				<ul>
					<li>"\"Festividades en Quito\""</li>
					<li>"\"Platos típicos del Ecuador\""</li>
					<li>"\"Música tradicional andina\""</li>
				</ul>
			</div>
		</div>
	}
}
