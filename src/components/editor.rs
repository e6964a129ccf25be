//! SPARQL editor card: text area, execute, and the format/copy/share tools.

use leptos::prelude::*;

use super::export::copy_text;
use super::feedback::Toasts;
use crate::query::share::encode_share_token;

/// Naive reflow: collapses whitespace, then breaks after braces and triple
/// terminators. A `.` only counts as a terminator when followed by a space,
/// so URIs and decimals survive.
pub fn format_query(query: &str) -> String {
	let collapsed = query.split_whitespace().collect::<Vec<_>>().join(" ");
	let mut out = String::with_capacity(collapsed.len() + 32);
	let mut chars = collapsed.chars().peekable();

	while let Some(ch) = chars.next() {
		match ch {
			'{' => {
				while out.ends_with(' ') {
					out.pop();
				}
				out.push_str(" {\n  ");
				if chars.peek() == Some(&' ') {
					chars.next();
				}
			}
			'}' => {
				while out.ends_with(' ') || out.ends_with('\n') {
					out.pop();
				}
				out.push_str("\n}\n");
				if chars.peek() == Some(&' ') {
					chars.next();
				}
			}
			'.' if chars.peek().is_none_or(|c| *c == ' ') => {
				while out.ends_with(' ') {
					out.pop();
				}
				out.push_str(" .\n  ");
				if chars.peek() == Some(&' ') {
					chars.next();
				}
			}
			_ => out.push(ch),
		}
	}

	out.trim().to_string()
}

#[component]
pub fn SparqlEditor(
	query: RwSignal<String>,
	#[prop(into)] loading: Signal<bool>,
	#[prop(into)] on_execute: Callback<String>,
) -> impl IntoView {
	let toasts = expect_context::<Toasts>();

	let format = move |_| {
		query.update(|q| *q = format_query(q));
		toasts.notify("Consulta formateada", "La consulta SPARQL ha sido formateada.");
	};

	let copy = move |_| {
		copy_text(
			query.get(),
			toasts,
			"Copiado",
			"La consulta ha sido copiada al portapapeles.",
		);
	};

	let share = move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let origin = window.location().origin().unwrap_or_default();
		let url = format!("{origin}/?q={}", encode_share_token(&query.get()));
		copy_text(
			url,
			toasts,
			"Enlace copiado",
			"El enlace para compartir ha sido copiado al portapapeles.",
		);
	};

	let execute = move |_| {
		on_execute.run(query.get());
	};

	view! {
		<div class="card editor-card">
			<div class="card-header">
				<span class="card-title">"Editor SPARQL"</span>
				<div class="button-row">
					<button class="btn btn-outline" on:click=format>"Formatear"</button>
					<button class="btn btn-outline" on:click=copy>"Copiar"</button>
					<button class="btn btn-outline" on:click=share>"Compartir"</button>
				</div>
			</div>

			<textarea
				class="editor-area"
				placeholder="Escribe tu consulta SPARQL aquí..."
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			></textarea>

			<div class="editor-footer">
				<span class="char-count">{move || format!("{} caracteres", query.get().chars().count())}</span>
				<button
					class="btn btn-primary"
					disabled=move || loading.get() || query.get().trim().is_empty()
					on:click=execute
				>
					{move || if loading.get() { "Ejecutando..." } else { "Ejecutar Consulta" }}
				</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::format_query;

	#[test]
	fn reflows_braces_and_terminators() {
		let formatted = format_query("SELECT ?s   WHERE { ?s ?p ?o . ?o ?q ?r }");
		assert_eq!(formatted, "SELECT ?s WHERE {\n  ?s ?p ?o .\n  ?o ?q ?r\n}");
	}

	#[test]
	fn leaves_uris_and_decimals_alone() {
		let formatted = format_query("SELECT ?s WHERE { ?s <http://query.wikidata.org/p> 1.5 }");
		assert!(formatted.contains("<http://query.wikidata.org/p> 1.5"));
	}

	#[test]
	fn closing_brace_swallows_the_dangling_indent() {
		assert_eq!(format_query("{ ?s ?p ?o . }"), "{\n  ?s ?p ?o .\n}");
	}
}
