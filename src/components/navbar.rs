//! Top navigation bar: brand, anchors, theme and language toggles.

use leptos::prelude::*;

use crate::Theme;

#[component]
pub fn Navbar() -> impl IntoView {
	let theme = expect_context::<Theme>();
	let language = RwSignal::new("ES");

	let toggle_theme = move |_| {
		theme
			.0
			.update(|t| *t = if *t == "light" { "dark" } else { "light" });
	};

	let toggle_language = move |_| {
		language.update(|l| *l = if *l == "ES" { "EN" } else { "ES" });
	};

	view! {
		<nav class="navbar">
			<div class="navbar-brand">
				<span class="navbar-logo">"CC"</span>
				<span class="navbar-name">"CulturaConecta"</span>
			</div>
			<div class="navbar-links">
				<a href="#explorar">"Explorar"</a>
				<a href="#consultas">"Consultas sugeridas"</a>
				<a href="#acerca">"Acerca de"</a>
			</div>
			<div class="navbar-controls">
				<button class="btn btn-ghost" on:click=toggle_language>
					{move || language.get()}
				</button>
				<button class="btn btn-ghost" on:click=toggle_theme>
					{move || if theme.0.get() == "light" { "☾" } else { "☀" }}
				</button>
			</div>
		</nav>
	}
}
