//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;
pub mod query;

// Top-Level pages
use crate::components::feedback::{ToastHost, Toasts};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Light/dark selector, written to `data-theme` on the root element.
#[derive(Clone, Copy)]
pub struct Theme(pub RwSignal<&'static str>);

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let theme = Theme(RwSignal::new("light"));
	provide_context(theme);
	provide_context(Toasts::new());

	view! {
		<Html attr:lang="es" attr:dir="ltr" attr:data-theme=move || theme.0.get() />

		// sets the document title
		<Title text="CulturaConecta - Explorador SPARQL" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
		<ToastHost />
	}
}
