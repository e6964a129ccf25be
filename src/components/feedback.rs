//! Loading, error, and toast widgets.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

const TOAST_MS: i32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub title: &'static str,
	pub message: String,
	pub is_error: bool,
}

/// Transient notification channel, provided as context from the app root.
/// Only the latest toast is shown; each one auto-dismisses after a few
/// seconds unless a newer one replaced it first.
#[derive(Clone, Copy)]
pub struct Toasts {
	current: RwSignal<Option<(u64, Toast)>>,
	counter: StoredValue<u64>,
}

impl Toasts {
	pub fn new() -> Self {
		Self {
			current: RwSignal::new(None),
			counter: StoredValue::new(0),
		}
	}

	pub fn notify(&self, title: &'static str, message: impl Into<String>) {
		self.show(Toast {
			title,
			message: message.into(),
			is_error: false,
		});
	}

	pub fn error(&self, title: &'static str, message: impl Into<String>) {
		self.show(Toast {
			title,
			message: message.into(),
			is_error: true,
		});
	}

	fn show(&self, toast: Toast) {
		let id = self.counter.with_value(|c| *c) + 1;
		self.counter.set_value(id);
		self.current.set(Some((id, toast)));
		schedule_dismiss(self.current, id);
	}

	pub fn current(&self) -> Option<Toast> {
		self.current.get().map(|(_, toast)| toast)
	}
}

impl Default for Toasts {
	fn default() -> Self {
		Self::new()
	}
}

fn schedule_dismiss(current: RwSignal<Option<(u64, Toast)>>, id: u64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(move || {
		current.update(|slot| {
			// a newer toast owns the slot now, leave it alone
			if slot.as_ref().is_some_and(|(current_id, _)| *current_id == id) {
				*slot = None;
			}
		});
	});
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), TOAST_MS);
}

/// Renders the active toast, if any. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
	let toasts = expect_context::<Toasts>();

	view! {
		{move || {
			toasts
				.current()
				.map(|toast| {
					view! {
						<div class="toast" class:toast-error=toast.is_error>
							<div class="toast-title">{toast.title}</div>
							<div class="toast-message">{toast.message}</div>
						</div>
					}
				})
		}}
	}
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
	view! {
		<div class="card loading-card">
			<div class="spinner"></div>
			<div class="loading-text">
				<div class="loading-title">"Ejecutando consulta..."</div>
				<div class="loading-subtitle">"Buscando datos en Wikidata"</div>
			</div>
		</div>
	}
}

#[component]
pub fn ErrorDisplay(error: String) -> impl IntoView {
	view! {
		<div class="card error-card">
			<div class="error-header">"Error en la consulta"</div>
			<p class="error-message">{error}</p>
			<div class="error-hints">
				<strong>"Sugerencias:"</strong>
				<ul>
					<li>"Verifica la sintaxis SPARQL"</li>
					<li>"Asegúrate de que los prefijos estén definidos correctamente"</li>
					<li>"Revisa que las URIs sean válidas"</li>
					<li>"Intenta simplificar la consulta"</li>
				</ul>
			</div>
		</div>
	}
}
