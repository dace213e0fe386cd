//! Control panel for periodic finite type graphs.
//!
//! The panel collects the alphabet, period, forbidden words and layout
//! spacing, posts them to the renderer, and shows the returned image and
//! eigenvalue.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Route `log` output to the browser console and report panics there.
pub fn init_logging() {
	let level = if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	};
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("logging at {level}");
}

/// Root component: the panel at `/`, a not-found page elsewhere.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Title text="Periodic Finite Type Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Interactive renderer for periodic finite type shift graphs" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
