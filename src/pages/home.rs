use leptos::prelude::*;

use crate::components::graph_panel::GraphPanel;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<header class="page-header">
					<h1>"Periodic Finite Type Graph"</h1>
					<p class="subtitle">
						"Pick an alphabet and forbidden words; the graph is regenerated on every change."
					</p>
				</header>
				<GraphPanel />
			</div>
		</ErrorBoundary>
	}
}
