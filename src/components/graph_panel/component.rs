use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use super::api;
use super::export::FORMATS;
use super::layout::{adjust_main_height, fit_graph_image, fit_if_complete};
use super::state::{Command, PanelEvent, PanelState, SYMBOL_ALPHABET, Slider};

/// Owns the panel state and runs the commands it produces.
#[derive(Clone, Copy)]
struct Coordinator {
	state: RwSignal<PanelState>,
}

impl Coordinator {
	fn dispatch(self, event: PanelEvent) {
		let commands = self
			.state
			.try_update(|s| s.apply(event))
			.unwrap_or_default();
		for command in commands {
			self.run(command);
		}
	}

	fn run(self, command: Command) {
		match command {
			Command::Generate(ticket, form) => spawn_local(async move {
				let result = api::generate(&form).await;
				self.dispatch(PanelEvent::GraphLoaded { ticket, result });
			}),
			Command::FetchForbiddenWords(ticket, request) => spawn_local(async move {
				let result = api::forbidden_words(&request).await;
				self.dispatch(PanelEvent::ForbiddenWordsLoaded { ticket, result });
			}),
			Command::Alert(message) => {
				if let Some(window) = web_sys::window() {
					let _ = window.alert_with_message(&message);
				}
			}
			Command::Navigate(url) => {
				let Some(window) = web_sys::window() else {
					return;
				};
				if let Err(err) = window.location().set_href(&url) {
					warn!("navigation to {url} failed: {err:?}");
				}
			}
		}
	}
}

fn selected_values(ev: &ev::Event) -> Vec<String> {
	selected_option_values(&event_target::<HtmlSelectElement>(ev))
}

fn selected_option_values(select: &HtmlSelectElement) -> Vec<String> {
	let options = select.selected_options();
	(0..options.length())
		.filter_map(|i| options.item(i))
		.filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
		.map(|opt| opt.value())
		.collect()
}

/// `<option>`s of a multi-select whose candidates are replaced wholesale.
#[component]
fn WordOptions(
	#[prop(into)] options: Signal<Vec<String>>,
	#[prop(into)] selected: Signal<Vec<String>>,
) -> impl IntoView {
	view! {
		<For
			each=move || options.get()
			key=|word| word.clone()
			children=move |word: String| {
				let value = word.clone();
				let is_selected = word.clone();
				view! {
					<option
						value=value
						prop:selected=move || selected.with(|s| s.contains(&is_selected))
					>
						{word}
					</option>
				}
			}
		/>
	}
}

#[component]
fn SliderControl(slider: Slider, coord: Coordinator) -> impl IntoView {
	let state = coord.state;
	let (min, max, step) = slider.range();

	view! {
		<section class="control">
			<label
				id=slider.label_id()
				data-value=move || state.with(|s| s.slider(slider).label.value().to_string())
			>
				{move || state.with(|s| s.slider(slider).label.render())}
			</label>
			<input
				type="range"
				id=slider.id()
				aria-label=state.with_untracked(|s| s.slider(slider).label.prefix().to_string())
				min=min.to_string()
				max=max.to_string()
				step=step.to_string()
				prop:value=move || state.with(|s| s.slider(slider).value.to_string())
				on:input=move |ev| {
					coord.dispatch(PanelEvent::SliderInput(slider, event_target_value(&ev)))
				}
				on:change=move |_| coord.dispatch(PanelEvent::SliderCommitted(slider))
			/>
		</section>
	}
}

/// Control panel with the rendered graph beside it.
#[component]
pub fn GraphPanel() -> impl IntoView {
	let coord = Coordinator {
		state: RwSignal::new(PanelState::default()),
	};
	let state = coord.state;
	let wrapper_ref = NodeRef::<leptos::html::Div>::new();
	let image_ref = NodeRef::<leptos::html::Img>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let fit_image = move || {
		if let (Some(wrapper), Some(image)) = (wrapper_ref.get(), image_ref.get()) {
			let _ = fit_graph_image(&wrapper, &image);
		}
	};

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		adjust_main_height();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			adjust_main_height();
			fit_image();
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		coord.dispatch(PanelEvent::Init);
	});

	let image_src = Memo::new(move |_| state.with(|s| s.image_src.clone()));

	// A cached or unchanged source fires no load event.
	Effect::new(move |_| {
		if image_src.with(Option::is_none) {
			return;
		}
		let (Some(wrapper), Some(image)) = (wrapper_ref.get_untracked(), image_ref.get_untracked())
		else {
			return;
		};
		fit_if_complete(&wrapper, &image);
	});

	let symbol_options = SYMBOL_ALPHABET
		.iter()
		.map(|symbol| {
			let value = symbol.to_string();
			let selected = value.clone();
			view! {
				<option
					value=value
					prop:selected=move || state.with(|s| s.symbols.contains(&selected))
				>
					{*symbol}
				</option>
			}
		})
		.collect_view();

	let format_boxes = FORMATS
		.iter()
		.map(|format| {
			let format = *format;
			view! {
				<label class="format">
					<input
						type="checkbox"
						id=format
						on:change=move |ev| {
							coord.dispatch(PanelEvent::FormatToggled {
								format: format.to_string(),
								checked: event_target_checked(&ev),
							})
						}
					/>
					{format}
				</label>
			}
		})
		.collect_view();

	view! {
		<div class="graph-panel">
			<aside class="side">
				<section class="control">
					<label id="symbol-count-label">
						{move || state.with(|s| s.symbol_count.render())}
					</label>
					<select
						id="symbols"
						multiple=true
						on:change=move |ev| {
							coord.dispatch(PanelEvent::SymbolsSelected(selected_values(&ev)))
						}
					>
						{symbol_options}
					</select>
				</section>

				{Slider::ALL
					.into_iter()
					.map(|slider| view! { <SliderControl slider=slider coord=coord /> })
					.collect_view()}

				<section class="control">
					<label id="forbidden-count-label">
						{move || state.with(|s| s.forbidden_count.render())}
					</label>
					<select
						id="forbidden-words"
						multiple=true
						on:change=move |ev| {
							coord.dispatch(PanelEvent::ForbiddenWordsSelected(selected_values(&ev)))
						}
					>
						<WordOptions
							options=Signal::derive(move || state.with(|s| s.forbidden_options.clone()))
							selected=Signal::derive(move || state.with(|s| s.forbidden_words.clone()))
						/>
					</select>
				</section>

				<section class="control toggles">
					<label>
						<input
							type="checkbox"
							id="essentialize"
							prop:checked=move || state.with(|s| s.essentialize)
							on:change=move |ev| {
								coord.dispatch(PanelEvent::EssentializeToggled(event_target_checked(&ev)))
							}
						/>
						"Essentialize"
					</label>
					<label>
						<input
							type="checkbox"
							id="minimize"
							prop:checked=move || state.with(|s| s.minimize)
							prop:disabled=move || !state.with(|s| s.minimize_enabled())
							on:change=move |ev| {
								coord.dispatch(PanelEvent::MinimizeToggled(event_target_checked(&ev)))
							}
						/>
						"Minimize"
					</label>
				</section>

				<section class="control export">
					{format_boxes}
					<button id="save-btn" on:click=move |_| coord.dispatch(PanelEvent::SaveRequested)>
						"Save"
					</button>
				</section>
			</aside>

			<main class="main">
				<div class="image-wrapper" node_ref=wrapper_ref>
					<img
						id="graph-image"
						node_ref=image_ref
						alt="Generated graph"
						src=move || image_src.get()
						on:load=move |_| fit_image()
					/>
				</div>
				<p
					id="eigenvalue"
					data-value=move || state.with(|s| s.eigenvalue.value().to_string())
				>
					{move || state.with(|s| s.eigenvalue.render())}
				</p>
			</main>
		</div>
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use super::*;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn words(ws: &[&str]) -> Vec<String> {
		ws.iter().map(|w| w.to_string()).collect()
	}

	#[wasm_bindgen_test]
	fn word_options_render_values_and_selection() {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.expect("document available");
		let select: HtmlSelectElement = document
			.create_element("select")
			.expect("create select")
			.dyn_into()
			.expect("select element");
		select.set_multiple(true);
		document
			.body()
			.expect("body available")
			.append_child(&select)
			.expect("append select");

		let options = RwSignal::new(words(&["00", "01", "10", "11"]));
		let selected = RwSignal::new(words(&["00"]));
		let _handle = leptos::mount::mount_to(select.clone().into(), move || {
			view! { <WordOptions options=options selected=selected /> }
		});

		assert_eq!(select.length(), 4);
		assert_eq!(select.value(), "00");
		assert_eq!(selected_option_values(&select), words(&["00"]));
		select.remove();
	}
}
