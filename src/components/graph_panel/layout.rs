use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::fit::fit_within;

fn query(document: &Document, selector: &str) -> Option<Element> {
	document.query_selector(selector).ok().flatten()
}

/// Pin `.main` to the rendered height of `.side`. No-op if either is missing.
pub fn adjust_main_height() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let (Some(side), Some(main)) = (query(&document, ".side"), query(&document, ".main")) else {
		return;
	};
	let Ok(main) = main.dyn_into::<HtmlElement>() else {
		return;
	};
	let height = side.get_bounding_client_rect().height();
	let _ = main.style().set_property("height", &format!("{height}px"));
}

/// Size `image` to fit `wrapper` while keeping its aspect ratio. Returns
/// whether a size was applied.
pub fn fit_graph_image(wrapper: &Element, image: &HtmlImageElement) -> bool {
	let container = (wrapper.client_width() as f64, wrapper.client_height() as f64);
	let natural = (image.natural_width() as f64, image.natural_height() as f64);
	let Some((w, h)) = fit_within(container, natural) else {
		return false;
	};
	let style = image.style();
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	true
}

/// Fit an image that finished loading before anyone listened for `load`,
/// e.g. when its source was set to a cached or unchanged URL.
pub fn fit_if_complete(wrapper: &Element, image: &HtmlImageElement) -> bool {
	image.complete() && fit_graph_image(wrapper, image)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use super::*;
	use wasm_bindgen_futures::JsFuture;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	const WIDE_SVG: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='80' height='40'/%3E";

	fn document() -> Document {
		web_sys::window()
			.and_then(|w| w.document())
			.expect("document available")
	}

	fn mount(tag: &str, class: &str, style: &str) -> HtmlElement {
		let document = document();
		let el = document.create_element(tag).expect("create element");
		el.set_class_name(class);
		el.set_attribute("style", style).expect("set style");
		document
			.body()
			.expect("body available")
			.append_child(&el)
			.expect("append element");
		el.dyn_into().expect("html element")
	}

	async fn load(image: &HtmlImageElement, src: &str) {
		let promise = js_sys::Promise::new(&mut |resolve, _reject| {
			image.set_onload(Some(&resolve));
		});
		image.set_src(src);
		JsFuture::from(promise).await.expect("image load");
		image.set_onload(None);
	}

	#[wasm_bindgen_test]
	fn main_height_untouched_without_side_panel() {
		let main = mount("div", "main", "height: 10px");
		adjust_main_height();
		assert_eq!(main.style().get_property_value("height").unwrap(), "10px");

		let side = mount("div", "side", "height: 120px");
		adjust_main_height();
		assert_eq!(main.style().get_property_value("height").unwrap(), "120px");

		side.remove();
		main.remove();
	}

	#[wasm_bindgen_test]
	fn unloaded_image_is_left_alone() {
		let wrapper = mount("div", "image-wrapper", "width: 40px; height: 30px");
		let image: HtmlImageElement = document()
			.create_element("img")
			.expect("create img")
			.dyn_into()
			.expect("img element");
		wrapper.append_child(&image).expect("append img");

		assert!(!fit_if_complete(&wrapper, &image));
		assert_eq!(image.style().get_property_value("width").unwrap(), "");
		wrapper.remove();
	}

	#[wasm_bindgen_test(async)]
	async fn already_loaded_image_is_fitted_in_px() {
		let wrapper = mount("div", "image-wrapper", "width: 40px; height: 30px");
		let image: HtmlImageElement = document()
			.create_element("img")
			.expect("create img")
			.dyn_into()
			.expect("img element");
		wrapper.append_child(&image).expect("append img");
		load(&image, WIDE_SVG).await;

		// Same source again: no new load event, the image is already complete.
		image.set_src(WIDE_SVG);
		assert!(fit_if_complete(&wrapper, &image));
		let style = image.style();
		assert_eq!(style.get_property_value("width").unwrap(), "40px");
		assert_eq!(style.get_property_value("height").unwrap(), "20px");
		wrapper.remove();
	}
}
