/// Scale `natural` into `container`, preserving aspect ratio.
///
/// Returns `None` when the natural size is unknown (zero or non-finite),
/// in which case the image keeps its current size.
pub fn fit_within(container: (f64, f64), natural: (f64, f64)) -> Option<(f64, f64)> {
	let (cw, ch) = container;
	let (nw, nh) = natural;
	if !(nw.is_finite() && nh.is_finite()) || nw <= 0.0 || nh <= 0.0 {
		return None;
	}
	let scale = (cw / nw).min(ch / nh);
	if !scale.is_finite() {
		return None;
	}
	Some((nw * scale, nh * scale))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wide_image_is_bound_by_width() {
		assert_eq!(fit_within((400.0, 300.0), (800.0, 400.0)), Some((400.0, 200.0)));
	}

	#[test]
	fn tall_image_is_bound_by_height() {
		assert_eq!(fit_within((400.0, 300.0), (300.0, 600.0)), Some((150.0, 300.0)));
	}

	#[test]
	fn small_image_is_scaled_up() {
		assert_eq!(fit_within((400.0, 300.0), (100.0, 100.0)), Some((300.0, 300.0)));
	}

	#[test]
	fn unknown_natural_size_is_skipped() {
		assert_eq!(fit_within((400.0, 300.0), (0.0, 400.0)), None);
		assert_eq!(fit_within((400.0, 300.0), (800.0, 0.0)), None);
		assert_eq!(fit_within((400.0, 300.0), (f64::NAN, 10.0)), None);
	}
}
