/// Separator between a label's static prefix and its value.
pub const SEPARATOR: char = ':';

/// Placeholder shown when a value is unavailable.
pub const PLACEHOLDER: &str = "-";

/// A label rendered as `"<prefix> : <value>"`.
///
/// The prefix and value are kept apart so that updating the value never has
/// to re-parse previously rendered text.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledValue {
	prefix: String,
	value: String,
}

impl LabeledValue {
	pub fn new(prefix: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			value: value.into(),
		}
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Machine-readable value, exposed as `data-value`.
	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	pub fn render(&self) -> String {
		format!("{} {} {}", self.prefix, SEPARATOR, self.value)
	}
}

/// Format `value` with exactly `decimals` fractional digits.
pub fn format_fixed(value: f64, decimals: usize) -> String {
	format!("{:.*}", decimals, value)
}
