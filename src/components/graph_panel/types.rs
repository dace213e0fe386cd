use serde::{Deserialize, Serialize};

/// Request body of `POST /generate`, projected from the panel controls.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
	pub symbols: Vec<String>,
	pub period: u32,
	pub forbidden_length: u32,
	pub forbidden_words: Vec<String>,
	pub essentialize: bool,
	pub minimize: bool,
	pub node_height: f64,
	pub node_width: f64,
	pub spacing_y: f64,
	pub spacing_x: f64,
}

/// Request body of `POST /get_forbidden_words`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForbiddenWordsRequest {
	pub symbols: Vec<String>,
	pub length: u32,
}

/// The renderer reports the eigenvalue either as a JSON number or as a
/// numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EigenValue {
	Number(f64),
	Text(String),
}

impl EigenValue {
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			EigenValue::Number(v) => Some(*v),
			EigenValue::Text(s) => s.trim().parse().ok(),
		}
		.filter(|v: &f64| v.is_finite())
	}
}

/// Response body of `POST /generate`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphResult {
	#[serde(default)]
	pub image_url: Option<String>,
	#[serde(default)]
	pub eigen_value: Option<EigenValue>,
	#[serde(default)]
	pub error: Option<String>,
}
