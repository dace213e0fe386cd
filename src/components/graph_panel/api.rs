//! HTTP collaborators: the graph renderer and the forbidden-word lookup.

use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{ForbiddenWordsRequest, FormState, GraphResult};

pub const GENERATE_PATH: &str = "/generate";
pub const FORBIDDEN_WORDS_PATH: &str = "/get_forbidden_words";

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(#[from] gloo_net::Error),
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
	B: Serialize,
	T: DeserializeOwned,
{
	let resp = Request::post(path).json(body)?.send().await?;
	if !resp.ok() {
		return Err(ApiError::Status(resp.status()));
	}
	let text = resp.text().await?;
	Ok(serde_json::from_str(&text)?)
}

pub async fn generate(form: &FormState) -> Result<GraphResult, ApiError> {
	post_json(GENERATE_PATH, form).await
}

pub async fn forbidden_words(req: &ForbiddenWordsRequest) -> Result<Vec<String>, ApiError> {
	post_json(FORBIDDEN_WORDS_PATH, req).await
}
