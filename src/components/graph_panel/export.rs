use thiserror::Error;

pub const DOWNLOAD_PATH: &str = "/download";

/// Output formats offered by the save panel. Each doubles as its checkbox id.
pub const FORMATS: &[&str] = &["png", "svg", "pdf", "tex"];

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
	#[error("Select at least one format.")]
	NoFormatSelected,
}

/// Build the download URL, one `ext` parameter per format in selection order.
pub fn download_url<S: AsRef<str>>(formats: &[S]) -> Result<String, ExportError> {
	if formats.is_empty() {
		return Err(ExportError::NoFormatSelected);
	}
	let query = formats
		.iter()
		.map(|f| format!("ext={}", urlencoding::encode(f.as_ref())))
		.collect::<Vec<_>>()
		.join("&");
	Ok(format!("{DOWNLOAD_PATH}?{query}"))
}
