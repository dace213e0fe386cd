use std::fmt;

use log::{debug, error, warn};

use super::api::ApiError;
use super::export;
use super::label::{LabeledValue, PLACEHOLDER, format_fixed};
use super::types::{ForbiddenWordsRequest, FormState, GraphResult};

/// Symbols offered by the alphabet selector.
pub const SYMBOL_ALPHABET: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub const DEFAULT_SYMBOLS: &[&str] = &["0", "1"];

const EIGEN_DECIMALS: usize = 6;

const GENERATE_FAILED: &str = "An error occurred while generating the graph.";
const FORBIDDEN_WORDS_FAILED: &str = "Failed to load forbidden words.";

/// Numeric controls paired with a `<id>-label` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slider {
	Period,
	ForbiddenLength,
	NodeHeight,
	NodeWidth,
	SpacingY,
	SpacingX,
}

impl Slider {
	pub const ALL: [Slider; 6] = [
		Slider::Period,
		Slider::ForbiddenLength,
		Slider::NodeHeight,
		Slider::NodeWidth,
		Slider::SpacingY,
		Slider::SpacingX,
	];

	pub fn id(self) -> &'static str {
		match self {
			Slider::Period => "period",
			Slider::ForbiddenLength => "forbidden-length",
			Slider::NodeHeight => "node-h",
			Slider::NodeWidth => "node-w",
			Slider::SpacingY => "space-y",
			Slider::SpacingX => "space-x",
		}
	}

	pub fn label_id(self) -> String {
		format!("{}-label", self.id())
	}

	pub fn prefix(self) -> &'static str {
		match self {
			Slider::Period => "Period",
			Slider::ForbiddenLength => "Forbidden word length",
			Slider::NodeHeight => "Node height",
			Slider::NodeWidth => "Node width",
			Slider::SpacingY => "Vertical spacing",
			Slider::SpacingX => "Horizontal spacing",
		}
	}

	/// Integer-valued controls render without decimals.
	pub fn decimals(self) -> usize {
		match self {
			Slider::Period | Slider::ForbiddenLength => 0,
			_ => 1,
		}
	}

	/// `(min, max, step)` of the range input.
	pub fn range(self) -> (f64, f64, f64) {
		match self {
			Slider::Period => (1.0, 8.0, 1.0),
			Slider::ForbiddenLength => (1.0, 5.0, 1.0),
			Slider::NodeHeight | Slider::NodeWidth => (0.1, 3.0, 0.1),
			Slider::SpacingY | Slider::SpacingX => (0.1, 5.0, 0.1),
		}
	}

	pub fn default_value(self) -> f64 {
		match self {
			Slider::Period | Slider::ForbiddenLength => 2.0,
			Slider::NodeHeight | Slider::NodeWidth => 0.5,
			Slider::SpacingY | Slider::SpacingX => 1.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
	pub value: f64,
	pub label: LabeledValue,
}

impl SliderState {
	fn new(slider: Slider) -> Self {
		let value = slider.default_value();
		Self {
			value,
			label: LabeledValue::new(slider.prefix(), format_fixed(value, slider.decimals())),
		}
	}
}

/// Tag attached to an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Monotonic request counter for one channel. Only the latest ticket's
/// response is applied.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
	latest: u64,
}

impl RequestSequence {
	pub fn issue(&mut self) -> Ticket {
		self.latest += 1;
		Ticket(self.latest)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.latest
	}
}

/// Everything that can change the panel.
#[derive(Debug)]
pub enum PanelEvent {
	Init,
	SymbolsSelected(Vec<String>),
	/// A slider's `input` event with its raw value.
	SliderInput(Slider, String),
	/// A slider's `change` event.
	SliderCommitted(Slider),
	ForbiddenWordsSelected(Vec<String>),
	EssentializeToggled(bool),
	MinimizeToggled(bool),
	FormatToggled { format: String, checked: bool },
	SaveRequested,
	ForbiddenWordsLoaded {
		ticket: Ticket,
		result: Result<Vec<String>, ApiError>,
	},
	GraphLoaded {
		ticket: Ticket,
		result: Result<GraphResult, ApiError>,
	},
}

/// Work requested by [`PanelState::apply`], executed by the component.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	FetchForbiddenWords(Ticket, ForbiddenWordsRequest),
	Generate(Ticket, FormState),
	Alert(String),
	Navigate(String),
}

/// State owned by the panel coordinator. Controls only render it; every
/// mutation goes through [`PanelState::apply`].
#[derive(Clone, Debug)]
pub struct PanelState {
	pub symbols: Vec<String>,
	pub sliders: [SliderState; 6],
	pub forbidden_options: Vec<String>,
	pub forbidden_words: Vec<String>,
	pub essentialize: bool,
	pub minimize: bool,
	pub export_formats: Vec<String>,
	pub image_src: Option<String>,
	pub eigenvalue: LabeledValue,
	pub symbol_count: LabeledValue,
	pub forbidden_count: LabeledValue,
	graph_seq: RequestSequence,
	words_seq: RequestSequence,
}

impl Default for PanelState {
	fn default() -> Self {
		let symbols: Vec<String> = DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect();
		Self {
			symbol_count: LabeledValue::new("Symbols", symbols.len().to_string()),
			symbols,
			sliders: Slider::ALL.map(SliderState::new),
			forbidden_options: Vec::new(),
			forbidden_words: Vec::new(),
			essentialize: false,
			minimize: false,
			export_formats: Vec::new(),
			image_src: None,
			eigenvalue: LabeledValue::new("Eigenvalue", PLACEHOLDER),
			forbidden_count: LabeledValue::new("Forbidden words", "0"),
			graph_seq: RequestSequence::default(),
			words_seq: RequestSequence::default(),
		}
	}
}

impl PanelState {
	pub fn slider(&self, slider: Slider) -> &SliderState {
		&self.sliders[slider as usize]
	}

	pub fn minimize_enabled(&self) -> bool {
		self.essentialize
	}

	/// Snapshot of the current controls as a `/generate` request.
	pub fn form_data(&self) -> FormState {
		FormState {
			symbols: self.symbols.clone(),
			period: self.slider(Slider::Period).value.round() as u32,
			forbidden_length: self.slider(Slider::ForbiddenLength).value.round() as u32,
			forbidden_words: self.forbidden_words.clone(),
			essentialize: self.essentialize,
			minimize: self.minimize,
			node_height: self.slider(Slider::NodeHeight).value,
			node_width: self.slider(Slider::NodeWidth).value,
			spacing_y: self.slider(Slider::SpacingY).value,
			spacing_x: self.slider(Slider::SpacingX).value,
		}
	}

	pub fn apply(&mut self, event: PanelEvent) -> Vec<Command> {
		match event {
			PanelEvent::Init => vec![self.fetch_forbidden_words()],
			PanelEvent::SymbolsSelected(symbols) => {
				self.symbols = symbols;
				self.symbol_count.set_value(self.symbols.len().to_string());
				vec![self.fetch_forbidden_words()]
			}
			PanelEvent::SliderInput(slider, raw) => self.slider_input(slider, &raw),
			PanelEvent::SliderCommitted(Slider::ForbiddenLength) => {
				vec![self.fetch_forbidden_words()]
			}
			PanelEvent::SliderCommitted(_) => Vec::new(),
			PanelEvent::ForbiddenWordsSelected(words) => self.select_forbidden_words(words),
			PanelEvent::EssentializeToggled(on) => {
				self.essentialize = on;
				if !on {
					self.minimize = false;
				}
				vec![self.generate()]
			}
			PanelEvent::MinimizeToggled(on) => {
				if !self.essentialize {
					self.minimize = false;
					return Vec::new();
				}
				self.minimize = on;
				vec![self.generate()]
			}
			PanelEvent::FormatToggled { format, checked } => {
				self.export_formats.retain(|f| *f != format);
				if checked {
					self.export_formats.push(format);
				}
				Vec::new()
			}
			PanelEvent::SaveRequested => match export::download_url(&self.export_formats[..]) {
				Ok(url) => vec![Command::Navigate(url)],
				Err(err) => vec![Command::Alert(err.to_string())],
			},
			PanelEvent::ForbiddenWordsLoaded { ticket, result } => {
				if !self.words_seq.is_current(ticket) {
					debug!("dropping superseded forbidden words response {ticket}");
					return Vec::new();
				}
				match result {
					Ok(words) => self.replace_forbidden_options(words),
					Err(err) => {
						warn!("forbidden words request {ticket} failed: {err}");
						vec![Command::Alert(FORBIDDEN_WORDS_FAILED.into())]
					}
				}
			}
			PanelEvent::GraphLoaded { ticket, result } => {
				if !self.graph_seq.is_current(ticket) {
					debug!("dropping superseded graph response {ticket}");
					return Vec::new();
				}
				match result {
					Ok(res) => {
						self.apply_graph_result(res);
						Vec::new()
					}
					Err(err) => {
						warn!("graph request {ticket} failed: {err}");
						vec![Command::Alert(GENERATE_FAILED.into())]
					}
				}
			}
		}
	}

	fn generate(&mut self) -> Command {
		let ticket = self.graph_seq.issue();
		debug!("generate {ticket}");
		Command::Generate(ticket, self.form_data())
	}

	fn fetch_forbidden_words(&mut self) -> Command {
		let ticket = self.words_seq.issue();
		let form = self.form_data();
		debug!("fetch forbidden words {ticket}");
		Command::FetchForbiddenWords(
			ticket,
			ForbiddenWordsRequest {
				symbols: form.symbols,
				length: form.forbidden_length,
			},
		)
	}

	fn slider_input(&mut self, slider: Slider, raw: &str) -> Vec<Command> {
		let Ok(value) = raw.trim().parse::<f64>() else {
			warn!("ignoring non-numeric {} value {raw:?}", slider.id());
			return Vec::new();
		};
		let formatted = format_fixed(value, slider.decimals());
		let state = &mut self.sliders[slider as usize];
		state.value = value;
		state.label.set_value(formatted);
		vec![self.generate()]
	}

	fn select_forbidden_words(&mut self, words: Vec<String>) -> Vec<Command> {
		self.forbidden_words = words;
		self.forbidden_count
			.set_value(self.forbidden_words.len().to_string());
		self.symbol_count.set_value(self.symbols.len().to_string());
		vec![self.generate()]
	}

	fn replace_forbidden_options(&mut self, words: Vec<String>) -> Vec<Command> {
		let selection = words.first().cloned().into_iter().collect();
		if words.is_empty() {
			warn!("forbidden words lookup returned no candidates");
		}
		self.forbidden_options = words;
		self.select_forbidden_words(selection)
	}

	fn apply_graph_result(&mut self, res: GraphResult) {
		match res.image_url.filter(|url| !url.is_empty()) {
			Some(url) => self.image_src = Some(url),
			None => error!(
				"graph rendering failed: {}",
				res.error.as_deref().unwrap_or("no image returned")
			),
		}
		let eigen = match res.eigen_value.as_ref().map(|e| e.as_f64()) {
			Some(Some(v)) => format_fixed(v, EIGEN_DECIMALS),
			Some(None) => {
				warn!("unreadable eigenvalue {:?}", res.eigen_value);
				PLACEHOLDER.to_string()
			}
			None => PLACEHOLDER.to_string(),
		};
		self.eigenvalue.set_value(eigen);
	}
}
