use leptos::prelude::*;
use pft_graph_panel::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
