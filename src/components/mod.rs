pub mod graph_panel;
