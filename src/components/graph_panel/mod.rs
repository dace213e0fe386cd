mod api;
mod component;
mod export;
mod fit;
mod label;
mod layout;
mod state;
mod types;

pub use component::GraphPanel;
