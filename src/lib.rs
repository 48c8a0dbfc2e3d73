//! Renders a GitHub profile landing page from one GraphQL query.
//!
//! The pipeline is fetch ([`github`]) → validate ([`github::parse_viewer_response`])
//! → render ([`pipeline::render_page`]) into an in-memory [`dom::Document`]
//! that serializes to a standalone HTML page.

pub mod anchors;
pub mod cli;
pub mod date;
pub mod dom;
pub mod error;
pub mod events;
pub mod fragments;
pub mod github;
pub mod markup;
pub mod pipeline;
pub mod render;
pub mod sanitize;
pub mod server;
pub mod skeleton;
pub mod types;
