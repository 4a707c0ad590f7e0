//! Paint layer: adapters that turn view models into a display surface.

pub mod html;

pub use html::render_html_viewer;
