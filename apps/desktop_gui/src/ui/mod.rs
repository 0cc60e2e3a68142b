//! UI layer for the desktop client: app shell, panels, and tone styling.

pub mod app;
pub mod panels;
pub mod widgets;

pub use app::{PdfAssistantApp, StartupConfig};
