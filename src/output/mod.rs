pub mod download;
pub mod render;

pub use download::{DownloadFormat, save_report};
pub use render::{OutputFormat, display, render_json, render_table};
