pub mod analyze;
pub mod cli;
pub mod error;
pub mod github;
pub mod output;
pub mod util;

pub use error::AnalyzeError;
