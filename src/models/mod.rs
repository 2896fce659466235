pub mod document;
pub mod analysis;

pub use document::*;
pub use analysis::*;
