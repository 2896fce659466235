pub mod file_type;
pub mod loader;

pub use file_type::FileType;
pub use loader::DocumentLoader;
