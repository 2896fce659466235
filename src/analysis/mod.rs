pub mod enhancer;
pub mod session;

pub use enhancer::ResumeEnhancer;
pub use session::EnhancementSession;
