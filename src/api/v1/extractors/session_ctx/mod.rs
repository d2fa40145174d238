mod core;
mod types;

pub use core::SessionCtxExtractor;
pub use types::SessionCtx;
