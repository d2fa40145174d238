pub mod verifier;

pub use verifier::{SessionVerifier, Verdict};
