// Library root — this crate has no binary. Applications embed it by
// defining their own classification tokens (see `classify`) and wrapping
// lower-layer failures with `StructuredError`.

pub mod chain;
pub mod classify;
pub mod error;

pub use chain::Chain;
pub use classify::Classification;
pub use error::{BoxError, StructuredError};
