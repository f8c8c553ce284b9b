use std::fmt::Debug;

/// Contract for classification tokens.
///
/// A classification is an opaque identity token: the wrapper only ever
/// compares tokens for equality and never reads a message out of one.
/// Applications typically define a single process-wide enum and use its
/// variants as sentinels; any `PartialEq` type that can cross threads
/// qualifies through the blanket impl below.
pub trait Classification: PartialEq + Debug + Send + Sync + 'static {}

impl<T> Classification for T where T: PartialEq + Debug + Send + Sync + 'static {}
