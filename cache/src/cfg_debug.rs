/// Resolves to `Debug` when the `tracing` feature is on so that keys and values
/// can be recorded on spans, and to nothing otherwise.
#[cfg(feature = "tracing")]
pub trait CfgDebug: std::fmt::Debug {}

#[cfg(feature = "tracing")]
impl<T> CfgDebug for T where T: std::fmt::Debug {}

#[cfg(not(feature = "tracing"))]
pub trait CfgDebug {}

#[cfg(not(feature = "tracing"))]
impl<T> CfgDebug for T {}
