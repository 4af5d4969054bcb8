//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros themselves.
//! Without it they swallow their arguments, so call sites must not compute
//! values that only exist to be logged.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __svgdoc_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __svgdoc_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{__svgdoc_debug as debug, __svgdoc_trace as trace};
