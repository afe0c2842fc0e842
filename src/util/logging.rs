//! Thin wrappers over `log` that disappear entirely unless the `logging` feature is enabled.
#![allow(unused_macros)]

macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        ::log::trace!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)+);
    )
}

#[allow(unused_imports)]
pub(crate) use trace;
