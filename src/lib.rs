//! This crate is a small set of free functions for working with ordered sequences, modelled on the
//! array helpers that dynamic languages ship in their standard libraries: `map`, `filter`,
//! `reduce`, `push`, `shift`, `splice` and friends.
//!
//! # Purpose
//! Rust's [`Iterator`] already covers most of this ground, but the iterator chain isn't always the
//! clearest way to say "give me this list with the first element gone". The functions here take a
//! sequence, hand back a new one and never touch the input.
//!
//! # Method
//! Read-only operations accept any slice (`&[T]`), so [`Vec`], arrays and boxed slices all work.
//! Operations that produce a sequence of the same element type keep the caller's container flavor
//! through the [`Sequence`](seq::Sequence) trait.
//!
//! # Error Handling
//! None of the operations can fail. Out of range indices are clamped, empty inputs give empty
//! outputs and predicates over empty sequences give their vacuous answer. When a callback can fail,
//! the `try_*` variants return the callback's own error untouched, and panics in callbacks unwind
//! straight through.
//!
//! The only fallible surface is extraction from [`Value`](seq::Value), which uses the
//! [`TryInto`](derive_more::TryInto) derive and its error type.
//!
//! # Features
//! - `transform`: map, filter, fold and search functions.
//! - `structural`: push, pop, shift, unshift, reverse, flat and splice.
//! - `value`: the [`Value`](seq::Value) boundary type and `is_slice`.
//! - `logging`: emits `log` records when `splice` normalizes its arguments.
//!
//! All but `logging` are enabled by default through `seq-all`.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "seq")]
pub mod seq;

pub(crate) mod util;

#[cfg(feature = "seq")]
#[doc(inline)]
pub use seq::*;
