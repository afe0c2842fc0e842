//! Operations that reshape a sequence without consulting a callback.
//!
//! All of these return a new sequence of the same flavor as their input. Only [`push`] takes its
//! input by value, which lets a [`Vec`] grow in place; everything else borrows the input and clones
//! the elements it keeps.

mod structural;

#[cfg(test)]
mod tests;

pub use structural::*;
