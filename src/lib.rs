//! # flip
//!
//! ### In-place sequence reversal primitives
//!
//! This crate is a small library for reversing sequences in place: walk two
//! cursors inward from both ends, exchanging elements until they meet. It
//! provides the algorithm in iterative and recursive form over any
//! `&mut [T]`, plus [`LineBuf`], a fixed-capacity length-and-buffer type
//! for the classic "read a line, reverse it, print it" flow.
//!
//! ---
//!
//! ## [`reverse()`] and [`reverse_recursive()`]
//!
//! The core operation, generic over the element type. Both variants produce
//! identical results; the iterative form runs in O(1) auxiliary space, the
//! recursive form consumes one call frame per exchange. The [`Reverse`]
//! trait exposes the same operation as a method for generic callers, on
//! both slices and [`LineBuf`].
//!
//! ### Example
//!
//! ```rust
//! use flip::reverse;
//!
//! let mut greeting = *b"Hello World";
//! reverse(&mut greeting);
//! assert_eq!(&greeting, b"dlroW olleH");
//! ```
//!
//! ## [`LineBuf`]
//!
//! An explicit length-and-buffer representation of a line of text: `N`
//! bytes of fixed inline storage plus a length, with no terminator
//! sentinel, so arbitrary byte content (including embedded `\0`) is safe to
//! store and reverse. Over-length input is either rejected up front
//! (`TryFrom`/`FromStr`) or deliberately truncated
//! ([`LineBuf::truncating`], [`LineBuf::read_line`]).
//!
//! ### Example
//!
//! ```rust
//! use flip::LineBuf;
//!
//! # fn main() -> Result<(), flip::LineTooLongError> {
//! let mut line: LineBuf<100> = "Programming".parse()?;
//! line.reverse();
//! assert_eq!(line.as_str(), Ok("gnimmargorP"));
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## `no_std` Support
//!
//! With default features disabled the crate is `no_std` (plus `alloc`); the
//! reversal functions and [`LineBuf`] remain fully available. Only
//! [`LineBuf::read_line`] needs the `std` feature, since it reads from a
//! `std::io::BufRead`.
//!
//! ---
//!
//! ## Features
//!
//! - `std`†: Enables integration with the Rust standard library, including
//!   [`LineBuf::read_line`]. When disabled, the crate operates in `no_std`
//!   mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod line_buf;
pub mod reverse;

pub use line_buf::*;
pub use reverse::*;
