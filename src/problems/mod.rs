//! Problem implementations for the layered scan engine.
//!
//! - [`uniform_block`] : largest rectangle whose cells all hold one value.

pub mod uniform_block;
