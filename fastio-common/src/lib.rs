//! Shared building blocks for the `fastio` reader and writer crates.
//!
//! Both halves report failures through [`FastIoError`], locate tokens with
//! [`Position`], hand out tokens as [`TextSlice`]s and read their buffer
//! settings from [`IoConfig`].

pub mod config;
pub mod error;
pub mod position;
pub mod text_slice;

pub use config::IoConfig;
pub use error::{FastIoError, Result};
pub use position::Position;
pub use text_slice::TextSlice;
