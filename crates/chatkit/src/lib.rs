//! # chatkit
//!
//! Message content model and bubble sizing for chat UIs.
//!
//! This crate describes what a chat message carries (text, media, audio,
//! templated cards, ...) and computes the on-screen bubble geometry of the
//! content kinds that need it. It has no dependency on any text engine or
//! renderer: text is measured through the [`TextMeasurer`] trait and audio
//! durations through [`DurationLookup`]. Backends like `chatkit-text` implement
//! these traits.

mod audio;
mod color;
mod config;
mod content;
mod geometry;
mod items;
mod measure;
mod media;
mod message;
mod sizing;
mod template;

pub use audio::*;
pub use color::*;
pub use config::*;
pub use content::*;
pub use geometry::*;
pub use items::*;
pub use measure::*;
pub use media::*;
pub use message::*;
pub use sizing::*;
pub use template::*;
