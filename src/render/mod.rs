//! Image composition
//!
//! Darkens a background photo and draws the selected text over it.

mod compose;
mod layout;

pub(crate) use compose::{Composer, RenderStyle, Renderer};
