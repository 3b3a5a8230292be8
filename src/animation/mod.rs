//! Scroll-driven reveal and counter animations, plus pointer parallax.
//!
//! Reveals and counters are one-shot: an element animates the first time it
//! becomes visible and is then left alone for the rest of the page's life.

pub mod counter;
pub mod parallax;
pub mod reveal;

pub use parallax::use_parallax;
pub use reveal::{use_reveal, Reveal};
