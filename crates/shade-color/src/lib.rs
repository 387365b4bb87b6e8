//! # shade-color — deterministic palette generation from seed colors
//!
//! Derives a complete syntax-highlight palette from the two stops of a
//! gradient. Feed it any pair of hex colors and it produces fifteen HSL
//! colors that stay readable against a dark editor background.
//!
//! # Architecture
//!
//! ```text
//! seed hex colors
//!     │
//!     ▼
//! convert.rs:  hex ⇄ RGB ⇄ HSL, css color parsing (pure math)
//!     │
//!     ▼
//! contrast.rs: WCAG relative luminance + contrast ratios
//!     │
//!     ▼
//! palette.rs:  average seeds, derive candidates, correct contrast,
//!              remap saturation/lightness, hue-shift ±45°
//! ```
//!
//! The output is an ordered list of 15 `hsl(h, s%, l%)` strings. Order is
//! the contract: consumers assign semantic roles (caret, keywords, type
//! names, …) by index. The whole pipeline is a pure function of its input —
//! no I/O, no randomness, no shared state.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel math intentionally narrows (f64 → u8/u16 after clamp/round).
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Six-sector hue selection compares exact float maxima.
#![allow(clippy::float_cmp)]

pub mod contrast;
pub mod convert;
pub mod palette;

pub use convert::ColorFormatError;
pub use palette::{generate_colors, hsl_to_hsla, shift_hue};
