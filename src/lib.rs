//! # file2qr
//!
//! Convert a file or standard input into a QR code, then either draw it in the
//! terminal with Unicode half blocks or save it as a PNG image.
//!
//! The pipeline is single-shot and sequential:
//!
//! 1. read the input bytes ([`app::read_input`]),
//! 2. prepare the payload, optionally as Base64 ([`content::Payload`]),
//! 3. generate the symbol at a recovery level ([`symbol::Symbol`]),
//! 4. deliver it to exactly one sink: a PNG file ([`sink::save_png`]) or the
//!    terminal ([`render::Render`]).
//!
//! ## Example
//!
//! Draw a symbol with the colorless glyph renderer:
//!
//! ```rust
//! use file2qr::content::Payload;
//! use file2qr::recovery::RecoveryLevel;
//! use file2qr::render::RenderStyle;
//! use file2qr::symbol::Symbol;
//!
//! let payload = Payload::prepare(b"Hello, world!", false);
//! let symbol = Symbol::generate(&payload, RecoveryLevel::from_token("medium")).unwrap();
//!
//! let mut out = Vec::new();
//! let renderer = RenderStyle::Glyph.renderer();
//! file2qr::app::display(&symbol, 40, renderer.as_ref(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 20);
//! ```
//!
//! ## Modules
//!
//! - [`content`]: raw or Base64 payload preparation.
//! - [`recovery`]: error-correction level selection.
//! - [`symbol`]: QR generation and rasterization.
//! - [`render`]: truecolor and glyph terminal renderers.
//! - [`sink`]: PNG file output.
//! - [`app`]: the end-to-end pipeline.

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod recovery;
pub mod render;
pub mod scratch;
pub mod sink;
pub mod symbol;

pub use config::Config;
pub use error::{DisplayError, Error};
