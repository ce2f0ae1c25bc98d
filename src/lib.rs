//! Renders a single line of text, centered, into a fixed-size PNG.
//!
//! The `text2png` binary joins its arguments with spaces, draws them in the
//! host's bold sans-serif face on an 800x200 black canvas and writes
//! `output.png` into the working directory. The same pipeline is available
//! as a library:
//!
//! ```no_run
//! # fn main() -> text2png::Result<()> {
//! use text2png::{load_font, render_text, write_png, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let font = load_font(&config.font)?;
//! let image = render_text(&config, &font, "hello world");
//! write_png(&image, "output.png".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! With the `serde-serialize` feature, [`TextMetrics`], [`Placement`] and
//! [`FontSpec`] implement `serde::Serialize`.

#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(clippy::pedantic)]

mod cli;
mod config;
mod error;
mod font;
mod layout;
mod render;

pub use cli::{report_error, report_success, run, Args, SUCCESS_MESSAGE};
pub use config::{
    FontSpec, RenderConfig, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, FOREGROUND, OUTPUT_FILE,
    SANS_SERIF,
};
pub use error::{Error, Result};
pub use font::{load_font, load_font_from_db, pixel_scale, SANS_SERIF_FALLBACKS};
pub use layout::{Placement, TextMetrics};
pub use render::{render_text, write_png};
