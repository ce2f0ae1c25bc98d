use std::error::Error as _;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::font::load_font;
use crate::render::{render_text, write_png};

/// Line printed on success, followed by the absolute path of the image.
pub const SUCCESS_MESSAGE: &str = "图片已成功生成";

/// Command line of the `text2png` binary.
///
/// Every argument is text; nothing is interpreted as a flag.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Text to render. Multiple arguments are joined with single spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl Args {
    /// Parses a full command line, program name first.
    ///
    /// An end-of-options marker is put in front of the user's arguments, so a
    /// `--` the user typed is kept as text like everything else.
    ///
    /// # Errors
    /// A clap error when there is no text or an argument is not valid UTF-8.
    pub fn try_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv
            .next()
            .unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));

        Self::try_parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(argv),
        )
    }

    /// The arguments joined into the line that gets rendered.
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// Renders the arguments and writes the image into `dir`.
///
/// Returns the absolute path of the written file.
///
/// # Errors
/// [`Error::Usage`] when there is no text, font errors when the host has no
/// usable sans-serif face, and I/O or encoding errors from writing the file.
pub fn run(args: &Args, config: &RenderConfig, dir: &Path) -> Result<PathBuf> {
    if args.text.is_empty() {
        return Err(Error::Usage);
    }

    let text = args.text();
    log::debug!("Rendering {text:?}");

    let font = load_font(&config.font)?;
    let image = render_text(config, &font, &text);

    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };
    let path = dir.join(&config.output_file);

    write_png(&image, &path)?;

    Ok(path)
}

/// Writes the success line for `path`.
///
/// # Errors
/// Whatever writing to `out` fails with.
pub fn report_success(path: &Path, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{SUCCESS_MESSAGE}: {}", path.display())?;
    out.flush()
}

/// Writes the diagnostic for `err`: usage for [`Error::Usage`], otherwise a
/// one-line summary followed by the chain of causes.
///
/// # Errors
/// Whatever writing to `out` fails with.
pub fn report_error(err: &Error, out: &mut impl Write) -> io::Result<()> {
    match err {
        Error::Usage => {
            writeln!(out, "Error: please supply the text to render as arguments.")?;
            writeln!(out, "Usage: {} <text>...", env!("CARGO_PKG_NAME"))?;
        }
        err if err.is_io() => writeln!(out, "Error writing image: {err}")?,
        err => writeln!(out, "Unexpected error: {err}")?,
    }

    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }

    Ok(())
}
