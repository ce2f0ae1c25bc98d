use image::Rgb;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 200;
/// File the CLI writes into its working directory.
pub const OUTPUT_FILE: &str = "output.png";

pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
pub const FOREGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Name of the generic sans-serif family, resolved through the host registry.
pub const SANS_SERIF: &str = "SansSerif";

/// Which face to draw with, and how large.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct FontSpec {
    /// Family name. [`SANS_SERIF`] selects the host's default sans-serif family.
    pub family: String,
    pub bold: bool,
    /// Nominal em size in pixels.
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: SANS_SERIF.to_owned(),
            bold: true,
            size: 48.0,
        }
    }
}

impl FontSpec {
    /// Whether the family names the generic sans-serif family rather than a
    /// concrete one.
    pub fn is_generic_sans_serif(&self) -> bool {
        self.family.eq_ignore_ascii_case(SANS_SERIF) || self.family.eq_ignore_ascii_case("sans-serif")
    }
}

/// Everything that determines the output image apart from the text itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub font: FontSpec,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    /// File name, relative to the directory the image is written into.
    pub output_file: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            font: FontSpec::default(),
            background: BACKGROUND,
            foreground: FOREGROUND,
            output_file: OUTPUT_FILE.to_owned(),
        }
    }
}
