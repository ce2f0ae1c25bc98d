use rusttype::{point, Font, Scale};

/// Whole-pixel metrics of one line of text in one font at one scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct TextMetrics {
    /// Pen advance of the whole string, kerning included.
    pub advance_width: i32,
    /// Distance from the baseline up to the top of the font box.
    pub ascent: i32,
    /// Distance from the baseline down to the bottom of the font box, positive.
    pub descent: i32,
    /// Recommended gap between lines.
    pub leading: i32,
    /// `ascent + descent + leading`.
    pub height: i32,
}

impl TextMetrics {
    /// Measures `text` as laid out by `font` at `scale`.
    ///
    /// The vertical metrics describe the font, not the glyphs actually in
    /// `text`, so every string measured with the same font shares them.
    pub fn measure(font: &Font<'_>, scale: Scale, text: &str) -> Self {
        let advance = font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map_or(0.0, |glyph| {
                glyph.position().x + glyph.unpositioned().h_metrics().advance_width
            });

        let rusttype::VMetrics {
            ascent,
            descent,
            line_gap,
        } = font.v_metrics(scale);

        let ascent = ascent.ceil() as i32;
        let descent = descent.abs().ceil() as i32;
        let leading = line_gap.round() as i32;

        Self {
            advance_width: advance.round() as i32,
            ascent,
            descent,
            leading,
            height: ascent + descent + leading,
        }
    }
}

/// Where to put the pen so a line lands centered on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct Placement {
    /// Horizontal pen origin.
    pub x: i32,
    /// Vertical position of the baseline.
    pub baseline: i32,
}

impl Placement {
    /// Centers the font box of `metrics` in a `width` by `height` canvas.
    ///
    /// Both offsets go negative when the text is larger than the canvas;
    /// division truncates toward zero.
    pub fn centered(metrics: &TextMetrics, width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);

        Self {
            x: (width - metrics.advance_width) / 2,
            baseline: (height - metrics.height) / 2 + metrics.ascent,
        }
    }

    /// Whether the text box reaches past any edge of the canvas.
    pub fn overflows(&self, metrics: &TextMetrics, width: u32, height: u32) -> bool {
        let top = self.baseline - metrics.ascent;
        self.x < 0
            || top < 0
            || i64::from(self.x) + i64::from(metrics.advance_width) > i64::from(width)
            || i64::from(top) + i64::from(metrics.height) > i64::from(height)
    }
}
