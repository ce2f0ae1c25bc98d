//! Host font lookup.
//!
//! Faces come from the system font registry through `fontdb` and are handed
//! to `rusttype` for metrics and rasterization.

use fontdb::{Database, Family, Query, Style, Weight};
use rusttype::{Font, Scale};

use crate::config::FontSpec;
use crate::error::{Error, Result};

/// Concrete sans-serif families tried, in order, after the generic family.
///
/// `fontdb` maps the generic family to "Arial" unless told otherwise, which
/// most Linux hosts do not ship.
pub const SANS_SERIF_FALLBACKS: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "Helvetica Neue",
    "Segoe UI",
    "Verdana",
    "FreeSans",
    "Open Sans",
];

/// Loads the face best matching `spec` from the host's font registry.
///
/// # Errors
/// [`Error::FontNotFound`] if neither the requested family nor any sans-serif
/// fallback is installed, [`Error::FontParse`] if the matched face is not a
/// font `rusttype` understands.
pub fn load_font(spec: &FontSpec) -> Result<Font<'static>> {
    let mut db = Database::new();
    db.load_system_fonts();
    log::debug!("Loaded {} system font faces", db.len());

    load_font_from_db(&db, spec)
}

/// Like [`load_font`], but against an already populated database.
///
/// # Errors
/// See [`load_font`].
pub fn load_font_from_db(db: &Database, spec: &FontSpec) -> Result<Font<'static>> {
    let mut families = Vec::with_capacity(SANS_SERIF_FALLBACKS.len() + 1);
    if spec.is_generic_sans_serif() {
        families.push(Family::SansSerif);
    } else {
        families.push(Family::Name(&spec.family));
    }
    families.extend(SANS_SERIF_FALLBACKS.iter().map(|&name| Family::Name(name)));

    let query = Query {
        families: &families,
        weight: if spec.bold { Weight::BOLD } else { Weight::NORMAL },
        style: Style::Normal,
        ..Query::default()
    };

    let not_found = || Error::FontNotFound { family: spec.family.clone() };

    let id = db.query(&query).ok_or_else(not_found)?;
    let face_name = db
        .face(id)
        .and_then(|face| face.families.first())
        .map_or_else(|| spec.family.clone(), |(name, _)| name.clone());
    log::debug!("Using {face_name} for {} (bold: {})", spec.family, spec.bold);

    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(not_found)?;

    Font::try_from_vec_and_index(data, index).ok_or(Error::FontParse { family: face_name })
}

/// Scale at which one em of `font` spans `size` pixels.
///
/// `rusttype` scales so that ascent minus descent spans the requested height,
/// which draws noticeably smaller than the point size other toolkits use.
pub fn pixel_scale(font: &Font<'_>, size: f32) -> Scale {
    let units_per_em = f32::from(font.units_per_em());
    let rusttype::VMetrics { ascent, descent, .. } = font.v_metrics_unscaled();
    let extent = ascent - descent;

    if units_per_em <= 0.0 || extent <= 0.0 {
        return Scale::uniform(size);
    }

    Scale::uniform(size * extent / units_per_em)
}
