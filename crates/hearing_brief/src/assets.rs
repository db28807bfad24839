//! Optional logo asset handling.
//!
//! The logo is decoration: a missing or corrupt file must never abort brief
//! generation, so every failure path here degrades to "no logo" with a log
//! line.  The asset directory can be overridden through the
//! `HEARING_BRIEF_ASSETS_DIR` environment variable; by default the crate's
//! own `assets/` directory is used.  See `assets/README.md` for setup.

use std::path::PathBuf;

use image::GenericImageView;
use printpdf::{ColorBits, ColorSpace, Image, ImageXObject, Mm, Px};

use crate::canvas::Canvas;

/// Environment variable that points at an alternative asset directory.
pub const ASSETS_DIR_ENV: &str = "HEARING_BRIEF_ASSETS_DIR";

const LOGO_FILE: &str = "logo.png";
const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

/// A decoded logo ready to be placed on a page any number of times.
pub struct Logo {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

fn logo_path() -> PathBuf {
    std::env::var_os(ASSETS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"))
        .join(LOGO_FILE)
}

fn decode() -> Result<Logo, image::ImageError> {
    let image = image::io::Reader::open(logo_path())?
        .with_guessed_format()?
        .decode()?;
    let (width, height) = image.dimensions();
    Ok(Logo {
        pixels: image.to_rgb8().into_raw(),
        width,
        height,
    })
}

/// Loads the logo if one is available, logging and returning `None` when the
/// asset is missing or undecodable.
pub fn load_logo() -> Option<Logo> {
    match decode() {
        Ok(logo) => Some(logo),
        Err(err) => {
            log::debug!(
                "rendering without logo, {} not usable: {err}",
                logo_path().display()
            );
            None
        }
    }
}

impl Logo {
    /// Places the logo scaled into the box with top-left `(x, y)`.
    pub fn place(&self, canvas: &Canvas<'_>, x: f64, y: f64, w_mm: f64, h_mm: f64) {
        let xobject = ImageXObject {
            width: Px(self.width as usize),
            height: Px(self.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: self.pixels.clone(),
            image_filter: None,
            clipping_bbox: None,
        };
        // At the default dpi an image renders at 25.4/dpi mm per pixel; the
        // scale factors bring that natural size to the requested box.
        let natural_w = MM_PER_INCH * f64::from(self.width) / DEFAULT_IMAGE_DPI;
        let natural_h = MM_PER_INCH * f64::from(self.height) / DEFAULT_IMAGE_DPI;
        Image::from(xobject).add_to_layer(
            canvas.layer.clone(),
            Some(Mm(x)),
            Some(Mm(canvas.page_height - y - h_mm)),
            None,
            Some(w_mm / natural_w),
            Some(h_mm / natural_h),
            None,
        );
    }
}
