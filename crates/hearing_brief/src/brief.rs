//! Brief assembly: document setup, page rendering, filename derivation.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::assets;
use crate::canvas::{Canvas, FontSet};
use crate::chrome::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::dataset;
use crate::error::BriefError;
use crate::metrics::fold_diacritic;
use crate::model::CountryRecord;
use crate::{page1, page2};

/// A rendered brief together with its download filename.
pub struct Brief {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl Brief {
    /// Writes the brief into `dir`, creating the directory if needed, and
    /// returns the path of the written file.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, BriefError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }
}

/// Derives the brief filename from a country name.
///
/// Diacritics fold to their ASCII base letter, then every character outside
/// `[A-Za-z0-9]` maps to a single hyphen: "Côte d'Ivoire" becomes
/// `Cote-d-Ivoire-Hearing-Health-Brief.pdf`.
pub fn brief_filename(country_name: &str) -> String {
    let sanitized: String = country_name
        .chars()
        .map(|c| {
            let c = fold_diacritic(c).unwrap_or(c);
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{sanitized}-Hearing-Health-Brief.pdf")
}

/// Renders the two-page brief for `country` against the bundled table.
pub fn render_brief(country: &CountryRecord) -> Result<Brief, BriefError> {
    render_brief_with(country, dataset::countries())
}

/// Renders against an explicit table, which is what rank computation reads.
pub fn render_brief_with(
    country: &CountryRecord,
    table: &[CountryRecord],
) -> Result<Brief, BriefError> {
    let title = format!("{} Hearing Health Brief", country.name);
    let (doc, page1_idx, layer1_idx) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");

    let fonts = FontSet {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
        bold_oblique: doc.add_builtin_font(BuiltinFont::HelveticaBoldOblique)?,
        serif_bold: doc.add_builtin_font(BuiltinFont::TimesBold)?,
    };
    let logo = assets::load_logo();

    let canvas = Canvas::new(
        doc.get_page(page1_idx).get_layer(layer1_idx),
        &fonts,
        PAGE_HEIGHT,
    );
    page1::draw_page1(&canvas, logo.as_ref());

    let (page2_idx, layer2_idx) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 2");
    let canvas = Canvas::new(
        doc.get_page(page2_idx).get_layer(layer2_idx),
        &fonts,
        PAGE_HEIGHT,
    );
    let plan = page2::plan_page2(country, table);
    page2::draw_page2(&canvas, country, &plan, logo.as_ref());

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))?;
    log::debug!("rendered brief for {}", country.name);

    Ok(Brief {
        bytes,
        filename: brief_filename(&country.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_folds_accents_and_hyphenates_the_rest() {
        assert_eq!(
            brief_filename("Côte d'Ivoire"),
            "Cote-d-Ivoire-Hearing-Health-Brief.pdf"
        );
        assert_eq!(
            brief_filename("São Tomé and Príncipe"),
            "Sao-Tome-and-Principe-Hearing-Health-Brief.pdf"
        );
    }

    #[test]
    fn plain_names_pass_through_with_hyphenated_spaces() {
        assert_eq!(brief_filename("Japan"), "Japan-Hearing-Health-Brief.pdf");
        assert_eq!(
            brief_filename("United States"),
            "United-States-Hearing-Health-Brief.pdf"
        );
    }

    #[test]
    fn every_nonalphanumeric_maps_to_its_own_hyphen() {
        assert_eq!(brief_filename("A (b)"), "A--b--Hearing-Health-Brief.pdf");
    }
}
