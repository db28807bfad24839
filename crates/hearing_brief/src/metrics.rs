//! Static font-metric tables and text measurement.
//!
//! The brief draws with the PDF viewer's builtin Helvetica family plus
//! Times-Bold for the wordmark, so no font files ship with the crate.  The
//! width tables below are the Adobe AFM numbers for those faces, in
//! thousandths of an em, covering ASCII 0x20..=0x7E (index = codepoint - 32).
//! The oblique faces share their upright tables, as the AFM files do.
//!
//! Layout code measures text here before drawing it, and the draw path
//! renders exactly the lines returned by [`wrap_lines`].  Card heights are
//! computed from line counts, so measurement and drawing must never disagree.

/// One of the typefaces registered on every brief document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
    /// Times-Bold, used only for the wordmark.  Measured with the bold
    /// table, which is close enough for the single place it is drawn.
    SerifBold,
}

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Fallback width for codepoints outside the tables, in thousandths.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
     278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0     1     2     3     4     5     6     7     8     9
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
    // :     ;     <     =     >     ?     @
     278,  278,  584,  584,  584,  556, 1015,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
     667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
     722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
    // [     \     ]     ^     _     `
     278,  278,  278,  469,  556,  333,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
     556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
     556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
    // {     |     }     ~
     334,  260,  334,  584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
     278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0     1     2     3     4     5     6     7     8     9
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
    // :     ;     <     =     >     ?     @
     333,  333,  584,  584,  584,  611,  975,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
     722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
     722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
    // [     \     ]     ^     _     `
     333,  278,  333,  584,  556,  333,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
     556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
     611,  611,  611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,
    // {     |     }     ~
     389,  280,  389,  584,
];

fn widths_for(face: Face) -> &'static [u16; 95] {
    match face {
        Face::Regular | Face::Oblique => &HELVETICA,
        Face::Bold | Face::BoldOblique | Face::SerifBold => &HELVETICA_BOLD,
    }
}

/// Maps a precomposed Latin letter to its unaccented base letter.
///
/// Used for width lookups (accented glyphs share their base letter's advance
/// in the builtin faces) and for filename sanitization.
pub fn fold_diacritic(c: char) -> Option<char> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' => 'Y',
        _ => return None,
    })
}

fn char_width_units(c: char, face: Face) -> u16 {
    let table = widths_for(face);
    let lookup = |ch: char| {
        let code = ch as usize;
        (32..=126).contains(&code).then(|| table[code - 32])
    };
    lookup(c)
        .or_else(|| fold_diacritic(c).and_then(lookup))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Measures the rendered width of a single line of text, in millimetres.
pub fn text_width(text: &str, face: Face, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width_units(c, face))).sum();
    f64::from(units) / 1000.0 * size_pt * PT_TO_MM
}

/// Word-wraps `text` to `max_width_mm` and returns the resulting lines.
///
/// Greedy fill on whitespace; a single word wider than the limit is split by
/// character.  Deterministic, and the only wrapping implementation in the
/// crate: callers draw the returned lines verbatim.
pub fn wrap_lines(text: &str, face: Face, size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = place_word(word, face, size_pt, max_width_mm, &mut lines);
            continue;
        }
        let joined_width =
            text_width(&current, face, size_pt) + text_width(" ", face, size_pt)
                + text_width(word, face, size_pt);
        if joined_width <= max_width_mm {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = place_word(word, face, size_pt, max_width_mm, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Starts a fresh line with `word`, splitting it by character when it does
/// not fit on a line of its own.  Returns the still-open line remainder.
fn place_word(
    word: &str,
    face: Face,
    size_pt: f64,
    max_width_mm: f64,
    lines: &mut Vec<String>,
) -> String {
    if text_width(word, face, size_pt) <= max_width_mm {
        return word.to_string();
    }
    let mut piece = String::new();
    for c in word.chars() {
        let mut candidate = piece.clone();
        candidate.push(c);
        if !piece.is_empty() && text_width(&candidate, face, size_pt) > max_width_mm {
            lines.push(std::mem::take(&mut piece));
            piece.push(c);
        } else {
            piece = candidate;
        }
    }
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_known_string_matches_the_afm_sum() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 thousandths.
        let expected = 2056.0 / 1000.0 * 10.0 * PT_TO_MM;
        let got = text_width("Rust", Face::Regular, 10.0);
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }

    #[test]
    fn oblique_shares_the_upright_table() {
        let upright = text_width("hearing health", Face::Regular, 8.0);
        let oblique = text_width("hearing health", Face::Oblique, 8.0);
        assert_eq!(upright, oblique);
    }

    #[test]
    fn accented_letters_measure_like_their_base() {
        let folded = text_width("Cote", Face::Bold, 9.0);
        let accented = text_width("Côte", Face::Bold, 9.0);
        assert_eq!(folded, accented);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = "Women use hearing aids at roughly half the rate of men";
        let a = wrap_lines(text, Face::Regular, 8.0, 40.0);
        let b = wrap_lines(text, Face::Regular, 8.0, 40.0);
        assert_eq!(a, b);
        assert!(a.len() > 1);
    }

    #[test]
    fn wrapped_lines_respect_the_width_limit() {
        let text = "hearing decline accelerates after menopause due to reduced estrogen";
        let max = 30.0;
        for line in wrap_lines(text, Face::Regular, 8.0, max) {
            assert!(text_width(&line, Face::Regular, 8.0) <= max, "line too wide: {line}");
        }
    }

    #[test]
    fn wrapping_rejoins_to_the_input_words() {
        let text = "Only 17% of those who need hearing aids have access.";
        let lines = wrap_lines(text, Face::Regular, 6.5, 35.0);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("Stable", Face::Bold, 8.5, 50.0);
        assert_eq!(lines, vec!["Stable".to_string()]);
    }

    #[test]
    fn overlong_word_is_split_by_character() {
        let lines = wrap_lines("Donaudampfschifffahrtsgesellschaft", Face::Regular, 8.0, 10.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "Donaudampfschifffahrtsgesellschaft");
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_lines("", Face::Regular, 8.0, 50.0).is_empty());
    }
}
