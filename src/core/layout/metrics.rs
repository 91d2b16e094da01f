//! Text measurement for the standard Helvetica face
//!
//! Widths come from the Helvetica AFM (units per 1000 em). Bold text is
//! measured with the regular widths, which slightly under-estimates it.

/// Millimetres per PDF point
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Width used for characters outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

/// Advance widths for ASCII 0x20..=0x7E
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

fn char_width(ch: char) -> u16 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in millimetres at `size_pt`
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Distance between consecutive baselines in millimetres
pub fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * LINE_HEIGHT_FACTOR * PT_TO_MM
}

/// Splits `text` into lines no wider than `max_width_mm`
///
/// Breaks on whitespace; a single word wider than the limit is split by
/// characters. Always returns at least one (possibly empty) line.
pub fn wrap_to_width(text: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, size_pt) <= max_width_mm;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current.push_str(word);
        } else {
            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && !fits(&next) {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
