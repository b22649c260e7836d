//! Helvetica advance widths and greedy word wrapping for the resume PDF.
//!
//! Widths are the standard Helvetica AFM values in 1/1000 em for ASCII
//! 0x20..=0x7E. Index = (char as usize) - 32. Characters outside the table
//! fall back to the width of a digit.

const MM_PER_PT: f32 = 25.4 / 72.0;

const FALLBACK_WIDTH: u16 = 556;
const BULLET_WIDTH: u16 = 350;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

/// Advance width of one character in 1/1000 em
pub fn char_width(c: char) -> u16 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else if c == '•' {
        BULLET_WIDTH
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in millimetres at `font_size_pt`
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * font_size_pt * MM_PER_PT
}

/// Split `text` into lines no wider than `max_width_mm`.
///
/// Breaks at spaces; explicit newlines always break. A single word wider
/// than the limit is placed alone on its own line.
pub fn wrap_text(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if text_width_mm(&candidate, font_size_pt) <= max_width_mm {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        lines.push(current);
    }

    lines
}
