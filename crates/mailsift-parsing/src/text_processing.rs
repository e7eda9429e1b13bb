use std::borrow::Cow;

const LIGATURES: [char; 7] = [
    '\u{FB00}', '\u{FB01}', '\u{FB02}', '\u{FB03}', '\u{FB04}', '\u{FB05}', '\u{FB06}',
];

/// Expand common typographic ligatures found in PDFs.
///
/// Borrows the input untouched when it contains no ligature glyphs.
pub fn expand_ligatures(text: &str) -> Cow<'_, str> {
    if !text.contains(LIGATURES) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace('\u{FB00}', "ff")
            .replace('\u{FB01}', "fi")
            .replace('\u{FB02}', "fl")
            .replace('\u{FB03}', "ffi")
            .replace('\u{FB04}', "ffl")
            .replace(['\u{FB05}', '\u{FB06}'], "st"),
    )
}
