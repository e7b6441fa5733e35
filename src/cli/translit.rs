use crate::error::Result;
use crate::glyphs::{tokenize, transliterate};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct TranslitOptions {
    /// Print one glyph per line with its sign name and phonetic value.
    pub annotate: bool,
}

/// Hieroglyph transliteration of a text file.
pub fn run_translit(path: &Path, options: &TranslitOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    if !options.annotate {
        let mut line = transliterate(&text);
        line.push('\n');
        return Ok(line);
    }

    let mut output = String::new();
    for entry in tokenize(&text) {
        output.push_str(&format!(
            "{}  {:<5} {}\n",
            entry.glyph, entry.sound, entry.name
        ));
    }
    Ok(output)
}
