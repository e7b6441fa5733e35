/// Ordered character sequence defining a cyclic group for shift arithmetic.
///
/// Process-wide instances exist for the Latin and Hebrew scripts. Shift
/// ciphers work modulo `len()`; Atbash mirrors positions end-to-end.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    letters: &'static [char],
}

/// The 26-letter Latin alphabet, upper case.
pub static LATIN: Alphabet = Alphabet {
    letters: &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ],
};

/// The Hebrew alphabet in traditional order, with each final form
/// directly after its base letter (27 glyphs total). Mirroring runs
/// over this full sequence.
pub static HEBREW: Alphabet = Alphabet {
    letters: &[
        'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ך', 'ל', 'מ', 'ם', 'נ', 'ן', 'ס',
        'ע', 'פ', 'ף', 'צ', 'ץ', 'ק', 'ר', 'ש', 'ת',
    ],
};

impl Alphabet {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Zero-based position of `c`, or None if `c` is not a member.
    pub fn position(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }

    /// Letter at `index` modulo the alphabet length.
    pub fn char_at(&self, index: usize) -> char {
        self.letters[index % self.letters.len()]
    }

    /// End-to-end mirror: the letter at `len - 1 - position(c)`.
    pub fn mirror(&self, c: char) -> Option<char> {
        let index = self.position(c)?;
        Some(self.letters[self.letters.len() - 1 - index])
    }

    pub fn letters(&self) -> &'static [char] {
        self.letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_positions() {
        assert_eq!(LATIN.len(), 26);
        assert_eq!(LATIN.position('A'), Some(0));
        assert_eq!(LATIN.position('Z'), Some(25));
        assert_eq!(LATIN.position('a'), None);
        assert_eq!(LATIN.char_at(27), 'B');
        assert!(!LATIN.is_empty());
    }

    #[test]
    fn test_latin_mirror() {
        assert_eq!(LATIN.mirror('A'), Some('Z'));
        assert_eq!(LATIN.mirror('Z'), Some('A'));
        assert_eq!(LATIN.mirror('M'), Some('N'));
        assert_eq!(LATIN.mirror('!'), None);
    }

    #[test]
    fn test_hebrew_mirror_includes_finals() {
        assert_eq!(HEBREW.len(), 27);
        assert_eq!(HEBREW.mirror('א'), Some('ת'));
        assert_eq!(HEBREW.mirror('ב'), Some('ש'));
        assert_eq!(HEBREW.mirror('ת'), Some('א'));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        assert!(LATIN.contains('Q'));
        assert!(!LATIN.contains('q'));
        assert!(HEBREW.contains('ך'));
    }
}
