use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::ComposerError;
use crate::kind::FieldKind;

/// Symbol alphabet used by [`CharactersField`].
pub const SYMBOL_ALPHABET: [char; 6] = ['!', '#', '_', '-', '&', '%'];

/// Valid range for digit / character counts.
pub const COUNT_RANGE: RangeInclusive<u32> = 1..=100;

fn clamp_count(count: u32) -> u32 {
    count.clamp(*COUNT_RANGE.start(), *COUNT_RANGE.end())
}

/* ------------------------------------------------------------------------- */
/* Field                                                                     */
/* ------------------------------------------------------------------------- */

/// One generator unit producing a random string fragment under its own rule
/// and configuration.
///
/// Fragment generation never fails: degenerate configurations (an empty word
/// list) yield the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Words(WordField),
    Digits(DigitsField),
    Characters(CharactersField),
}

impl Field {
    /// Construct a default-configured field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Words => Field::Words(WordField::default()),
            FieldKind::Digits => Field::Digits(DigitsField::default()),
            FieldKind::Characters => Field::Characters(CharactersField::default()),
        }
    }

    /// Registry entry point: construct a default-configured field from a tag
    /// string (`words`, `digits`, `characters`).
    pub fn create(tag: &str) -> Result<Self, ComposerError> {
        let kind: FieldKind = tag
            .parse()
            .map_err(|_| ComposerError::UnknownKind(tag.to_string()))?;
        Ok(Field::new(kind))
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Words(_) => FieldKind::Words,
            Field::Digits(_) => FieldKind::Digits,
            Field::Characters(_) => FieldKind::Characters,
        }
    }

    /// Produce one random fragment. Configuration is left untouched; every
    /// call draws fresh randomness from `rng`.
    pub fn fragment(&self, rng: &mut impl Rng) -> String {
        match self {
            Field::Words(f) => f.fragment(rng),
            Field::Digits(f) => f.fragment(rng),
            Field::Characters(f) => f.fragment(rng),
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Variants                                                                  */
/* ------------------------------------------------------------------------- */

/// Word-list field: one line of user-entered text, chosen uniformly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordField {
    text: String,
}

impl WordField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw multi-line text exactly as entered. Persisted verbatim; trimming
    /// and blank-line filtering happen only at generation time.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Candidate words: lines trimmed, blank lines dropped.
    pub fn candidates(&self) -> Vec<&str> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn fragment(&self, rng: &mut impl Rng) -> String {
        self.candidates()
            .choose(rng)
            .map(|word| (*word).to_string())
            .unwrap_or_default()
    }
}

/// Digit-run field: `count` characters from `0-9`, each drawn independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitsField {
    count: u32,
}

impl DigitsField {
    /// Counts outside [`COUNT_RANGE`] are clamped into it.
    pub fn new(count: u32) -> Self {
        Self {
            count: clamp_count(count),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = clamp_count(count);
    }

    pub fn fragment(&self, rng: &mut impl Rng) -> String {
        (0..self.count)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

impl Default for DigitsField {
    fn default() -> Self {
        Self {
            count: *COUNT_RANGE.start(),
        }
    }
}

/// Symbol-run field: `count` characters from [`SYMBOL_ALPHABET`], each drawn
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct CharactersField {
    count: u32,
}

impl CharactersField {
    /// Counts outside [`COUNT_RANGE`] are clamped into it.
    pub fn new(count: u32) -> Self {
        Self {
            count: clamp_count(count),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = clamp_count(count);
    }

    pub fn fragment(&self, rng: &mut impl Rng) -> String {
        (0..self.count)
            .map(|_| SYMBOL_ALPHABET[rng.gen_range(0..SYMBOL_ALPHABET.len())])
            .collect()
    }
}

impl Default for CharactersField {
    fn default() -> Self {
        Self {
            count: *COUNT_RANGE.start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xB1AD)
    }

    #[test]
    fn test_word_fragment_is_one_of_the_candidates() {
        let field = WordField::new("alpha\nbeta\ngamma");
        let mut rng = rng();
        for _ in 0..50 {
            let word = field.fragment(&mut rng);
            assert!(["alpha", "beta", "gamma"].contains(&word.as_str()));
        }
    }

    #[test]
    fn test_word_fragment_covers_every_candidate_eventually() {
        let field = WordField::new("alpha\nbeta\ngamma");
        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(field.fragment(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_word_candidates_are_trimmed_and_filtered() {
        let field = WordField::new("  alpha  \n\n   \nbeta\n");
        assert_eq!(field.candidates(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_word_list_yields_empty_fragment() {
        let mut rng = rng();
        assert_eq!(WordField::default().fragment(&mut rng), "");
        assert_eq!(WordField::new("  \n \n").fragment(&mut rng), "");
    }

    #[test]
    fn test_word_text_is_kept_verbatim() {
        let field = WordField::new("  alpha  \n\nbeta");
        assert_eq!(field.text(), "  alpha  \n\nbeta");
    }

    #[test]
    fn test_digits_fragment_length_and_alphabet() {
        let field = DigitsField::new(17);
        let mut rng = rng();
        let fragment = field.fragment(&mut rng);
        assert_eq!(fragment.chars().count(), 17);
        assert!(fragment.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_characters_fragment_length_and_alphabet() {
        let field = CharactersField::new(23);
        let mut rng = rng();
        let fragment = field.fragment(&mut rng);
        assert_eq!(fragment.chars().count(), 23);
        assert!(fragment.chars().all(|c| SYMBOL_ALPHABET.contains(&c)));
    }

    #[test]
    fn test_counts_are_clamped_on_construction_and_update() {
        assert_eq!(DigitsField::new(0).count(), 1);
        assert_eq!(DigitsField::new(500).count(), 100);
        assert_eq!(CharactersField::new(0).count(), 1);

        let mut field = CharactersField::new(5);
        field.set_count(1000);
        assert_eq!(field.count(), 100);
    }

    #[test]
    fn test_registry_creates_defaults_by_tag() {
        assert_eq!(Field::create("words").unwrap().kind(), FieldKind::Words);
        assert_eq!(Field::create("digits").unwrap().kind(), FieldKind::Digits);
        assert_eq!(
            Field::create("characters").unwrap().kind(),
            FieldKind::Characters
        );
    }

    #[test]
    fn test_registry_rejects_unknown_tags() {
        let err = Field::create("emoji").unwrap_err();
        assert!(matches!(err, ComposerError::UnknownKind(tag) if tag == "emoji"));
    }
}
