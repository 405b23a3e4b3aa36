use rand::Rng;

use crate::errors::ComposerError;
use crate::field::Field;

/// The user-ordered sequence of fields whose fragments concatenate into the
/// final password.
///
/// Order is semantically meaningful (concatenation order and display order).
/// Duplicate kinds and duplicate configurations are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionList {
    fields: Vec<Field>,
}

impl CompositionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field at the end of the arrangement.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Remove and return the field at `index`. Remaining fields keep their
    /// relative order.
    pub fn remove(&mut self, index: usize) -> Result<Field, ComposerError> {
        if index >= self.fields.len() {
            return Err(ComposerError::IndexOutOfRange {
                index,
                len: self.fields.len(),
            });
        }
        Ok(self.fields.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Concatenate one fresh fragment per field, in list order, with no
    /// separator. An empty list composes to the empty string. Nothing is
    /// cached; two successive calls draw independent randomness.
    pub fn compose(&self, rng: &mut impl Rng) -> String {
        self.fields.iter().map(|field| field.fragment(rng)).collect()
    }
}

impl FromIterator<Field> for CompositionList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{CharactersField, DigitsField, WordField};
    use crate::kind::FieldKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0DE)
    }

    #[test]
    fn test_empty_list_composes_to_empty_string() {
        assert_eq!(CompositionList::new().compose(&mut rng()), "");
    }

    #[test]
    fn test_compose_concatenates_fragment_lengths() {
        let list: CompositionList = [
            Field::Digits(DigitsField::new(3)),
            Field::Characters(CharactersField::new(2)),
        ]
        .into_iter()
        .collect();

        let password = list.compose(&mut rng());
        assert_eq!(password.chars().count(), 5);
        assert!(password.chars().take(3).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_compose_preserves_list_order() {
        let list: CompositionList = [
            Field::Words(WordField::new("left")),
            Field::Words(WordField::new("right")),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.compose(&mut rng()), "leftright");
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list: CompositionList = [
            Field::new(FieldKind::Words),
            Field::new(FieldKind::Digits),
            Field::new(FieldKind::Characters),
        ]
        .into_iter()
        .collect();

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.kind(), FieldKind::Digits);

        let kinds: Vec<_> = list.iter().map(Field::kind).collect();
        assert_eq!(kinds, vec![FieldKind::Words, FieldKind::Characters]);
    }

    #[test]
    fn test_remove_out_of_range_fails() {
        let mut list = CompositionList::new();
        list.push(Field::new(FieldKind::Words));

        let err = list.remove(3).unwrap_err();
        assert!(matches!(
            err,
            ComposerError::IndexOutOfRange { index: 3, len: 1 }
        ));
    }
}
