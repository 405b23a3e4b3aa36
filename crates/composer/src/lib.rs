pub(crate) mod composition;
pub(crate) mod errors;
pub(crate) mod field;
pub(crate) mod kind;

pub use composition::CompositionList;
pub use errors::ComposerError;
pub use field::{CharactersField, DigitsField, Field, WordField, COUNT_RANGE, SYMBOL_ALPHABET};
pub use kind::FieldKind;
