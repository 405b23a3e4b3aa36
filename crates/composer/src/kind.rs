use strum::{Display, EnumIter, EnumString};

/// Tag identifying one field variant.
///
/// The lowercase tag strings (`words`, `digits`, `characters`) double as the
/// `type` values of the persisted session document, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Words,
    Digits,
    Characters,
}
