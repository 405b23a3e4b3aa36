use composer::{
    CharactersField, CompositionList, DigitsField, Field, FieldKind, WordField, COUNT_RANGE,
};
use serde_json::Value;

use crate::document::{FieldRecord, SessionDocument};
use crate::errors::SessionError;

/// Map every field to its record, preserving list order, wrapped in the
/// `inputs` envelope.
pub fn encode(list: &CompositionList) -> SessionDocument {
    SessionDocument {
        inputs: list.iter().map(encode_field).collect(),
    }
}

fn encode_field(field: &Field) -> FieldRecord {
    let input = match field {
        // Raw text verbatim, blank lines included; candidate filtering is a
        // generation-time concern.
        Field::Words(f) => Value::from(f.text()),
        Field::Digits(f) => Value::from(f.count()),
        Field::Characters(f) => Value::from(f.count()),
    };
    FieldRecord {
        kind: field.kind().to_string(),
        input,
    }
}

/// Rebuild a composition list from a document, in record order.
///
/// Each record's `type` is resolved through the field registry before its
/// payload shape is validated, so an unknown tag and a malformed payload
/// surface as distinct errors. Out-of-range counts are clamped into
/// [`COUNT_RANGE`]; a non-integer count is malformed.
pub fn decode(doc: &SessionDocument) -> Result<CompositionList, SessionError> {
    doc.inputs.iter().map(decode_field).collect()
}

fn decode_field(record: &FieldRecord) -> Result<Field, SessionError> {
    let kind: FieldKind = record
        .kind
        .parse()
        .map_err(|_| SessionError::UnrecognizedFieldType(record.kind.clone()))?;

    match kind {
        FieldKind::Words => {
            let text = record
                .input
                .as_str()
                .ok_or_else(|| malformed(kind, "a string", &record.input))?;
            Ok(Field::Words(WordField::new(text)))
        }
        FieldKind::Digits => {
            let count = decode_count(kind, &record.input)?;
            Ok(Field::Digits(DigitsField::new(count)))
        }
        FieldKind::Characters => {
            let count = decode_count(kind, &record.input)?;
            Ok(Field::Characters(CharactersField::new(count)))
        }
    }
}

fn decode_count(kind: FieldKind, input: &Value) -> Result<u32, SessionError> {
    let raw = input
        .as_i64()
        .ok_or_else(|| malformed(kind, "an integer", input))?;
    let clamped = raw.clamp(
        i64::from(*COUNT_RANGE.start()),
        i64::from(*COUNT_RANGE.end()),
    );
    Ok(clamped as u32)
}

fn malformed(kind: FieldKind, expected: &'static str, input: &Value) -> SessionError {
    SessionError::MalformedRecord {
        kind,
        expected,
        input: input.clone(),
    }
}
