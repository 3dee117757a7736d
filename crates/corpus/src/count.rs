use serde::Serialize;
use serde_json::Value;

use crate::ValidationError;

/// A validated number of paragraphs to request.
///
/// Zero is a valid count; it simply yields no corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ParagraphCount(u32);

impl ParagraphCount {
    pub fn new(value: u64, max: u32) -> Result<Self, ValidationError> {
        match u32::try_from(value) {
            Ok(count) if count <= max => Ok(Self(count)),
            _ => Err(ValidationError::TooLarge { max }),
        }
    }

    /// Validates the `paragraphsQty` field of a request body.
    ///
    /// Accepts a JSON integer or a string of ASCII digits, the form HTML
    /// number inputs submit. Anything else is rejected.
    pub fn from_json(value: Option<&Value>, max: u32) -> Result<Self, ValidationError> {
        match value {
            None | Some(Value::Null) => Err(ValidationError::Missing),
            Some(Value::Number(number)) => {
                let count = number.as_u64().ok_or(ValidationError::NotAnInteger)?;
                Self::new(count, max)
            }
            Some(Value::String(raw)) => Self::parse(raw, max),
            Some(_) => Err(ValidationError::NotAnInteger),
        }
    }

    /// Validates a count given as text, e.g. a query-string parameter.
    pub fn parse(raw: &str, max: u32) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::Missing);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotAnInteger);
        }
        // All digits: the only parse failure left is overflow.
        let count = raw
            .parse::<u64>()
            .map_err(|_| ValidationError::TooLarge { max })?;
        Self::new(count, max)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}
