use serde::{Deserialize, Serialize};
use std::fmt;

/// A string-or-number field normalized to text.
///
/// Identifiers, amounts, postal codes and the like are accepted as either strings or
/// integers at the call site, but travel as text and compare as text, like the gateway's own
/// string typed ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ScalarRepr", into = "String")]
pub struct Scalar(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarRepr {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<ScalarRepr> for Scalar {
    fn from(repr: ScalarRepr) -> Self {
        match repr {
            ScalarRepr::Text(text) => Scalar(text),
            ScalarRepr::Number(number) => Scalar(number.to_string()),
            ScalarRepr::Bool(flag) => Scalar(flag.to_string()),
        }
    }
}

impl Scalar {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank values and numeric zero count as absent.
    ///
    /// Whitespace-only text is blank too, even though the gateway would see it as a value.
    pub fn is_absent(&self) -> bool {
        self.is_blank() || self.as_number().is_some_and(|n| n == 0.0)
    }

    /// True for absent values and for numeric values below one, such as `-3`.
    /// Non numeric text is never "below one".
    pub fn is_below_one(&self) -> bool {
        self.is_blank() || self.as_number().is_some_and(|n| n < 1.0)
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn as_number(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        scalar.0
    }
}

impl From<&Scalar> for Scalar {
    fn from(scalar: &Scalar) -> Self {
        scalar.clone()
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar(value.clone())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar(value.to_string())
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
