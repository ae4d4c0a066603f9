//! Error spec descriptors and the parse step from raw [`Value`]s.

use crate::errors::{BuildError, Result};
use crate::value::{MessageFn, Value};

/// How a kind produces its message.
#[derive(Clone, Debug)]
pub enum Message {
    /// Default message, overridable by a string passed at construction.
    Static(String),
    /// Message computed from all construction arguments.
    Computed(MessageFn),
}

/// Description of one error kind.
///
/// Nothing is checked here; specs are validated when passed to
/// [`build`](crate::build).
///
/// ```
/// use erray::ErrorSpec;
///
/// let spec = ErrorSpec::new("InvalidY")
///     .message("Invalid Y value for this function")
///     .code(500);
/// assert_eq!(spec.code, Some(500));
/// ```
#[derive(Clone, Debug)]
pub struct ErrorSpec {
    pub name: String,
    pub message: Option<Message>,
    pub code: Option<i64>,
}

impl ErrorSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
            code: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(Message::Static(message.into()));
        self
    }

    /// Compute the message from the construction arguments.
    ///
    /// `f` receives however many arguments the caller passed, possibly none.
    pub fn message_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Value]) -> String + Send + Sync + 'static,
    {
        self.message = Some(Message::Computed(MessageFn::new(f)));
        self
    }

    pub fn code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }
}

/// Specs go through the same validation as hand-built records.
impl From<ErrorSpec> for Value {
    fn from(spec: ErrorSpec) -> Self {
        let mut fields = vec![("name", Value::String(spec.name))];
        match spec.message {
            Some(Message::Static(s)) => fields.push(("message", Value::String(s))),
            Some(Message::Computed(f)) => fields.push(("message", Value::Function(f))),
            None => {}
        }
        if let Some(code) = spec.code {
            fields.push(("code", Value::Int(code)));
        }
        Value::record(fields)
    }
}

/// Whether `name` is a non-empty run of ASCII letters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Absent and null fields count as not provided.
fn field<'a>(fields: &'a crate::value::Record, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Parse the spec at position `index`, stopping at the first violation.
///
/// Duplicate detection needs the surrounding registry and happens in
/// [`crate::registry`].
pub(crate) fn parse(index: usize, element: &Value) -> Result<ErrorSpec> {
    let (name, message, code) = match element {
        Value::String(_) => (element, None, None),
        Value::Error(err) => {
            return Err(BuildError::SpecIsErrorInstance {
                index,
                found: err.to_string(),
            })
        }
        Value::Record(fields) => {
            let name = match field(fields, "name") {
                Some(Value::String(s)) if s.is_empty() => None,
                other => other,
            }
            .ok_or_else(|| BuildError::MissingName {
                index,
                found: format!("{element:?}"),
            })?;

            let message = match field(fields, "message") {
                None => None,
                Some(Value::String(s)) => Some(Message::Static(s.clone())),
                Some(Value::Function(f)) => Some(Message::Computed(f.clone())),
                Some(other) => {
                    return Err(BuildError::InvalidMessageType {
                        index,
                        type_name: other.type_name(),
                        found: format!("{other:?}"),
                    })
                }
            };

            let code = match field(fields, "code") {
                None => None,
                Some(value) => Some(parse_code(value).map_err(|expected| {
                    BuildError::InvalidCodeType {
                        index,
                        expected,
                        type_name: value.type_name(),
                        found: format!("{value:?}"),
                    }
                })?),
            };

            (name, message, code)
        }
        other => {
            return Err(BuildError::InvalidSpecShape {
                index,
                found: format!("{other:?}"),
            })
        }
    };

    let Value::String(name) = name else {
        return Err(BuildError::InvalidNameType {
            index,
            found: format!("{name:?}"),
        });
    };

    if !is_valid_name(name) {
        return Err(BuildError::InvalidNameFormat {
            index,
            name: name.clone(),
        });
    }

    Ok(ErrorSpec {
        name: name.clone(),
        message,
        code,
    })
}

const EXPECTED_NUMBER: &str = "a number";
const EXPECTED_INTEGER: &str = "an integer within the i64 range";

/// Integers, or floats holding an exact integer that fits in an `i64`.
///
/// On failure returns what was expected instead.
fn parse_code(value: &Value) -> std::result::Result<i64, &'static str> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(n)
            if n.is_finite() && n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
        {
            Ok(*n as i64)
        }
        other => Err(other.as_f64().map_or(EXPECTED_NUMBER, |_| EXPECTED_INTEGER)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BuildErrorKind;

    fn parse_err(value: Value) -> BuildError {
        parse(0, &value).expect_err("parse should fail")
    }

    #[test]
    fn bare_string_becomes_name_only_spec() {
        let spec = parse(0, &Value::from("InvalidX")).expect("valid spec");
        assert_eq!(spec.name, "InvalidX");
        assert!(spec.message.is_none());
        assert!(spec.code.is_none());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let value = Value::record([
            ("name", Value::from("X")),
            ("message", Value::Null),
            ("code", Value::Null),
        ]);
        let spec = parse(0, &value).expect("valid spec");
        assert!(spec.message.is_none());
        assert!(spec.code.is_none());
    }

    #[test]
    fn empty_name_is_missing() {
        let err = parse_err(Value::record([("name", "")]));
        assert_eq!(err.kind(), BuildErrorKind::MissingName);
    }

    #[test]
    fn non_string_name_is_rejected_after_field_checks() {
        let err = parse_err(Value::record([("name", Value::from(5))]));
        assert_eq!(err.kind(), BuildErrorKind::InvalidNameType);

        // message is checked before the name's type
        let err = parse_err(Value::record([
            ("name", Value::from(5)),
            ("message", Value::from(true)),
        ]));
        assert_eq!(err.kind(), BuildErrorKind::InvalidMessageType);
    }

    #[test]
    fn integral_float_code_is_accepted() {
        let value = Value::record([("name", Value::from("X")), ("code", Value::from(404.0))]);
        let spec = parse(0, &value).expect("valid spec");
        assert_eq!(spec.code, Some(404));
    }

    #[test]
    fn fractional_float_code_is_rejected() {
        let err = parse_err(Value::record([
            ("name", Value::from("X")),
            ("code", Value::from(1.5)),
        ]));
        let BuildError::InvalidCodeType {
            expected,
            type_name,
            ..
        } = &err
        else {
            panic!("expected invalid code type");
        };
        assert_eq!(*expected, "an integer within the i64 range");
        assert_eq!(*type_name, "float");
        assert!(err.to_string().contains("to be an integer"), "{err}");
    }

    #[test]
    fn code_beyond_i64_is_rejected_as_out_of_range() {
        let err = parse_err(Value::record([
            ("name", Value::from("X")),
            ("code", Value::Float(u64::MAX as f64)),
        ]));
        let BuildError::InvalidCodeType { expected, .. } = err else {
            panic!("expected invalid code type");
        };
        assert_eq!(expected, "an integer within the i64 range");
    }

    #[test]
    fn non_numeric_code_expects_a_number() {
        let err = parse_err(Value::record([
            ("name", Value::from("X")),
            ("code", Value::from("not-a-number")),
        ]));
        let BuildError::InvalidCodeType { expected, .. } = &err else {
            panic!("expected invalid code type");
        };
        assert_eq!(*expected, "a number");
        assert!(err.to_string().contains("to be a number"), "{err}");
    }

    #[test]
    fn zero_code_is_kept() {
        let value = Value::record([("name", Value::from("X")), ("code", Value::from(0))]);
        let spec = parse(0, &value).expect("valid spec");
        assert_eq!(spec.code, Some(0));
    }

    #[test]
    fn lists_and_numbers_are_not_specs() {
        assert_eq!(parse_err(Value::from(3)).kind(), BuildErrorKind::InvalidSpecShape);
        assert_eq!(parse_err(Value::Null).kind(), BuildErrorKind::InvalidSpecShape);
        assert_eq!(
            parse_err(Value::from(vec!["A"])).kind(),
            BuildErrorKind::InvalidSpecShape
        );
    }

    #[test]
    fn name_format_requires_ascii_letters() {
        assert!(is_valid_name("NotFound"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Invalid Name"));
        assert!(!is_valid_name("Http404"));
        assert!(!is_valid_name("Ünicode"));
    }

    #[test]
    fn builder_round_trips_through_value() {
        let value = Value::from(ErrorSpec::new("Teapot").message("short and stout").code(418));
        let spec = parse(3, &value).expect("valid spec");
        assert_eq!(spec.name, "Teapot");
        assert_eq!(spec.code, Some(418));
        assert!(matches!(spec.message, Some(Message::Static(ref s)) if s == "short and stout"));
    }
}
