//! Error kinds and the errors constructed from them.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::sync::Arc;

use crate::config::BacktraceMode;
use crate::spec::{ErrorSpec, Message};
use crate::value::Value;

struct KindInner {
    name: String,
    message: Option<Message>,
    code: Option<i64>,
    backtrace: BacktraceMode,
}

/// A constructible error kind, produced by [`build`](crate::build).
///
/// Cloning is cheap and clones compare equal. Identity is the allocation made
/// when the kind was built, so kinds with the same name from different builds
/// are distinct.
#[derive(Clone)]
pub struct ErrorKind(Arc<KindInner>);

impl ErrorKind {
    pub(crate) fn new(spec: ErrorSpec, backtrace: BacktraceMode) -> Self {
        Self(Arc::new(KindInner {
            name: spec.name,
            message: spec.message,
            code: spec.code,
            backtrace,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn code(&self) -> Option<i64> {
        self.0.code
    }

    /// The static default message, if the spec gave one.
    pub fn default_message(&self) -> Option<&str> {
        match &self.0.message {
            Some(Message::Static(s)) => Some(s),
            _ => None,
        }
    }

    pub fn has_message_fn(&self) -> bool {
        matches!(self.0.message, Some(Message::Computed(_)))
    }

    /// Construct an error with no arguments.
    pub fn new_error(&self) -> KindError {
        self.with_args(std::iter::empty::<Value>())
    }

    /// Construct an error overriding the default message.
    ///
    /// Kinds with a message function receive `message` as their only argument.
    pub fn with_message(&self, message: impl Into<String>) -> KindError {
        self.with_args([Value::String(message.into())])
    }

    /// Construct an error from an ordered argument list.
    ///
    /// A message function is called with every argument. Otherwise a leading
    /// string argument replaces the default message.
    ///
    /// ```
    /// use erray::{ErrorSpec, Value};
    ///
    /// let registry = erray::build(vec![ErrorSpec::new("InvalidXY").message_fn(|args| {
    ///     let arg = |i: usize| args.get(i).cloned().unwrap_or_default();
    ///     format!("Invalid values x: {} and y: {} for input.", arg(0), arg(1))
    /// })])?;
    /// let err = registry["InvalidXY"].with_args([1, 2]);
    /// assert_eq!(err.message(), Some("Invalid values x: 1 and y: 2 for input."));
    /// let err = registry["InvalidXY"].new_error();
    /// assert_eq!(err.message(), Some("Invalid values x: null and y: null for input."));
    /// # Ok::<(), erray::BuildError>(())
    /// ```
    pub fn with_args<I, V>(&self, args: I) -> KindError
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        let message = match (&self.0.message, args.first()) {
            (Some(Message::Computed(f)), _) => Some(f.call(&args)),
            (_, Some(Value::String(s))) => Some(s.clone()),
            (Some(Message::Static(s)), _) => Some(s.clone()),
            (None, _) => None,
        };
        KindError {
            kind: self.clone(),
            message,
            backtrace: self.0.backtrace.capture(),
        }
    }

    /// Whether `err` was constructed from this kind.
    pub fn is(&self, err: &(dyn StdError + 'static)) -> bool {
        err.downcast_ref::<KindError>()
            .is_some_and(|e| e.kind == *self)
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorKind")
            .field("name", &self.0.name)
            .field("code", &self.0.code)
            .field("message", &self.0.message)
            .finish()
    }
}

/// An error constructed from an [`ErrorKind`].
///
/// `name` and `code` are fixed by the kind.
pub struct KindError {
    kind: ErrorKind,
    message: Option<String>,
    backtrace: Backtrace,
}

impl KindError {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn code(&self) -> Option<i64> {
        self.kind.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Backtrace captured at construction, subject to [`BacktraceMode`].
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn is(&self, kind: &ErrorKind) -> bool {
        self.kind == *kind
    }
}

impl fmt::Debug for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindError")
            .field("name", &self.name())
            .field("code", &self.code())
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_error(f, self.name(), self.message())
    }
}

impl StdError for KindError {}

impl From<KindError> for Value {
    fn from(err: KindError) -> Self {
        Value::Error(Arc::new(err))
    }
}

/// `Name: message`, or just `Name` when there is no message.
pub fn fmt_error(f: &mut fmt::Formatter<'_>, name: &str, message: Option<&str>) -> fmt::Result {
    match message {
        Some(m) if !m.is_empty() => write!(f, "{name}: {m}"),
        _ => f.write_str(name),
    }
}

/// Implemented by the types generated with [`errors!`](crate::errors!).
///
/// Each generated type is its own kind, so `downcast_ref::<T>()` is the
/// identity check.
pub trait StaticKind: StdError + Send + Sync + 'static {
    const NAME: &'static str;
    const CODE: Option<i64>;

    fn message(&self) -> Option<&str>;

    fn backtrace(&self) -> &Backtrace;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> Option<i64> {
        Self::CODE
    }
}
