//! Erray - build families of named error kinds from a declarative spec list.
//!
//! Two renditions are provided:
//! - [`build`] validates a runtime spec list and returns an [`ErrorRegistry`]
//!   of [`ErrorKind`]s. Every build yields kinds with their own identity.
//! - [`errors!`] declares specs known at compile time, one concrete type each.
//!
//! ```
//! use erray::{ErrorSpec, Value};
//!
//! let errors = erray::build(vec![
//!     Value::from("InvalidX"),
//!     ErrorSpec::new("InvalidY")
//!         .message("Invalid Y value for this function")
//!         .code(500)
//!         .into(),
//!     ErrorSpec::new("NotFound").code(404).into(),
//! ])?;
//!
//! let err = errors["InvalidY"].new_error();
//! assert!(errors["InvalidY"].is(&err));
//! assert!(!errors["NotFound"].is(&err));
//! assert_eq!(err.code(), Some(500));
//! # Ok::<(), erray::BuildError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod kind;
mod macros;
pub mod registry;
pub mod spec;
pub mod value;

pub use config::{BacktraceMode, Config};
pub use erray_macros::errors;
pub use errors::{BuildError, BuildErrorKind, Result};
pub use inventory;
pub use kind::{ErrorKind, KindError, StaticKind};
pub use registry::{build, ErrorFactory, ErrorRegistry};
pub use spec::{ErrorSpec, Message};
pub use value::{MessageFn, Value};

#[doc(hidden)]
pub mod __private {
    pub use crate::kind::fmt_error;
}
