use std::collections::HashMap;
use std::error::Error as StdError;
use std::ops::Index;

use tracing::{debug, trace};

use crate::config::Config;
use crate::errors::{BuildError, Result};
use crate::kind::ErrorKind;
use crate::spec;
use crate::value::Value;

/// Kinds built from one spec list, keyed by name.
#[derive(Debug)]
pub struct ErrorRegistry {
    kinds: HashMap<String, ErrorKind>,
}

impl ErrorRegistry {
    pub fn get(&self, name: &str) -> Option<&ErrorKind> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns all kind names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    /// Find the kind `err` was constructed from, if it belongs to this registry.
    pub fn classify(&self, err: &(dyn StdError + 'static)) -> Option<&ErrorKind> {
        self.kinds.values().find(|kind| kind.is(err))
    }

    /// Kinds declared with `code`, sorted by name.
    pub fn find_by_code(&self, code: i64) -> Vec<&ErrorKind> {
        let mut kinds: Vec<_> = self
            .kinds
            .values()
            .filter(|kind| kind.code() == Some(code))
            .collect();
        kinds.sort_by(|a, b| a.name().cmp(b.name()));
        kinds
    }
}

impl Index<&str> for ErrorRegistry {
    type Output = ErrorKind;

    /// # Panics
    ///
    /// Panics if no kind is registered under `name`.
    fn index(&self, name: &str) -> &ErrorKind {
        match self.kinds.get(name) {
            Some(kind) => kind,
            None => panic!("no error kind named '{name}' in registry"),
        }
    }
}

/// Builds registries with a fixed [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ErrorFactory {
    config: Config,
}

impl ErrorFactory {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `specs` and build a registry from them.
    ///
    /// Validation stops at the first violation; no registry is produced on failure.
    ///
    /// ```
    /// use erray::{ErrorFactory, ErrorSpec, Value};
    ///
    /// let registry = ErrorFactory::default().build(vec![
    ///     Value::from("InvalidX"),
    ///     ErrorSpec::new("NotFound").code(404).into(),
    /// ])?;
    /// assert_eq!(registry.names(), ["InvalidX", "NotFound"]);
    /// # Ok::<(), erray::BuildError>(())
    /// ```
    pub fn build(&self, specs: impl Into<Value>) -> Result<ErrorRegistry> {
        let specs = specs.into();
        self.build_from(&specs).inspect_err(|err| {
            debug!(error = %err, "rejected error spec list");
        })
    }

    fn build_from(&self, specs: &Value) -> Result<ErrorRegistry> {
        let Value::List(elements) = specs else {
            return Err(BuildError::InvalidSpecContainer {
                found: format!("{specs:?}"),
            });
        };
        if elements.is_empty() {
            return Err(BuildError::EmptySpecContainer);
        }

        let mut kinds = HashMap::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let spec = spec::parse(index, element)?;
            if kinds.contains_key(&spec.name) {
                return Err(BuildError::DuplicateName {
                    index,
                    name: spec.name,
                });
            }

            trace!(name = %spec.name, code = ?spec.code, "registered error kind");
            kinds.insert(
                spec.name.clone(),
                ErrorKind::new(spec, self.config.backtrace),
            );
        }

        debug!(kinds = kinds.len(), "built error registry");
        Ok(ErrorRegistry { kinds })
    }
}

/// Build a registry with the default [`Config`].
pub fn build(specs: impl Into<Value>) -> Result<ErrorRegistry> {
    ErrorFactory::default().build(specs)
}
