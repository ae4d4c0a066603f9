/// Build a single spec [`Value`](crate::Value).
///
/// A string literal is a bare name; a braced list of fields is a record.
///
/// ```
/// use erray::{spec, Value};
///
/// let bare = spec!("InvalidX");
/// let record = spec!({ name: "NotFound", code: 404 });
/// let computed = spec!({
///     name: "InvalidXY",
///     message: Value::function(|args| format!("bad {}", args.first().cloned().unwrap_or_default())),
/// });
/// assert_eq!(record.type_name(), "record");
/// # let _ = (bare, computed);
/// ```
#[macro_export]
macro_rules! spec {
    ({ $($key:ident : $value:expr),* $(,)? }) => {
        $crate::Value::record([$((stringify!($key), $crate::Value::from($value))),*])
    };
    ($name:expr) => {
        $crate::Value::from($name)
    };
}

/// Build a spec list, each item written as for [`spec!`].
///
/// ```
/// let registry = erray::build(erray::specs![
///     "InvalidX",
///     { name: "InvalidY", message: "Invalid Y value for this function", code: 500 },
/// ])?;
/// assert_eq!(registry.len(), 2);
/// # Ok::<(), erray::BuildError>(())
/// ```
#[macro_export]
macro_rules! specs {
    ($($item:tt),* $(,)?) => {
        $crate::Value::List(::std::vec![$($crate::spec!($item)),*])
    };
}
