//! Link-time catalog of the kinds declared with [`errors!`](crate::errors!).

pub struct KindInfo {
    pub name: &'static str,
    pub code: Option<i64>,
    pub default_message: Option<&'static str>,
    /// Module the kind was declared in.
    pub module: &'static str,
    pub line: u32,
}

inventory::collect!(KindInfo);

/// Returns all declared kinds, sorted by name and then module.
pub fn kinds() -> Vec<&'static KindInfo> {
    let mut kinds: Vec<_> = inventory::iter::<KindInfo>.into_iter().collect();
    kinds.sort_by_key(|k| (k.name, k.module));
    kinds
}

/// Kinds declared under `name`, in any module.
pub fn by_name(name: &str) -> Vec<&'static KindInfo> {
    kinds().into_iter().filter(|k| k.name == name).collect()
}

/// Kinds declared with `code`.
pub fn by_code(code: i64) -> Vec<&'static KindInfo> {
    kinds()
        .into_iter()
        .filter(|k| k.code == Some(code))
        .collect()
}
