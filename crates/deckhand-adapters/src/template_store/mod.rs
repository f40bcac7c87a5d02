//! Template store adapters.
//!
//! Both stores resolve logical names (`manifest_master.yml`, `nls`) against a
//! template root: the embedded built-in set or a user directory.

mod builtin;
mod directory;

pub use builtin::BuiltinTemplateStore;
pub use directory::DirectoryTemplateStore;

/// Normalize a relative path to forward slashes.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
