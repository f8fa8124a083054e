//! Host installed-package registry access.
//!
//! The audit pipeline only needs two read-only queries against the host
//! package manager: "which packages of a given type are installed" and
//! "which version of a package is actually present". [`InstalledRegistry`]
//! captures exactly that surface, and [`ComposerRegistry`] implements it on
//! top of Composer's `vendor/composer/installed.json`.

mod composer;

pub use composer::{ComposerRegistry, RegistryError};

/// Read-only view of the host package manager's installed-package set.
pub trait InstalledRegistry {
    /// Raw identifiers (`vendor/name`) of installed packages with the given
    /// package type.
    fn packages_of_type(&self, package_type: &str) -> Vec<String>;

    /// The resolved installed version of a package, or `None` when the
    /// package is declared but not actually present. The missing case is
    /// expected and recoverable, so it is not an error.
    fn resolve_version(&self, name: &str) -> Option<String>;
}
