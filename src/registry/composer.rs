use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::InstalledRegistry;

/// Location of the installed-package registry inside a Composer project.
const INSTALLED_JSON: &str = "vendor/composer/installed.json";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no installed-package registry at {path} (run `composer install` first)")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Registry backed by Composer's `vendor/composer/installed.json`.
#[derive(Debug)]
pub struct ComposerRegistry {
    packages: Vec<InstalledPackage>,
}

#[derive(Debug, Clone, Deserialize)]
struct InstalledPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(rename = "type", default = "default_package_type")]
    package_type: String,
}

// Composer treats a missing `type` field as "library".
fn default_package_type() -> String {
    "library".to_string()
}

/// Composer 2 wraps the package list in an object; Composer 1 wrote a bare
/// array. Both shapes are still found in the wild.
#[derive(Deserialize)]
#[serde(untagged)]
enum InstalledJson {
    Wrapped { packages: Vec<InstalledPackage> },
    Bare(Vec<InstalledPackage>),
}

impl ComposerRegistry {
    /// Loads the registry for the project rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the project has no
    /// `vendor/composer/installed.json`, and [`RegistryError::Parse`] when
    /// the file exists but is not a recognizable registry.
    pub fn load(project_root: &Path) -> Result<Self, RegistryError> {
        let path = project_root.join(INSTALLED_JSON);

        if !path.exists() {
            return Err(RegistryError::NotFound { path });
        }

        let content = fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| RegistryError::Parse { path, source })
    }

    /// Parses registry content directly. Used by `load` and by tests.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let parsed: InstalledJson = serde_json::from_str(content)?;
        let packages = match parsed {
            InstalledJson::Wrapped { packages } => packages,
            InstalledJson::Bare(packages) => packages,
        };

        Ok(Self { packages })
    }
}

impl InstalledRegistry for ComposerRegistry {
    fn packages_of_type(&self, package_type: &str) -> Vec<String> {
        self.packages
            .iter()
            .filter(|p| p.package_type == package_type)
            .map(|p| p.name.clone())
            .collect()
    }

    fn resolve_version(&self, name: &str) -> Option<String> {
        let package = self.packages.iter().find(|p| p.name == name)?;
        let version = package.version.as_deref()?;

        // Composer stores pretty versions like "v1.2.3"; the audit API
        // expects the bare semver form.
        Some(version.trim_start_matches('v').to_string())
    }
}
