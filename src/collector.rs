//! Inventory collection for npm-asset packages.
//!
//! Composer re-hosts JavaScript packages as pseudo-packages of type
//! `npm-asset`, mangling scoped names (`@scope/pkg` is stored as
//! `npm-asset/scope--pkg`) to fit its own naming rules. This module walks the
//! host registry, reverses the mangling, and collects the `{name, version}`
//! pairs the audit request is built from.

use tracing::debug;

use crate::model::Inventory;
use crate::registry::InstalledRegistry;

/// Composer package type under which npm packages are re-hosted.
pub const ASSET_TYPE: &str = "npm-asset";

/// Restores the original npm package name from a mangled identifier segment.
///
/// A segment containing `--` is a scoped name: the first `--` becomes `/`
/// and the result gains an `@` prefix. Only the first occurrence is replaced,
/// so names whose unscoped part contains `--` survive the round trip
/// (`scope--my--pkg` is `@scope/my--pkg`). Segments without `--` are
/// unscoped names and are returned unchanged.
pub fn revert_name(segment: &str) -> String {
    match segment.split_once("--") {
        Some((scope, rest)) => format!("@{}/{}", scope, rest),
        None => segment.to_string(),
    }
}

/// Collects the normalized npm dependencies installed in the host registry.
///
/// Entries whose identifier does not carry the `npm-asset/` prefix are
/// skipped silently. Entries whose version cannot be resolved (declared but
/// not actually installed) are skipped with a debug-level note; registry
/// inconsistencies are expected and never fatal.
pub fn collect_inventory(registry: &dyn InstalledRegistry) -> Inventory {
    let mut inventory = Inventory::new();

    for package in registry.packages_of_type(ASSET_TYPE) {
        let Some((prefix, segment)) = package.split_once('/') else {
            continue;
        };
        if prefix != ASSET_TYPE {
            continue;
        }

        match registry.resolve_version(&package) {
            Some(version) => inventory.insert(revert_name(segment), version),
            None => debug!("{} is not installed, skipping", package),
        }
    }

    inventory
}
