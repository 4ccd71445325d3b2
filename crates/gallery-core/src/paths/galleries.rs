//! Galleries root resolution.
//!
//! Provides utilities for resolving the galleries root from explicit paths,
//! environment variables, or the default `./gallery` directory.

use std::env;
use std::fmt;
use std::path::PathBuf;

use super::error::PathError;

/// Default galleries root, relative to the working directory.
pub const DEFAULT_GALLERIES_DIR: &str = "gallery";

/// Environment variable that overrides the galleries root.
pub const GALLERIES_DIR_ENV: &str = "GALLERY_ROOT";

/// How the galleries root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleriesDirSource {
    /// The user passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from `GALLERY_ROOT` / `.env`.
    EnvVar,
    /// Fallback default (`./gallery`).
    Default,
}

impl fmt::Display for GalleriesDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

/// Resolution result for the galleries root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleriesDirResolution {
    /// The resolved, absolute path to the galleries root.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: GalleriesDirSource,
}

impl fmt::Display for GalleriesDirResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "galleries_dir = {}", self.path.display())?;
        write!(f, "galleries_source = {}", self.source)
    }
}

/// Expand `~`, trim whitespace and make the path absolute.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(PathError::CurrentDir)
    }
}

/// Resolve the galleries root from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `GALLERY_ROOT` environment variable
/// 3. `./gallery` under the current working directory
pub fn resolve_galleries_dir(explicit: Option<&str>) -> Result<GalleriesDirResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(GalleriesDirResolution {
            path: normalize_user_path(path_str)?,
            source: GalleriesDirSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(GALLERIES_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(GalleriesDirResolution {
                path: normalize_user_path(&env_path)?,
                source: GalleriesDirSource::EnvVar,
            });
        }
    }

    Ok(GalleriesDirResolution {
        path: normalize_user_path(DEFAULT_GALLERIES_DIR)?,
        source: GalleriesDirSource::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn test_resolve_prefers_explicit() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(GALLERIES_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_galleries_dir(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, GalleriesDirSource::Explicit);
        assert!(resolved.path.ends_with("explicit"));
    }

    #[test]
    fn test_resolve_env_value() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(GALLERIES_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_galleries_dir(None).unwrap();
        assert_eq!(resolved.source, GalleriesDirSource::EnvVar);
        assert!(resolved.path.ends_with("from-env"));
    }

    #[test]
    fn test_resolve_blank_env_falls_back_to_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(GALLERIES_DIR_ENV, "   ");

        let resolved = resolve_galleries_dir(None).unwrap();
        assert_eq!(resolved.source, GalleriesDirSource::Default);
        assert!(resolved.path.is_absolute());
        assert!(resolved.path.ends_with(DEFAULT_GALLERIES_DIR));
    }

    #[test]
    fn test_resolve_default_without_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(GALLERIES_DIR_ENV);

        let resolved = resolve_galleries_dir(None).unwrap();
        assert_eq!(resolved.source, GalleriesDirSource::Default);
    }

    #[test]
    fn test_empty_explicit_path_is_rejected() {
        assert!(matches!(
            resolve_galleries_dir(Some("  ")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_display_lists_key_values() {
        let resolution = GalleriesDirResolution {
            path: PathBuf::from("/srv/gallery"),
            source: GalleriesDirSource::EnvVar,
        };
        let text = resolution.to_string();
        assert!(text.contains("galleries_dir = /srv/gallery"));
        assert!(text.contains("galleries_source = env"));
    }
}
