use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path used when turning rendered template paths into targets
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use flask_starter::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("demo/app");
    /// assert_eq!(path.to_str_checked().unwrap(), "demo/app");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns true when the path is relative and never leaves its starting directory.
    ///
    /// # Examples
    /// ```
    /// use flask_starter::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("demo/app/auth.py").is_contained());
    /// assert!(!Path::new("demo/../etc").is_contained());
    /// assert!(!Path::new("/etc/passwd").is_contained());
    /// ```
    fn is_contained(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn is_contained(&self) -> bool {
        !self.as_os_str().is_empty()
            && self.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}
