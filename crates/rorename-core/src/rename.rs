//! Renaming documents after their repair order number.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::RenameError;
use crate::models::vehicle::ScanType;

/// What to do when the target file name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Leave both files alone and report an error.
    #[default]
    Fail,
    /// Replace the existing file.
    Overwrite,
}

/// Target file name for a repair order number and scan type.
pub fn target_name(repair_order_number: &str, scan_type: ScanType) -> Option<String> {
    scan_type
        .suffix()
        .map(|suffix| format!("{}{}.pdf", repair_order_number, suffix))
}

/// Rename `path` to `{repair_order_number}{suffix}.pdf` in the same directory.
///
/// Returns the new file name.
pub fn rename_document(
    path: &Path,
    repair_order_number: &str,
    scan_type: ScanType,
    policy: CollisionPolicy,
) -> Result<String, RenameError> {
    let new_name = target_name(repair_order_number, scan_type).ok_or(RenameError::NotEligible)?;

    let original_name = path
        .file_name()
        .ok_or_else(|| RenameError::InvalidPath(path.to_path_buf()))?;
    let directory = path
        .parent()
        .ok_or_else(|| RenameError::InvalidPath(path.to_path_buf()))?;
    let target = directory.join(&new_name);

    if target == path {
        info!("{} already has its target name", new_name);
        return Ok(new_name);
    }

    if policy == CollisionPolicy::Fail && target.exists() {
        error!(
            "Error renaming {} to {}: target already exists",
            original_name.to_string_lossy(),
            new_name
        );
        return Err(RenameError::TargetExists(target));
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            info!("Renamed: {} -> {}", original_name.to_string_lossy(), new_name);
            Ok(new_name)
        }
        Err(source) => {
            error!(
                "Error renaming {} to {}: {}",
                original_name.to_string_lossy(),
                new_name,
                source
            );
            Err(RenameError::Io {
                from: path.to_path_buf(),
                to: target,
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_target_name() {
        assert_eq!(target_name("123", ScanType::PreScanOnly).as_deref(), Some("123p.pdf"));
        assert_eq!(target_name("123", ScanType::PreAndPostScan).as_deref(), Some("123pp.pdf"));
        assert_eq!(target_name("123", ScanType::Unknown), None);
    }

    #[test]
    fn test_rename_in_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scan~~tmp~~.pdf");
        fs::write(&source, b"%PDF").unwrap();

        let new_name =
            rename_document(&source, "123456", ScanType::PreScanOnly, CollisionPolicy::Fail).unwrap();

        assert_eq!(new_name, "123456p.pdf");
        assert!(!source.exists());
        assert_eq!(fs::read(dir.path().join("123456p.pdf")).unwrap(), b"%PDF");
    }

    #[test]
    fn test_unknown_scan_type_is_not_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scan~~tmp~~.pdf");
        fs::write(&source, b"%PDF").unwrap();

        let result = rename_document(&source, "1", ScanType::Unknown, CollisionPolicy::Fail);

        assert!(matches!(result, Err(RenameError::NotEligible)));
        assert!(source.exists());
    }

    #[test]
    fn test_collision_fails_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("b~~tmp~~.pdf");
        let existing = dir.path().join("42pp.pdf");
        fs::write(&source, b"new").unwrap();
        fs::write(&existing, b"old").unwrap();

        let result = rename_document(&source, "42", ScanType::PreAndPostScan, CollisionPolicy::Fail);

        assert!(matches!(result, Err(RenameError::TargetExists(_))));
        assert_eq!(fs::read(&existing).unwrap(), b"old");
        assert!(source.exists());
    }

    #[test]
    fn test_collision_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("b~~tmp~~.pdf");
        let existing = dir.path().join("42pp.pdf");
        fs::write(&source, b"new").unwrap();
        fs::write(&existing, b"old").unwrap();

        let new_name =
            rename_document(&source, "42", ScanType::PreAndPostScan, CollisionPolicy::Overwrite)
                .unwrap();

        assert_eq!(new_name, "42pp.pdf");
        assert_eq!(fs::read(&existing).unwrap(), b"new");
        assert!(!source.exists());
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone~~tmp~~.pdf");

        let result = rename_document(&source, "5", ScanType::PreScanOnly, CollisionPolicy::Fail);

        assert!(matches!(result, Err(RenameError::Io { .. })));
    }
}
