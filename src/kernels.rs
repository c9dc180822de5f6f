//! # Kernel Variants
//!
//! Device recipes pick their kernel in one of two ways:
//!
//! | Style | Recipe shape | [`kernels`] result |
//! |-------|--------------|--------------------|
//! | Hardcoded | `depends="... linux-vendor-device"` | `None` |
//! | Selectable | `subpackages="$pkgname-kernel-mainline:kernel_mainline ..."` | flavor → `pkgdesc` |
//!
//! Flavors keep the order the sub-packages were declared in.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ApkbuildError, Result};
use crate::model::{Document, OrderedMap};
use crate::parser::{parse_file, ParseOptions};

/// Whether a `depends` entry names a kernel package (`linux-*`, with an
/// optional version constraint). Firmware packages are not kernels.
pub fn is_kernel_package(depend: &str) -> bool {
    let name = depend
        .split(|c| matches!(c, '<' | '>' | '=' | '~'))
        .next()
        .unwrap_or(depend);
    (name == "linux" || name.starts_with("linux-")) && !name.starts_with("linux-firmware")
}

/// Selectable kernel flavors of a device recipe.
///
/// Returns `None` when a kernel package is hardcoded in `depends`, or when
/// the recipe declares no `<pkgname>-kernel-<flavor>` sub-packages.
pub fn kernels(doc: &Document) -> Option<OrderedMap<String>> {
    if let Some(kernel) = doc.depends.iter().find(|d| is_kernel_package(d)) {
        tracing::debug!(pkgname = %doc.pkgname, kernel = %kernel, "kernel is hardcoded");
        return None;
    }

    let prefix = format!("{}-kernel-", doc.pkgname);
    let mut flavors = OrderedMap::new();
    for (name, metadata) in doc.subpackages.iter() {
        let Some(flavor) = name.strip_prefix(&prefix) else {
            continue;
        };
        let pkgdesc = match metadata {
            Some(metadata) => metadata.pkgdesc.clone(),
            None => {
                tracing::warn!(subpackage = name, "kernel subpackage has no function, using empty description");
                String::new()
            }
        };
        flavors.insert(flavor, pkgdesc);
    }

    if flavors.is_empty() {
        None
    } else {
        Some(flavors)
    }
}

/// Locate `device/<category>/device-<device>/APKBUILD` inside an aports tree.
pub fn find_device_recipe(aports: &Path, device: &str) -> Result<PathBuf> {
    let device_dir = aports.join("device");
    let entries = std::fs::read_dir(&device_dir).map_err(|source| ApkbuildError::Io {
        path: device_dir.clone(),
        source,
    })?;

    let mut categories: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    categories.sort();

    let package = format!("device-{}", device);
    categories
        .iter()
        .map(|category| category.join(&package).join("APKBUILD"))
        .find(|recipe| recipe.is_file())
        .ok_or_else(|| ApkbuildError::Io {
            path: device_dir.join("*").join(&package).join("APKBUILD"),
            source: io::Error::new(io::ErrorKind::NotFound, "device recipe not found"),
        })
}

/// Parse a device's recipe from an aports tree and return its kernel flavors.
pub fn kernels_for_device(
    aports: &Path,
    device: &str,
    opts: &ParseOptions,
) -> Result<Option<OrderedMap<String>>> {
    let recipe = find_device_recipe(aports, device)?;
    let doc = parse_file(&recipe, opts)?;
    Ok(kernels(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubpackageMetadata;

    fn with_desc(pkgdesc: &str) -> Option<SubpackageMetadata> {
        Some(SubpackageMetadata {
            pkgdesc: pkgdesc.into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_is_kernel_package() {
        assert!(is_kernel_package("linux-lg-mako"));
        assert!(is_kernel_package("linux-postmarketos-qcom-msm8974>=5.0"));
        assert!(is_kernel_package("linux"));
        assert!(!is_kernel_package("linux-firmware-qcom"));
        assert!(!is_kernel_package("postmarketos-base"));
        assert!(!is_kernel_package("mkbootimg"));
    }

    #[test]
    fn test_hardcoded_kernel() {
        let mut doc = Document {
            pkgname: "device-lg-mako".into(),
            depends: vec!["postmarketos-base".into(), "linux-lg-mako".into()],
            ..Default::default()
        };
        doc.subpackages
            .insert("device-lg-mako-kernel-x", with_desc("ignored"));
        assert_eq!(kernels(&doc), None);
    }

    #[test]
    fn test_flavors_in_declaration_order() {
        let mut doc = Document {
            pkgname: "device-wileyfox-crackling".into(),
            depends: vec!["postmarketos-base".into()],
            ..Default::default()
        };
        doc.subpackages.insert(
            "device-wileyfox-crackling-kernel-mainline",
            with_desc("Mainline kernel (no modem)"),
        );
        doc.subpackages.insert(
            "device-wileyfox-crackling-kernel-mainline-modem",
            with_desc("Mainline kernel (with modem)"),
        );
        doc.subpackages
            .insert("device-wileyfox-crackling-nonfree-firmware", with_desc("fw"));
        doc.subpackages
            .insert("device-wileyfox-crackling-kernel-downstream", None);

        let flavors = kernels(&doc).unwrap();
        let pairs: Vec<(&str, &str)> = flavors.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("mainline", "Mainline kernel (no modem)"),
                ("mainline-modem", "Mainline kernel (with modem)"),
                ("downstream", ""),
            ]
        );
    }

    #[test]
    fn test_no_kernel_subpackages() {
        let doc = Document {
            pkgname: "device-x".into(),
            ..Default::default()
        };
        assert_eq!(kernels(&doc), None);
    }
}
