//! Region files: the country code, output path and search points for one run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;

const DEFAULT_RADIUS: u32 = 100;

/// One coordinate the locator endpoint is queried around.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPoint {
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in the endpoint's distance unit.
    pub radius: u32,
    /// Human-readable place name, used only in logs and dry-run output.
    pub label: Option<String>,
}

impl SearchPoint {
    /// `label (postal_code)` when labelled, otherwise the postal code alone.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{label} ({})", self.postal_code),
            None => self.postal_code.clone(),
        }
    }
}

/// A validated region ready to drive a collection run.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    /// File stem of the region file, e.g. `us`.
    pub name: String,
    /// Two-letter country code sent as the `country` form field.
    pub country: String,
    pub output: PathBuf,
    pub points: Vec<SearchPoint>,
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    country: String,
    output: PathBuf,
    #[serde(default = "default_radius")]
    radius: u32,
    points: Vec<PointEntry>,
}

#[derive(Debug, Deserialize)]
struct PointEntry {
    postal_code: String,
    latitude: f64,
    longitude: f64,
    radius: Option<u32>,
    label: Option<String>,
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

/// Resolve a `--region` argument to a file path.
///
/// Anything that looks like a path (contains a separator or a `.yaml`/`.yml`
/// extension) is used as-is; a bare name such as `au` maps to
/// `<regions_dir>/au.yaml`.
#[must_use]
pub fn resolve_region_path(reference: &str, regions_dir: &Path) -> PathBuf {
    let as_path = Path::new(reference);
    let has_yaml_ext = as_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
        });
    let has_separator = reference.contains(std::path::MAIN_SEPARATOR) || reference.contains('/');

    if has_yaml_ext || has_separator {
        as_path.to_path_buf()
    } else {
        regions_dir.join(format!("{reference}.yaml"))
    }
}

/// List every `*.yaml` / `*.yml` file in `regions_dir`, sorted by path.
///
/// # Errors
///
/// Returns `ConfigError::RegionFileIo` if the directory cannot be read.
pub fn discover_region_files(regions_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let io_err = |e: std::io::Error| ConfigError::RegionFileIo {
        path: regions_dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(regions_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if is_yaml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and validate a region from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_region(path: &Path) -> Result<RegionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RegionFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("region")
        .to_string();

    region_from_yaml(&name, &content).map_err(|err| match err {
        ConfigError::RegionFileParse { source, .. } => ConfigError::RegionFileParse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

fn region_from_yaml(name: &str, content: &str) -> Result<RegionConfig, ConfigError> {
    let file: RegionFile =
        serde_yaml::from_str(content).map_err(|e| ConfigError::RegionFileParse {
            path: name.to_string(),
            source: e,
        })?;

    validate_region(name, &file)?;

    let points = file
        .points
        .into_iter()
        .map(|entry| SearchPoint {
            postal_code: entry.postal_code.trim().to_string(),
            latitude: entry.latitude,
            longitude: entry.longitude,
            radius: entry.radius.unwrap_or(file.radius),
            label: entry
                .label
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        })
        .collect();

    Ok(RegionConfig {
        name: name.to_string(),
        country: file.country,
        output: file.output,
        points,
    })
}

fn validate_region(name: &str, file: &RegionFile) -> Result<(), ConfigError> {
    let country_ok =
        file.country.len() == 2 && file.country.chars().all(|c| c.is_ascii_uppercase());
    if !country_ok {
        return Err(ConfigError::Validation(format!(
            "region '{name}' has invalid country '{}'; expected a two-letter uppercase code",
            file.country
        )));
    }

    if file.output.as_os_str().is_empty() {
        return Err(ConfigError::Validation(format!(
            "region '{name}' must name an output file"
        )));
    }

    if file.radius == 0 {
        return Err(ConfigError::Validation(format!(
            "region '{name}' has radius 0; must be greater than zero"
        )));
    }

    if file.points.is_empty() {
        return Err(ConfigError::Validation(format!(
            "region '{name}' has no search points"
        )));
    }

    let mut seen_postal_codes = HashSet::new();

    for point in &file.points {
        let postal_code = point.postal_code.trim();
        if postal_code.is_empty() {
            return Err(ConfigError::Validation(format!(
                "region '{name}' has a search point with an empty postal code"
            )));
        }

        if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
            return Err(ConfigError::Validation(format!(
                "search point {postal_code} has latitude {} outside [-90, 90]",
                point.latitude
            )));
        }

        if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
            return Err(ConfigError::Validation(format!(
                "search point {postal_code} has longitude {} outside [-180, 180]",
                point.longitude
            )));
        }

        if point.radius == Some(0) {
            return Err(ConfigError::Validation(format!(
                "search point {postal_code} has radius 0; must be greater than zero"
            )));
        }

        if !seen_postal_codes.insert(postal_code.to_string()) {
            return Err(ConfigError::Validation(format!(
                "duplicate search point postal code: '{postal_code}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "regions_test.rs"]
mod tests;
