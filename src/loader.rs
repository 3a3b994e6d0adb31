//! Series file discovery and parsing.
//!
//! Each series lives in its own text file. Every non-empty line holds at
//! least five whitespace-separated fields; fields 2, 3 and 4 are the x, y
//! and z coordinates and the first two are ignored. Files in a data
//! directory are named `1.txt`, `2.txt`, ... and read in numeric order.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{LoadError, Result};
use crate::geom::Point3;
use crate::model::SceneModel;
use crate::series::Series;

const X_FIELD: usize = 2;
const FIELD_COUNT: usize = 5;

/// Parse one series from a reader. `path` is only used for error messages.
pub fn read_series_from<R: BufRead>(
    reader: R,
    name: impl Into<String>,
    path: &Path,
) -> Result<Series> {
    let mut series = Series::new(name);
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < FIELD_COUNT {
            return Err(LoadError::MissingField {
                path: path.to_path_buf(),
                line: index + 1,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }
        let coordinate = |field: &str| {
            let value = field
                .parse::<f64>()
                .map_err(|source| LoadError::InvalidNumber {
                    path: path.to_path_buf(),
                    line: index + 1,
                    value: field.to_string(),
                    source,
                })?;
            if !value.is_finite() {
                return Err(LoadError::NonFinite {
                    path: path.to_path_buf(),
                    line: index + 1,
                    value: field.to_string(),
                });
            }
            Ok(value)
        };
        series.push(Point3::new(
            coordinate(fields[X_FIELD])?,
            coordinate(fields[X_FIELD + 1])?,
            coordinate(fields[X_FIELD + 2])?,
        ));
    }
    Ok(series)
}

/// Read one series file.
pub fn read_series(path: &Path, name: impl Into<String>) -> Result<Series> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let series = read_series_from(BufReader::new(file), name, path)?;
    log::debug!("read {} points from {}", series.len(), path.display());
    Ok(series)
}

/// List the numbered series files in `dir`.
///
/// Files named `<n>.txt` are collected and sorted by `n`; the run stops at
/// the first missing number starting from 1.
pub fn discover_series_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut numbered = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        // Only canonical names; `01.txt` or `+1.txt` would alias `1.txt`.
        let Some(number) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| {
                stem.parse::<u32>()
                    .ok()
                    .filter(|number| number.to_string() == stem)
            })
        else {
            continue;
        };
        numbered.push((number, path));
    }
    numbered.sort_by_key(|(number, _)| *number);

    let mut files = Vec::with_capacity(numbered.len());
    let mut expected = 1;
    for (number, path) in numbered {
        if number != expected {
            if number > expected {
                log::warn!(
                    "{}: expected series {expected}.txt, ignoring it and later files",
                    path.display()
                );
                break;
            }
            continue;
        }
        files.push(path);
        expected += 1;
    }
    Ok(files)
}

/// Load a model from explicit series files, named `Series 1`, `Series 2`, ...
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<SceneModel> {
    let series = paths
        .iter()
        .enumerate()
        .map(|(index, path)| read_series(path.as_ref(), format!("Series {}", index + 1)))
        .collect::<Result<Vec<_>>>()?;
    log::info!("loaded {} series", series.len());
    Ok(SceneModel::new(series))
}

/// Discover and load every numbered series file in `dir`.
pub fn load_dir(dir: &Path) -> Result<SceneModel> {
    let files = discover_series_files(dir)?;
    if files.is_empty() {
        return Err(LoadError::NoSeries(dir.to_path_buf()));
    }
    load_files(&files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Series> {
        read_series_from(Cursor::new(text), "test", Path::new("test.txt"))
    }

    #[test]
    fn reads_coordinates_from_fields_two_to_four() {
        let series = parse("a 0 1.5 2 3\n\n  b\t1   -4 5.25 6e1\n").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points().get(0), Some(Point3::new(1.5, 2.0, 3.0)));
        assert_eq!(series.points().get(1), Some(Point3::new(-4.0, 5.25, 60.0)));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let series = parse("0 0 1 2 3 extra fields\n").unwrap();
        assert_eq!(series.points().get(0), Some(Point3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn short_lines_are_rejected() {
        let err = parse("0 0 1 2 3\n0 0 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                line: 2,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn comma_decimals_are_rejected() {
        let err = parse("0 0 1,5 2 3\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, value, .. } => {
                assert_eq!(line, 1);
                assert_eq!(value, "1,5");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        for (text, bad) in [
            ("0 0 1 2 3\n0 0 inf 5 6\n", "inf"),
            ("0 0 1 2 3\n0 0 4 NaN 1\n", "NaN"),
            ("0 0 1 2 3\n0 0 4 5 -infinity\n", "-infinity"),
        ] {
            match parse(text).unwrap_err() {
                LoadError::NonFinite { line, value, .. } => {
                    assert_eq!(line, 2);
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn discovery_ignores_non_canonical_numbers() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["01.txt", "+1.txt", "1.txt", "002.txt", "2.txt"] {
            fs::write(dir.path().join(name), "0 0 1 2 3\n").unwrap();
        }
        let files = discover_series_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1.txt", "2.txt"]);
    }

    #[test]
    fn discovery_stops_at_first_gap() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1.txt", "2.txt", "3.txt", "5.txt", "notes.txt", "4.csv"] {
            fs::write(dir.path().join(name), "0 0 1 2 3\n").unwrap();
        }
        let files = discover_series_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1.txt", "2.txt", "3.txt"]);
    }

    #[test]
    fn discovery_orders_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for n in 1..=11 {
            fs::write(dir.path().join(format!("{n}.txt")), "0 0 1 2 3\n").unwrap();
        }
        let files = discover_series_files(dir.path()).unwrap();
        assert_eq!(files.len(), 11);
        assert!(files[9].ends_with("10.txt"));
        assert!(files[10].ends_with("11.txt"));
    }

    #[test]
    fn load_dir_builds_named_normalized_model() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "0 0 1 1 1\n0 1 3 5 1\n").unwrap();
        fs::write(dir.path().join("2.txt"), "0 0 2 2 4\n").unwrap();
        let model = load_dir(dir.path()).unwrap();
        assert_eq!(model.series().len(), 2);
        assert_eq!(model.series()[0].name(), "Series 1");
        assert_eq!(model.series()[1].name(), "Series 2");
        assert_eq!(model.size(), Point3::new(2.0, 4.0, 3.0));
    }

    #[test]
    fn load_dir_without_series_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_dir(dir.path()), Err(LoadError::NoSeries(_))));
        let missing = dir.path().join("missing");
        assert!(matches!(
            load_dir(&missing),
            Err(LoadError::NotADirectory(_))
        ));
    }
}
