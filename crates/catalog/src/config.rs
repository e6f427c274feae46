use std::{fs, io, path::Path};

use rootline_solvers::report::ReportConfig;
use thiserror::Error;

/// Errors that can occur when loading a report config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a [`ReportConfig`] from a JSON file.
///
/// Missing fields keep their defaults, so a file can override only the
/// settings it names:
///
/// ```json
/// { "bisection": { "max_iters": 40, "tolerance": 1e-9 }, "selection": "given" }
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config.
pub fn load(path: &Path) -> Result<ReportConfig, ConfigFileError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses a [`ReportConfig`] from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid config.
pub fn parse(text: &str) -> Result<ReportConfig, ConfigFileError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_solvers::report::StartSelection;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse("{}").expect("valid"), ReportConfig::default());
    }

    #[test]
    fn overrides_named_settings() {
        let config = parse(r#"{"secant": {"max_iters": 3, "tolerance": 1e-3}, "selection": "given"}"#)
            .expect("valid");

        assert_eq!(config.secant.max_iters(), 3);
        assert_eq!(config.selection, StartSelection::Given);
        assert_eq!(config.newton, ReportConfig::default().newton);
    }

    #[test]
    fn rejects_invalid_settings() {
        let result = parse(r#"{"bisection": {"max_iters": 0, "tolerance": 1e-6}}"#);
        assert!(matches!(result, Err(ConfigFileError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load(Path::new("/nonexistent/rootline.json"));
        assert!(matches!(result, Err(ConfigFileError::Io(_))));
    }
}
