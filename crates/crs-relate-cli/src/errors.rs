use console::style;
use crs_relate_core::error::RelateError;
use std::process::ExitCode;

use crate::output::OutputWriter;

/// Exit status for a rejected request (bad CRS, bad WKT, missing input)
const EXIT_REJECTED: u8 = 2;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None, suggestions: Vec::new() }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
        }
    }
}

/// Short machine-readable name of a request error
fn rejection_kind(err: &RelateError) -> &'static str {
    match err {
        RelateError::UnknownCrs { .. } => "unknown_crs",
        RelateError::AreaOfUseUndefined { .. } => "area_of_use_undefined",
        RelateError::InvalidWkt { .. } => "invalid_wkt",
        RelateError::MissingInput { .. } => "missing_input",
        _ => "invalid_input",
    }
}

/// Build a user-facing error for a rejected request
pub fn rejection(err: &RelateError) -> CliError {
    let error = CliError::new("Request rejected").with_context(err.to_string());

    match err {
        RelateError::UnknownCrs { .. } => error
            .with_suggestion("Check the authority and code, e.g. EPSG:4326")
            .with_suggestion("Test an identifier with: crs-relate area --crs <ID>"),
        RelateError::AreaOfUseUndefined { .. } => error
            .with_suggestion("Use an authority code (e.g. EPSG:2193) rather than a PROJ string")
            .with_suggestion("Or define the area under [areas] in the config file"),
        RelateError::InvalidWkt { index, .. } => error.with_suggestion(format!(
            "Check geometry #{} against the WKT grammar, e.g. POINT (174.77 -41.29)",
            index
        )),
        RelateError::MissingInput { name } => {
            error.with_suggestion(format!("Provide the '{}' input (--{})", name, name))
        }
        _ => error.with_suggestion(r#"Check the request body: {"wkt": "...", "crs": "..."}"#),
    }
}

/// Print an error and choose the exit status
pub fn report(err: &anyhow::Error, output: &OutputWriter) -> ExitCode {
    match err.downcast_ref::<RelateError>() {
        Some(relate_err) if relate_err.is_invalid_input() => {
            tracing::debug!(error = %relate_err, "Request rejected");
            if output.is_json() {
                output.rejection(rejection_kind(relate_err), relate_err);
            } else {
                rejection(relate_err).display();
            }
            ExitCode::from(EXIT_REJECTED)
        }
        _ => {
            output.error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_crs_suggestions() {
        let err = RelateError::UnknownCrs {
            identifier: "WPSG:4326".to_string(),
            reason: "crs not found".to_string(),
        };
        let cli_error = rejection(&err);

        assert_eq!(cli_error.message, "Request rejected");
        assert!(cli_error.context.unwrap().contains("WPSG:4326"));
        assert_eq!(cli_error.suggestions.len(), 2);
    }

    #[test]
    fn test_invalid_wkt_names_geometry() {
        let err = RelateError::InvalidWkt { index: 4, reason: "bad".to_string() };
        let cli_error = rejection(&err);
        assert!(cli_error.suggestions[0].contains("#4"));
        assert_eq!(rejection_kind(&err), "invalid_wkt");
    }

    #[test]
    fn test_missing_input_flag() {
        let err = RelateError::MissingInput { name: "crs".to_string() };
        assert!(rejection(&err).suggestions[0].contains("--crs"));
    }
}
