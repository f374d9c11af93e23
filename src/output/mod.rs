//! CLI response formatting and output.
//!
//! Provides the JSON envelope, plain status lines, and exit code mapping.

use rewire::error::Hint;
use rewire::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = response.to_json()?;
    print_line(&payload)
}

/// Write one line to stdout. A closed pipe is not an error.
pub fn print_line(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

/// Human-readable error for text mode, on stderr.
pub fn print_error_text(err: &Error) {
    eprintln!("💥 Error [{}]: {}", err.code.as_str(), err.message);
    if !err.details.is_null() {
        if let Ok(details) = serde_json::to_string(&err.details) {
            eprintln!("   {}", details);
        }
    }
    for hint in &err.hints {
        eprintln!("   hint: {}", hint.message);
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::FileInvalidEncoding => 3,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let value = serde_json::to_value(CliResponse::success(serde_json::json!({"modified": 2})))
            .unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["modified"], 2);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::file_invalid_encoding("client/src/pages/help.tsx", "invalid utf-8");
        let value = serde_json::to_value(CliResponse::<()>::from_error(&err)).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("data").is_none());
        assert_eq!(value["error"]["code"], "file.invalid_encoding");
        assert_eq!(value["error"]["hints"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn error_without_hints_omits_hint_field() {
        let err = Error::internal_io("disk full", Some("write a.tsx".to_string()));
        let value = serde_json::to_value(CliResponse::<()>::from_error(&err)).unwrap();
        assert!(value["error"].get("hints").is_none());
        assert_eq!(value["error"]["details"]["context"], "write a.tsx");
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(exit_code_for_error(ErrorCode::ConfigInvalidJson), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::FileInvalidEncoding), 3);
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    }

    #[test]
    fn map_result_keeps_success_exit_code() {
        let (value, code) = map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
        assert_eq!(code, 0);
        assert_eq!(value.unwrap()["ok"], true);

        let err = Error::config_invalid_value("rules", None, "empty");
        let (value, code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(code, 2);
        assert!(value.is_err());
    }
}
