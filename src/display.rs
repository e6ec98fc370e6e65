use crate::core::error::ProbeError;
use crate::gemini::GeminiRequest;
use crate::runner::ProbeOutcome;
use console::style;
use std::io::{self, Write};

/// The request reached the server, or failed on the wire.
pub const EXIT_OK: u8 = 0;
/// A 200 response could not be read as a title.
pub const EXIT_BAD_RESPONSE: u8 = 1;
/// Nothing was sent: configuration or local IO failed.
pub const EXIT_CONFIG: u8 = 2;

fn display_json(out: &mut impl Write, body: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{}", style("Response JSON:").bold())?;
    let pretty = serde_json::to_string_pretty(body).map_err(io::Error::other)?;
    writeln!(out, "{}", pretty)
}

/// Write the stdout part of the report for a request that reached the server.
pub fn display_outcome(out: &mut impl Write, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Success {
            status,
            body,
            title,
        } => {
            writeln!(out, "Status Code: {}", status.as_u16())?;
            display_json(out, body)?;
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                style("Generated Title:").bold().green(),
                title
            )
        }
        ProbeOutcome::HttpError { status, body } => {
            writeln!(out, "Status Code: {}", status.as_u16())?;
            writeln!(out, "{}", style("Error Response:").bold().red())?;
            writeln!(out, "{}", body)
        }
        ProbeOutcome::Unreadable { status, body, .. } => {
            writeln!(out, "Status Code: {}", status.as_u16())?;
            match body {
                Some(body) => display_json(out, body),
                None => Ok(()),
            }
        }
    }
}

fn display_error(err_out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(err_out, "{} {}", style("Error:").bold().red(), message)
}

/// One-line report for a transport failure.
pub fn display_exception(out: &mut impl Write, err: &ProbeError) -> io::Result<()> {
    let description = err.to_string().replace(['\r', '\n'], " ");
    writeln!(out, "{} {}", style("Exception:").bold().yellow(), description)
}

/// Print the request body without sending it.
pub fn display_payload(out: &mut impl Write, payload: &GeminiRequest) -> io::Result<()> {
    let pretty = serde_json::to_string_pretty(payload).map_err(io::Error::other)?;
    writeln!(out, "{}", pretty)
}

/// Report a run's result and return the process exit status.
///
/// The report, including the status line and JSON of an unreadable 200 and
/// the `Exception:` line of a transport failure, goes to `out`. Shape and
/// configuration failures are also described on `err_out`.
pub fn display_result(
    out: &mut impl Write,
    err_out: &mut impl Write,
    result: &Result<ProbeOutcome, ProbeError>,
) -> io::Result<u8> {
    match result {
        Ok(outcome) => {
            display_outcome(out, outcome)?;
            if let ProbeOutcome::Unreadable { error, .. } = outcome {
                out.flush()?;
                display_error(err_out, error)?;
            }
        }
        Err(err) if err.is_transport() => display_exception(out, err)?,
        Err(err) => display_error(err_out, &err.to_string())?,
    }
    Ok(exit_status(result))
}

/// Exit status for a run's result. This is the only place exit codes are
/// decided.
pub fn exit_status(result: &Result<ProbeOutcome, ProbeError>) -> u8 {
    match result {
        Ok(ProbeOutcome::Success { .. } | ProbeOutcome::HttpError { .. }) => EXIT_OK,
        Ok(ProbeOutcome::Unreadable { .. }) => EXIT_BAD_RESPONSE,
        Err(ProbeError::Network(_)) => EXIT_OK,
        Err(ProbeError::MissingField { .. } | ProbeError::Serialization(_)) => EXIT_BAD_RESPONSE,
        Err(ProbeError::Config(_) | ProbeError::Io { .. }) => EXIT_CONFIG,
    }
}
