use crate::cli::Args;
use crate::config::{Config, Settings};
use crate::core::error::ProbeError;
use crate::display::{EXIT_BAD_RESPONSE, EXIT_OK, display_payload, display_result};
use crate::gemini::{GeminiClient, GeminiRequest};
use crate::prompt::resolve_prompt;
use crate::runner::{ProbeOutcome, run_probe};
use std::io::Write;
use tracing::{debug, error};

async fn probe(
    args: &Args,
    env_api_key: Option<String>,
    prompt: &str,
) -> Result<ProbeOutcome, ProbeError> {
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_from(&config_path)?;
    let settings = Settings::resolve(args, env_api_key, config)?;
    debug!(?settings, "Resolved settings");

    let client = GeminiClient::new(&settings)?;
    run_probe(&client, prompt).await
}

/// Run one invocation end to end and return the process exit status.
///
/// `env_api_key` is the value of `GEMINI_API_KEY`, passed in so callers decide
/// where the environment comes from.
pub async fn run(
    args: &Args,
    env_api_key: Option<String>,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> u8 {
    let result = match resolve_prompt(args.text.as_deref(), args.text_file.as_deref()) {
        Ok(prompt) if args.print_payload => {
            return match display_payload(out, &GeminiRequest::from_prompt(&prompt)) {
                Ok(()) => EXIT_OK,
                Err(err) => {
                    error!(error = %err, "Failed to write payload");
                    EXIT_BAD_RESPONSE
                }
            };
        }
        Ok(prompt) => probe(args, env_api_key, &prompt).await,
        Err(err) => Err(err),
    };

    let code = display_result(out, err_out, &result).unwrap_or_else(|err| {
        error!(error = %err, "Failed to write report");
        EXIT_BAD_RESPONSE
    });
    let _ = out.flush();
    code
}
