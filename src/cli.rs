use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Send one title-generation request to the Gemini API and report the result", long_about = None)]
pub struct Args {
    /// Page text to generate a title for (defaults to a built-in sample)
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the page text from a file
    #[arg(long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// API host, without the /v1beta path
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// API key (overrides GEMINI_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file path [default: ~/.gemprobe/config.yaml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the request body and exit without sending it
    #[arg(long)]
    pub print_payload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::try_parse_from(["gemprobe"]).unwrap();
        assert!(args.text.is_none());
        assert!(args.text_file.is_none());
        assert!(!args.print_payload);
    }

    #[test]
    fn text_and_text_file_conflict() {
        let result = Args::try_parse_from(["gemprobe", "--text", "a", "--text-file", "b.txt"]);
        assert!(result.is_err());
    }
}
