use crate::core::error::ProbeError;
use std::fs;
use std::path::Path;

/// Page text used when no `--text` or `--text-file` is given.
pub const SAMPLE_PAGE_TEXT: &str =
    "This is a test page content about machine learning and artificial intelligence.";

const TITLE_INSTRUCTIONS: &str = "Analyze the following text from a webpage and provide ONLY a concise, descriptive title (max 10 words).\n    Do not include \"Title:\" prefix. Just the title text.\n\n    Text:\n    ";

/// Build the title-generation prompt around a page's text.
pub fn title_prompt(page_text: &str) -> String {
    format!("{}{}", TITLE_INSTRUCTIONS, page_text)
}

/// The prompt sent by a default run.
pub fn default_prompt() -> String {
    title_prompt(SAMPLE_PAGE_TEXT)
}

/// Build the prompt from explicit text, a text file, or the sample text.
pub fn resolve_prompt(text: Option<&str>, text_file: Option<&Path>) -> Result<String, ProbeError> {
    match (text, text_file) {
        (Some(text), _) => Ok(title_prompt(text)),
        (None, Some(path)) => {
            let contents = fs::read_to_string(path)?;
            Ok(title_prompt(contents.trim_end()))
        }
        (None, None) => Ok(default_prompt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_prompt_ends_with_sample_text() {
        let prompt = default_prompt();
        assert!(prompt.starts_with("Analyze the following text from a webpage"));
        assert!(prompt.ends_with("    Text:\n    This is a test page content about machine learning and artificial intelligence."));
    }

    #[test]
    fn default_prompt_is_stable() {
        assert_eq!(default_prompt(), default_prompt());
    }

    #[test]
    fn page_text_is_inserted_verbatim() {
        let prompt = title_prompt("Rust ownership, explained");
        assert!(prompt.contains("Do not include \"Title:\" prefix."));
        assert!(prompt.ends_with("Rust ownership, explained"));
    }

    #[test]
    fn resolve_defaults_to_sample() {
        assert_eq!(resolve_prompt(None, None).unwrap(), default_prompt());
    }

    #[test]
    fn resolve_reads_text_file_without_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Page about borrow checking").unwrap();
        let prompt = resolve_prompt(None, Some(file.path())).unwrap();
        assert_eq!(prompt, title_prompt("Page about borrow checking"));
    }

    #[test]
    fn resolve_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_prompt(None, Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, ProbeError::Io { .. }));
    }
}
