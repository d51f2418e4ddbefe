//! Export configuration from environment variables.

use std::path::PathBuf;

use log::info;

use crate::export::{FrameSink, PngFileExporter, TerminalExporter};
use crate::inline::Iterm2Framer;

/// Where and how finished frames are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Write PNG files here instead of streaming to the terminal.
    pub output: Option<PathBuf>,
    /// Prefix each inline image with a cursor move.
    pub position_cursor: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: None,
            position_cursor: true,
        }
    }
}

impl ExportConfig {
    /// Read `SNAKE_FRAME_OUTPUT` and `SNAKE_FRAME_NO_CURSOR`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output = lookup("SNAKE_FRAME_OUTPUT")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let no_cursor = lookup("SNAKE_FRAME_NO_CURSOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            output,
            position_cursor: !no_cursor,
        }
    }

    /// Build the sink this configuration describes.
    pub fn sink(&self) -> Box<dyn FrameSink> {
        match &self.output {
            Some(path) => {
                info!("inline image output disabled, writing {}", path.display());
                Box::new(PngFileExporter::new(path.clone()))
            }
            None => Box::new(TerminalExporter::stdout(Iterm2Framer {
                position_cursor: self.position_cursor,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_stream_to_terminal_with_cursor() {
        let cfg = ExportConfig::from_vars(|_| None);
        assert_eq!(cfg, ExportConfig::default());
    }

    #[test]
    fn output_path_is_trimmed_and_blank_means_unset() {
        let env = vars(&[("SNAKE_FRAME_OUTPUT", "  /tmp/frame.png ")]);
        let cfg = ExportConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(cfg.output, Some(PathBuf::from("/tmp/frame.png")));

        let env = vars(&[("SNAKE_FRAME_OUTPUT", "   ")]);
        let cfg = ExportConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(cfg.output, None);
    }

    #[test]
    fn no_cursor_accepts_one_or_true() {
        for value in ["1", "true", "TRUE"] {
            let env = vars(&[("SNAKE_FRAME_NO_CURSOR", value)]);
            assert!(!ExportConfig::from_vars(|k| env.get(k).cloned()).position_cursor);
        }
        let env = vars(&[("SNAKE_FRAME_NO_CURSOR", "0")]);
        assert!(ExportConfig::from_vars(|k| env.get(k).cloned()).position_cursor);
    }
}
