use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;
use crate::span::Span;

/// File name looked up by [`EncodingOptions::find`].
pub const CONFIG_FILE: &str = "symvar.toml";

/// How program integers are mapped to logic sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegerEncoding {
    /// Unbounded mathematical integers; widths live in the program type only.
    #[default]
    Int,
    /// Fixed-width bit-vectors of the representation type's width.
    BitVec,
}

/// Encoding-session options, from the `[encoding]` section of symvar.toml.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingOptions {
    pub integers: IntegerEncoding,
    /// Reject a second symbolic variable claiming an already used base name.
    pub check_collisions: bool,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            integers: IntegerEncoding::Int,
            check_collisions: true,
        }
    }
}

impl EncodingOptions {
    /// Load options from a symvar.toml file.
    pub fn load(toml_path: &Path) -> Result<EncodingOptions, Diagnostic> {
        let content = std::fs::read_to_string(toml_path).map_err(|e| {
            Diagnostic::error(
                format!("cannot read '{}': {}", toml_path.display(), e),
                Span::dummy(),
            )
        })?;
        Self::parse(&content).map_err(|d| d.with_note(format!("in {}", toml_path.display())))
    }

    /// Section-aware minimal TOML parsing. Keys outside `[encoding]` are ignored.
    pub fn parse(content: &str) -> Result<EncodingOptions, Diagnostic> {
        let mut options = EncodingOptions::default();
        let mut current_section = String::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            if current_section != "encoding" {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim().trim_matches('"');
            // Strip a trailing comment, then quotes.
            let value = value.split('#').next().unwrap_or("").trim().trim_matches('"');

            match key {
                "integers" => {
                    options.integers = match value {
                        "int" => IntegerEncoding::Int,
                        "bitvec" => IntegerEncoding::BitVec,
                        other => {
                            return Err(Diagnostic::error(
                                format!("invalid integer encoding '{}'", other),
                                Span::dummy(),
                            )
                            .with_help("expected \"int\" or \"bitvec\"".to_string()))
                        }
                    }
                }
                "check_collisions" => {
                    options.check_collisions = match value {
                        "true" => true,
                        "false" => false,
                        other => {
                            return Err(Diagnostic::error(
                                format!("check_collisions must be a boolean, found '{}'", other),
                                Span::dummy(),
                            ))
                        }
                    }
                }
                other => {
                    tracing::warn!(key = other, "ignoring unknown [encoding] key");
                }
            }
        }

        Ok(options)
    }

    /// Try to find a symvar.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_for_empty_file() {
        let options = EncodingOptions::parse("").unwrap();
        assert_eq!(options, EncodingOptions::default());
        assert_eq!(options.integers, IntegerEncoding::Int);
        assert!(options.check_collisions);
    }

    #[test]
    fn test_parse_encoding_section() {
        let options = EncodingOptions::parse(
            "# verification settings\n[encoding]\nintegers = \"bitvec\"  # fixed width\ncheck_collisions = false\n",
        )
        .unwrap();
        assert_eq!(options.integers, IntegerEncoding::BitVec);
        assert!(!options.check_collisions);
    }

    #[test]
    fn test_other_sections_ignored() {
        let options =
            EncodingOptions::parse("[solver]\nintegers = \"bitvec\"\n[encoding]\n").unwrap();
        assert_eq!(options.integers, IntegerEncoding::Int);
    }

    #[test]
    fn test_invalid_integer_encoding() {
        let err = EncodingOptions::parse("[encoding]\nintegers = \"real\"\n").unwrap_err();
        assert!(err.message.contains("real"));
        assert!(err.help.is_some());
    }

    #[test]
    fn test_invalid_bool() {
        let err = EncodingOptions::parse("[encoding]\ncheck_collisions = yes\n").unwrap_err();
        assert!(err.message.contains("boolean"));
    }

    #[test]
    fn test_load_and_find() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join(CONFIG_FILE);
        fs::write(&toml_path, "[encoding]\nintegers = \"bitvec\"\n").unwrap();

        let nested = dir.path().join("contracts").join("token");
        fs::create_dir_all(&nested).unwrap();
        let found = EncodingOptions::find(&nested).unwrap();
        assert_eq!(found, toml_path);

        let options = EncodingOptions::load(&found).unwrap();
        assert_eq!(options.integers, IntegerEncoding::BitVec);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EncodingOptions::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.message.contains("cannot read"));
    }
}
