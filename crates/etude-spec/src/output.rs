//! Output specification types.

use serde::{Deserialize, Serialize};

/// Output format (file type) produced by a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// PNG image rendered by the engraver.
    Png,
    /// PDF document rendered by the engraver.
    Pdf,
    /// SVG image rendered by the engraver.
    Svg,
    /// WAV audio rendered by the playback backend.
    Wav,
}

impl OutputFormat {
    /// Returns the expected file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
            OutputFormat::Wav => "wav",
        }
    }

    /// Checks if this format is produced by the engraver.
    pub fn is_engraved(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Pdf | OutputFormat::Svg)
    }

    /// Checks if this format is an audio format.
    pub fn is_audio(&self) -> bool {
        matches!(self, OutputFormat::Wav)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            "svg" => Ok(OutputFormat::Svg),
            "wav" => Ok(OutputFormat::Wav),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Specification for the output artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    /// The file format.
    pub format: OutputFormat,
    /// Relative path under the output root.
    pub path: String,
}

impl OutputSpec {
    /// Creates a new output specification.
    pub fn new(format: OutputFormat, path: impl Into<String>) -> Self {
        Self {
            format,
            path: path.into(),
        }
    }

    /// Checks if the path extension matches the declared format.
    pub fn extension_matches(&self) -> bool {
        std::path::Path::new(&self.path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(self.format.extension()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Pdf.extension(), "pdf");
        assert_eq!(OutputFormat::Wav.extension(), "wav");
    }

    #[test]
    fn test_format_classification() {
        assert!(OutputFormat::Png.is_engraved());
        assert!(OutputFormat::Svg.is_engraved());
        assert!(!OutputFormat::Wav.is_engraved());
        assert!(OutputFormat::Wav.is_audio());
        assert!(!OutputFormat::Pdf.is_audio());
    }

    #[test]
    fn test_extension_matches() {
        assert!(OutputSpec::new(OutputFormat::Png, "sheets/etude.png").extension_matches());
        assert!(OutputSpec::new(OutputFormat::Png, "sheets/etude.PNG").extension_matches());
        assert!(!OutputSpec::new(OutputFormat::Png, "sheets/etude.pdf").extension_matches());
        assert!(!OutputSpec::new(OutputFormat::Wav, "etude").extension_matches());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert!("gif".parse::<OutputFormat>().is_err());
    }
}
