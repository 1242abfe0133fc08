//! LilyPond subprocess engraver.
//!
//! Spawns LilyPond against a written markup document and verifies the
//! rendered sheet appears where the spec said it would.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use etude_spec::OutputFormat;

use crate::error::{EngraveError, EngraveResult};

/// Default timeout for LilyPond execution (2 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the engraver.
#[derive(Debug, Clone)]
pub struct EngraverConfig {
    /// Path to the LilyPond executable.
    pub lilypond_path: Option<PathBuf>,
    /// Timeout for LilyPond execution.
    pub timeout: Duration,
    /// Whether to capture LilyPond's stderr.
    pub capture_output: bool,
}

impl Default for EngraverConfig {
    fn default() -> Self {
        Self {
            lilypond_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            capture_output: true,
        }
    }
}

impl EngraverConfig {
    /// Sets the LilyPond executable path.
    pub fn lilypond_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lilypond_path = Some(path.into());
        self
    }

    /// Sets the timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// Outcome of a successful engraving run.
#[derive(Debug, Clone)]
pub struct EngraveReport {
    /// The verified path of the rendered sheet.
    pub output_path: PathBuf,
    /// Wall time the subprocess took.
    pub elapsed: Duration,
}

/// The LilyPond subprocess engraver.
pub struct Engraver {
    config: EngraverConfig,
}

impl Engraver {
    /// Creates a new engraver with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngraverConfig::default(),
        }
    }

    /// Creates a new engraver with the given configuration.
    pub fn with_config(config: EngraverConfig) -> Self {
        Self { config }
    }

    /// Finds the LilyPond executable path.
    fn find_lilypond(&self) -> EngraveResult<PathBuf> {
        // Check config override first
        if let Some(ref path) = self.config.lilypond_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        // Check LILYPOND_PATH environment variable
        if let Ok(path) = std::env::var("LILYPOND_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // Try to find LilyPond in PATH
        let lilypond_names = if cfg!(windows) {
            vec!["lilypond.exe", "lilypond"]
        } else {
            vec!["lilypond"]
        };

        for name in lilypond_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        // Try common installation paths
        let common_paths = if cfg!(windows) {
            vec![
                "C:\\Program Files (x86)\\LilyPond\\usr\\bin\\lilypond.exe",
                "C:\\Program Files\\LilyPond\\usr\\bin\\lilypond.exe",
            ]
        } else if cfg!(target_os = "macos") {
            vec![
                "/opt/homebrew/bin/lilypond",
                "/usr/local/bin/lilypond",
                "/Applications/LilyPond.app/Contents/Resources/bin/lilypond",
            ]
        } else {
            vec![
                "/usr/bin/lilypond",
                "/usr/local/bin/lilypond",
                "/snap/bin/lilypond",
            ]
        };

        for path_str in common_paths {
            let path = PathBuf::from(path_str);
            if path.exists() {
                return Ok(path);
            }
        }

        Err(EngraveError::LilypondNotFound)
    }

    /// Engraves a written markup document into the requested sheet format.
    ///
    /// # Arguments
    ///
    /// * `document_path` - Path to the `.ly` document on disk
    /// * `format` - The sheet format (png, pdf, or svg)
    /// * `output_path` - Where the rendered sheet must appear
    ///
    /// The subprocess is invoked as
    /// `lilypond --<format> -o <output stem> <document>` and its exit
    /// status is checked; a clean exit without the expected file is still
    /// an error.
    pub fn engrave(
        &self,
        document_path: &Path,
        format: OutputFormat,
        output_path: &Path,
    ) -> EngraveResult<EngraveReport> {
        let lilypond_path = self.find_lilypond()?;
        let flag = format_flag(format)?;
        let stem = output_path.with_extension("");

        let mut cmd = Command::new(&lilypond_path);
        cmd.arg(flag).arg("-o").arg(&stem).arg(document_path);

        if self.config.capture_output {
            // Only stderr is surfaced; keep stdout unpiped so a filled
            // stdout pipe cannot stall the subprocess.
            cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        }

        let start = Instant::now();
        let child = cmd.spawn().map_err(EngraveError::SpawnFailed)?;
        let (status, stderr) =
            wait_with_timeout(child, self.config.timeout, self.config.capture_output)?;
        let elapsed = start.elapsed();

        if !status.success() {
            let exit_code = status.code().unwrap_or(-1);
            return Err(EngraveError::process_failed(exit_code, stderr));
        }

        if !output_path.exists() {
            return Err(EngraveError::OutputNotFound {
                path: output_path.to_path_buf(),
            });
        }

        Ok(EngraveReport {
            output_path: output_path.to_path_buf(),
            elapsed,
        })
    }

    /// Probes the installed LilyPond version, for environment diagnostics.
    pub fn version(&self) -> EngraveResult<String> {
        let lilypond_path = self.find_lilypond()?;
        let output = Command::new(&lilypond_path)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(EngraveError::SpawnFailed)?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            return Err(EngraveError::process_failed(exit_code, String::new()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_version(&stdout).unwrap_or_else(|| "unknown".to_string()))
    }
}

impl Default for Engraver {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a sheet format to its LilyPond command-line flag.
fn format_flag(format: OutputFormat) -> EngraveResult<&'static str> {
    match format {
        OutputFormat::Png => Ok("--png"),
        OutputFormat::Pdf => Ok("--pdf"),
        OutputFormat::Svg => Ok("--svg"),
        OutputFormat::Wav => Err(EngraveError::FormatNotEngravable { format }),
    }
}

/// Extracts the version number from `lilypond --version` output, whose
/// first line reads like `GNU LilyPond 2.24.3 (running Guile 2.2)`.
pub fn parse_version(stdout: &str) -> Option<String> {
    let first_line = stdout.lines().next()?;
    first_line
        .split_whitespace()
        .find(|word| {
            word.chars().next().is_some_and(|c| c.is_ascii_digit()) && word.contains('.')
        })
        .map(|word| word.to_string())
}

fn wait_with_timeout(
    mut child: Child,
    timeout: Duration,
    capture_output: bool,
) -> EngraveResult<(ExitStatus, String)> {
    let start = Instant::now();

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(EngraveError::Timeout {
                        timeout_secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(Duration::from_millis(100));
            }
            Err(e) => return Err(EngraveError::SpawnFailed(e)),
        }
    };

    let stderr = if capture_output {
        let mut buf = String::new();
        if let Some(mut err) = child.stderr.take() {
            let _ = err.read_to_string(&mut buf);
        }
        buf
    } else {
        String::new()
    };

    Ok((status, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flags() {
        assert_eq!(format_flag(OutputFormat::Png).unwrap(), "--png");
        assert_eq!(format_flag(OutputFormat::Pdf).unwrap(), "--pdf");
        assert_eq!(format_flag(OutputFormat::Svg).unwrap(), "--svg");
        assert!(matches!(
            format_flag(OutputFormat::Wav),
            Err(EngraveError::FormatNotEngravable { .. })
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = EngraverConfig::default()
            .lilypond_path("/usr/bin/lilypond")
            .timeout_secs(30);

        assert_eq!(
            config.lilypond_path,
            Some(PathBuf::from("/usr/bin/lilypond"))
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(
            parse_version("GNU LilyPond 2.24.3 (running Guile 2.2)\n"),
            Some("2.24.3".to_string())
        );
        assert_eq!(
            parse_version("GNU LilyPond 2.10.33\nCopyright ...\n"),
            Some("2.10.33".to_string())
        );
        assert_eq!(parse_version("no digits here"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn test_wait_with_timeout_captures_stderr() {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "echo hello 1>&2"]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", "echo hello 1>&2"]);
            cmd
        };

        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        let child = cmd.spawn().unwrap();

        let (status, stderr) = wait_with_timeout(child, Duration::from_secs(2), true).unwrap();
        assert!(status.success());
        assert!(stderr.to_lowercase().contains("hello"));
    }

    #[test]
    fn test_wait_with_timeout_kills_runaway_process() {
        if cfg!(windows) {
            return;
        }
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "sleep 30"]);
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        let child = cmd.spawn().unwrap();

        let result = wait_with_timeout(child, Duration::from_millis(200), false);
        assert!(matches!(result, Err(EngraveError::Timeout { .. })));
    }

    #[test]
    fn test_missing_executable_is_reported() {
        let config = EngraverConfig {
            lilypond_path: Some(PathBuf::from("/this/does/not/exist/lilypond")),
            ..Default::default()
        };
        // Falls through the ladder; only errors if nothing else resolves.
        let engraver = Engraver::with_config(config);
        match engraver.find_lilypond() {
            Ok(path) => assert!(path.exists()),
            Err(err) => assert!(matches!(err, EngraveError::LilypondNotFound)),
        }
    }
}
