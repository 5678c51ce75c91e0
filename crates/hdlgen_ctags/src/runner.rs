//! Invocation of the external tagger process.

use std::path::Path;
use std::process::Command;

/// Failure to obtain output from the tagger process.
#[derive(Debug, thiserror::Error)]
pub enum TagToolError {
    /// The process could not be spawned (missing executable, permissions).
    #[error("failed to run '{executable}': {source}")]
    Spawn {
        /// The configured executable path.
        executable: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// The process wrote non-UTF-8 data to standard output.
    #[error("'{executable}' produced non-UTF-8 output")]
    NonUtf8 {
        /// The configured executable path.
        executable: String,
    },
}

/// Runs the configured tagger executable against source files.
///
/// The runner owns no state beyond its configuration — the executable path
/// is the single recognized option. Each call spawns one process, waits for
/// it, and captures standard output; there are no retries and no timeout.
/// Callers needing bounded latency must impose their own and treat expiry
/// as empty output.
#[derive(Clone, Debug)]
pub struct TagRunner {
    executable: String,
}

impl TagRunner {
    /// Creates a runner for the given executable path.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// The configured executable path.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Runs the tagger against `file` and returns its standard output.
    ///
    /// Invokes `<executable> -f - --sort=no <file>`. The file's existence
    /// is the caller's responsibility; it is not validated here. A
    /// non-zero exit status is not an error at this layer — whatever
    /// stdout was captured is returned, and consumers treat empty output
    /// as "no symbols found". `Err` means no output could be captured at
    /// all, and callers are expected to degrade that to empty output
    /// after reporting it.
    pub fn run(&self, file: &Path) -> Result<String, TagToolError> {
        let output = Command::new(&self.executable)
            .arg("-f")
            .arg("-")
            .arg("--sort=no")
            .arg(file)
            .output()
            .map_err(|source| TagToolError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;
        String::from_utf8(output.stdout).map_err(|_| TagToolError::NonUtf8 {
            executable: self.executable.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_path() {
        let runner = TagRunner::new("/opt/ctags/bin/ctags");
        assert_eq!(runner.executable(), "/opt/ctags/bin/ctags");
    }

    #[test]
    fn missing_executable_is_spawn_error() {
        let runner = TagRunner::new("/nonexistent/tagger-binary");
        let err = runner.run(Path::new("whatever.v")).unwrap_err();
        assert!(matches!(err, TagToolError::Spawn { .. }));
        let message = format!("{err}");
        assert!(message.contains("/nonexistent/tagger-binary"));
    }

    // `echo` stands in for the tagger: it succeeds and prints its
    // arguments, which is enough to observe the invocation convention.
    #[cfg(unix)]
    #[test]
    fn passes_invocation_arguments() {
        let runner = TagRunner::new("echo");
        let output = runner.run(Path::new("counter.v")).unwrap();
        assert!(output.contains("-f - --sort=no counter.v"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_still_returns_stdout() {
        // `false` exits 1 with no output; per the best-effort contract the
        // call still resolves with the (empty) captured stdout.
        let runner = TagRunner::new("false");
        let output = runner.run(Path::new("counter.v")).unwrap();
        assert!(output.is_empty());
    }
}
