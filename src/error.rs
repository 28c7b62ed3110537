use thiserror::Error;

/// Why a collaborator produced no usable output.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// The launcher itself (e.g. `dotnet`, `java`) is not installed or not on `PATH`.
    #[error("runtime `{launcher}` not found")]
    RuntimeMissing { launcher: String },

    #[error("failed to run `{launcher}`: {source}")]
    LaunchFailed {
        launcher: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran but exited unsuccessfully. `code` is `None` when it
    /// was killed by a signal.
    #[error("{}", exit_message(.code))]
    NonZeroExit { code: Option<i32>, stderr: String },
}

fn exit_message(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("process exited with status {code}"),
        None => "process terminated by signal".to_string(),
    }
}

impl InvocationError {
    /// Classify a spawn/wait failure for the given launcher.
    pub fn from_io(launcher: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::RuntimeMissing {
                launcher: launcher.to_string(),
            }
        } else {
            Self::LaunchFailed {
                launcher: launcher.to_string(),
                source: err,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_is_runtime_missing() {
        let err = InvocationError::from_io("dotnet", io::Error::from(io::ErrorKind::NotFound));
        match &err {
            InvocationError::RuntimeMissing { launcher } => assert_eq!(launcher, "dotnet"),
            other => panic!("expected RuntimeMissing, got {other:?}"),
        }
        assert_eq!(err.to_string(), "runtime `dotnet` not found");
    }

    #[test]
    fn other_io_errors_are_launch_failures() {
        let err = InvocationError::from_io(
            "java",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, InvocationError::LaunchFailed { .. }));
        assert!(err.to_string().starts_with("failed to run `java`"));
    }

    #[test]
    fn non_zero_exit_hides_stderr() {
        let err = InvocationError::NonZeroExit {
            code: Some(1),
            stderr: "Could not find or load main class".to_string(),
        };
        assert_eq!(err.to_string(), "process exited with status 1");
    }

    #[test]
    fn signal_exit_has_its_own_message() {
        let err = InvocationError::NonZeroExit {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "process terminated by signal");
    }
}
