use async_trait::async_trait;

use super::Invoker;
use crate::error::InvocationError;

/// Stands in for a collaborator that prints its argument back.
/// Trims like a real process invocation would.
pub struct EchoInvoker {
    name: String,
}

impl EchoInvoker {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl Invoker for EchoInvoker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, input: &str) -> Result<String, InvocationError> {
        Ok(input.trim().to_string())
    }
}

/// A collaborator that always fails the same way.
pub struct FailingInvoker {
    name: String,
    launcher: String,
    exit_code: Option<i32>,
}

impl FailingInvoker {
    /// Fails as if `launcher` were not installed.
    pub fn runtime_missing(name: &str, launcher: &str) -> Self {
        Self {
            name: name.to_string(),
            launcher: launcher.to_string(),
            exit_code: None,
        }
    }

    /// Fails as if the program exited with `code`.
    pub fn exiting(name: &str, code: i32) -> Self {
        Self {
            name: name.to_string(),
            launcher: String::new(),
            exit_code: Some(code),
        }
    }
}

#[async_trait]
impl Invoker for FailingInvoker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, _input: &str) -> Result<String, InvocationError> {
        match self.exit_code {
            Some(code) => Err(InvocationError::NonZeroExit {
                code: Some(code),
                stderr: String::new(),
            }),
            None => Err(InvocationError::RuntimeMissing {
                launcher: self.launcher.clone(),
            }),
        }
    }
}
