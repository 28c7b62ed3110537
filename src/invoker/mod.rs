pub mod mock;
pub mod process;

use async_trait::async_trait;
use std::fmt;

use crate::error::InvocationError;

/// An external program that answers a single text argument on stdout.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Display name used in error text and page labels, e.g. `"C#"`.
    fn name(&self) -> &str;

    /// Run the collaborator once with `input` and return its trimmed stdout.
    async fn invoke(&self, input: &str) -> Result<String, InvocationError>;
}

/// Result of one invocation. Failures are information, not errors: they
/// never travel past the invoker boundary.
#[derive(Debug)]
pub enum Outcome {
    Success(String),
    Failure {
        collaborator: String,
        error: InvocationError,
    },
}

impl Outcome {
    /// Run `invoker` and fold any failure into the outcome.
    pub async fn of(invoker: &dyn Invoker, input: &str) -> Self {
        match invoker.invoke(input).await {
            Ok(output) => Outcome::Success(output),
            Err(error) => Outcome::Failure {
                collaborator: invoker.name().to_string(),
                error,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The text shown to users: the output itself, or `Error in <name>: <error>`.
    pub fn into_text(self) -> String {
        match self {
            Outcome::Success(output) => output,
            failure => failure.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(output) => f.write_str(output),
            Outcome::Failure {
                collaborator,
                error,
            } => write!(f, "Error in {collaborator}: {error}"),
        }
    }
}
