//! The glue every front-end shares: hand one input to both collaborators
//! and assemble the three-part reply.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{ExecutionMode, Settings};
use crate::consts::PYTHON_OUTPUT;
use crate::invoker::process::ProcessInvoker;
use crate::invoker::{Invoker, Outcome};

/// What a caller sends: `{"input": "..."}`. A missing field means empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub input: String,
}

/// What every front-end gets back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "C# Output")]
    pub csharp: String,
    #[serde(rename = "Java Output")]
    pub java: String,
    #[serde(rename = "Python Output")]
    pub python: String,
}

/// Owns the two collaborators. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct Bridge {
    csharp: Arc<dyn Invoker>,
    java: Arc<dyn Invoker>,
    mode: ExecutionMode,
}

impl Bridge {
    pub fn new(csharp: Arc<dyn Invoker>, java: Arc<dyn Invoker>, mode: ExecutionMode) -> Self {
        Self { csharp, java, mode }
    }

    /// Real child-process collaborators configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Arc::new(ProcessInvoker::csharp(&settings.csharp)),
            Arc::new(ProcessInvoker::java(&settings.java)),
            settings.execution,
        )
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub async fn invoke_csharp(&self, input: &str) -> Outcome {
        Outcome::of(self.csharp.as_ref(), input).await
    }

    pub async fn invoke_java(&self, input: &str) -> Outcome {
        Outcome::of(self.java.as_ref(), input).await
    }

    /// Both outcomes, C# first. In sequential mode Java does not start
    /// until the C# child has exited.
    pub async fn outcomes(&self, input: &str) -> (Outcome, Outcome) {
        match self.mode {
            ExecutionMode::Sequential => {
                let csharp = self.invoke_csharp(input).await;
                let java = self.invoke_java(input).await;
                (csharp, java)
            }
            ExecutionMode::Parallel => {
                futures::future::join(self.invoke_csharp(input), self.invoke_java(input)).await
            }
        }
    }

    /// Relay `input` to both collaborators and build the reply. Never fails.
    pub async fn relay(&self, input: &str) -> Reply {
        let (csharp, java) = self.outcomes(input).await;
        tracing::info!(
            mode = self.mode.as_str(),
            csharp_ok = csharp.is_success(),
            java_ok = java.is_success(),
            "relay complete"
        );
        Reply {
            csharp: csharp.into_text(),
            java: java.into_text(),
            python: PYTHON_OUTPUT.to_string(),
        }
    }
}
