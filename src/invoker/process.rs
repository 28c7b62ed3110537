use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use tokio::process::Command;

use super::Invoker;
use crate::config::{CSharpSettings, JavaSettings};
use crate::consts::{CSHARP_NAME, JAVA_NAME};
use crate::error::InvocationError;

/// How to start a collaborator. The input is always appended as the last argument.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSpec {
    pub launcher: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl LaunchSpec {
    pub fn new(launcher: &str) -> Self {
        Self {
            launcher: launcher.to_string(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `<dotnet> <assembly> <input>`
    pub fn csharp(settings: &CSharpSettings) -> Self {
        Self {
            working_dir: settings.working_dir.clone(),
            ..Self::new(&settings.launcher).arg(settings.assembly.to_string_lossy())
        }
    }

    /// `<java> -cp <classpath> <class> <input>`
    pub fn java(settings: &JavaSettings) -> Self {
        Self {
            working_dir: settings.working_dir.clone(),
            ..Self::new(&settings.launcher)
                .arg("-cp")
                .arg(&settings.classpath)
                .arg(&settings.main_class)
        }
    }

    /// Full argument vector (without the launcher) for one input.
    pub fn argv(&self, input: &str) -> Vec<String> {
        let mut argv = self.args.clone();
        argv.push(input.to_string());
        argv
    }

    /// Human-readable command line with a placeholder for the input.
    pub fn display(&self) -> String {
        let mut parts = vec![self.launcher.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push("<input>".to_string());
        parts.join(" ")
    }
}

/// Runs a collaborator as a child process and captures its stdout.
pub struct ProcessInvoker {
    name: String,
    spec: LaunchSpec,
}

impl ProcessInvoker {
    pub fn new(name: &str, spec: LaunchSpec) -> Self {
        Self {
            name: name.to_string(),
            spec,
        }
    }

    pub fn csharp(settings: &CSharpSettings) -> Self {
        Self::new(CSHARP_NAME, LaunchSpec::csharp(settings))
    }

    pub fn java(settings: &JavaSettings) -> Self {
        Self::new(JAVA_NAME, LaunchSpec::java(settings))
    }

    pub fn spec(&self) -> &LaunchSpec {
        &self.spec
    }
}

#[async_trait]
impl Invoker for ProcessInvoker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, input: &str) -> Result<String, InvocationError> {
        let launcher = &self.spec.launcher;
        let argv = self.spec.argv(input);

        let mut command = Command::new(launcher);
        command.args(&argv).kill_on_drop(true);
        if let Some(dir) = &self.spec.working_dir {
            command.current_dir(dir);
        }

        tracing::debug!(collaborator = %self.name, %launcher, args = argv.len(), "spawning");
        let started = Instant::now();

        let output = command
            .output()
            .await
            .map_err(|e| InvocationError::from_io(launcher, e))?;

        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                collaborator = %self.name,
                code = ?output.status.code(),
                elapsed_ms,
                %stderr,
                "collaborator exited unsuccessfully"
            );
            return Err(InvocationError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!(
            collaborator = %self.name,
            elapsed_ms,
            bytes = output.stdout.len(),
            "collaborator finished"
        );
        Ok(stdout.trim().to_string())
    }
}
