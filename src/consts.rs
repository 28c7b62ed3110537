//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Response key carrying the .NET program's output.
pub const CSHARP_KEY: &str = "C# Output";

/// Response key carrying the Java program's output.
pub const JAVA_KEY: &str = "Java Output";

/// Response key carrying the host's own greeting.
pub const PYTHON_KEY: &str = "Python Output";

/// The host's fixed contribution to every reply. The spelling is part of
/// the wire contract.
pub const PYTHON_OUTPUT: &str =
    "Python handled all the communication between the different langauges and also says hello!";

/// Collaborator display names, used in error text and page labels.
pub const CSHARP_NAME: &str = "C#";
pub const JAVA_NAME: &str = "Java";

/// The only browser origin allowed to call the API by default.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Value pre-filled in the UI text field.
pub const DEFAULT_UI_INPUT: &str = "Hello from Python";

/// Where `polyglot send` posts by default.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/";

pub const DEFAULT_DOTNET: &str = "dotnet";
pub const DEFAULT_ASSEMBLY: &str = "../CSharpProgram/bin/CSharpProgram.dll";
pub const DEFAULT_JAVA: &str = "java";
pub const DEFAULT_CLASSPATH: &str = "../JavaProgram/target/classes";
pub const DEFAULT_MAIN_CLASS: &str = "com.example.App";

/// Default config file: `~/.polyglot/config.toml`.
/// `None` when the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".polyglot").join("config.toml"))
}
