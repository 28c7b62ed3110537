//! Terminal front-end: one-shot relay or a read-eval loop.

use anyhow::Result;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::bridge::{Bridge, Reply};
use crate::consts::{CSHARP_KEY, JAVA_KEY, PYTHON_KEY};

/// Labeled, one field per line.
pub fn format_reply(reply: &Reply) -> String {
    format!(
        "{CSHARP_KEY}: {}\n{JAVA_KEY}: {}\n{PYTHON_KEY}: {}",
        reply.csharp, reply.java, reply.python
    )
}

pub async fn ask_once(bridge: &Bridge, input: &str) {
    let reply = bridge.relay(input).await;
    println!("{}", format_reply(&reply));
}

/// Relay every line typed until `quit`, `exit`, EOF or Ctrl+C.
pub async fn repl(bridge: &Bridge) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nmessage> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        println!();
                        break;
                    }
                    Err(e) => {
                        tracing::error!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input == "quit" || input == "exit" {
            break;
        }

        // Empty lines are relayed too; the collaborators decide what "no input" means.
        ask_once(bridge, input).await;
    }

    Ok(())
}
