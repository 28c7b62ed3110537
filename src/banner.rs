//! Startup banner for `polyglot serve`.

use std::net::SocketAddr;

use crate::consts::AUTHOR;

/// What the server is about to do, for display.
pub struct BannerInfo<'a> {
    pub addr: SocketAddr,
    pub allowed_origin: &'a str,
    pub csharp: &'a str,
    pub java: &'a str,
    pub execution: &'a str,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║          P O L Y G L O T              ║
   ║   one message, three languages        ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   api       POST http://{}/
   ui        http://{}/ui
   origin    {}
   c#        {}
   java      {}
   execution {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        info.addr,
        info.addr,
        info.allowed_origin,
        info.csharp,
        info.java,
        info.execution,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_both_commands() {
        let info = BannerInfo {
            addr: "127.0.0.1:8000".parse().unwrap(),
            allowed_origin: "http://localhost:3000",
            csharp: "dotnet app.dll <input>",
            java: "java -cp classes com.example.App <input>",
            execution: "sequential",
        };
        let text = banner_text(&info);
        assert!(text.contains("POST http://127.0.0.1:8000/"));
        assert!(text.contains("dotnet app.dll <input>"));
        assert!(text.contains("java -cp classes com.example.App <input>"));
        assert!(text.contains("sequential"));
    }
}
