//! Reacts to a tool-call response while it is still being read.
//!
//! The document carries a `moderation.decision` member ahead of a `code`
//! member. The handler below tracks which member it is inside, aborts the
//! parse as soon as the decision turns out to be `"block"`, and prints the
//! characters of `code` as they arrive, before the document is complete.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p jsonsax --example tool_call
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use std::io::Write;

use jsonsax::{Handler, ParserError, Reader, Status};

#[derive(Debug)]
enum Abort {
    Blocked,
    Io(std::io::Error),
}

/// Keeps the member path and streams `code` to stdout.
#[derive(Default)]
struct ToolCall {
    /// Keys of the enclosing members; `None` while a key is being read.
    path: Vec<Option<String>>,
    text: String,
    in_key: bool,
}

impl ToolCall {
    fn at(&self, want: &[&str]) -> bool {
        self.path.len() == want.len()
            && self
                .path
                .iter()
                .zip(want)
                .all(|(k, w)| k.as_deref() == Some(*w))
    }
}

impl Handler for ToolCall {
    type Error = Abort;

    fn pair_begin(&mut self) -> Result<(), Abort> {
        self.path.push(None);
        self.in_key = true;
        Ok(())
    }

    fn pair_end(&mut self) -> Result<(), Abort> {
        self.path.pop();
        Ok(())
    }

    fn string_begin(&mut self) -> Result<(), Abort> {
        self.text.clear();
        Ok(())
    }

    fn character(&mut self, c: char) -> Result<(), Abort> {
        if !self.in_key && self.at(&["code"]) {
            let mut out = std::io::stdout();
            write!(out, "{c}").and_then(|()| out.flush()).map_err(Abort::Io)?;
        }
        self.text.push(c);
        Ok(())
    }

    fn string_end(&mut self) -> Result<(), Abort> {
        if self.in_key {
            if let Some(slot) = self.path.last_mut() {
                *slot = Some(std::mem::take(&mut self.text));
            }
            self.in_key = false;
        } else if self.at(&["moderation", "decision"]) && self.text == "block" {
            return Err(Abort::Blocked);
        }
        Ok(())
    }

    fn fail(&mut self, error: ParserError) -> Result<(), Abort> {
        eprintln!("malformed response: {error}");
        Ok(())
    }
}

fn run(response: &str) {
    let mut reader = Reader::new(response.chars(), ToolCall::default());
    match reader.read_value() {
        Ok(Status::Complete) => println!("\n-- done"),
        Ok(Status::Failed) => println!("\n-- gave up"),
        Err(Abort::Blocked) => println!("-- blocked at {}", reader.position()),
        Err(Abort::Io(e)) => eprintln!("-- stdout: {e}"),
    }
}

fn main() {
    env_logger::init();

    run(r#"{
        "moderation": {"decision": "allow", "reason": null},
        "filename": "main.rs",
        "code": "fn main() {\n    println!(\"hi\");\n}"
    }"#);

    // The code member is never reached.
    run(r#"{
        "moderation": {"decision": "block", "reason": "policy"},
        "code": "rm -rf /"
    }"#);
}
