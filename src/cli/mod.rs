//! Line-oriented front end: one line read, one reply printed. Transport
//! proper (messaging webhooks) lives outside this crate; this loop exists
//! to exercise the engine from a terminal or a piped script.

pub mod output;

use std::io::{self, BufRead, Write};

use crate::engine::Engine;

pub fn run(engine: &Engine) -> io::Result<()> {
    output::info(format!(
        "Dépensier prêt. Carnet : {}",
        engine.ledger_path().display()
    ));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", engine.handle(&line))?;
        stdout.flush()?;
    }
    Ok(())
}
