// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use account_ledger::LedgerStore;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "snapshot" {
        // Snapshot mode: dump the demo ledger state as JSON
        run_snapshot()?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_snapshot() -> Result<()> {
    let store = LedgerStore::demo();
    println!("{}", serde_json::to_string_pretty(&store)?);
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let store = LedgerStore::demo();

    let mut app = ui::App::new(store);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or dump state with: cargo run snapshot");
    std::process::exit(1);
}
