use std::io;

use anyhow::Result;
use mateline_cli::Session;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("mateline starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::default().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
