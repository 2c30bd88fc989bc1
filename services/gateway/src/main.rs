mod parser;
mod session;

use std::io::{self, BufWriter};

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting matching-engine gateway");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    session::run(stdin.lock(), &mut output)?;

    Ok(())
}
