// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use kpoly_ext::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    cli.run()?;
    Ok(())
}
