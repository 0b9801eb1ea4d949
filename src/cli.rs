//! CLI argument parsing via clap.

use clap::Parser;

/// Shuffle names into random, evenly sized groups. Runs interactively.
#[derive(Debug, Parser)]
#[command(name = "name-shuffler", version)]
pub struct Args {}
