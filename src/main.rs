//! CLI entry point for name-shuffler.

mod app;
mod cli;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();
    app::logging::init_tracing();
    std::process::exit(app::entry::run(args).await);
}
