//! Application entry orchestration for the name-shuffler CLI.

use crate::cli;
use name_shuffler::error::AppError;
use name_shuffler::flow;
use name_shuffler::partition::Partition;
use name_shuffler::tui::{layout_width, Renderer};
use name_shuffler::ui::render::RenderSink;
use tokio::io::BufReader;

/// Run one interactive session and return the process exit code.
pub(crate) async fn run(_args: cli::Args) -> i32 {
    let renderer = Renderer::detect();
    let mut stdin = BufReader::new(tokio::io::stdin());
    let result = flow::run(&mut stdin, &renderer, layout_width()).await;
    report(&renderer, &result)
}

/// Log or print the outcome and map it to an exit code.
fn report<S: RenderSink + ?Sized>(sink: &S, result: &Result<Partition, AppError>) -> i32 {
    match result {
        Ok(partition) => {
            tracing::info!(
                names = partition.total_names(),
                groups = partition.group_count(),
                "shuffle complete"
            );
            0
        }
        Err(err) => {
            tracing::error!(%err, "session failed");
            sink.error(&err.to_string());
            1
        }
    }
}
