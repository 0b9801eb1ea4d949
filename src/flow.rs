//! The interactive pipeline: title, questions, stages, shuffle, grid.

use crate::error::AppError;
use crate::input::ask::{ask_group_count, ask_names};
use crate::partition::{partition, Partition};
use crate::tui::settings::{self, Stage};
use crate::ui::render::RenderSink;
use std::time::Duration;
use tokio::io::AsyncBufRead;

/// Show the stages under one spinner, relabelling it as each stage starts.
pub async fn run_stages<S>(sink: &S, stages: &[Stage])
where
    S: RenderSink + ?Sized,
{
    let Some(first) = stages.first() else {
        return;
    };
    let mut handle = sink.progress(first.label);
    for (idx, stage) in stages.iter().enumerate() {
        if idx > 0 {
            handle.set_label(stage.label);
        }
        tokio::time::sleep(Duration::from_millis(stage.delay_ms)).await;
    }
    handle.finish();
}

/// Run one full session and return the partition that was printed.
pub async fn run<R, S>(
    reader: &mut R,
    sink: &S,
    terminal_width: usize,
) -> Result<Partition, AppError>
where
    R: AsyncBufRead + Unpin,
    S: RenderSink + ?Sized,
{
    sink.title()?;

    let names = ask_names(reader, sink).await?;
    run_stages(sink, settings::NAME_STAGES).await;
    sink.success(&format!("{} names received!", names.len()));

    let groups = ask_group_count(reader, sink, names.len()).await?;
    run_stages(sink, settings::SHUFFLE_STAGES).await;
    sink.success(settings::SHUFFLE_DONE);

    let partition = partition(&names, groups)?;
    sink.groups(&partition, terminal_width)?;
    Ok(partition)
}
