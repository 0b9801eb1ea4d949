//! Ask → validate → accept-or-repeat loops for the interactive questions.

use crate::error::AppError;
use crate::input::{default_group_count, parse_group_count, parse_names};
use crate::ui::render::{Question, RenderSink};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Ask for names until the answer holds at least two of them.
pub async fn ask_names<R, S>(reader: &mut R, sink: &S) -> Result<Vec<String>, AppError>
where
    R: AsyncBufRead + Unpin,
    S: RenderSink + ?Sized,
{
    loop {
        sink.prompt(Question::Names)?;
        let answer = read_answer(reader).await?;
        match parse_names(&answer) {
            Ok(names) => {
                tracing::debug!(count = names.len(), "accepted names");
                return Ok(names);
            }
            Err(err) => {
                tracing::debug!(%err, "rejected names answer");
                sink.validation(&err.to_string());
            }
        }
    }
}

/// Ask for a group count valid for `name_count` names.
pub async fn ask_group_count<R, S>(
    reader: &mut R,
    sink: &S,
    name_count: usize,
) -> Result<usize, AppError>
where
    R: AsyncBufRead + Unpin,
    S: RenderSink + ?Sized,
{
    let default = default_group_count(name_count);
    loop {
        sink.prompt(Question::GroupCount { default })?;
        let answer = read_answer(reader).await?;
        match parse_group_count(&answer, name_count, default) {
            Ok(groups) => {
                tracing::debug!(groups, "accepted group count");
                return Ok(groups);
            }
            Err(err) => {
                tracing::debug!(%err, "rejected group count answer");
                sink.validation(&err.to_string());
            }
        }
    }
}

/// Read one answer line; bytes that are not UTF-8 decode to U+FFFD.
async fn read_answer<R>(reader: &mut R) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line).await? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}
