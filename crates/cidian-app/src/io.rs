use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, parse_line};

/// Read stdin lines and feed parsed events into the session loop.
pub async fn input_loop(
    tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    tx.send(AppEvent::Quit).await?;
                    return Ok(());
                };
                if let Some(event) = parse_line(&line) {
                    tx.send(event).await?;
                }
            }
        }
    }
}
