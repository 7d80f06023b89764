use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::io::input_loop;
use crate::state::AppState;

/// Centralized channel management for the repl session
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64), // user interactions
        }
    }
}

/// Session controller for task spawning and lifecycle
pub struct ReplController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl ReplController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(self.state.clone(), self.channels.input_to_app.1.clone()));

        tasks.spawn(input_loop(
            self.channels.input_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

pub async fn run_repl(state: Arc<AppState>) -> anyhow::Result<()> {
    state.ensure_loaded().await?;
    println!("cidian — type a query; :fav N, :favs, :rm KEY, :clear, :q to quit");

    let controller = ReplController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("session ended"),
                Some(Ok(Err(e))) => tracing::error!("session loop exited: {e}"),
                Some(Err(e)) => tracing::error!("session task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}
