//! Waiting indicator shown while a submission is in flight

use colored::*;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::oneshot;

const FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Text drawn for animation frame `frame`, starting with a carriage return
/// so each frame overwrites the previous one
fn frame_line(frame: usize, message: &str) -> String {
    format!(
        "\r{} {}",
        FRAMES[frame % FRAMES.len()].to_string().cyan(),
        message.dimmed()
    )
}

/// Animated indicator on the current terminal line.
///
/// Runs from `start` until dropped. When stdout is not a terminal nothing is
/// drawn, so piped output (`--dry-run`, redirected results) stays clean.
///
/// # Example
///
/// ```rust
/// {
///     let _spinner = Spinner::start("Analyzing your answers");
///     client.analyze(&request).await;
/// } // line cleared here
/// ```
pub struct Spinner {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        if !io::stdout().is_terminal() {
            return Self {
                stop_tx: None,
                handle: None,
            };
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(Self::animate(message.into(), stop_rx));

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    fn is_drawing(&self) -> bool {
        self.handle.is_some()
    }

    async fn animate(message: String, mut stop_rx: oneshot::Receiver<()>) {
        let mut stdout = io::stdout();

        for frame in 0.. {
            print!("{}", frame_line(frame, &message));
            let _ = stdout.flush();

            tokio::select! {
                _ = tokio::time::sleep(FRAME_INTERVAL) => {},
                _ = &mut stop_rx => break,
            }
        }

        clear_line();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            handle.abort();
            clear_line();
        }
    }
}

fn clear_line() {
    print!("\r\x1b[K");
    let _ = io::stdout().flush();
}

/// Await `future` with a spinner on screen, clearing it once the future resolves
///
/// # Example
///
/// ```rust
/// let result = with_spinner(
///     LOADING_MESSAGE,
///     run_submission(&mut controller, &client, request),
/// )
/// .await?;
/// ```
pub async fn with_spinner<F, T>(message: impl Into<String>, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let spinner = Spinner::start(message);
    let output = future.await;
    drop(spinner);
    output
}
