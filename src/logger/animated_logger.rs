use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, SPINNER_FRAME_INTERVAL_MS};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr spinner for a polling run. The attempt counter is shared so the
/// polling loop can bump it while the spinner task redraws.
pub struct AnimatedLogger {
    message: String,
    max_attempts: u32,
    attempts: Arc<AtomicU32>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String, max_attempts: u32) -> Self {
        Self {
            message,
            max_attempts,
            attempts: Arc::new(AtomicU32::new(0)),
            stop_sender: None,
            task_handle: None,
        }
    }

    /// Handle for reporting progress from the polling loop.
    pub fn attempts(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.attempts)
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let attempts = Arc::clone(&self.attempts);
        let max_attempts = self.max_attempts;

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(sleep_duration_millis(SPINNER_FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let attempt = attempts.load(Ordering::Relaxed);
                        eprint!("\r{} {} (check {}/{}) ", message, FRAMES[frame], attempt + 1, max_attempts);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K✅ {final_message}");
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K❌ {error_message}");
    }
}
