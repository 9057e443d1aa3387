use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spinner shown while the scheduler sits out an inter-pass wait.
pub struct WaitLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl WaitLogger {
    pub fn new(message: String) -> Self {
        Self {
            message,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let started = std::time::Instant::now();
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ({}s) ", message, FRAMES[frame], started.elapsed().as_secs());
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }
}
