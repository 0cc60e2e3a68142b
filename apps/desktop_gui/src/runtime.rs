//! Tokio runtime that carries backend requests while egui owns the main thread.

use std::io;

use tokio::runtime::{Builder, Runtime};

pub fn build() -> io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pdf-assistant-io")
        .enable_all()
        .build()
}
