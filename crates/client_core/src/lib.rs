pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod selection;

pub use api::{Answer, DocumentApi, HealthStatus, HttpDocumentApi, UploadReceipt};
pub use config::{load_settings, ClientSettings, ConfigError};
pub use controller::{
    AnswerStatus, ConnectionStatus, Flow, InteractionController, InteractionState, Rejection,
    StatusTone, Submission, UploadStatus, ViewModel,
};
pub use error::ApiClientError;
pub use selection::{SelectedFile, PDF_EXTENSIONS, PDF_MIME_TYPE};
