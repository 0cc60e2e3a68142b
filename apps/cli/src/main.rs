use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::DEFAULT_LOG_FILTER, load_settings, AnswerStatus, ConnectionStatus, HttpDocumentApi,
    InteractionController, Rejection, SelectedFile, Submission, UploadStatus,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pdf-assistant", about = "Upload PDFs and ask questions about them")]
struct Cli {
    /// Backend base URL; takes precedence over the config file and environment.
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload PDFs so the backend can index them.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Ask a question answered from the uploaded PDFs.
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Check that the backend is reachable.
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings(None)
        .context("failed to load client settings")?
        .with_api_base_url_override(cli.api_base_url);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let api = HttpDocumentApi::new(&settings.api_base_url)
        .with_context(|| format!("cannot use backend url '{}'", settings.api_base_url))?;
    let mut controller =
        InteractionController::new(Arc::new(api), tokio::runtime::Handle::current());

    let succeeded = match cli.command {
        Command::Upload { files } => run_upload(&mut controller, files).await?,
        Command::Ask { question } => run_ask(&mut controller, question.join(" ")).await,
        Command::Health => run_health(&mut controller).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_upload(controller: &mut InteractionController, paths: Vec<PathBuf>) -> Result<bool> {
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        let file = SelectedFile::read_from_path(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        files.push(file);
    }
    controller.select_files(files);

    if let Submission::Rejected(rejection) = controller.submit_upload() {
        tracing::debug!(?rejection, "upload not started");
        eprintln!("{}", controller.view().upload_status_text);
        return Ok(false);
    }
    println!("{}", controller.view().upload_status_text);

    controller.settle_all().await;

    let view = controller.view();
    println!("{}", view.upload_status_text);
    for document in &view.uploaded_documents {
        println!("  - {document}");
    }
    Ok(!matches!(controller.state().upload(), UploadStatus::Failed))
}

async fn run_ask(controller: &mut InteractionController, question: String) -> bool {
    controller.set_question(question);

    match controller.submit_ask() {
        Submission::Started => {}
        Submission::Rejected(Rejection::BlankQuestion) => {
            eprintln!("The question is empty; nothing to ask.");
            return false;
        }
        Submission::Rejected(rejection) => {
            eprintln!("Question not sent: {rejection:?}");
            return false;
        }
    }
    eprintln!("{}", controller.view().answer_text);

    controller.settle_all().await;

    println!("{}", controller.view().answer_text);
    !matches!(controller.state().answer(), AnswerStatus::Failed)
}

async fn run_health(controller: &mut InteractionController) -> bool {
    controller.check_health();
    controller.settle_all().await;

    println!("{}", controller.view().connection_text);
    matches!(controller.state().connection(), ConnectionStatus::Online(_))
}
