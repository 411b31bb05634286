use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::{DashboardClient, SessionStore};
use tracing::debug;

pub mod commands;

use crate::config::Settings;
use crate::storage::FileStore;
use crate::transport::ReqwestTransport;
use commands::{dashboard, login, logout, predict, report, whoami};

#[derive(Parser)]
#[command(name = "ucu-analytics")]
#[command(about = "Terminal client for the UCU analytics dashboard backend")]
#[command(version)]
pub struct Cli {
    /// Backend origin, e.g. http://localhost:5000
    ///
    /// Overrides UCU_API_BASE_URL.
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// File the session is persisted in
    ///
    /// Overrides UCU_SESSION_FILE.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },
    /// Forget the persisted session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Print the KPI summary and every chart dataset
    Dashboard,
    /// Predict the average grade of a student
    Predict {
        /// Student identifier, e.g. STU000001
        student_id: String,
    },
    /// Download the generated PDF report
    Report {
        /// Target file; defaults to university_report_<date>.pdf
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Everything a command needs: the backend client and the persisted session.
pub struct Context {
    pub client: DashboardClient<ReqwestTransport>,
    pub session: SessionStore<FileStore>,
}

impl Context {
    pub fn new(settings: &Settings) -> Self {
        debug!("Using backend {}", settings.api_base_url);
        let client = DashboardClient::new(ReqwestTransport::new(settings.api_base_url.clone()));
        let mut session = SessionStore::new(FileStore::open(settings.session_file.clone()));
        session.restore();
        Self { client, session }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = Settings::load()?.with_overrides(self.api_base_url, self.session_file);
        let mut ctx = Context::new(&settings);
        let mut out = std::io::stdout().lock();
        execute(self.command, &mut ctx, &mut out).await
    }
}

pub async fn execute(command: Commands, ctx: &mut Context, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Login { username, password } => login(ctx, &username, &password, out).await?,
        Commands::Logout => logout(ctx, out)?,
        Commands::Whoami => whoami(ctx, out)?,
        Commands::Dashboard => dashboard(ctx, out).await?,
        Commands::Predict { student_id } => predict(ctx, &student_id, out).await?,
        Commands::Report { output } => report(ctx, output, out).await?,
    }
    Ok(())
}
