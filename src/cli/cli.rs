// src/cli/cli.rs
use crate::config::Config;
use crate::models::CliApp;
use crate::outreach::OutreachComposer;
use crate::page_source::ProfileScanner;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone)]
pub enum MenuAction {
    ScanProfile,
    OutreachPreview,
    StartServer,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::ScanProfile => {
                write!(f, "🔎 Scan a creator profile page for contact signals")
            }
            MenuAction::OutreachPreview => {
                write!(f, "✉️  Preview an outreach email opener")
            }
            MenuAction::StartServer => write!(f, "🌐 Start the API server"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub async fn new(config: Config) -> Result<Self> {
        let scanner = ProfileScanner::new(&config.scan);
        let composer = OutreachComposer::new(config.outreach.clone());

        Ok(Self {
            config,
            scanner,
            composer,
        })
    }
}
