// src/cli/run.rs
use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
    server::build_rocket,
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🚀 Welcome to Creator Scout!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::ScanProfile,
                MenuAction::OutreachPreview,
                MenuAction::StartServer,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::ScanProfile => {
                    if let Err(e) = self.run_scan_profile().await {
                        error!("Profile scan failed: {}", e);
                    }
                }
                MenuAction::OutreachPreview => {
                    if let Err(e) = self.run_outreach_preview().await {
                        error!("Outreach preview failed: {}", e);
                    }
                }
                MenuAction::StartServer => {
                    println!(
                        "\n🌐 Starting API server on port {}...",
                        self.config.server.port
                    );
                    if let Err(e) = build_rocket(self.config.clone()).launch().await {
                        error!("Server failed: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("👋 Goodbye!");
                    return Ok(());
                }
            }
        }
    }
}
