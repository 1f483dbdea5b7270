// src/cli/run_outreach_preview.rs
use crate::models::{CliApp, Result};
use crate::outreach::{OutreachRequest, RecentVideo};
use dialoguer::{theme::ColorfulTheme, Input};

impl CliApp {
    pub async fn run_outreach_preview(&self) -> Result<()> {
        println!("\n✉️  Outreach Opener Preview");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let channel_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Channel name")
            .interact_text()?;

        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Channel description")
            .allow_empty(true)
            .interact_text()?;

        let owner_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Owner name (optional)")
            .allow_empty(true)
            .interact_text()?;

        let video_title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Most recent video title (optional)")
            .allow_empty(true)
            .interact_text()?;

        let recent_videos = if video_title.trim().is_empty() {
            Vec::new()
        } else {
            vec![RecentVideo {
                title: video_title.trim().to_string(),
                description: String::new(),
            }]
        };

        let request = OutreachRequest {
            channel_name,
            description,
            recent_videos,
            owner_name: Some(owner_name.trim().to_string()).filter(|name| !name.is_empty()),
            api_key: None,
        };

        let message = self.composer.compose(&request).await;

        println!("\n📨 Subject: {}", message.subject_line);
        println!("   Opener:  {}", message.first_line);

        Ok(())
    }
}
