// src/cli/run_scan_profile.rs
use crate::models::{CliApp, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

impl CliApp {
    pub async fn run_scan_profile(&self) -> Result<()> {
        println!("\n🔎 Profile Contact Discovery");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Profile page URL")
            .interact_text()?;

        let report = self.scanner.scan(url.trim()).await;

        if !report.success {
            println!(
                "❌ Scan failed: {}",
                report.error_message.as_deref().unwrap_or("unknown error")
            );
            return Ok(());
        }

        let signals = &report.signals;
        println!("\n📋 Results for {}", report.url);
        println!("   Emails:        {}", signals.emails.join(", "));
        println!(
            "   Social links:  {}/{} candidates",
            signals.social_links_found, signals.total_links_found
        );
        for (platform, link) in &signals.social {
            println!("     {:?}: {}", platform, link);
        }
        println!("   Websites:      {}", signals.websites.join(", "));
        println!("   Business path: {}", signals.has_business_inquiry);

        let show_json = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Show full report as JSON?")
            .default(false)
            .interact()?;

        if show_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }
}
