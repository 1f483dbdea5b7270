use crate::{config::Config, outreach::OutreachComposer, page_source::ProfileScanner};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub struct CliApp {
    pub config: Config,
    pub scanner: ProfileScanner,
    pub composer: OutreachComposer,
}
