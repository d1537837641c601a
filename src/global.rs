use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;
use crate::provider::DailyHotProvider;
use crate::tool::DailyHotTool;

pub struct Global {
    pub config: Config,
    pub provider: DailyHotProvider,
    pub tool: DailyHotTool,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.http.user_agent)
            .build()
            .context("http client")?;

        Ok(Arc::new(Self {
            provider: DailyHotProvider::new(http_client.clone()),
            tool: DailyHotTool::new(http_client),
            config,
            started_at: std::time::Instant::now(),
        }))
    }
}
