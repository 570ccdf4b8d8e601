use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub page_size: i64,
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(4);
        let catalog_path = env::var("CATALOG_PATH").ok();
        Ok(Self {
            host,
            port,
            page_size,
            catalog_path,
        })
    }
}
