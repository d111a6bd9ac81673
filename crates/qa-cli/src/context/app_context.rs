use qa_config::QaConfig;
use qa_db::QaDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: QaDb,
    pub config: QaConfig,
}

impl AppContext {
    /// Open the record store named by the config. Schema setup runs here, once.
    pub async fn init(config: QaConfig) -> anyhow::Result<Self> {
        let db = QaDb::open_local(&config.database.path).await?;
        Ok(Self { db, config })
    }

    /// In-memory context for command tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let mut config = QaConfig::default();
        config.database.path = String::from(":memory:");
        Self::init(config).await.expect("in-memory store should open")
    }
}
