use qa_config::QaConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QaConfig> {
    let config = QaConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: QaConfig, flags: &GlobalFlags) -> QaConfig {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden by --db");
        config.database.path.clone_from(db);
    }
    config
}

#[cfg(test)]
mod tests {
    use qa_config::QaConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_replaces_configured_path() {
        let config = apply_overrides(QaConfig::default(), &flags(Some("other.db")));
        assert_eq!(config.database.path, "other.db");
    }

    #[test]
    fn config_path_kept_without_flag() {
        let config = apply_overrides(QaConfig::default(), &flags(None));
        assert_eq!(config.database.path, "questions.db");
    }
}
