use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the home directory and a default `config.json`.
pub async fn init(expenses_home: &Path) -> Result<Out<String>> {
    let config = Config::create(expenses_home).await?;
    let path = config.config_path().display().to_string();
    Ok(Out::new(format!("Created {path}"), path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let out = init(&home).await.unwrap();
        assert!(Path::new(out.structure().unwrap()).is_file());
        assert!(init(&home).await.is_err());
    }
}
