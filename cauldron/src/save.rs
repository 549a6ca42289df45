use anyhow::{Context, Result};
use common::dish::PlayerData;
use std::path::Path;
use tracing::info;

pub const DEFAULT_SAVE: &str = "GameData.json";

/// Reads the player's save, or starts fresh when there is none.
pub fn load(path: &Path) -> Result<PlayerData> {
    if !path.exists() {
        return Ok(PlayerData::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read save from {}", path.display()))?;
    let data = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse save in {}", path.display()))?;

    info!("Data loaded from [{}]", path.display());
    Ok(data)
}

pub fn store(path: &Path, data: &PlayerData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write save to {}", path.display()))?;

    info!("Data saved to [{}]", path.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use common::dish::CookedDish;

    #[test]
    fn missing_save_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let data = load(&dir.path().join(DEFAULT_SAVE)).unwrap();
        assert_eq!(data, PlayerData::default());
    }

    #[test]
    fn stored_save_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SAVE);
        let data = PlayerData {
            score: 115,
            best_dish: CookedDish::new(70, "Meat Stew", &["1 Potato".to_owned()]),
            last_dish: CookedDish::new(45, "Mashed Potatoes", &["3 Potato".to_owned()]),
        };

        store(&path, &data).unwrap();
        assert_eq!(load(&path).unwrap(), data);
    }

    #[test]
    fn corrupt_save_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SAVE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load(&path).is_err());
    }
}
