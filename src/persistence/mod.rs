use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::FlashcardError;

const APP_NAME: &str = "flashcards_generator";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        ensure_dir(data_dir.join(APP_NAME))
    } else {
        PathBuf::from(".")
    }
}

fn ensure_dir(dir: PathBuf) -> PathBuf {
    if let Err(e) = fs::create_dir_all(&dir) {
        warn!("Failed to create data directory {}: {}", dir.display(), e);
    }
    dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), FlashcardError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), FlashcardError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    info!("Data saved to: {}", path.display());
    Ok(())
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_from(&get_data_file_path(filename))
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, FlashcardError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json_or_default_from<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> T {
    match load_json_from::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{
        Deserialize,
        Serialize,
    };

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn saved_data_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        let sample = Sample { name: "deck".to_string(), count: 3 };

        save_json_to(&sample, &path).unwrap();
        assert_eq!(load_json_from::<Sample>(&path).unwrap(), sample);
    }

    #[test]
    fn data_dir_is_created_on_demand() {
        let root = tempfile::tempdir().unwrap();
        let dir = ensure_dir(root.path().join("nested").join("app"));
        assert!(dir.is_dir());
    }

    #[test]
    fn uncreatable_data_dir_is_returned_without_failing() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let dir = ensure_dir(blocker.join("app"));
        assert_eq!(dir, blocker.join("app"));
        assert!(!dir.exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_json_from::<Sample>(&path).is_err());
        assert_eq!(load_json_or_default_from::<Sample>(&path), Sample::default());
    }
}
