// File: ./src/store.rs
use crate::model::ColorCombination;
use crate::storage::LocalStorage;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

const STORE_FILE: &str = "combinations.json";

/// The persisted list of saved color combinations, stored as a single
/// pretty-printed JSON document in the platform data directory.
pub struct CombinationStore;

impl CombinationStore {
    pub fn get_path() -> Option<PathBuf> {
        LocalStorage::data_path(STORE_FILE)
    }

    /// Internal load helper (no locking)
    fn load_internal(path: &PathBuf) -> Vec<ColorCombination> {
        // A missing, empty or corrupt file reads as an empty list
        if path.exists()
            && let Ok(content) = fs::read_to_string(path)
            && let Ok(list) = serde_json::from_str(&content)
        {
            return list;
        }
        Vec::new()
    }

    /// Public load with locking
    pub fn load() -> Vec<ColorCombination> {
        if let Some(path) = Self::get_path() {
            if !path.exists() {
                return Vec::new();
            }
            return LocalStorage::with_lock(&path, || Ok(Self::load_internal(&path)))
                .unwrap_or_default();
        }
        Vec::new()
    }

    /// Appends a combination to the saved list.
    pub fn add(combination: ColorCombination) -> Result<()> {
        tracing::debug!(id = %combination.id, "saving combination");
        Self::modify(|list| list.push(combination))
    }

    /// Removes the combination with the given id. Returns whether one matched.
    pub fn remove(id: &str) -> Result<bool> {
        let mut removed = false;
        Self::modify(|list| {
            let before = list.len();
            list.retain(|c| c.id != id);
            removed = list.len() != before;
        })?;
        Ok(removed)
    }

    /// Drops every saved combination.
    pub fn clear() -> Result<()> {
        Self::modify(|list| list.clear())
    }

    /// Transactional modification of the saved list.
    /// Locks -> Loads -> Applies Closure -> Saves -> Unlocks.
    pub fn modify<F>(f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<ColorCombination>),
    {
        if let Some(path) = Self::get_path() {
            LocalStorage::with_lock(&path, || {
                let mut list = Self::load_internal(&path);
                f(&mut list);
                let json = serde_json::to_string_pretty(&list)?;
                LocalStorage::atomic_write(&path, json)?;
                Ok(())
            })?;
        }
        Ok(())
    }
}
