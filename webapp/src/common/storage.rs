use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use portfolio_common::{Theme, ThemeStore};
use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a key that was never written is not an error
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// theme preference in localStorage
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: &str) -> Self {
        LocalThemeStore {
            key: key.to_owned(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> anyhow::Result<Option<Theme>> {
        get_local_storage(&self.key)
    }

    fn save(&mut self, theme: Theme) -> anyhow::Result<()> {
        set_local_storage(&self.key, theme)
    }
}
