use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

pub fn storage_key(key: &str) -> String {
    format!("folio_{}", key)
}

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is not worth a console error, anything else is
pub fn try_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(val) => Some(val),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}
