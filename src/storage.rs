//! Almacén clave/valor donde se guarda el ranking.
//!
//! En el navegador es `localStorage`; en escritorio, un fichero JSON por clave.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("almacenamiento no disponible")]
    Unavailable,
    #[error("el almacenamiento rechazó la operación: {0}")]
    Rejected(String),
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("no se pudo serializar: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("contenido guardado no válido: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub trait KeyValueStore {
    /// `Ok(None)` si la clave no existe.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Almacén en memoria. Los clones comparten contenido, así un test puede
/// inspeccionar lo que la app ha escrito.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén que rechaza todas las escrituras (cuota agotada, etc.)
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected("escritura deshabilitada".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{KeyValueStore, StorageError};
    use std::io::ErrorKind;
    use std::path::PathBuf;

    /// Un fichero `<clave>.json` por entrada dentro de `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `ALGEBRA_QUIZ_DATA_DIR` o, si no está, el directorio actual.
        pub fn from_env() -> Self {
            let dir = std::env::var("ALGEBRA_QUIZ_DATA_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| ".".to_string());
            Self::new(dir)
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            match std::fs::read_to_string(self.path_for(key)) {
                Ok(text) => Ok(Some(text)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.path_for(key), value)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage` del navegador.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
    }
}

/// Almacén por defecto de la plataforma.
pub fn default_store() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStore::from_env())
    }
}
