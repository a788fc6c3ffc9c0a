use crate::data::QuizConfig;
use crate::model::LeaderboardEntry;
use crate::storage::{KeyValueStore, StorageError};
use std::cmp::Ordering;

/// Orden del ranking: más puntos primero, a igualdad menos tiempo.
pub fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score.cmp(&a.score).then(a.time.cmp(&b.time))
}

/// Inserta `entry` si cumple el tiempo máximo, ordena y recorta a `size`.
///
/// Devuelve la nueva lista y si la entrada sigue dentro tras recortar. Dos
/// entradas idénticas (nombre, puntos, tiempo) no se distinguen.
pub fn record(
    entries: &[LeaderboardEntry],
    entry: LeaderboardEntry,
    size: usize,
    max_time_secs: u64,
) -> (Vec<LeaderboardEntry>, bool) {
    if entry.time >= max_time_secs {
        return (entries.to_vec(), false);
    }

    let mut updated = entries.to_vec();
    updated.push(entry.clone());
    updated.sort_by(rank_order);
    updated.truncate(size);

    let inserted = updated.contains(&entry);
    (updated, inserted)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    size: usize,
    max_time_secs: u64,
    key: String,
}

impl Leaderboard {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            entries: Vec::new(),
            size: config.leaderboard_size,
            max_time_secs: config.leaderboard_max_time_secs,
            key: config.leaderboard_key.clone(),
        }
    }

    /// Lee el ranking guardado. Si no existe o no se puede leer, empieza vacío.
    pub fn load(store: &dyn KeyValueStore, config: &QuizConfig) -> Self {
        let mut board = Self::new(config);
        match board.read_entries(store) {
            Ok(Some(mut entries)) => {
                entries.sort_by(rank_order);
                entries.truncate(board.size);
                log::debug!("Ranking cargado: {} entradas", entries.len());
                board.entries = entries;
            }
            Ok(None) => log::debug!("No hay ranking guardado en '{}'", board.key),
            Err(e) => log::warn!("No se pudo cargar el ranking: {e}"),
        }
        board
    }

    fn read_entries(
        &self,
        store: &dyn KeyValueStore,
    ) -> Result<Option<Vec<LeaderboardEntry>>, StorageError> {
        let Some(raw) = store.get(&self.key)? else {
            return Ok(None);
        };
        let entries = serde_json::from_str(&raw).map_err(StorageError::Deserialize)?;
        Ok(Some(entries))
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries).map_err(StorageError::Serialize)?;
        store.set(&self.key, &json)
    }

    /// Registra un intento terminado. Si entra en el ranking se guarda; un
    /// fallo al guardar se registra en el log y el ranking queda en memoria.
    pub fn maybe_record(&mut self, entry: LeaderboardEntry, store: &mut dyn KeyValueStore) -> bool {
        if entry.time >= self.max_time_secs {
            log::info!(
                "{} terminó en {} s: fuera del límite de {} s",
                entry.name,
                entry.time,
                self.max_time_secs
            );
            return false;
        }

        let (updated, inserted) = record(&self.entries, entry, self.size, self.max_time_secs);
        self.entries = updated;

        if let Err(e) = self.save(store) {
            log::error!("No se pudo guardar el ranking: {e}");
        }
        inserted
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn max_time_secs(&self) -> u64 {
        self.max_time_secs
    }
}
