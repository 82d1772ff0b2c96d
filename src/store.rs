use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};
use crate::snapshot::GameSnapshot;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where games live between moves. Handed to [`crate::service::ChessService`] explicitly.
pub trait GameStore {
    fn insert(&mut self, snapshot: &GameSnapshot) -> Result<GameId>;
    fn fetch(&self, id: GameId) -> Result<Option<GameSnapshot>>;
    fn update(&mut self, id: GameId, snapshot: &GameSnapshot) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    games: BTreeMap<GameId, GameSnapshot>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn insert(&mut self, snapshot: &GameSnapshot) -> Result<GameId> {
        self.next_id += 1;
        let id = GameId(self.next_id);
        self.games.insert(id, snapshot.clone());
        Ok(id)
    }

    fn fetch(&self, id: GameId) -> Result<Option<GameSnapshot>> {
        Ok(self.games.get(&id).cloned())
    }

    fn update(&mut self, id: GameId, snapshot: &GameSnapshot) -> Result<()> {
        match self.games.get_mut(&id) {
            Some(slot) => {
                *slot = snapshot.clone();
                Ok(())
            }
            None => Err(ChessError::GameNotFound(id)),
        }
    }
}

/// One pretty-printed JSON file per game: `<dir>/game-<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: dir.as_ref().to_path_buf() })
    }

    fn path_of(&self, id: GameId) -> PathBuf {
        self.dir.join(format!("game-{id}.json"))
    }

    fn ids(&self) -> Result<Vec<GameId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let id = name
                .to_str()
                .and_then(|n| n.strip_prefix("game-"))
                .and_then(|n| n.strip_suffix(".json"))
                .and_then(|n| n.parse::<u64>().ok());
            if let Some(id) = id {
                ids.push(GameId(id));
            }
        }
        Ok(ids)
    }

    fn write(&self, id: GameId, snapshot: &GameSnapshot) -> Result<()> {
        let path = self.path_of(id);
        fs::write(&path, snapshot.to_json()?)?;
        info!("saved game {id} to {}", path.display());
        Ok(())
    }
}

impl GameStore for JsonDirStore {
    fn insert(&mut self, snapshot: &GameSnapshot) -> Result<GameId> {
        let id = GameId(self.ids()?.into_iter().map(|g| g.0).max().unwrap_or(0) + 1);
        self.write(id, snapshot)?;
        Ok(id)
    }

    fn fetch(&self, id: GameId) -> Result<Option<GameSnapshot>> {
        let path = self.path_of(id);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(GameSnapshot::from_json(&text)?))
    }

    fn update(&mut self, id: GameId, snapshot: &GameSnapshot) -> Result<()> {
        if !self.path_of(id).exists() {
            return Err(ChessError::GameNotFound(id));
        }
        self.write(id, snapshot)
    }
}
