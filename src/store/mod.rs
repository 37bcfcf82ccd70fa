//! The song list and its CSV backing file.
//!
//! `SongStore` owns the in-memory rows and rewrites the whole file after
//! every mutation. Anything that wants to react to a save (for example the
//! git push hook) registers a [`PersistHook`].

mod csv_file;
mod hooks;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{SearchColumn, SongRecord};
use crate::stats::{histogram, HistogramBin, ScoreSummary};

pub use csv_file::{read_songs, write_songs};
pub use hooks::{GitPushHook, PersistHook};

pub struct SongStore {
    path: PathBuf,
    songs: Vec<SongRecord>,
    hooks: Vec<Box<dyn PersistHook>>,
}

impl fmt::Debug for SongStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SongStore")
            .field("path", &self.path)
            .field("songs", &self.songs)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl SongStore {
    /// Load the list from `path`, or start empty when the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let songs = read_songs(&path)?;
        info!(path = %path.display(), count = songs.len(), "loaded song list");
        Ok(Self {
            path,
            songs,
            hooks: Vec::new(),
        })
    }

    /// Register a hook that runs after each successful save.
    pub fn add_hook<H>(&mut self, hook: H)
    where
        H: PersistHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows in insertion order.
    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Append a song and save. Invalid input leaves the list untouched.
    pub fn add(&mut self, title: &str, artist: &str, score: Option<f64>) -> Result<&SongRecord> {
        let record = SongRecord::new(title, artist, score)?;
        info!(title = %record.title, artist = %record.artist, "adding song");
        self.songs.push(record);
        self.persist()?;
        let index = self.songs.len() - 1;
        Ok(&self.songs[index])
    }

    /// Case-sensitive substring match against one column. An empty query is
    /// rejected rather than matching everything.
    pub fn search(&self, column: SearchColumn, query: &str) -> Result<Vec<SongRecord>> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let matches: Vec<SongRecord> = self
            .songs
            .iter()
            .filter(|song| song.column(column).contains(query))
            .cloned()
            .collect();
        debug!(%column, query, hits = matches.len(), "searched song list");
        Ok(matches)
    }

    /// Remove every song whose title equals `title` exactly and return how
    /// many went. Nothing is saved when no row matched.
    pub fn delete(&mut self, title: &str) -> Result<usize> {
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        let before = self.songs.len();
        self.songs.retain(|song| song.title != title);
        let removed = before - self.songs.len();
        if removed > 0 {
            info!(title, removed, "deleted songs");
            self.persist()?;
        }
        Ok(removed)
    }

    /// Scores that were actually recorded.
    pub fn scores(&self) -> Vec<f64> {
        self.songs.iter().filter_map(|song| song.score).collect()
    }

    /// Summary over recorded scores, `None` when there are none.
    pub fn statistics(&self) -> Option<ScoreSummary> {
        ScoreSummary::from_scores(self.scores())
    }

    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        histogram(&self.scores(), bins)
    }

    /// Overwrite the backing file with the current rows, then notify hooks.
    pub fn persist(&self) -> Result<()> {
        write_songs(&self.path, &self.songs)?;
        debug!(path = %self.path.display(), count = self.songs.len(), "saved song list");
        for hook in &self.hooks {
            hook.after_persist(&self.path);
        }
        Ok(())
    }
}
