use crate::models::{SearchColumn, SongRecord};

/// Result of the last successful search, shown in place of the full list
/// until cleared.
pub(crate) struct ActiveSearch {
    pub(crate) column: SearchColumn,
    pub(crate) query: String,
    pub(crate) results: Vec<SongRecord>,
}

/// Selection and filter state for the song table.
#[derive(Default)]
pub(crate) struct SongListScreen {
    pub(crate) search: Option<ActiveSearch>,
    pub(crate) selected: usize,
}

impl SongListScreen {
    /// Rows currently on screen: the search hits, or everything.
    pub(crate) fn rows<'a>(&'a self, all: &'a [SongRecord]) -> &'a [SongRecord] {
        match &self.search {
            Some(search) => &search.results,
            None => all,
        }
    }

    pub(crate) fn current_song<'a>(&'a self, all: &'a [SongRecord]) -> Option<&'a SongRecord> {
        self.rows(all).get(self.selected)
    }

    pub(crate) fn set_search(&mut self, search: ActiveSearch) {
        self.search = Some(search);
        self.selected = 0;
    }

    /// Drop the filter. Returns whether one was active.
    pub(crate) fn clear_search(&mut self) -> bool {
        self.selected = 0;
        self.search.take().is_some()
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            return;
        }
        let max = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, max) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
