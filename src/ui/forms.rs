use ratatui::text::Line;

use crate::error::ValidationError;
use crate::models::{SearchColumn, SongRecord};

use super::helpers::field_line;

/// Form state for adding a song.
#[derive(Default, Clone)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) score: String,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the song form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum SongField {
    #[default]
    Title,
    Artist,
    Score,
}

impl SongForm {
    /// Cycle focus forward across the three fields.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            SongField::Title => SongField::Artist,
            SongField::Artist => SongField::Score,
            SongField::Score => SongField::Title,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            SongField::Title => SongField::Score,
            SongField::Artist => SongField::Title,
            SongField::Score => SongField::Artist,
        };
    }

    /// Insert a character into the active field. The score only takes digits
    /// and a single decimal point.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SongField::Title => self.title.push(ch),
            SongField::Artist => self.artist.push(ch),
            SongField::Score => {
                let accepted = ch.is_ascii_digit() || (ch == '.' && !self.score.contains('.'));
                if !accepted {
                    return false;
                }
                self.score.push(ch);
            }
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Title => {
                self.title.pop();
            }
            SongField::Artist => {
                self.artist.pop();
            }
            SongField::Score => {
                self.score.pop();
            }
        }
    }

    /// Validate the inputs. A blank score means none was recorded.
    pub(crate) fn parse_inputs(&self) -> Result<SongRecord, ValidationError> {
        let raw = self.score.trim();
        let score = if raw.is_empty() {
            None
        } else {
            Some(
                raw.parse::<f64>()
                    .map_err(|_| ValidationError::InvalidScore(raw.to_string()))?,
            )
        };
        SongRecord::new(&self.title, &self.artist, score)
    }

    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        let (value, placeholder) = match field {
            SongField::Title => (&self.title, "<required>"),
            SongField::Artist => (&self.artist, "<required>"),
            SongField::Score => (&self.score, "<optional, 0-100>"),
        };
        field_line(field_name, value, placeholder, self.active == field)
    }

    pub(crate) fn value(&self, field: SongField) -> &str {
        match field {
            SongField::Title => &self.title,
            SongField::Artist => &self.artist,
            SongField::Score => &self.score,
        }
    }
}

/// Form state for the search control: a column selector plus the keyword.
#[derive(Default, Clone)]
pub(crate) struct SearchForm {
    pub(crate) column: SearchColumn,
    pub(crate) query: String,
    pub(crate) active: SearchField,
    pub(crate) error: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum SearchField {
    Column,
    #[default]
    Query,
}

impl SearchForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            SearchField::Column => SearchField::Query,
            SearchField::Query => SearchField::Column,
        };
    }

    /// Switch between searching titles and artists.
    pub(crate) fn toggle_column(&mut self) {
        self.column = self.column.toggle();
    }

    /// Typing only reaches the query; a space on the selector flips it.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SearchField::Column => {
                if ch == ' ' {
                    self.toggle_column();
                    true
                } else {
                    false
                }
            }
            SearchField::Query => {
                self.query.push(ch);
                true
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.active == SearchField::Query {
            self.query.pop();
        }
    }

    pub(crate) fn column_line(&self) -> Line<'static> {
        let choice = match self.column {
            SearchColumn::Title => "< Title >   Artist",
            SearchColumn::Artist => "  Title   < Artist >",
        };
        field_line("Search in", choice, "", self.active == SearchField::Column)
    }

    pub(crate) fn query_line(&self) -> Line<'static> {
        field_line(
            "Keyword",
            &self.query,
            "<required>",
            self.active == SearchField::Query,
        )
    }
}

/// Form state for deleting by exact title.
#[derive(Default, Clone)]
pub(crate) struct DeleteForm {
    pub(crate) title: String,
    pub(crate) error: Option<String>,
}

impl DeleteForm {
    /// Pre-fill with the title of the highlighted row, if any.
    pub(crate) fn with_title(title: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or_default().to_string(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.title.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.title.pop();
    }

    pub(crate) fn title_line(&self) -> Line<'static> {
        field_line("Title", &self.title, "<exact title>", true)
    }
}
