use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::SongRecord;

/// Header written when there are no rows to derive one from.
const HEADER: [&str; 3] = ["title", "artist", "score"];

/// Read every row from the CSV file. A missing file is an empty list; the
/// file is only created once something is persisted.
///
/// Rows go through the same rules as a manual add. A row that breaks them
/// fails the load with its line number, since the next save would otherwise
/// overwrite the file without it.
pub fn read_songs(path: &Path) -> Result<Vec<SongRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut record = StringRecord::new();
    let mut songs = Vec::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |pos| pos.line());
        let row: SongRecord = record.deserialize(Some(&headers))?;
        let song = SongRecord::new(&row.title, &row.artist, row.score)
            .map_err(|source| Error::InvalidRow { line, source })?;
        songs.push(song);
    }
    Ok(songs)
}

/// Overwrite the file with the given rows, header first. There is no
/// temp-file swap: a crash mid-write leaves a truncated file.
pub fn write_songs(path: &Path, songs: &[SongRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    if songs.is_empty() {
        writer.write_record(HEADER)?;
    }
    for song in songs {
        writer.serialize(song)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::error::ValidationError;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        assert!(read_songs(&path).unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn empty_list_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        write_songs(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "title,artist,score\n");
    }

    #[test]
    fn absent_score_is_an_empty_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        let songs = vec![SongRecord::new("Lemon", "米津玄師", None).unwrap()];
        write_songs(&path, &songs).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "title,artist,score\nLemon,米津玄師,\n"
        );
        assert_eq!(read_songs(&path).unwrap(), songs);
    }

    #[test]
    fn reads_japanese_headers_and_padded_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        fs::write(
            &path,
            "曲名, アーティスト名, 得点\nマツケンサンバ, 松平健, 95.5\nLemon, 米津玄師,\n",
        )
        .unwrap();

        let songs = read_songs(&path).unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "マツケンサンバ");
        assert_eq!(songs[0].artist, "松平健");
        assert_eq!(songs[0].score, Some(95.5));
        assert_eq!(songs[1].score, None);
    }

    #[test]
    fn nan_and_missing_markers_load_as_no_score() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        fs::write(
            &path,
            "title,artist,score\nLemon,米津玄師,NaN\nFlamingo,米津玄師,NA\nA,b,80\n",
        )
        .unwrap();

        let songs = read_songs(&path).unwrap();
        assert_eq!(songs.len(), 3);
        assert_eq!(songs[0].score, None);
        assert_eq!(songs[1].score, None);
        assert_eq!(songs[2].score, Some(80.0));
    }

    #[test]
    fn out_of_range_score_fails_with_its_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        fs::write(&path, "title,artist,score\nA,b,80\nLemon,米津玄師,150\n").unwrap();

        let err = read_songs(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRow {
                line: 3,
                source: ValidationError::ScoreOutOfRange(_)
            }
        ));
    }

    #[test]
    fn blank_title_row_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song_list.csv");
        fs::write(&path, "title,artist,score\n,,\n").unwrap();

        assert!(matches!(
            read_songs(&path),
            Err(Error::InvalidRow {
                line: 2,
                source: ValidationError::MissingField
            })
        ));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("song_list.csv");
        write_songs(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
