//! Pure selection-set model.
//!
//! All functions here operate on a songbook plus the ordered list of
//! already-selected ids and return new values; persistence is handled by
//! the store, and UI state by the app layer.

use crate::error::{CoreError, Result};
use crate::song::{Song, Songbook};

/// Songs whose id is not in `selected_ids`, in songbook order.
#[must_use]
pub fn remaining<'a>(songbook: &'a Songbook, selected_ids: &[String]) -> Vec<&'a Song> {
    songbook
        .iter()
        .filter(|song| !selected_ids.iter().any(|id| id == &song.id))
        .collect()
}

/// Toggle a song's membership in the selected set.
///
/// If the id is already selected it is removed; otherwise it is appended
/// at the end, preserving selection order for all other ids.
///
/// # Errors
///
/// Returns `CoreError::InvalidSongId` if the id does not exist in the
/// songbook. This indicates a data-consistency defect in the caller, not
/// a user-recoverable condition.
pub fn toggle(songbook: &Songbook, selected_ids: &[String], id: &str) -> Result<Vec<String>> {
    if !songbook.contains(id) {
        return Err(CoreError::InvalidSongId { id: id.to_string() });
    }

    if selected_ids.iter().any(|selected| selected == id) {
        Ok(selected_ids
            .iter()
            .filter(|selected| *selected != id)
            .cloned()
            .collect())
    } else {
        let mut ids = selected_ids.to_vec();
        ids.push(id.to_string());
        Ok(ids)
    }
}

/// All song ids in songbook order, for bulk "mark everything drawn".
#[must_use]
pub fn select_all(songbook: &Songbook) -> Vec<String> {
    songbook.iter().map(|song| song.id.clone()).collect()
}

/// Whether every song has already been selected.
///
/// Used as the guard before opening the picker: an exhausted songbook is
/// surfaced as a user notice instead of an empty picker run.
#[must_use]
pub fn is_exhausted(songbook: &Songbook, selected_ids: &[String]) -> bool {
    remaining(songbook, selected_ids).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::Song;

    fn book() -> Songbook {
        Songbook::new(
            vec![
                Song::new("a", "First", 0),
                Song::new("b", "Second", 0),
                Song::new("c", "Third", 0),
            ],
            "songs",
        )
        .unwrap()
    }

    #[test]
    fn test_remaining_filters_selected() {
        let book = book();
        let selected = vec!["a".to_string()];
        let remaining_ids: Vec<_> = remaining(&book, &selected)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(remaining_ids, ["b", "c"]);
    }

    #[test]
    fn test_remaining_partitions_songbook() {
        let book = book();
        let selected = vec!["b".to_string()];
        let rest = remaining(&book, &selected);
        // No remaining id is selected, and together they cover the book
        assert!(rest.iter().all(|s| !selected.contains(&s.id)));
        assert_eq!(rest.len() + selected.len(), book.len());
    }

    #[test]
    fn test_toggle_appends_unselected() {
        let book = book();
        let selected = vec!["a".to_string()];
        let toggled = toggle(&book, &selected, "c").unwrap();
        assert_eq!(toggled, ["a", "c"]);
    }

    #[test]
    fn test_toggle_removes_selected() {
        let book = book();
        let selected = vec!["a".to_string(), "b".to_string()];
        let toggled = toggle(&book, &selected, "a").unwrap();
        assert_eq!(toggled, ["b"]);
    }

    #[test]
    fn test_toggle_is_involution() {
        let book = book();
        let selected = vec!["a".to_string(), "c".to_string()];
        let twice = toggle(&book, &toggle(&book, &selected, "b").unwrap(), "b").unwrap();
        assert_eq!(twice, selected);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let book = book();
        let result = toggle(&book, &[], "nope");
        assert!(matches!(
            result,
            Err(CoreError::InvalidSongId { id }) if id == "nope"
        ));
    }

    #[test]
    fn test_select_all_exhausts() {
        let book = book();
        let all = select_all(&book);
        assert_eq!(all, ["a", "b", "c"]);
        assert!(remaining(&book, &all).is_empty());
        assert!(is_exhausted(&book, &all));
    }

    #[test]
    fn test_not_exhausted_with_remaining() {
        let book = book();
        assert!(!is_exhausted(&book, &["a".to_string()]));
    }
}
