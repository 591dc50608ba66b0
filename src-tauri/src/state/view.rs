//! View rendering
//!
//! Pure functions from tool state to the serializable shape the window shows.
//! Every command answers with a freshly rendered view, so the frontend never
//! keeps its own copy of list contents or selection.

use serde::Serialize;

use crate::domain::{Record, RecordKey};
use crate::repository::SearchableRepository;

use super::game::RpsGame;
use super::list_state::ListState;

const NO_STATUS: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub key: RecordKey,
    pub label: String,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<F> {
    pub query: String,
    pub rows: Vec<ListRow>,
    /// Position in `rows`
    pub selected: Option<usize>,
    pub form: F,
    pub status: String,
    pub total: usize,
}

pub fn render_list<T, S>(state: &ListState<T, S>) -> ListView<T::Form>
where
    T: Record,
    S: SearchableRepository<T>,
{
    let entries = state.store().list();
    let rows = state
        .visible()
        .iter()
        .filter_map(|&index| entries.get(index))
        .map(|entry| ListRow {
            key: entry.key,
            label: entry.record.row_label(),
            completed: entry.record.completed(),
        })
        .collect();

    let status = state
        .selected_record()
        .and_then(|record| record.status())
        .unwrap_or(NO_STATUS);

    ListView {
        query: state.query().to_string(),
        rows,
        selected: state.selected(),
        form: state.form().clone(),
        status: status.to_string(),
        total: entries.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub user_move: Option<&'static str>,
    pub machine_move: Option<&'static str>,
    pub result: Option<&'static str>,
    pub score: String,
    pub user_score: u32,
    pub computer_score: u32,
}

pub fn render_game(game: &RpsGame) -> GameView {
    let round = game.last_round();
    let score = game.score();
    GameView {
        user_move: round.map(|r| r.user.as_str()),
        machine_move: round.map(|r| r.machine.as_str()),
        result: round.map(|r| r.outcome.message()),
        score: score.text(),
        user_score: score.user,
        computer_score: score.computer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactForm, Move, TaskForm};
    use crate::repository::Repository;
    use crate::state::{ContactState, TodoState};

    #[test]
    fn test_render_todo_rows() {
        let mut todo = TodoState::new();
        todo.add(TaskForm::new("Buy milk", "")).unwrap();
        todo.add(TaskForm::new("Walk dog", "")).unwrap();
        todo.select(Some(1)).unwrap();
        todo.mark(true).unwrap();

        let view = render_list(&todo);

        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["[ ] Buy milk", "[✓] Walk dog"]);
        assert_eq!(view.rows[1].completed, Some(true));
        assert_eq!(view.selected, Some(1));
        assert_eq!(view.status, "Completed");
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_status_placeholder_without_selection() {
        let mut todo = TodoState::new();
        todo.add(TaskForm::new("Buy milk", "")).unwrap();

        let view = render_list(&todo);

        assert_eq!(view.status, "-");
        assert_eq!(view.selected, None);
    }

    #[test]
    fn test_filtered_view_keys() {
        let mut contacts = ContactState::new();
        contacts.add(ContactForm::new("Ada", "555-1", "", "")).unwrap();
        contacts.add(ContactForm::new("Bob", "555-2", "", "")).unwrap();
        contacts.search("bob");

        let view = render_list(&contacts);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].label, "Bob - 555-2");
        assert_eq!(view.rows[0].key, contacts.store().list()[1].key);
        assert_eq!(view.rows[0].completed, None);
        assert_eq!(view.query, "bob");
        assert_eq!(view.total, 2);
        assert_eq!(view.status, "-");
    }

    #[test]
    fn test_render_game() {
        let mut game = RpsGame::new();
        let fresh = render_game(&game);
        assert_eq!(fresh.result, None);
        assert_eq!(fresh.score, "User: 0 | Computer: 0");

        game.play_against(Move::Paper, Move::Scissors);
        let view = render_game(&game);

        assert_eq!(view.user_move, Some("Paper"));
        assert_eq!(view.machine_move, Some("Scissors"));
        assert_eq!(view.result, Some("You Lose!"));
        assert_eq!(view.score, "User: 0 | Computer: 1");
        assert_eq!(view.computer_score, 1);
    }
}
