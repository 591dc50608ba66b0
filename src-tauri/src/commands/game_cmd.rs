//! Tauri Commands for Rock-Paper-Scissors

use tauri::State;

use crate::domain::{Move, Notice};
use crate::state::{render_game, GameView};
use crate::AppState;

#[tauri::command]
pub async fn game_view(state: State<'_, AppState>) -> Result<GameView, Notice> {
    let game = state.game.lock().await;
    Ok(render_game(&game))
}

/// Play one round against a random machine move
#[tauri::command]
pub async fn game_play(state: State<'_, AppState>, choice: Move) -> Result<GameView, Notice> {
    let mut game = state.game.lock().await;
    let round = game.play(choice);
    log::info!(
        "Round: {} vs {} -> {:?}",
        round.user.as_str(),
        round.machine.as_str(),
        round.outcome
    );
    Ok(render_game(&game))
}

/// Clear the shown round; the score stays
#[tauri::command]
pub async fn game_reset_round(state: State<'_, AppState>) -> Result<GameView, Notice> {
    let mut game = state.game.lock().await;
    game.reset_round();
    Ok(render_game(&game))
}
