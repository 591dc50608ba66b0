//! Game Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{GameView, Move, Notice};

#[derive(Serialize)]
struct PlayArgs {
    choice: Move,
}

pub async fn game_view() -> Result<GameView, Notice> {
    call("game_view", JsValue::NULL).await
}

pub async fn game_play(choice: Move) -> Result<GameView, Notice> {
    call("game_play", to_args(&PlayArgs { choice })?).await
}

/// "Play Again": clear the round, keep the score
pub async fn game_reset_round() -> Result<GameView, Notice> {
    call("game_reset_round", JsValue::NULL).await
}
