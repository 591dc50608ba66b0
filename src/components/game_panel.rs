//! Rock-Paper-Scissors Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::notify;
use crate::models::{GameView, Move, Notice};
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

fn apply(store: AppStore, answer: Result<GameView, Notice>) {
    match answer {
        Ok(view) => store.game().set(view),
        Err(notice) => notify(notice),
    }
}

#[component]
pub fn GamePanel() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        spawn_local(async move {
            apply(store, commands::game_view().await);
        });
    });

    let play = move |choice: Move| {
        spawn_local(async move {
            apply(store, commands::game_play(choice).await);
        });
    };

    let play_again = move |_| {
        spawn_local(async move {
            apply(store, commands::game_reset_round().await);
        });
    };

    let line = move |prefix: &'static str, pick: fn(&GameView) -> Option<String>| {
        move || {
            let text = pick(&store.game().read()).unwrap_or_default();
            format!("{}{}", prefix, text)
        }
    };

    view! {
        <section class="tool-panel game-panel">
            <h2>"Choose your move"</h2>
            <div class="button-row moves">
                {Move::ALL.iter().map(|&choice| view! {
                    <button class="move-btn" on:click=move |_| play(choice)>
                        {choice.label()}
                    </button>
                }).collect_view()}
            </div>

            <p class="round-line">{line("You chose: ", |g| g.user_move.clone())}</p>
            <p class="round-line">{line("Computer chose: ", |g| g.machine_move.clone())}</p>
            <p class="result-line">{line("", |g| g.result.clone())}</p>
            <p class="score-line">{move || store.game().read().score.clone()}</p>

            <button class="play-again" on:click=play_again>"Play Again"</button>
        </section>
    }
}
