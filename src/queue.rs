//! Action Queue
//!
//! Runs a panel's backend calls one at a time, in the order the user made
//! them. Each reply is applied before the next command is sent, so a later
//! action never overtakes an earlier one.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

type Runner<A> = Arc<dyn Fn(A) -> Pin<Box<dyn Future<Output = ()>>> + Send + Sync>;

pub struct ActionQueue<A: Send + Sync + 'static> {
    pending: StoredValue<VecDeque<A>>,
    running: StoredValue<bool>,
    runner: StoredValue<Runner<A>>,
}

impl<A: Send + Sync + 'static> Clone for ActionQueue<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Send + Sync + 'static> Copy for ActionQueue<A> {}

impl<A: Send + Sync + 'static> ActionQueue<A> {
    /// `run` performs one action and applies its reply
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let runner: Runner<A> = Arc::new(move |action| Box::pin(run(action)));
        Self {
            pending: StoredValue::new(VecDeque::new()),
            running: StoredValue::new(false),
            runner: StoredValue::new(runner),
        }
    }

    /// Enqueue an action behind every earlier one
    pub fn push(&self, action: A) {
        self.pending.update_value(|queue| queue.push_back(action));
        if self.running.get_value() {
            return;
        }
        self.running.set_value(true);

        let pending = self.pending;
        let running = self.running;
        let runner = self.runner.get_value();
        spawn_local(async move {
            while let Some(next) = pending.try_update_value(|queue| queue.pop_front()).flatten() {
                runner(next).await;
            }
            running.set_value(false);
        });
    }
}
