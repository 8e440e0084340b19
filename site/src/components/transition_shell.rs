//! Route-keyed page swap with a fade, in "wait" mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router owns the active path; this component resolves it against the
//! route table and feeds [`TransitionState`], which decides what is
//! displayed. Timers issued here carry the epoch they were scheduled for,
//! so a navigation that supersedes them makes their completion a no-op.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::company;
use crate::pages::render_page;
use crate::state::route::PageRoute;
use crate::state::transition::{TransitionCommand, TransitionState};
use crate::util::motion::{Motion, PAGE_FADE_MS};

const PAGE_MOTION: Motion = Motion::fade().duration(PAGE_FADE_MS).on_mount();

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Run `command` against `state`, chaining whatever it leads to.
fn schedule(state: RwSignal<TransitionState>, command: TransitionCommand) {
    #[cfg(feature = "hydrate")]
    match command {
        TransitionCommand::None => {}
        TransitionCommand::ScheduleExit { epoch, after_ms } => {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(after_ms))).await;
                let next = state.try_update(|s| s.finish_exit(epoch)).unwrap_or(TransitionCommand::None);
                if next != TransitionCommand::None {
                    scroll_to_top();
                }
                schedule(state, next);
            });
        }
        TransitionCommand::ScheduleEnter { epoch } => {
            // Next tick, so the page commits in its initial style first.
            gloo_timers::callback::Timeout::new(0, move || {
                state.try_update(|s| s.enter(epoch));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, command);
    }
}

#[component]
pub fn TransitionShell() -> impl IntoView {
    let location = use_location();
    let state = RwSignal::new(TransitionState::new(PageRoute::resolve(&location.pathname.get_untracked())));
    let displayed = Memo::new(move |_| state.with(TransitionState::displayed));
    let phase = Memo::new(move |_| state.with(TransitionState::phase));

    Effect::new(move || {
        schedule(state, state.with_untracked(TransitionState::initial_command));
    });

    Effect::new(move || {
        let target = PageRoute::resolve(&location.pathname.get());
        let command = state.try_update(|s| s.navigate(target)).unwrap_or(TransitionCommand::None);
        schedule(state, command);
    });

    view! {
        <Title text=move || format!("{} | {}", displayed.get().title(), company::NAME)/>
        <main class="page-shell relative min-h-screen pt-16" style=move || PAGE_MOTION.style(phase.get())>
            {move || render_page(displayed.get())}
        </main>
    }
}
