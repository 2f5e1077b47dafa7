//! Progress Bar Component

use leptos::prelude::*;

use crate::board::Progress;

/// Completion bar; renders nothing for an empty board
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    move || {
        progress.get().percent().map(|percent| {
            view! {
                <div class="card progress">
                    <div class="progress-label">
                        <span>"Progress"</span>
                        <span class="percent">{format!("{}%", percent)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style=format!("width: {}%;", percent)></div>
                    </div>
                </div>
            }
        })
    }
}
