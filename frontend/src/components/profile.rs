use jokebox::{MessageSlot, SavedJoke};
use leptos::prelude::*;
use tracing::warn;

use crate::context::{AppContext, use_app};

#[component]
fn SavedJokeRow(record: SavedJoke) -> impl IntoView {
    let ctx: AppContext = use_app();
    let record_id = record.id.clone();

    let on_delete = move |_| {
        let app = ctx.app();
        let Some(session) = app.session() else {
            warn!("delete requested without a session");
            return;
        };
        let record_id = record_id.clone();
        ctx.run(move |app| async move { app.delete_joke(&session.user_id, &record_id).await });
    };

    view! {
        <li class="flex items-start justify-between gap-4 py-3">
            <div>
                <p class="whitespace-pre-line">{record.text}</p>
                <p class="text-xs text-base-content/50">
                    {record.saved_at.format("%Y-%m-%d %H:%M").to_string()}
                </p>
            </div>
            <button on:click=on_delete class="btn btn-sm btn-outline btn-error">"Delete"</button>
        </li>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();

    let records = move || ctx.view.with(|v| v.saved_jokes.clone());
    let status = move || ctx.view.with(|v| v.message(MessageSlot::ProfileStatus).to_string());
    let on_back = move |_| ctx.run(|app| async move { app.back_to_dashboard().await });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <a class="btn btn-ghost text-xl">"My saved jokes"</a>
                    </div>
                    <button on:click=on_back class="btn btn-ghost">"Back to dashboard"</button>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <Show when=move || !status().is_empty()>
                            <p class="text-base-content/70">{status}</p>
                        </Show>
                        <ul class="divide-y divide-base-200">
                            <For
                                each=records
                                key=|record| record.id.clone()
                                children=|record| view! { <SavedJokeRow record=record /> }
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
