use jokebox::MessageSlot;
use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();

    let user_email = move || ctx.view.with(|v| v.user_email.clone());
    let joke = move || ctx.view.with(|v| v.joke_display.clone());
    let save_status = move || ctx.view.with(|v| v.message(MessageSlot::SaveStatus).to_string());

    let on_new_joke = move |_| ctx.run(|app| async move { app.fetch_joke().await });
    let on_save = move |_| ctx.run(|app| async move { app.save_joke().await });
    let on_profile = move |_| ctx.run(|app| async move { app.open_profile().await });
    let on_logout = move |_| ctx.run(|app| async move { app.logout().await });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"JokeBox"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">{user_email}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=on_profile class="btn btn-ghost">"My jokes"</button>
                        <button on:click=on_logout class="btn btn-outline btn-error">"Log out"</button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <p class="text-lg whitespace-pre-line">{joke}</p>
                        <div class="card-actions justify-end">
                            <button on:click=on_new_joke class="btn btn-ghost">"Another one"</button>
                            <button on:click=on_save class="btn btn-primary">"Save joke"</button>
                        </div>
                        <Show when=move || !save_status().is_empty()>
                            <p class="text-sm text-base-content/70">{save_status}</p>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
