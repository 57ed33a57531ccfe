use jokebox::view::FormField;
use jokebox::MessageSlot;
use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let email = move || ctx.view.with(|v| v.login_form.email.clone());
    let password = move || ctx.view.with(|v| v.login_form.password.clone());
    let error_msg = move || ctx.view.with(|v| v.message(MessageSlot::LoginError).to_string());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ctx.view.with_untracked(|v| v.login_form.clone());
        ctx.run(move |app| async move { app.login(&form.email, &form.password).await });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"JokeBox"</h1>
                    <p class="text-base-content/70">"Sign in to save your favourite jokes"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || !error_msg().is_empty()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{error_msg}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="login-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="login-email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| ctx.app().set_field(FormField::LoginEmail, event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="login-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="login-password"
                                type="password"
                                on:input=move |ev| ctx.app().set_field(FormField::LoginPassword, event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit">"Log in"</button>
                        </div>
                        <button class="btn btn-link" type="button" on:click=move |_| ctx.app().show_register()>
                            "No account? Register"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
