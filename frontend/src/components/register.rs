use jokebox::view::FormField;
use jokebox::MessageSlot;
use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();

    let email = move || ctx.view.with(|v| v.register_form.email.clone());
    let password = move || ctx.view.with(|v| v.register_form.password.clone());
    let error_msg = move || ctx.view.with(|v| v.message(MessageSlot::RegisterError).to_string());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ctx.view.with_untracked(|v| v.register_form.clone());
        ctx.run(move |app| async move { app.register(&form.email, &form.password).await });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create an account"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || !error_msg().is_empty()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{error_msg}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="register-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="register-email"
                                type="email"
                                on:input=move |ev| ctx.app().set_field(FormField::RegisterEmail, event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="register-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="register-password"
                                type="password"
                                placeholder="At least 6 characters"
                                on:input=move |ev| ctx.app().set_field(FormField::RegisterPassword, event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit">"Register"</button>
                        </div>
                        <button class="btn btn-link" type="button" on:click=move |_| ctx.app().show_login()>
                            "Back to login"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
