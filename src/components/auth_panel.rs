use leptos::logging::log;
use leptos::*;

use crate::forms::{AuthForm, FormError};
use crate::store::use_store;

/// Login / sign-up card shown while nobody is signed in.
#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_store();
    let (is_login, set_is_login) = create_signal(true);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let form = AuthForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        let result: Result<(), FormError> = if is_login.get_untracked() {
            store
                .dispatch(|s| s.login(&form.email, &form.password))
                .map_err(FormError::from)
        } else {
            form.validate_registration().and_then(|_| {
                store
                    .dispatch(|s| s.register(&form.name, &form.email, &form.password))
                    .map(|user| log!("[AUTH] Created account {}", user.id))
                    .map_err(FormError::from)
            })
        };

        if let Err(e) = result {
            set_error.set(Some(e.to_string()));
        }
    };

    let toggle_mode = move |_: ev::MouseEvent| {
        set_is_login.update(|v| *v = !*v);
        set_error.set(None);
        set_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    view! {
        <div class="auth-card">
            <h2>{move || if is_login.get() { "Welcome Back" } else { "Create Account" }}</h2>
            <form on:submit=handle_submit>
                <Show when=move || !is_login.get()>
                    <input
                        type="text"
                        name="name"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |e| set_name.set(event_target_value(&e))
                    />
                </Show>
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |e| set_email.set(event_target_value(&e))
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |e| set_password.set(event_target_value(&e))
                />
                {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
                <button type="submit">
                    {move || if is_login.get() { "Login" } else { "Sign Up" }}
                </button>
                <p class="switch">
                    {move || if is_login.get() { "Don't have an account? " } else { "Already have an account? " }}
                    <button type="button" on:click=toggle_mode>
                        {move || if is_login.get() { "Sign up" } else { "Login" }}
                    </button>
                </p>
            </form>
        </div>
    }
}
