use leptos::*;

use crate::store::use_store;

/// Page chrome: header with the session user and logout, then the page body.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = use_store();
    let session = move || {
        store.with(|s| {
            s.current_user()
                .map(|u| (u.name.clone(), s.unread_count(&u.id)))
        })
    };

    view! {
        <div class="layout">
            <header class="header">
                <h1 class="brand">{ "ShareHub" }</h1>
                {move || session().map(|(name, unread)| view! {
                    <div class="session">
                        <span class="bell">{ format!("Unread: {}", unread) }</span>
                        <span class="user-name">{ name }</span>
                        <button on:click=move |_| {
                            store.mutate(|s| s.logout());
                        }>{ "Log out" }</button>
                    </div>
                })}
            </header>
            <main class="content">{children()}</main>
            <footer class="footer">
                <p>{ "© 2024 ShareHub. All rights reserved." }</p>
            </footer>
        </div>
    }
}
