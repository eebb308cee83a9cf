use leptos::*;

use crate::store::use_store;

/// Messages addressed to the session user, newest last.
#[component]
pub fn Inbox() -> impl IntoView {
    let store = use_store();
    let rows = move || {
        store.with(|s| {
            let Some(me) = s.current_user() else {
                return Vec::new();
            };
            s.inbox(&me.id)
                .map(|m| {
                    let sender = s.user(&m.from_user_id).map(|u| u.name.clone()).unwrap_or_default();
                    let item = s.item(&m.item_id).map(|i| i.title.clone()).unwrap_or_default();
                    (m.id.clone(), sender, item, m.content.clone(), m.read)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="inbox">
            <h3>{ "Inbox" }</h3>
            <ul>
                {move || rows().into_iter().map(|(id, sender, item, content, read)| view! {
                    <li class:unread=!read>
                        <strong>{ sender }</strong>
                        { format!(" about {}: {}", item, content) }
                        {(!read).then(|| view! {
                            <button on:click=move |_| {
                                store.mutate(|s| s.mark_message_read(&id));
                            }>{ "Mark read" }</button>
                        })}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
