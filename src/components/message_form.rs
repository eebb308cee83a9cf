use leptos::*;

use crate::forms::{validate_message, FormError};
use crate::store::use_store;

/// Contact form sending a message to a listing's owner.
#[component]
pub fn MessageForm(to_user_id: String, item_id: String) -> impl IntoView {
    let store = use_store();
    let (content, set_content) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<String>);

    let send = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        let result = validate_message(&text).and_then(|body| {
            store
                .dispatch(|s| s.send_message(&to_user_id, &item_id, body))
                .map_err(FormError::from)
        });
        match result {
            Ok(_) => {
                set_content.set(String::new());
                set_status.set(Some("Message sent".to_string()));
            }
            Err(e) => set_status.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="message-form" on:submit=send>
            <textarea
                placeholder="Ask the owner about this item"
                prop:value=move || content.get()
                on:input=move |e| set_content.set(event_target_value(&e))
            />
            <button type="submit">{ "Send" }</button>
            {move || status.get().map(|message| view! { <p class="status">{ message }</p> })}
        </form>
    }
}
