use leptos::*;

use crate::forms::{parse_bid, FormError};
use crate::store::use_store;

#[component]
pub fn BidForm(item_id: String) -> impl IntoView {
    let store = use_store();
    let (amount, set_amount) = create_signal(String::new());
    let (feedback, set_feedback) = create_signal(None::<String>);

    let submit_bid = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = parse_bid(&amount.get_untracked()).and_then(|value| {
            store
                .dispatch(|s| s.place_bid(&item_id, value))
                .map_err(FormError::from)
        });
        match result {
            Ok(()) => {
                set_amount.set(String::new());
                set_feedback.set(None);
            }
            Err(e) => set_feedback.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="bid-form" on:submit=submit_bid>
            <input
                type="number"
                placeholder="Your bid"
                prop:value=move || amount.get()
                on:input=move |e| set_amount.set(event_target_value(&e))
            />
            <button type="submit">{ "Place Bid" }</button>
            {move || feedback.get().map(|message| view! { <p class="error">{ message }</p> })}
        </form>
    }
}
