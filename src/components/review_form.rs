use leptos::*;

use crate::forms::{parse_rating, FormError};
use crate::store::use_store;

#[component]
pub fn ReviewForm(to_user_id: String) -> impl IntoView {
    let store = use_store();
    let (rating, set_rating) = create_signal("5".to_string()); // Default rating to 5
    let (comment, set_comment) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let submit_review = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = parse_rating(&rating.get_untracked()).and_then(|value| {
            let text = comment.get_untracked();
            store
                .dispatch(|s| s.add_review(&to_user_id, value, &text))
                .map_err(FormError::from)
        });
        match result {
            Ok(_) => {
                set_comment.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="review-form" on:submit=submit_review>
            <h4>{ "Rate this owner (1-5)" }</h4>
            <input
                type="number"
                min="1"
                max="5"
                prop:value=move || rating.get()
                on:input=move |e| set_rating.set(event_target_value(&e))
            />
            <textarea
                placeholder="Write your review here"
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
