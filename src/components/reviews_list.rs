use leptos::*;

use crate::store::use_store;

/// Aggregate rating and received reviews of one user.
#[component]
pub fn ReviewsList(user_id: String) -> impl IntoView {
    let store = use_store();
    let profile = move || {
        store.with(|s| {
            s.user(&user_id)
                .map(|u| (u.rating, u.reviews.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="reviews">
            {move || {
                let (rating, reviews) = profile();
                view! {
                    <h4>{ format!("Rating: {:.1} ({} reviews)", rating, reviews.len()) }</h4>
                    <ul>
                        {reviews.into_iter().map(|review| view! {
                            <li>{ format!("{}/5 - {}", review.rating, review.comment) }</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                }
            }}
        </div>
    }
}
