/// Grid of listing cards, one per item in the store.
/// Each card shows pricing, the owner, and the bid / contact / review actions.
use leptos::*;

use crate::components::{
    bid_form::BidForm, message_form::MessageForm, review_form::ReviewForm,
    reviews_list::ReviewsList,
};
use crate::models::{Item, User};
use crate::store::{use_store, Store};

/// Card keys in display order.
fn item_ids(store: &Store) -> Vec<String> {
    store.items().iter().map(|item| item.id.clone()).collect()
}

/// Owner id and bidding flag of a card. The action forms are rebuilt only
/// when this changes.
fn card_actions(store: &Store, item_id: &str) -> Option<(String, bool)> {
    store
        .item(item_id)
        .map(|item| (item.user_id.clone(), item.is_bidding_enabled))
}

#[component]
pub fn ItemsList() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="item-grid">
            <For
                each=move || store.with(item_ids)
                key=|id| id.clone()
                children=move |id: String| view! { <ItemCard item_id=id /> }
            />
        </div>
    }
}

#[component]
pub fn ItemCard(item_id: String) -> impl IntoView {
    let store = use_store();
    let (show_contact, set_show_contact) = create_signal(false);

    let details = {
        let item_id = item_id.clone();
        move || {
            store.with(|s| {
                s.item(&item_id)
                    .map(|item| (item.clone(), s.owner_of(item).cloned()))
            })
        }
    };
    let actions = {
        let item_id = item_id.clone();
        create_memo(move |_| store.with(|s| card_actions(s, &item_id)))
    };

    view! {
        <div class="item-card">
            {move || details().map(|(item, owner)| card_details(&item, owner.as_ref(), set_show_contact))}
            {move || actions.get().map(|(owner_id, bidding)| {
                let item_id = item_id.clone();
                let is_own = {
                    let owner_id = owner_id.clone();
                    move || store.with(|s| s.current_user().map(|u| u.id == owner_id).unwrap_or(false))
                };
                view! {
                    <div class="item-actions">
                        {bidding.then(|| view! { <BidForm item_id=item_id.clone() /> })}
                        <Show when=move || show_contact.get() && !is_own()>
                            <MessageForm to_user_id=owner_id.clone() item_id=item_id.clone() />
                            <ReviewForm to_user_id=owner_id.clone() />
                            <ReviewsList user_id=owner_id.clone() />
                        </Show>
                    </div>
                }
            })}
        </div>
    }
}

fn card_details(item: &Item, owner: Option<&User>, set_show_contact: WriteSignal<bool>) -> impl IntoView {
    let discount = item.discount_percent();
    let price_text = if item.is_bidding_enabled {
        format!("Current Bid: ${}", item.display_price())
    } else {
        format!("${}", item.price)
    };
    let (owner_initial, owner_name) = owner
        .map(|u| (u.initial(), u.name.clone()))
        .unwrap_or_default();

    view! {
        <img src=item.cover_image().to_string() alt=item.title.clone() />
        <div class="item-body">
            <div class="item-head">
                <h3>{ item.title.clone() }</h3>
                {(discount > 0).then(|| view! {
                    <span class="badge">{ format!("{}% OFF", discount) }</span>
                })}
            </div>
            <p class="description">{ item.description.clone() }</p>
            <div class="meta">
                <span>{ item.listing_label() }</span>
                {item.original_price.map(|p| view! {
                    <span class="strike">{ format!("${}", p) }</span>
                })}
                <span class="price">{ price_text }</span>
            </div>
            <div class="owner">
                <span class="avatar">{ owner_initial }</span>
                <span>{ owner_name }</span>
                <button on:click=move |_| set_show_contact.update(|v| *v = !*v)>{ "Contact" }</button>
            </div>
        </div>
    }
}
