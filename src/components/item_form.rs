use leptos::logging::log;
use leptos::*;

use crate::forms::{FormError, ListingForm, CATEGORIES};
use crate::models::ListingType;
use crate::store::use_store;

/// Modal form for listing a new item as the session user.
#[component]
pub fn ItemForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let form = create_rw_signal(ListingForm::default());
    let (error, set_error) = create_signal(None::<String>);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.with_untracked(|f| f.to_new_item()).and_then(|fields| {
            store
                .dispatch(|s| s.add_item(fields))
                .map_err(FormError::from)
        });

        match result {
            Ok(item) => {
                log!("[FORM] Listed item {}", item.id);
                // Reset values
                form.set(ListingForm::default());
                set_error.set(None);
                on_close.call(());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal">
            <div class="modal-body">
                <button type="button" class="close" on:click=move |_| on_close.call(())>{ "×" }</button>
                <h3>{ "List New Item" }</h3>
                <form on:submit=handle_submit>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |e| form.update(|f| f.title = event_target_value(&e))
                    />
                    <textarea
                        placeholder="Description"
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |e| form.update(|f| f.description = event_target_value(&e))
                    />
                    <select on:change=move |e| form.update(|f| f.category = event_target_value(&e))>
                        {CATEGORIES.iter().map(|&(value, label)| view! {
                            <option
                                value=value
                                selected=move || form.with(|f| f.category == value)
                            >
                                { label }
                            </option>
                        }).collect::<Vec<_>>()}
                    </select>
                    <div class="row">
                        <input
                            type="number"
                            placeholder="Price"
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=move |e| form.update(|f| f.price = event_target_value(&e))
                        />
                        <input
                            type="number"
                            placeholder="Original Price (optional)"
                            prop:value=move || form.with(|f| f.original_price.clone())
                            on:input=move |e| form.update(|f| f.original_price = event_target_value(&e))
                        />
                    </div>
                    <div class="row">
                        <label>
                            <input
                                type="radio"
                                name="listing-type"
                                prop:checked=move || form.with(|f| f.listing_type == ListingType::Rent)
                                on:change=move |_| form.update(|f| f.listing_type = ListingType::Rent)
                            />
                            { "Rent" }
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="listing-type"
                                prop:checked=move || form.with(|f| f.listing_type == ListingType::Sell)
                                on:change=move |_| form.update(|f| f.listing_type = ListingType::Sell)
                            />
                            { "Sell" }
                        </label>
                    </div>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_bidding_enabled)
                            on:change=move |e| form.update(|f| f.is_bidding_enabled = event_target_checked(&e))
                        />
                        { "Enable Bidding" }
                    </label>
                    <input
                        type="url"
                        placeholder="Image URL"
                        prop:value=move || form.with(|f| f.image_url.clone())
                        on:input=move |e| form.update(|f| f.image_url = event_target_value(&e))
                    />
                    {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
                    <button type="submit">{ "List Item" }</button>
                </form>
            </div>
        </div>
    }
}
