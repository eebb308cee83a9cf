/// Main application entry point for ShareHub.
/// Owns the marketplace store and switches between the sign-in card and the marketplace.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{
    auth_panel::AuthPanel, inbox::Inbox, item_form::ItemForm, items_list::ItemsList,
    layout::Layout,
};
use crate::config::StoreConfig;
use crate::storage::default_slot;
use crate::store::{provide_store, use_store, Store};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // The store lives as long as the app root; views reach it through context.
    // Server and client both render the seed state first so hydration lines up.
    let store = provide_store(Store::in_memory(StoreConfig::default()));
    // Effects never run on the server. The browser slot is read on the next
    // frame, after hydration has finished.
    create_effect(move |_| {
        request_animation_frame(move || {
            store.mutate(|s| s.rehydrate(default_slot()));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sharehub.css"/>
        <Title text="ShareHub"/>
        <Router>
            <Routes>
                <Route path="" view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let store = use_store();
    let signed_in = move || store.with(|s| s.current_user().is_some());

    view! {
        <Layout>
            <Show when=signed_in fallback=|| view! { <AuthPanel/> }>
                <Marketplace/>
            </Show>
        </Layout>
    }
}

#[component]
fn Marketplace() -> impl IntoView {
    let (show_form, set_show_form) = create_signal(false);

    view! {
        <div class="marketplace">
            <div class="toolbar">
                <h2>{ "Available Items" }</h2>
                <button on:click=move |_| set_show_form.set(true)>{ "List New Item" }</button>
            </div>
            <Show when=move || show_form.get()>
                <ItemForm on_close=move |_| set_show_form.set(false)/>
            </Show>
            <ItemsList/>
            <Inbox/>
        </div>
    }
}
