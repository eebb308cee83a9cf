pub mod auth_panel;
pub mod bid_form;
pub mod inbox;
pub mod item_form;
pub mod items_list;
pub mod layout;
pub mod message_form;
pub mod review_form;
pub mod reviews_list;
