pub mod badge;
pub mod layout;
pub mod protected;
pub mod sidebar;
pub mod stat_card;
