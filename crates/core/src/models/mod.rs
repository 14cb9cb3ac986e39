pub mod asset;
pub mod content;
pub mod event;
pub mod ledger;
pub mod promo;
pub mod tutorial;
pub mod user;
