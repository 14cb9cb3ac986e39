pub mod event_feed_service;
pub mod ledger_service;
pub mod price_simulator;
pub mod progress_service;
pub mod recommendation_service;
pub mod wallet_service;
