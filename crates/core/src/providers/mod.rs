pub mod mock_identity;
pub mod static_content;
pub mod traits;
