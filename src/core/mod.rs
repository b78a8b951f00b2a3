pub mod google_data;
pub mod option_value;
pub mod rich_response;
pub mod system_intent;

pub use crate::domain::model::GooglePayload;
pub use crate::domain::ports::LoadData;
pub use crate::utils::error::Result;
