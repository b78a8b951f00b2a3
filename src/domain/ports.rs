use crate::utils::error::Result;
use serde::Serialize;

/// A builder that projects its accumulated state into a wire payload.
pub trait LoadData {
    type Payload: Serialize;

    fn load_data(&self) -> Self::Payload;

    /// Mapping form of [`LoadData::load_data`].
    fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.load_data())?)
    }
}
