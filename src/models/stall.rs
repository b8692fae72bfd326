use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stall {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub stall_name: String,
    pub stall_description: String,
    #[serde(default)]
    pub stall_image: Vec<String>,
}
