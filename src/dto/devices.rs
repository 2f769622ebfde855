use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Device;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct DeviceList {
    #[schema(value_type = Vec<Device>)]
    pub items: Vec<Device>,
}
