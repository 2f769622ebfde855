use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Theme;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeData {
    pub theme: Theme,
}
