use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Attribute body shared by create and update. Values are JSON integers;
/// strings, floats and booleans fail to decode instead of being coerced.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributesRequest {
    pub score: Option<i64>,
    pub coin: Option<i64>,
    pub green_skin: Option<i64>,
    pub red_skin: Option<i64>,
    pub blue_skin: Option<i64>,
}

/// Validated values ready to be written to `db_attributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValues {
    pub score: i64,
    pub coin: i64,
    pub green_skin: i16,
    pub red_skin: i16,
    pub blue_skin: i16,
}

impl AttributesRequest {
    /// Creation treats absent fields as zero.
    pub fn for_create(self) -> Result<AttributeValues, ApiError> {
        Ok(AttributeValues {
            score: self.score.unwrap_or(0),
            coin: self.coin.unwrap_or(0),
            green_skin: skin_flag("greenSkin", self.green_skin.unwrap_or(0))?,
            red_skin: skin_flag("redSkin", self.red_skin.unwrap_or(0))?,
            blue_skin: skin_flag("blueSkin", self.blue_skin.unwrap_or(0))?,
        })
    }

    /// Update replaces every column, so every field must be present.
    pub fn for_update(self) -> Result<AttributeValues, ApiError> {
        let (Some(score), Some(coin), Some(green), Some(red), Some(blue)) = (
            self.score,
            self.coin,
            self.green_skin,
            self.red_skin,
            self.blue_skin,
        ) else {
            return Err(ApiError::bad_request(
                "Missing required fields: score, coin, greenSkin, redSkin, blueSkin",
            ));
        };

        Ok(AttributeValues {
            score,
            coin,
            green_skin: skin_flag("greenSkin", green)?,
            red_skin: skin_flag("redSkin", red)?,
            blue_skin: skin_flag("blueSkin", blue)?,
        })
    }
}

fn skin_flag(field: &str, value: i64) -> Result<i16, ApiError> {
    match value {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(ApiError::bad_request(format!("{field} must be 0 or 1"))),
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedAttributesResponse {
    pub success: bool,
    pub id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedAttributesResponse {
    pub success: bool,
    pub message: String,
    pub player_id: i32,
}
