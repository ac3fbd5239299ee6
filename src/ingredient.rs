use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    client::ClientError,
    utils::lenient::{
        deserialize_optional_string_or_number, deserialize_string_or_number, StringOrNumber,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone, Eq, Hash)]
#[serde(try_from = "StringOrNumber")]
pub struct IngredientId(pub i64);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<StringOrNumber> for IngredientId {
    type Error = String;

    fn try_from(value: StringOrNumber) -> Result<Self, Self::Error> {
        match value {
            StringOrNumber::Integer(id) => Ok(Self(id)),
            StringOrNumber::Float(id) if id.fract() == 0.0 => Ok(Self(id as i64)),
            StringOrNumber::Text(ref id) => id
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| format!("Invalid ingredient id `{value}`")),
            other => Err(format!("Invalid ingredient id `{other}`")),
        }
    }
}

impl From<i64> for IngredientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A pantry item registered by the user
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct Ingredient {
    pub id: IngredientId,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub quantity: String,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub memo: Option<String>,
}

impl Ingredient {
    pub fn amount(&self) -> String {
        format!("{}{}", self.quantity, self.unit.as_deref().unwrap_or_default())
    }

    pub fn note(&self) -> Option<&str> {
        self.memo.as_deref().filter(|memo| !memo.is_empty())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.amount())?;
        if let Some(note) = self.note() {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

/// Body of `POST /api/mypages/ingredients`, fields as typed by the user
#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Clone, Default)]
pub struct NewIngredient {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub memo: String,
}

impl NewIngredient {
    pub fn try_new(
        name: String,
        quantity: String,
        unit: String,
        memo: String,
    ) -> Result<Self, IngredientError> {
        let new_ingredient = Self {
            name,
            quantity,
            unit,
            memo,
        };

        new_ingredient.validate()?;

        Ok(new_ingredient)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("재료 이름을 입력해주세요.")]
    InvalidForm(#[from] ValidationErrors),
    #[error("재료 추가에 실패했습니다.")]
    Create(#[source] ClientError),
    #[error("재료 삭제에 실패했습니다.")]
    Delete(#[source] ClientError),
}
