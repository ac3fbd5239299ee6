use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::lenient::{
    deserialize_optional_string_or_number, first_non_empty, first_truthy, StringOrNumber,
};

pub const UNTITLED_RECIPE: &str = "제목 없음";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<RecipeId> for String {
    fn from(recipe_id: RecipeId) -> Self {
        recipe_id.0
    }
}

/// A recipe as listed on the user page (liked, saved, authored or recommended).
///
/// Two backend schemas coexist: the current camelCase one and the legacy
/// abbreviated one (`rcpSno`, `rcpTtl`, ...). Both are folded into this type
/// when deserializing, so the rest of the code only sees one shape.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
#[serde(from = "RecipeRecord", rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<RecipeId>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub view_count: u64,
    pub like_count: u64,
}

impl Recipe {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_RECIPE)
    }
}

/// Raw wire record accepting every known field name
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    recipe_id: Option<StringOrNumber>,
    rcp_sno: Option<StringOrNumber>,
    id: Option<StringOrNumber>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    rcp_ttl: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    rcp_img_url: Option<String>,
    view_count: Option<StringOrNumber>,
    inq_cnt: Option<StringOrNumber>,
    like_count: Option<StringOrNumber>,
    rcmm_cnt: Option<StringOrNumber>,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: first_truthy([record.recipe_id, record.rcp_sno, record.id])
                .map(|id| RecipeId(id.to_string())),
            title: first_non_empty([record.title, record.rcp_ttl]),
            image_url: first_non_empty([record.image_url, record.rcp_img_url]),
            view_count: first_truthy([record.view_count, record.inq_cnt])
                .map(into_count)
                .unwrap_or_default(),
            like_count: first_truthy([record.like_count, record.rcmm_cnt])
                .map(into_count)
                .unwrap_or_default(),
        }
    }
}

fn into_count(value: StringOrNumber) -> u64 {
    match value {
        StringOrNumber::Integer(count) => count.max(0) as u64,
        StringOrNumber::Float(count) => count.max(0.0) as u64,
        StringOrNumber::Text(count) => count.trim().parse().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Recipe {
        serde_json::from_value(value).unwrap()
    }

    #[rstest]
    fn test_current_schema() {
        assert_eq!(
            parse(json!({
                "recipeId": 12,
                "title": "김치찌개",
                "imageUrl": "https://cdn.example.com/kimchi.jpg",
                "viewCount": 120,
                "likeCount": 8
            })),
            Recipe {
                id: Some(RecipeId("12".to_string())),
                title: Some("김치찌개".to_string()),
                image_url: Some("https://cdn.example.com/kimchi.jpg".to_string()),
                view_count: 120,
                like_count: 8,
            }
        );
    }

    #[rstest]
    fn test_legacy_schema() {
        assert_eq!(
            parse(json!({
                "rcpSno": "7003",
                "rcpTtl": "된장국",
                "rcpImgUrl": "/images/soup.jpg",
                "inqCnt": 31,
                "rcmmCnt": 2
            })),
            Recipe {
                id: Some(RecipeId("7003".to_string())),
                title: Some("된장국".to_string()),
                image_url: Some("/images/soup.jpg".to_string()),
                view_count: 31,
                like_count: 2,
            }
        );
    }

    #[rstest]
    #[case::recipe_id_first(json!({ "recipeId": 1, "rcpSno": 2, "id": 3 }), Some("1"))]
    #[case::rcp_sno_second(json!({ "rcpSno": 2, "id": 3 }), Some("2"))]
    #[case::plain_id_last(json!({ "id": 3 }), Some("3"))]
    #[case::zero_falls_through(json!({ "recipeId": 0, "id": 3 }), Some("3"))]
    #[case::empty_string_falls_through(json!({ "recipeId": "", "rcpSno": "9" }), Some("9"))]
    #[case::missing(json!({ "title": "no id" }), None)]
    fn test_recipe_id_fallback(#[case] value: serde_json::Value, #[case] expected: Option<&str>) {
        assert_eq!(
            parse(value).id,
            expected.map(|id| RecipeId(id.to_string()))
        );
    }

    #[rstest]
    fn test_zero_counts_fall_back_to_legacy_fields() {
        let recipe = parse(json!({ "viewCount": 0, "inqCnt": 5, "likeCount": null, "rcmmCnt": 4 }));

        assert_eq!(recipe.view_count, 5);
        assert_eq!(recipe.like_count, 4);
    }

    #[rstest]
    fn test_numeric_title_is_kept_as_text() {
        let recipe = parse(json!({ "recipeId": 8, "title": 2024, "imageUrl": null }));

        assert_eq!(recipe.display_title(), "2024");
        assert_eq!(recipe.image_url, None);
    }

    #[rstest]
    fn test_missing_fields_use_defaults() {
        let recipe = parse(json!({ "title": "" }));

        assert_eq!(recipe.display_title(), UNTITLED_RECIPE);
        assert_eq!(recipe.image_url, None);
        assert_eq!(recipe.view_count, 0);
        assert_eq!(recipe.like_count, 0);
    }

    #[rstest]
    fn test_normalized_recipe_serializes_to_current_schema() {
        let recipe = parse(json!({ "rcpSno": 5, "rcpTtl": "비빔밥", "inqCnt": 3 }));

        assert_eq!(
            serde_json::to_value(&recipe).unwrap(),
            json!({
                "id": "5",
                "title": "비빔밥",
                "imageUrl": null,
                "viewCount": 3,
                "likeCount": 0
            })
        );
        assert_eq!(parse(serde_json::to_value(&recipe).unwrap()), recipe);
    }
}
