//! Wire types for the characters endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize an id given either as an integer or a numeric string
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("id {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("id '{}' is not numeric", value)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// A character record as returned by the API.
///
/// Read-only: the screen only ever replaces the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub status: String,
    /// Not rendered; kept for completeness
    pub species: String,
    /// Avatar image URI
    pub image: String,
}

impl Character {
    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> &str {
        &self.name
    }
}

/// One page of the characters collection.
///
/// Only `items` is required. The pagination fields are informational and
/// never trigger further requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub items: Vec<Character>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

impl CharacterPage {
    /// A page holding exactly `items`, with no pagination metadata.
    pub fn from_items(items: Vec<Character>) -> Self {
        Self {
            items,
            total: None,
            page: None,
            size: None,
            pages: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRY: &str = r#"{
        "id": 1,
        "name": "Fry",
        "gender": "Male",
        "status": "Alive",
        "species": "Human",
        "image": "http://x/1.png"
    }"#;

    #[test]
    fn test_character_deserialize() {
        let character: Character = serde_json::from_str(FRY).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Fry");
        assert_eq!(character.avatar_alt(), "Fry");
        assert_eq!(character.species, "Human");
    }

    #[test]
    fn test_character_id_as_string() {
        let json = FRY.replace("\"id\": 1", "\"id\": \"42\"");
        let character: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(character.id, 42);
    }

    #[test]
    fn test_character_id_non_numeric_string_rejected() {
        let json = FRY.replace("\"id\": 1", "\"id\": \"fry\"");
        assert!(serde_json::from_str::<Character>(&json).is_err());
    }

    #[test]
    fn test_character_missing_field_rejected() {
        let json = r#"{"id": 1, "name": "Fry"}"#;
        assert!(serde_json::from_str::<Character>(json).is_err());
    }

    #[test]
    fn test_page_ignores_unknown_fields_and_keeps_order() {
        let json = format!(
            r#"{{"items": [{fry}, {bender}], "total": 87, "page": 1, "size": 50, "pages": 2, "extra": true}}"#,
            fry = FRY,
            bender = FRY
                .replace("\"id\": 1", "\"id\": 2")
                .replace("Fry", "Bender")
                .replace("Human", "Robot"),
        );
        let page: CharacterPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Fry");
        assert_eq!(page.items[1].name, "Bender");
        assert_eq!(page.total, Some(87));
        assert_eq!(page.pages, Some(2));
    }

    #[test]
    fn test_page_without_metadata() {
        let page: CharacterPage = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(page, CharacterPage::from_items(Vec::new()));
    }

    #[test]
    fn test_page_without_items_rejected() {
        assert!(serde_json::from_str::<CharacterPage>(r#"{"total": 0}"#).is_err());
    }
}
