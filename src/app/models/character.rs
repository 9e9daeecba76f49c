//! # Character Model
//!
//! A single character record as served by the catalog API, plus the page
//! envelope the records arrive in.

use serde::{Deserialize, Serialize};

/// Gender value selected by the "Male & Alive" filter
pub const GENDER_MALE: &str = "Male";

/// Status value selected by the "Male & Alive" filter
pub const STATUS_ALIVE: &str = "Alive";

/// One character as received from the source. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Identity key within a fetch result
    pub id: i64,
    pub name: String,
    /// Opaque; observed values are "Alive", "Dead" and "unknown"
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    /// URI of the avatar image
    #[serde(default)]
    pub image: String,
}

impl CharacterRecord {
    /// Exact, case-sensitive match on both gender and status
    pub fn is_male_and_alive(&self) -> bool {
        self.gender == GENDER_MALE && self.status == STATUS_ALIVE
    }
}

/// Pagination metadata that accompanies every page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Response body of the character endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::character;
    use super::*;

    #[test]
    fn character_page_should_decode_api_payload() {
        let body = r#"{
            "info": {"count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null},
            "results": [{
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": ""},
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": [],
                "created": "2017-11-04T18:48:46.250Z"
            }]
        }"#;

        let page: CharacterPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.prev, None);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Rick Sanchez");
        assert_eq!(page.results[0].kind, "");
    }

    #[test]
    fn character_page_should_reject_missing_results() {
        let result = serde_json::from_str::<CharacterPage>(r#"{"info": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn male_and_alive_should_match_exact_values_only() {
        assert!(character(1, "a", "Alive", "Male").is_male_and_alive());
        assert!(!character(2, "b", "alive", "Male").is_male_and_alive());
        assert!(!character(3, "c", "Alive", "male").is_male_and_alive());
        assert!(!character(4, "d", "Dead", "Male").is_male_and_alive());
        assert!(!character(5, "e", "Alive", "Female").is_male_and_alive());
        assert!(!character(6, "f", "unknown", "unknown").is_male_and_alive());
    }
}
