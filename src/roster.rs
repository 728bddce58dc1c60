//! Character roster repository
//!
//! The catalog (plus any user-created characters) is assembled by the
//! embedding layer and handed in before match or tournament construction.
//! The engine only ever reads it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A playable character descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique roster id, used as an opaque tag for scoring and cue dispatch
    pub id: String,
    /// Display name
    pub name: String,
    /// Art reference, opaque to the engine
    #[serde(alias = "headImage")]
    pub head_image: String,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        head_image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            head_image: head_image.into(),
        }
    }
}

/// Ordered, read-only collection of characters with unique ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids
    pub fn new(characters: Vec<Character>) -> Result<Self, ConfigError> {
        for (i, c) in characters.iter().enumerate() {
            if characters[..i].iter().any(|other| other.id == c.id) {
                return Err(ConfigError::DuplicateCharacter { id: c.id.clone() });
            }
        }
        Ok(Self { characters })
    }

    /// Parse a roster from a JSON array of character descriptors
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        Self::new(characters)
    }

    /// New roster with `extras` appended; order is preserved, catalog first.
    /// This is how user-created characters join before construction.
    pub fn merged_with(&self, extras: Vec<Character>) -> Result<Self, ConfigError> {
        let mut characters = self.characters.clone();
        characters.extend(extras);
        Self::new(characters)
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            Character::new("ana", "Ana", "ana.png"),
            Character::new("beto", "Beto", "beto.png"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Roster::new(vec![
            Character::new("ana", "Ana", "a.png"),
            Character::new("ana", "Other Ana", "b.png"),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateCharacter { .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let roster = sample();
        assert!(roster.contains("beto"));
        assert_eq!(roster.get("ana").map(|c| c.name.as_str()), Some("Ana"));
        assert!(roster.get("nadie").is_none());
    }

    #[test]
    fn test_merge_keeps_catalog_order() {
        let roster = sample();
        let merged = roster
            .merged_with(vec![Character::new("custom", "Custom", "c.png")])
            .unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.characters()[2].id, "custom");
        // the source roster is untouched
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_merge_rejects_colliding_id() {
        let roster = sample();
        let result = roster.merged_with(vec![Character::new("ana", "Clone", "x.png")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_accepts_both_image_keys() {
        let roster = Roster::from_json(
            r#"[
                {"id": "ana", "name": "Ana", "headImage": "ana.png"},
                {"id": "beto", "name": "Beto", "head_image": "beto.png"}
            ]"#,
        )
        .unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ana").unwrap().head_image, "ana.png");
    }
}
