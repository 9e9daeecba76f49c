//! The "Male & Alive" filter.

use crate::app::models::CharacterRecord;

/// Keep the male and alive characters, in their original order
pub fn male_and_alive(characters: Vec<CharacterRecord>) -> Vec<CharacterRecord> {
    characters
        .into_iter()
        .filter(|character| character.is_male_and_alive())
        .collect()
}
