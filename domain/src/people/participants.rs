//! Resolving the group that is going out

use super::entities::Person;
use crate::core::error::DomainError;
use crate::core::id::RecordId;

/// Pick the participants out of the stored people list.
///
/// The result keeps the stored order, not the order of `selected`.
/// Duplicate ids in `selected` are ignored.
pub fn select_participants(
    people: &[Person],
    selected: &[RecordId],
) -> Result<Vec<Person>, DomainError> {
    if selected.is_empty() {
        return Err(DomainError::NoParticipantsSelected);
    }

    if let Some(unknown) = selected
        .iter()
        .find(|id| !people.iter().any(|p| &p.id == *id))
    {
        return Err(DomainError::UnknownPerson(unknown.to_string()));
    }

    Ok(people
        .iter()
        .filter(|p| selected.contains(&p.id))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Person> {
        vec![
            Person::new("1", "Alice"),
            Person::new("2", "Bob"),
            Person::new("3", "Carol"),
        ]
    }

    #[test]
    fn test_keeps_stored_order() {
        let selected = vec![RecordId::new("3"), RecordId::new("1")];
        let chosen = select_participants(&people(), &selected).unwrap();
        let names: Vec<_> = chosen.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(
            select_participants(&people(), &[]),
            Err(DomainError::NoParticipantsSelected)
        );
    }

    #[test]
    fn test_unknown_id() {
        let selected = vec![RecordId::new("1"), RecordId::new("9")];
        assert_eq!(
            select_participants(&people(), &selected),
            Err(DomainError::UnknownPerson("9".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let selected = vec![RecordId::new("2"), RecordId::new("2")];
        let chosen = select_participants(&people(), &selected).unwrap();
        assert_eq!(chosen.len(), 1);
    }
}
