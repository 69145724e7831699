use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Report suspicious but tolerated world data. Nothing here stops a world
/// from being built or printed; the binary only logs the findings.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.is_empty() {
        errors.push(ValidationError::new("world has no locations"));
    }

    if world
        .location_by_name(world.initial_location_name())
        .is_none()
    {
        errors.push(ValidationError::new(format!(
            "initial location '{}' not found among locations",
            world.initial_location_name()
        )));
    }

    // Records without a usable name all collapse onto the "" key
    if world.location_by_name("").is_some() {
        errors.push(ValidationError::new("a location has an empty name"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Location;

    #[test]
    fn clean_world_has_no_findings() {
        let world = World::from_locations([Location::new("Room 1", "Dusty.")], "Room 1");
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn reports_missing_start_and_empty_names() {
        let world = World::from_locations([Location::new("", "Nowhere.")], "Room 1");
        let messages: Vec<String> = validate_world(&world)
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert_eq!(
            messages,
            [
                "initial location 'Room 1' not found among locations",
                "a location has an empty name",
            ]
        );
    }

    #[test]
    fn empty_world_reports_both() {
        let world = World::from_locations(Vec::new(), "Room 1");
        assert_eq!(validate_world(&world).len(), 2);
    }
}
