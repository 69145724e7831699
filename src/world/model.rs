use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::loader::Record;

//////////////////////
/// WORLD STRUCTS  ///
//////////////////////

/// A named room. Equality and hashing compare both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    name: String,
    description: String,
}

impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Location {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a location from one loaded record.
    ///
    /// A missing or non-string `name` becomes the empty string rather than an
    /// error; the same goes for `description`. Unknown keys are ignored.
    pub fn from_record(record: &Record) -> Self {
        Location {
            name: string_field(record, "name"),
            description: string_field(record, "description"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location{{name='{}', description='{}'}}",
            self.name, self.description
        )
    }
}

fn string_field(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read-only set of locations plus the name of the room play starts in.
///
/// The start room is not checked against `locations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    locations: BTreeMap<String, Location>,
    initial_location_name: String,
}

impl World {
    /// Copies `locations`; later changes to the caller's map are not seen here.
    pub fn new(
        locations: &BTreeMap<String, Location>,
        initial_location_name: impl Into<String>,
    ) -> Self {
        let mut own = BTreeMap::new();
        for (name, location) in locations {
            own.insert(name.clone(), location.clone());
        }

        World {
            locations: own,
            initial_location_name: initial_location_name.into(),
        }
    }

    /// Index `locations` by name. On duplicate names the last one wins.
    pub fn from_locations(
        locations: impl IntoIterator<Item = Location>,
        initial_location_name: impl Into<String>,
    ) -> Self {
        let index: BTreeMap<String, Location> = locations
            .into_iter()
            .map(|loc| (loc.name.clone(), loc))
            .collect();

        World::new(&index, initial_location_name)
    }

    pub fn locations(&self) -> &BTreeMap<String, Location> {
        &self.locations
    }

    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn initial_location_name(&self) -> &str {
        &self.initial_location_name
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "World{{locations={{")?;
        for (i, (name, location)) in self.locations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={location}")?;
        }
        write!(
            f,
            "}}, initialLocationName='{}'}}",
            self.initial_location_name
        )
    }
}
