pub mod render;
pub mod world;

use std::io::Write;

use world::{Location, World};

pub use render::{Output, OutputBlock, render_world};
pub use world::{LoadError, SearchPath, load_data, load_data_from, try_load_data};

/// Data file the binary reads its rooms from.
pub const DEFAULT_DATA_FILE: &str = "dungeon-locations.json";

/// Start room handed to the world; not checked against the loaded rooms.
pub const DEFAULT_INITIAL_LOCATION: &str = "Room 1";

/// Load `file_name` from the default search path and build a world from it.
///
/// A failed load produces an empty world, never an error.
pub fn load_world(file_name: &str, initial_location_name: &str) -> World {
    load_world_from(file_name, initial_location_name, &SearchPath::default())
}

pub fn load_world_from(
    file_name: &str,
    initial_location_name: &str,
    search: &SearchPath,
) -> World {
    let records = load_data_from(file_name, search);
    World::from_locations(
        records.iter().map(Location::from_record),
        initial_location_name,
    )
}

/// Print the room table to `w`.
///
/// Write failures (a closed pipe, say) are logged and otherwise ignored, so
/// the program still exits successfully.
pub fn print_world(world: &World, w: &mut impl Write) {
    if let Err(e) = render_world(world).write_to(w) {
        tracing::warn!(error = %e, "Failed to write room table");
    }
}
