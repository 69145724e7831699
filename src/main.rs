use std::io;

use tracing_subscriber::EnvFilter;

use dungeon_world::world::validate_world;
use dungeon_world::{DEFAULT_DATA_FILE, DEFAULT_INITIAL_LOCATION, load_world, print_world};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dungeon_world=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let world = load_world(DEFAULT_DATA_FILE, DEFAULT_INITIAL_LOCATION);
    tracing::debug!(rooms = world.len(), "World ready");
    for finding in validate_world(&world) {
        tracing::warn!("{}", finding.message);
    }

    print_world(&world, &mut io::stdout().lock());
}
