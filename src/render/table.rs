use crate::render::output::Output;
use crate::world::World;

/// Width of the widest room name, in characters. Zero for an empty world.
pub fn name_column_width(world: &World) -> usize {
    world
        .locations()
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Header naming the start room, a blank line, then `name | description`
/// per room with names left-justified to a common width.
pub fn render_world(world: &World) -> Output {
    let mut out = Output::new();

    out.title(format!(
        "World with starting location {}",
        world.initial_location_name()
    ));
    out.blank();

    let width = name_column_width(world);
    for (name, location) in world.locations() {
        out.row(format!("{name:<width$} | {}", location.description()));
    }

    out
}
