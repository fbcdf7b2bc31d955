//! Kinetic Bricks entry point
//!
//! Runs the simulation headless with a scripted spawn key and reports the
//! final state. Usage: `kinetic-bricks [settings.json]`

use kinetic_bricks::platform::{self, ScriptedHost};
use kinetic_bricks::renderer;
use kinetic_bricks::{Settings, SimState};

fn main() {
    env_logger::init();
    log::info!("Kinetic Bricks (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    let seed = settings.resolve_seed();
    let mut state = SimState::new(seed, settings.tuning);
    let mut host = ScriptedHost::new(settings.frames).tap_every(settings.spawn_every);

    let frames = platform::run(&mut host, &mut state);
    let vertices = renderer::tessellate(host.last_commands());
    let last = host.last_stats();

    println!("seed:     {seed}");
    println!("frames:   {frames}");
    println!("balls:    {}", state.world.len());
    println!("bricks:   {}", state.field.len());
    println!("vertices: {} (last frame)", vertices.len());
    println!(
        "contacts: {} reflected, {} struck, {} destroyed (last frame)",
        last.contacts.reflected, last.contacts.struck, last.contacts.destroyed
    );
}
