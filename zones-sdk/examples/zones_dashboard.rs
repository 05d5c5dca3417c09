//! Zones dashboard - minimal consumer of the SDK
//!
//! Renders the currently playing track and the zone list to stdout on
//! every applied update. Pass a zone name as the second argument to
//! redirect playback to it once the first snapshot lands.
//!
//! Run: cargo run -p zones-sdk --example zones_dashboard -- \
//!     http://localhost:9090/spotify [zone-name]

use zones_sdk::{SdkError, ZoneSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    zones_state::init_logging_from_env()?;

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:9090/spotify".to_string());
    let select_name = args.next();

    println!("Connecting to {}...", base_url);
    let system = ZoneSystem::new(base_url);
    let _handle = system.start()?;

    let events = system.iter();
    let mut selected = false;

    for event in events {
        render(&system, event.revision);

        if !selected {
            if let Some(name) = select_name.as_deref() {
                match system.get_zone_by_name(name) {
                    Some(zone) => {
                        println!("\n>> transferring playback to {}", zone.name);
                        if let Err(err) = zone.select() {
                            eprintln!(">> transfer failed: {}", err);
                        }
                        selected = true;
                    }
                    None => {
                        // Zone may appear in a later snapshot; keep trying
                        let err = SdkError::ZoneNotFound(name.to_string());
                        eprintln!(">> {}", err);
                    }
                }
            }
        }
    }

    Ok(())
}

fn render(system: &ZoneSystem, revision: u64) {
    let snapshot = system.snapshot();

    println!("\n--- snapshot {} ---", revision);
    match &snapshot.track.name {
        Some(name) => println!(
            "Playing: {} / {} / {}",
            name,
            snapshot.track.album.as_deref().unwrap_or("?"),
            snapshot.track.artist_line()
        ),
        None => println!("Playing: (nothing yet)"),
    }

    for zone in system.zones() {
        let marker = if zone.is_active { "*" } else { " " };
        println!(
            " {} {} [{}] Vol = {}",
            marker, zone.name, zone.kind, zone.volume_percent
        );
    }
}
