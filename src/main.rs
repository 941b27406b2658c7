//! Spin Wheel entry point
//!
//! The browser build is driven through `platform::web::WheelHandle`. The
//! native binary runs a headless demo: spins a wheel a few times at the fixed
//! animation step and checks each stop against the pointer lookup.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Spin wheel (native) starting...");

    let seed =
        env_u64("SPIN_WHEEL_SEED").unwrap_or_else(|| spin_wheel::platform::now_ms() as u64);
    let spins = env_u64("SPIN_WHEEL_SPINS").unwrap_or(5) as usize;

    if let Err(e) = run_demo(seed, spins) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WheelHandle, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64, spins: usize) -> spin_wheel::Result<()> {
    use spin_wheel::consts::ANIM_DT;
    use spin_wheel::renderer::{Vertex, build_wheel};
    use spin_wheel::wheel::{TickInput, WheelEvent, WheelState, segment_at_pointer, tick};
    use spin_wheel::{SpinHistory, WheelSettings};

    let settings = WheelSettings::load();
    let mut history = SpinHistory::load(settings.history_len);
    let entries = ["Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis"];
    let mut state = WheelState::with_entries(entries, settings, seed)?;
    log::info!("Wheel with {} entries, seed {}", entries.len(), seed);

    for round in 1..=spins {
        let spin = TickInput {
            spin: true,
            ..Default::default()
        };
        let mut winner = tick(&mut state, &spin, ANIM_DT)?;
        let mut finished = None;
        loop {
            for event in state.drain_events() {
                match event {
                    WheelEvent::SpinFinished { winner_index, name } => {
                        finished = Some((winner_index, name));
                    }
                    other => log::debug!("Event: {:?}", other),
                }
            }
            if winner.is_some() {
                break;
            }
            winner = tick(&mut state, &TickInput::default(), ANIM_DT)?;
        }
        let Some((winner, name)) = finished else { continue };

        // Cross-check against the raw pointer lookup on the stored rotation
        let shown = segment_at_pointer(state.rotation().current(), state.segments().len())?;
        println!(
            "Spin {round}: {name} (index {winner}, pointer shows {shown}, accumulated {:.1}°)",
            state.rotation().accumulated()
        );
        history.record(
            winner,
            name,
            state.rotation().accumulated(),
            spin_wheel::platform::now_ms(),
        );
    }

    let mesh = build_wheel(&state, 200.0)?;
    log::info!(
        "Final frame: {} vertices ({} bytes)",
        mesh.vertices().len(),
        Vertex::as_bytes(&mesh.vertices()).len()
    );
    if let Some(last) = history.last() {
        println!(
            "Last winner: {} ({} win(s) in recent history)",
            last.name,
            history.count_for(&last.name)
        );
    }
    history.save();
    Ok(())
}
