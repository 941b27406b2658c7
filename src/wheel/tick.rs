//! Frame tick
//!
//! Advances the wheel by one timestep: applies UI requests, runs the spin
//! animation and completes the spin once the animation reaches its end.

use super::state::WheelState;
use crate::error::{Result, WheelError};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Spin toward a random entry (click/tap/space)
    pub spin: bool,
    /// Spin toward a chosen entry (picked by an external routine)
    pub spin_to: Option<usize>,
    /// Abandon the current spin without moving the wheel's resting rotation
    pub cancel: bool,
}

/// Advance the wheel by `dt` seconds.
///
/// Returns the winner index on the tick a spin completes. Spin requests that
/// arrive while a spin is animating are dropped.
pub fn tick(state: &mut WheelState, input: &TickInput, dt: f64) -> Result<Option<usize>> {
    if input.cancel && state.is_spinning() {
        state.cancel_spin()?;
    }

    let request = if let Some(target) = input.spin_to {
        Some(state.begin_spin(target))
    } else if input.spin {
        Some(state.begin_random_spin())
    } else {
        None
    };
    match request {
        Some(Err(WheelError::SpinInProgress)) => {
            log::debug!("Spin request ignored, wheel already spinning");
        }
        Some(Err(e)) => return Err(e),
        Some(Ok(_)) | None => {}
    }

    if state.advance_animation(dt) {
        return state.complete_spin().map(Some);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ANIM_DT;
    use crate::settings::WheelSettings;
    use crate::wheel::{SpinPhase, WheelEvent};

    fn wheel(duration: f64) -> WheelState {
        let settings = WheelSettings {
            spin_duration_secs: duration,
            ..Default::default()
        };
        WheelState::with_entries(["Ada", "Bob", "Cy", "Di"], settings, 12345).unwrap()
    }

    #[test]
    fn test_tick_idle_to_finished() {
        let mut state = wheel(1.0);
        let spin = TickInput {
            spin_to: Some(2),
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &spin, ANIM_DT).unwrap(), None);
        assert!(state.is_spinning());

        let mut winner = None;
        for _ in 0..120 {
            if let Some(w) = tick(&mut state, &TickInput::default(), ANIM_DT).unwrap() {
                winner = Some(w);
                break;
            }
        }
        assert_eq!(winner, Some(2));
        assert_eq!(*state.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_display_rotation_never_goes_backward() {
        let mut state = wheel(0.5);
        let mut last = state.display_rotation();
        for round in 0..5 {
            let input = TickInput {
                spin: true,
                ..Default::default()
            };
            tick(&mut state, &input, ANIM_DT).unwrap();
            for _ in 0..60 {
                tick(&mut state, &TickInput::default(), ANIM_DT).unwrap();
                let now = state.display_rotation();
                // Folding whole turns at completion may shift the last ulp
                assert!(now >= last - 1e-9, "round {round}: {now} < {last}");
                last = now;
            }
            assert!(!state.is_spinning());
        }
    }

    #[test]
    fn test_spin_request_while_spinning_is_dropped() {
        let mut state = wheel(1.0);
        let first = TickInput {
            spin_to: Some(1),
            ..Default::default()
        };
        tick(&mut state, &first, ANIM_DT).unwrap();
        let second = TickInput {
            spin_to: Some(3),
            ..Default::default()
        };
        tick(&mut state, &second, ANIM_DT).unwrap();

        let mut winner = None;
        while winner.is_none() {
            winner = tick(&mut state, &TickInput::default(), ANIM_DT).unwrap();
        }
        assert_eq!(winner, Some(1));
    }

    #[test]
    fn test_cancel_then_spin_again() {
        let mut state = wheel(1.0);
        tick(
            &mut state,
            &TickInput {
                spin_to: Some(3),
                ..Default::default()
            },
            ANIM_DT,
        )
        .unwrap();
        tick(
            &mut state,
            &TickInput {
                cancel: true,
                ..Default::default()
            },
            ANIM_DT,
        )
        .unwrap();
        assert!(!state.is_spinning());
        assert_eq!(state.rotation().current(), 0.0);

        let events = state.drain_events();
        assert!(events.contains(&WheelEvent::SpinCancelled));
    }

    #[test]
    fn test_bad_target_is_an_error() {
        let mut state = wheel(1.0);
        let input = TickInput {
            spin_to: Some(9),
            ..Default::default()
        };
        assert!(matches!(
            tick(&mut state, &input, ANIM_DT),
            Err(WheelError::TargetOutOfRange { index: 9, count: 4 })
        ));
    }

    #[test]
    fn test_zero_duration_completes_same_tick() {
        let mut state = wheel(0.0);
        let input = TickInput {
            spin_to: Some(0),
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, ANIM_DT).unwrap(), Some(0));
    }
}
