//! Fixed-timestep driver
//!
//! Real elapsed time accumulates and is drained in `SIM_DT` steps, so one
//! rendered frame may run zero or several simulation ticks. The substep cap
//! prevents the spiral of death after a long stall.

use super::state::Session;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame the accumulator will absorb, in seconds
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionClock {
    accumulator: f32,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed real elapsed seconds and run the due ticks. Returns how many
    /// ticks ran; a stopped session never advances.
    pub fn advance(&mut self, session: &mut Session, input: &TickInput, elapsed: f32) -> u32 {
        if !session.is_running() {
            return 0;
        }
        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            tick(session, input, SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionConfig;

    #[test]
    fn accumulator_drains_in_fixed_steps() {
        let mut session = Session::new(SessionConfig::default());
        let mut clock = SessionClock::new();

        // Half a step: nothing due yet
        assert_eq!(clock.advance(&mut session, &TickInput::default(), SIM_DT * 0.5), 0);
        assert_eq!(session.tick_count(), 0);

        // The other half plus one more step
        assert_eq!(
            clock.advance(&mut session, &TickInput::default(), SIM_DT * 1.5),
            2
        );
        assert_eq!(session.tick_count(), 2);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut session = Session::new(SessionConfig::default());
        let mut clock = SessionClock::new();

        let steps = clock.advance(&mut session, &TickInput::default(), 5.0);
        assert!(steps <= MAX_SUBSTEPS);
    }

    #[test]
    fn stopped_sessions_do_not_advance() {
        let mut session = Session::new(SessionConfig::default());
        session.shutdown();
        let mut clock = SessionClock::new();

        assert_eq!(clock.advance(&mut session, &TickInput::default(), 1.0), 0);
        assert_eq!(session.tick_count(), 0);
    }
}
