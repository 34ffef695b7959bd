/// Guided tour — timed sequential camera visits to each body.
///
/// Instead of a self-re-arming timer, the sequencer keeps a countdown
/// checked once per frame, so deactivation is synchronous and a stale
/// step can never fire after the tour ends.

use crate::bodies::BodyId;

/// Seconds the camera dwells on each body before moving on.
pub const DWELL_SECONDS: f32 = 3.0;

/// Visit order. Wraps back to the sun after Neptune.
pub const TOUR_STOPS: [BodyId; 9] = [
    BodyId::Sun,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Earth,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
];

#[derive(Debug, Clone)]
pub struct TourSequencer {
    active: bool,
    index: usize,
    next_step_in: f32,
}

impl TourSequencer {
    pub fn new() -> Self {
        Self {
            active: false,
            index: 0,
            next_step_in: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current stop index, for UI display.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Start (or restart) the tour from the first stop. The first step
    /// fires on the next tick.
    pub fn activate(&mut self) {
        self.active = true;
        self.index = 0;
        self.next_step_in = 0.0;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Advance the dwell countdown. Returns the body to fly to when a
    /// step fires, None otherwise.
    pub fn tick(&mut self, dt: f32) -> Option<BodyId> {
        if !self.active {
            return None;
        }
        self.next_step_in -= dt;
        if self.next_step_in > 0.0 {
            return None;
        }
        let stop = TOUR_STOPS[self.index];
        self.index = (self.index + 1) % TOUR_STOPS.len();
        self.next_step_in = DWELL_SECONDS;
        Some(stop)
    }
}

impl Default for TourSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Run the sequencer for `seconds`, collecting fired stops.
    fn run(tour: &mut TourSequencer, seconds: f32) -> Vec<BodyId> {
        let mut stops = Vec::new();
        let frames = (seconds / DT).round() as usize;
        for _ in 0..frames {
            if let Some(stop) = tour.tick(DT) {
                stops.push(stop);
            }
        }
        stops
    }

    #[test]
    fn first_step_fires_immediately() {
        let mut tour = TourSequencer::new();
        tour.activate();
        assert_eq!(tour.tick(DT), Some(BodyId::Sun));
    }

    #[test]
    fn visits_all_stops_in_order_and_wraps() {
        let mut tour = TourSequencer::new();
        tour.activate();
        let stops = run(&mut tour, DWELL_SECONDS * 10.0 + 1.0);
        assert!(stops.len() >= 10);
        assert_eq!(&stops[..9], &TOUR_STOPS);
        assert_eq!(stops[9], BodyId::Sun, "wraps back to the sun");
    }

    #[test]
    fn inactive_sequencer_never_fires() {
        let mut tour = TourSequencer::new();
        assert!(run(&mut tour, 10.0).is_empty());
    }

    #[test]
    fn deactivate_mid_dwell_stops_next_step() {
        let mut tour = TourSequencer::new();
        tour.activate();
        assert!(tour.tick(DT).is_some());
        // Halfway through the dwell, turn the tour off.
        run(&mut tour, DWELL_SECONDS / 2.0);
        tour.deactivate();
        assert!(run(&mut tour, DWELL_SECONDS * 2.0).is_empty());
    }

    #[test]
    fn reactivation_restarts_from_sun() {
        let mut tour = TourSequencer::new();
        tour.activate();
        run(&mut tour, DWELL_SECONDS * 4.5);
        tour.deactivate();
        tour.activate();
        assert_eq!(tour.tick(DT), Some(BodyId::Sun));
    }
}
