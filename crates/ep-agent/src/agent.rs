//! One simulated person: commute motion plus the SEIRD state machine.

use ep_core::{AgentId, PixelPos, Rgb, SimRng, TileCoord};
use ep_disease::{DiseaseModel, EpiState};

use crate::Route;

/// Which direction an agent is currently travelling.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Leg {
    ToOffice,
    ToHome,
}

/// Everything fixed about an agent's daily commute.
#[derive(Clone, Debug)]
pub struct Commute {
    pub home:            TileCoord,
    pub office:          TileCoord,
    pub home_position:   PixelPos,
    pub office_position: PixelPos,
    pub home_radius:     i32,
    pub office_radius:   i32,
    /// Home slot → office slot.  The return leg is its reversal.
    pub to_office:       Route,
    /// Pixels per motion tick.
    pub speed:           f64,
    /// Hour of the day the agent sets off for the office.
    pub leave_home:      u32,
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub id:          AgentId,
    commute:         Commute,
    to_home:         Route,
    position:        PixelPos,
    state:           EpiState,
    /// Real seconds of incubation left; only consumed while exposed.
    incubation_left: f64,
    leg:             Option<Leg>,
    cursor:          usize,
    moving:          bool,
}

impl Agent {
    /// A stationary agent at its home slot.
    pub fn new(id: AgentId, commute: Commute, state: EpiState, incubation_secs: f64) -> Self {
        let to_home = commute.to_office.reversed();
        let position = commute.home_position;
        Self {
            id,
            commute,
            to_home,
            position,
            state,
            incubation_left: incubation_secs,
            leg: None,
            cursor: 0,
            moving: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> EpiState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> PixelPos {
        self.position
    }

    pub fn commute(&self) -> &Commute {
        &self.commute
    }

    pub fn home(&self) -> TileCoord {
        self.commute.home
    }

    pub fn office(&self) -> TileCoord {
        self.commute.office
    }

    pub fn leave_home(&self) -> u32 {
        self.commute.leave_home
    }

    pub fn speed(&self) -> f64 {
        self.commute.speed
    }

    pub fn route_to_office(&self) -> &Route {
        &self.commute.to_office
    }

    pub fn route_to_home(&self) -> &Route {
        &self.to_home
    }

    pub fn leg(&self) -> Option<Leg> {
        self.leg
    }

    /// Index of the next waypoint on the current leg.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn incubation_left(&self) -> f64 {
        self.incubation_left
    }

    pub fn at_home(&self) -> bool {
        self.position == self.commute.home_position
    }

    pub fn at_office(&self) -> bool {
        self.position == self.commute.office_position
    }

    /// Display radius: the home radius while on the home slot, otherwise the
    /// office radius (en route included).
    pub fn radius(&self) -> i32 {
        if self.at_home() { self.commute.home_radius } else { self.commute.office_radius }
    }

    pub fn colour(&self) -> Rgb {
        self.state.colour()
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Set off along the home → office leg.  Ignored once deceased.
    pub fn start_move_to_office(&mut self) {
        self.start(Leg::ToOffice);
    }

    /// Set off along the office → home leg.  Ignored once deceased.
    pub fn start_move_to_home(&mut self) {
        self.start(Leg::ToHome);
    }

    fn start(&mut self, leg: Leg) {
        if self.state == EpiState::Deceased {
            return;
        }
        self.leg = Some(leg);
        self.cursor = 0;
        self.moving = true;
    }

    fn current_route(&self) -> Option<&Route> {
        match self.leg? {
            Leg::ToOffice => Some(&self.commute.to_office),
            Leg::ToHome   => Some(&self.to_home),
        }
    }

    /// Advance one motion tick.
    ///
    /// Within `speed` of the next waypoint the agent snaps onto it and the
    /// cursor advances; the route ends when the last waypoint is reached.
    /// Otherwise it moves exactly `speed` pixels towards the waypoint.
    pub fn update_position(&mut self) {
        if self.state == EpiState::Deceased {
            self.moving = false;
            return;
        }
        if !self.moving {
            return;
        }
        let speed = self.commute.speed;
        let Some(route) = self.current_route() else {
            return;
        };
        let route_len = route.len();
        let Some(next) = route.get(self.cursor) else {
            self.moving = false;
            return;
        };

        let dx = next.x - self.position.x;
        let dy = next.y - self.position.y;
        let distance = dx.hypot(dy);
        if distance < speed {
            self.position = next;
            self.cursor += 1;
            if self.cursor >= route_len {
                self.moving = false;
            }
        } else {
            self.position = PixelPos::new(
                self.position.x + dx / distance * speed,
                self.position.y + dy / distance * speed,
            );
        }
    }

    // ── Epidemic state ────────────────────────────────────────────────────

    /// S → E after a successful contact trial.  Returns `false` (and changes
    /// nothing) unless the agent was susceptible.
    pub fn expose(&mut self) -> bool {
        if self.state != EpiState::Susceptible {
            return false;
        }
        self.state = EpiState::Exposed;
        true
    }

    /// Overwrite the state directly.  Used to seed the index case.
    pub fn set_state(&mut self, state: EpiState) {
        self.state = state;
    }

    /// Advance the epidemic state by one simulated hour.
    ///
    /// - E: incubation shrinks by one hour's worth of seconds; at or below
    ///   zero the agent becomes infectious.
    /// - I: a recovery trial first, then (only if that failed) a mortality
    ///   trial.  A death stops the agent in place.
    ///
    /// Returns the new state when it changed.
    pub fn update_epidemic_hour(&mut self, model: &DiseaseModel, rng: &mut SimRng) -> Option<EpiState> {
        let next = match self.state {
            EpiState::Exposed => {
                self.incubation_left -= model.seconds_per_hour();
                (self.incubation_left <= 0.0).then_some(EpiState::Infectious)
            }
            EpiState::Infectious => {
                if model.recover(rng) {
                    Some(EpiState::Recovered)
                } else if model.die(rng) {
                    self.moving = false;
                    Some(EpiState::Deceased)
                } else {
                    None
                }
            }
            _ => None,
        }?;
        log::trace!("{} {} → {}", self.id, self.state, next);
        self.state = next;
        Some(next)
    }
}
