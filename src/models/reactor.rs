//! Adiabatic constant-volume reactor with a single global step
//!
//! # Model
//!
//! Four species: fuel `F`, oxidiser `O`, product `P` and inert `N2`. One
//! irreversible global step `F + s·O → (1 + s)·P` with rate
//!
//! ```text
//! k(T) = A · exp(−T_a / T)
//! r    = k(T) · Y_F · Y_O                      [1/s]
//! ```
//!
//! State `y = [T, Y_F, Y_O, Y_P, Y_N2]` evolves as
//!
//! ```text
//! dY_F/dt = −r
//! dY_O/dt = −s·r
//! dY_P/dt = (1 + s)·r
//! dT/dt   = q·r / c_v
//! ```
//!
//! Mass is conserved (the species derivatives sum to zero) and so is the
//! specific internal energy `u = c_v·T + q·Y_F`. Pressure follows the ideal
//! gas at constant density and constant mean molar mass, `P = P₀·T/T₀`.
//!
//! The temperature rise at complete fuel consumption is `q·Y_F₀/c_v`; ignition
//! is a thermal runaway once the heat release outpaces the initial slow
//! reaction.

use nalgebra::DVector;

use crate::config::ONE_ATMOSPHERE;
use crate::trajectory::ReactorSystem;

/// Species of the reactor, in state-vector order
pub const SPECIES: [&str; 4] = ["F", "O", "P", "N2"];

/// Single-step fuel/oxidiser reactor
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStepReactor {
    /// Initial temperature T₀ \[K\]
    initial_temperature: f64,
    /// Initial pressure P₀ \[Pa\]
    initial_pressure: f64,
    /// Initial mass fractions, one per entry of [`SPECIES`]
    initial_mass_fractions: [f64; 4],
    /// Pre-exponential factor A \[1/s\]
    pre_exponential: f64,
    /// Activation temperature T_a \[K\]
    activation_temperature: f64,
    /// Oxidiser mass consumed per unit fuel mass
    stoichiometric_ratio: f64,
    /// Heat release per unit fuel mass q \[J/kg\]
    heat_release: f64,
    /// Constant-volume heat capacity c_v \[J/(kg·K)\]
    heat_capacity: f64,
}

impl GlobalStepReactor {
    /// Create a reactor
    ///
    /// # Arguments
    ///
    /// * `initial_temperature` - T₀ \[K\]
    /// * `initial_pressure` - P₀ \[Pa\]
    /// * `initial_mass_fractions` - `[Y_F, Y_O, Y_P, Y_N2]`, summing to 1
    /// * `pre_exponential` - A \[1/s\]
    /// * `activation_temperature` - T_a \[K\]
    /// * `stoichiometric_ratio` - s
    /// * `heat_release` - q \[J/kg\]
    /// * `heat_capacity` - c_v \[J/(kg·K)\]
    ///
    /// # Panics
    ///
    /// On non-positive temperature, pressure or heat capacity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initial_temperature: f64,
        initial_pressure: f64,
        initial_mass_fractions: [f64; 4],
        pre_exponential: f64,
        activation_temperature: f64,
        stoichiometric_ratio: f64,
        heat_release: f64,
        heat_capacity: f64,
    ) -> Self {
        assert!(
            initial_temperature > 0.0,
            "Initial temperature must be positive, got {}",
            initial_temperature
        );
        assert!(
            initial_pressure > 0.0,
            "Initial pressure must be positive, got {}",
            initial_pressure
        );
        assert!(
            heat_capacity > 0.0,
            "Heat capacity must be positive, got {}",
            heat_capacity
        );

        let sum: f64 = initial_mass_fractions.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            log::warn!("initial mass fractions sum to {sum}, not 1");
        }

        Self {
            initial_temperature,
            initial_pressure,
            initial_mass_fractions,
            pre_exponential,
            activation_temperature,
            stoichiometric_ratio,
            heat_release,
            heat_capacity,
        }
    }

    /// Lean fuel/air-like mixture at 950 K and 20 atm
    ///
    /// Ignites after a little over 0.1 s with a temperature rise of 1600 K.
    pub fn lean_demo() -> Self {
        Self::new(
            950.0,
            20.0 * ONE_ATMOSPHERE,
            [0.04, 0.2, 0.0, 0.76],
            1.0e7,
            15_000.0,
            4.0,
            4.0e7,
            1000.0,
        )
    }

    /// Initial temperature \[K\]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Initial pressure \[Pa\]
    pub fn initial_pressure(&self) -> f64 {
        self.initial_pressure
    }

    /// Temperature after complete fuel consumption \[K\]
    pub fn adiabatic_temperature(&self) -> f64 {
        let fuel = self.initial_mass_fractions[0]
            .min(self.initial_mass_fractions[1] / self.stoichiometric_ratio);
        self.initial_temperature + self.heat_release * fuel / self.heat_capacity
    }

    /// Global reaction rate r \[1/s\] at a state
    pub fn reaction_rate(&self, state: &DVector<f64>) -> f64 {
        let temperature = state[0];
        let fuel = state[1].max(0.0);
        let oxidiser = state[2].max(0.0);
        self.pre_exponential * (-self.activation_temperature / temperature).exp() * fuel * oxidiser
    }
}

impl ReactorSystem for GlobalStepReactor {
    fn n_species(&self) -> usize {
        SPECIES.len()
    }

    fn initial_state(&self) -> DVector<f64> {
        let mut state = DVector::zeros(1 + SPECIES.len());
        state[0] = self.initial_temperature;
        for (i, &y) in self.initial_mass_fractions.iter().enumerate() {
            state[1 + i] = y;
        }
        state
    }

    fn derivatives(&self, state: &DVector<f64>) -> DVector<f64> {
        let r = self.reaction_rate(state);
        let s = self.stoichiometric_ratio;

        DVector::from_vec(vec![
            self.heat_release * r / self.heat_capacity,
            -r,
            -s * r,
            (1.0 + s) * r,
            0.0,
        ])
    }

    fn pressure(&self, state: &DVector<f64>) -> f64 {
        self.initial_pressure * state[0] / self.initial_temperature
    }

    fn specific_internal_energy(&self, state: &DVector<f64>) -> f64 {
        self.heat_capacity * state[0] + self.heat_release * state[1]
    }

    fn name(&self) -> &str {
        "Global-step reactor"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
