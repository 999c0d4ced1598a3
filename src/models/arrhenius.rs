//! Modified-Arrhenius reference mechanism
//!
//! # Rate expressions
//!
//! For each elementary reaction, at temperature `T`:
//!
//! ```text
//! k_f(T) = A · T^b · exp(−T_a / T)            forward rate constant
//! K(T)   = exp(ΔS/R − ΔH/(R·T))               equilibrium constant
//! k_r(T) = k_f(T) / K(T)                      reverse rate constant
//! ```
//!
//! `T_a = E_a / R` is the activation temperature and `ΔH/R`, `ΔS/R` are the
//! reaction enthalpy and entropy divided by the gas constant, so all three
//! expressions only involve temperatures.
//!
//! # Example
//!
//! ```rust
//! use kinetics_parity::models::{ArrheniusMechanism, ElementaryReaction};
//! use kinetics_parity::kinetics::ReferenceKinetics;
//!
//! let mechanism = ArrheniusMechanism::new(
//!     vec!["H2".into(), "O2".into(), "H2O".into()],
//!     vec![ElementaryReaction::new("2 H2 + O2 <=> 2 H2O", 1.0e9, 0.0, 15_000.0)
//!         .with_thermodynamics(-58_000.0, -10.0)],
//! );
//!
//! assert_eq!(mechanism.n_reactions(), 1);
//! assert_eq!(mechanism.reaction_equation(0), "2 H2 + O2 <=> 2 H2O");
//! ```

use nalgebra::DMatrix;

use crate::error::{HarnessError, Result};
use crate::kinetics::{RateConstantSet, ReferenceKinetics};
use crate::trajectory::Trajectory;

/// One reversible elementary reaction
#[derive(Debug, Clone, PartialEq)]
pub struct ElementaryReaction {
    /// Reaction equation, e.g. `"F + 4 O <=> 5 P"`
    pub equation: String,

    /// Pre-exponential factor A
    pub pre_exponential: f64,

    /// Temperature exponent b
    pub temperature_exponent: f64,

    /// Activation temperature T_a = E_a/R \[K\]
    pub activation_temperature: f64,

    /// Reaction enthalpy over R \[K\]
    pub enthalpy_over_r: f64,

    /// Reaction entropy over R (dimensionless)
    pub entropy_over_r: f64,
}

impl ElementaryReaction {
    /// Thermoneutral reaction (`K = 1`)
    pub fn new(
        equation: impl Into<String>,
        pre_exponential: f64,
        temperature_exponent: f64,
        activation_temperature: f64,
    ) -> Self {
        Self {
            equation: equation.into(),
            pre_exponential,
            temperature_exponent,
            activation_temperature,
            enthalpy_over_r: 0.0,
            entropy_over_r: 0.0,
        }
    }

    /// Set ΔH/R \[K\] and ΔS/R
    pub fn with_thermodynamics(mut self, enthalpy_over_r: f64, entropy_over_r: f64) -> Self {
        self.enthalpy_over_r = enthalpy_over_r;
        self.entropy_over_r = entropy_over_r;
        self
    }

    /// Forward rate constant at `temperature`
    #[inline]
    pub fn forward(&self, temperature: f64) -> f64 {
        self.pre_exponential
            * temperature.powf(self.temperature_exponent)
            * (-self.activation_temperature / temperature).exp()
    }

    /// Equilibrium constant at `temperature`
    #[inline]
    pub fn equilibrium(&self, temperature: f64) -> f64 {
        (self.entropy_over_r - self.enthalpy_over_r / temperature).exp()
    }

    /// Reverse rate constant at `temperature`
    #[inline]
    pub fn reverse(&self, temperature: f64) -> f64 {
        self.forward(temperature) / self.equilibrium(temperature)
    }
}

/// Mechanism of modified-Arrhenius reactions over a fixed species list
#[derive(Debug, Clone, PartialEq)]
pub struct ArrheniusMechanism {
    species: Vec<String>,
    reactions: Vec<ElementaryReaction>,
}

impl ArrheniusMechanism {
    /// Create a mechanism from its species and reactions
    pub fn new(species: Vec<String>, reactions: Vec<ElementaryReaction>) -> Self {
        Self { species, reactions }
    }

    /// Small fuel/oxidiser mechanism over the species of
    /// [`GlobalStepReactor`](crate::models::GlobalStepReactor)
    ///
    /// The first reaction is the reactor's own global step; the others are
    /// fictitious intermediate steps giving the verifier a spread of
    /// magnitudes (including constants that underflow towards zero at low
    /// temperature).
    pub fn global_step_demo() -> Self {
        let species = ["F", "O", "P", "N2"].map(String::from).to_vec();
        let reactions = vec![
            ElementaryReaction::new("F + 4 O <=> 5 P", 1.0e7, 0.0, 15_000.0)
                .with_thermodynamics(-48_000.0, 2.0),
            ElementaryReaction::new("F + O <=> P + O", 3.2e9, 0.5, 22_000.0)
                .with_thermodynamics(-12_000.0, 1.5),
            ElementaryReaction::new("P + N2 <=> F + O + N2", 5.0e11, -1.0, 60_000.0)
                .with_thermodynamics(30_000.0, -3.0),
            ElementaryReaction::new("2 O <=> O + O", 1.0e13, 0.0, 0.0),
        ];
        Self::new(species, reactions)
    }

    /// Species names
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Reactions in mechanism order
    pub fn reactions(&self) -> &[ElementaryReaction] {
        &self.reactions
    }
}

impl ReferenceKinetics for ArrheniusMechanism {
    fn n_species(&self) -> usize {
        self.species.len()
    }

    fn n_reactions(&self) -> usize {
        self.reactions.len()
    }

    fn reaction_equation(&self, reaction: usize) -> String {
        self.reactions
            .get(reaction)
            .map(|r| r.equation.clone())
            .unwrap_or_default()
    }

    /// Evaluate every reaction at every record, one state at a time
    fn rate_constants(&self, trajectory: &Trajectory) -> Result<RateConstantSet> {
        if trajectory.is_empty() {
            return Err(HarnessError::EmptyTrajectory);
        }

        let n_steps = trajectory.len();
        let n_reactions = self.reactions.len();
        let mut forward = DMatrix::zeros(n_steps, n_reactions);
        let mut equilibrium = DMatrix::zeros(n_steps, n_reactions);
        let mut reverse = DMatrix::zeros(n_steps, n_reactions);

        for (step, record) in trajectory.iter().enumerate() {
            if record.n_species() != self.species.len() {
                return Err(HarnessError::ShapeMismatch {
                    context: "reference kinetics",
                    row: step,
                    expected: self.species.len(),
                    found: record.n_species(),
                });
            }

            let t = record.temperature;
            for (j, reaction) in self.reactions.iter().enumerate() {
                forward[(step, j)] = reaction.forward(t);
                equilibrium[(step, j)] = reaction.equilibrium(t);
                reverse[(step, j)] = reaction.reverse(t);
            }
        }

        log::debug!(
            "evaluated {n_reactions} reactions on {n_steps} states (reference)"
        );
        RateConstantSet::new(forward, equilibrium, reverse)
    }

    fn name(&self) -> &str {
        "Arrhenius mechanism"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
