//! Example: Synthetic Ignition - Batch Kinetics Verification
//!
//! Runs the whole harness on the synthetic models:
//!
//! - **Reactor**: lean fuel/oxidiser mixture at 950 K and 20 atm, one global
//!   step, integrated by adaptive RK4 until `4 × delay_time`
//! - **Reference**: the Arrhenius mechanism evaluated state by state
//! - **Under test**: the same mechanism evaluated column-wise over the batch
//!
//! Set `RUST_LOG=debug` to follow every reaction check.
//!
//! ```bash
//! RUST_LOG=info cargo run --example synthetic_ignition
//! ```

use kinetics_parity::prelude::*;

use kinetics_parity::config::ONE_ATMOSPHERE;
use kinetics_parity::trajectory::ReactorSystem;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Library logs go through the `log` facade, bridged into tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Synthetic Ignition - Batch Kinetics Verification");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Configuration ======

    let t_end = 10.0; // hard horizon [s]
    let config = HarnessConfig::new(t_end)
        .with_pool_size(4)
        .with_device(ComputeDevice::Cpu);

    // ====== Collaborators ======

    let reactor = GlobalStepReactor::lean_demo();
    println!("Reactor ({}):", reactor.name());
    println!("  T₀          : {} K", reactor.initial_temperature());
    println!("  P₀          : {} atm", reactor.initial_pressure() / ONE_ATMOSPHERE);
    println!("  T adiabatic : {} K\n", reactor.adiabatic_temperature());

    let mechanism = ArrheniusMechanism::global_step_demo();
    println!("Mechanism: {} species, {} reactions", mechanism.n_species(), mechanism.n_reactions());
    for i in 0..mechanism.n_reactions() {
        println!("  {i}: {}", mechanism.reaction_equation(i));
    }
    println!();

    let mut integrator = AdaptiveRk4::new(reactor);
    let mut evaluator = ArrheniusBatchEvaluator::new(mechanism.clone(), config.device);

    // ====== Run ======

    let mut report = Report::stdout();
    let outcome = Harness::new(config).run(&mut integrator, &mechanism, &mut evaluator, &mut report)?;

    println!("\n═══════════════════════════════════════════════════════\n");
    println!("Integrator: {} accepted steps, {} rejected", integrator.accepted_steps(), integrator.rejected_steps());
    println!("Stopped on: {:?}", outcome.recording.stop);

    if outcome.passed() {
        println!("All {} reactions consistent", outcome.verification.len());
    } else {
        println!("{} of {} reactions inconsistent", outcome.verification.failing_count(), outcome.verification.len());
    }

    Ok(())
}
