//! Current-voltage sweep of a short junction chain.
//!
//! Ramps the bias current from 0 to 1.5 critical currents under a noisy
//! current bias and prints the averaged first-site voltage per bias point.
//!
//! Run with: cargo run --example iv_sweep

use rand::rngs::StdRng;
use rand::SeedableRng;
use rcsj::{
    BiasPolicy, EventLog, ParametersBuilder, Ramp, RcsjSolver, RunRecorder, ScalarTarget,
    Schedule, Update, VectorInit,
};

fn main() {
    let max_steps = 200;

    let mut rng = StdRng::seed_from_u64(7);
    let mut params = ParametersBuilder::new(20)
        .max_steps(max_steps)
        .average(50)
        .dt(0.05)
        .quality_factor(1.2)
        .ground_capacitance(0.05)
        .gap_voltage(0.7)
        .noise_level(0.02)
        .shunt_resistance(10.0)
        .quasiparticle_resistance(VectorInit::Constant(5.0))
        .phase(VectorInit::StationaryPhase)
        .build(&mut rng)
        .expect("valid parameters");

    let mut schedule = Schedule::new();
    schedule.push(Update::Scalar {
        target: ScalarTarget::BiasCurrent,
        ramp: Ramp {
            start: 0,
            end: max_steps - 1,
            from: 0.0,
            to: 1.5,
        },
    });

    let bias = BiasPolicy::CurrentBias;
    let mut solver =
        RcsjSolver::new(&params, StdRng::seed_from_u64(8)).expect("valid chain");
    let mut bias_rng = StdRng::seed_from_u64(9);
    let mut log = EventLog::new(true);
    let mut recorder = RunRecorder::new(max_steps);

    for step in 0..max_steps {
        for _ in 0..params.average {
            schedule.apply(&mut params, step).expect("schedule fits the chain");
            params.i = bias.drive(&params, &mut bias_rng);
            solver.step(&mut params, &mut log).expect("step");
            recorder.record(&params);
        }
    }

    println!("{:>10} {:>12} {:>12}", "time", "bias", "voltage");
    for step in (0..max_steps).step_by(10) {
        println!(
            "{:>10.2} {:>12.4} {:>12.4}",
            recorder.time()[step],
            recorder.bias_current()[step],
            recorder.voltage()[step]
        );
    }
    println!("\nphase slips recorded: {}", log.len());
}
