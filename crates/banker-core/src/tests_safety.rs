use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{ProcessId, SystemState};
use crate::replay::replay;
use crate::safety::{SafetyChecker, SafetyOutcome, ScanOrder};

fn random_state(rng: &mut StdRng) -> SystemState {
    let width = rng.gen_range(1..=4);
    let n = rng.gen_range(0..=12);
    let mut max = Vec::with_capacity(n);
    let mut allocated = Vec::with_capacity(n);
    for _ in 0..n {
        let m: Vec<u64> = (0..width).map(|_| rng.gen_range(0..=8)).collect();
        let a: Vec<u64> = m.iter().map(|&v| rng.gen_range(0..=v)).collect();
        max.push(m);
        allocated.push(a);
    }
    let available = (0..width).map(|_| rng.gen_range(0..=6)).collect();
    SystemState::new(width, max, allocated, available).unwrap()
}

fn states(seed: u64, count: usize) -> Vec<SystemState> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_state(&mut rng)).collect()
}

#[test]
fn safe_sequences_are_permutations_that_replay() {
    for order in [ScanOrder::Continue, ScanOrder::Restart] {
        let checker = SafetyChecker::new(order);
        for state in states(7, 300) {
            if let SafetyOutcome::Safe { sequence } = checker.check(&state) {
                let mut sorted = sequence.clone();
                sorted.sort();
                let all: Vec<ProcessId> = (0..state.process_count()).map(ProcessId).collect();
                assert_eq!(sorted, all);
                assert_eq!(replay(&state, &sequence).unwrap(), state.total_units());
            }
        }
    }
}

#[test]
fn scan_order_never_changes_the_verdict() {
    let cont = SafetyChecker::new(ScanOrder::Continue);
    let restart = SafetyChecker::new(ScanOrder::Restart);
    for state in states(11, 300) {
        assert_eq!(cont.check(&state).is_safe(), restart.check(&state).is_safe());
    }
}

#[test]
fn deadlocked_processes_cannot_fit_what_is_left() {
    let checker = SafetyChecker::default();
    let mut seen_deadlock = false;
    for state in states(23, 300) {
        if let SafetyOutcome::Deadlocked { completed, blocked } = checker.check(&state) {
            seen_deadlock = true;
            assert!(!blocked.is_empty());
            assert_eq!(completed.len() + blocked.len(), state.process_count());

            let mut available = state.available().to_vec();
            for id in &completed {
                let p = state.process(*id).unwrap();
                assert!(p.fits(&available));
                for (a, held) in available.iter_mut().zip(&p.allocated) {
                    *a += held;
                }
            }
            for id in &blocked {
                assert!(!state.process(*id).unwrap().fits(&available));
            }
        }
    }
    assert!(seen_deadlock, "generator should produce some unsafe states");
}

#[test]
fn repeated_checks_are_identical() {
    let checker = SafetyChecker::default();
    for state in states(3, 50) {
        let copy = state.clone();
        assert_eq!(checker.check(&state), checker.check(&copy));
        assert_eq!(state.fingerprint(), copy.fingerprint());
    }
}

#[test]
fn zero_processes_is_vacuously_safe() {
    let state = SystemState::new(3, vec![], vec![], vec![0, 0, 0]).unwrap();
    for order in [ScanOrder::Continue, ScanOrder::Restart] {
        assert_eq!(
            SafetyChecker::new(order).check(&state),
            SafetyOutcome::Safe { sequence: vec![] }
        );
    }
}
