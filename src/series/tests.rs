use super::*;
use crate::testing::{assert_slice_f64_absolute, assert_slice_f64_relative};
use std::f64::consts::E;

fn snapshots(contestants: usize, iterations: usize) -> Vec<Snapshot> {
    accumulate(contestants)
        .unwrap()
        .take(iterations)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn rejects_too_few_contestants() {
    assert_eq!(
        Some(InvalidArgument::TooFewContestants(1)),
        accumulate(1).err()
    );
    assert_eq!(
        Some(InvalidArgument::TooFewContestants(0)),
        accumulate(0).err()
    );
}

#[test]
fn first_terms() {
    let snapshots = snapshots(3, 4);
    assert_eq!(
        vec![1, 2, 3, 4],
        snapshots.iter().map(|snapshot| snapshot.final_turn).collect::<Vec<_>>()
    );
    assert_slice_f64_relative(&[0.0, 0.0, 0.0], &snapshots[0].probs, 1e-15);
    assert_slice_f64_relative(&[1.0 / 3.0, 0.0, 0.0], &snapshots[1].probs, 1e-15);
    assert_slice_f64_relative(&[1.0 / 3.0, 0.25, 0.125], &snapshots[2].probs, 1e-15);
    assert_slice_f64_relative(&[13.0 / 30.0, 0.25, 0.225], &snapshots[3].probs, 1e-15);
}

#[test]
fn two_contestants_converge() {
    // whoever acts first wins unless their rival's first draw is lower, and so on: 1 - 1/e
    let snapshots = snapshots(2, 30);
    let last = snapshots.last().unwrap();
    assert_eq!(30, last.final_turn);
    assert_slice_f64_absolute(&[1.0 - 1.0 / E, 1.0 / E], &last.probs, 1e-12);
}

#[test]
fn three_contestants_converge() {
    let snapshots = snapshots(3, 30);
    assert_slice_f64_relative(
        &[0.466492804885307, 0.2918207122202593, 0.24168648289443367],
        &snapshots.last().unwrap().probs,
        1e-9,
    );
}

#[test]
fn four_contestants_converge() {
    let snapshots = snapshots(4, 30);
    assert_slice_f64_relative(
        &[
            0.37115323477128664,
            0.24218855261839128,
            0.20322056174855846,
            0.18343765086176347,
        ],
        &snapshots.last().unwrap().probs,
        1e-9,
    );
}

#[test]
fn monotonic_and_below_one() {
    for contestants in 2..=5 {
        let snapshots = snapshots(contestants, 10);
        let mut previous_total = 0.0;
        let mut previous_probs = vec![0.0; contestants];
        for snapshot in &snapshots {
            let total = snapshot.total();
            assert!(total >= previous_total, "{total} < {previous_total} at {snapshot:?}");
            assert!(total < 1.0, "{total} at {snapshot:?}");
            for (prob, previous) in snapshot.probs.iter().zip(&previous_probs) {
                assert!(prob >= previous, "{snapshot:?}");
            }
            previous_total = total;
            previous_probs.clone_from(&snapshot.probs);
        }
    }
}

#[test]
fn overflow_exhausts() {
    let mut accumulator = accumulate(2).unwrap();
    let items = accumulator.by_ref().collect::<Vec<_>>();
    assert_eq!(34, items.len());
    assert!(items[..33].iter().all(Result::is_ok));
    assert_eq!(Err(ArithmeticOverflow::Factorial(35)), items[33]);
    assert!(accumulator.next().is_none());
    assert_eq!(2, accumulator.contestants());
}

#[test]
fn snapshot_json() {
    let snapshot = Snapshot {
        final_turn: 2,
        probs: vec![0.5, 0.25],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(r#"{"final_turn":2,"probs":[0.5,0.25]}"#, json);
    assert_eq!(snapshot, serde_json::from_str::<Snapshot>(&json).unwrap());
}

#[test]
fn total_saturates_at_f64_resolution() {
    let snapshots = snapshots(2, 30);
    for pair in snapshots.windows(2) {
        assert!(pair[1].total() >= pair[0].total(), "{pair:?}");
    }
    let last = snapshots.last().unwrap();
    assert!(1.0 - last.total() <= f64::EPSILON, "{last:?}");
    let tail = &snapshots[25..];
    assert!(tail.iter().all(|snapshot| snapshot.probs == last.probs), "{tail:?}");
}
