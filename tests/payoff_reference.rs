use approx::assert_abs_diff_eq;
use greekfit::math::linspace;
use greekfit::pricing::payoff::{PayoffParams, payoff, payoff_by_name};
use greekfit::strategy::Strategy;

#[test]
fn long_call_reference_points() {
    assert_eq!(payoff(Strategy::LongCall, &[100.0], 100.0, 10.0), vec![-10.0]);
    assert_eq!(payoff(Strategy::LongCall, &[150.0], 100.0, 10.0), vec![40.0]);
}

#[test]
fn iron_condor_reference_points() {
    assert_eq!(payoff(Strategy::IronCondor, &[80.0], 100.0, 5.0), vec![-5.0]);
    assert_eq!(payoff(Strategy::IronCondor, &[100.0], 100.0, 5.0), vec![5.0]);
}

#[test]
fn every_curve_matches_axis_length() {
    let spots = linspace(50.0, 150.0, 500);
    for strategy in Strategy::ALL.into_iter().chain([Strategy::Unknown]) {
        let curve = payoff(strategy, &spots, 100.0, 10.0);
        assert_eq!(curve.len(), spots.len(), "{strategy}");
        assert!(curve.iter().all(|v| v.is_finite()), "{strategy}");
    }
}

#[test]
fn curves_by_name_match_typed_dispatch() {
    let spots = linspace(50.0, 150.0, 101);
    for strategy in Strategy::ALL {
        assert_eq!(
            payoff_by_name(strategy.name(), &spots, 95.0, 4.0),
            payoff(strategy, &spots, 95.0, 4.0)
        );
    }
    assert_eq!(
        payoff_by_name("Ratio Backspread", &spots, 95.0, 4.0),
        vec![0.0; spots.len()]
    );
}

#[test]
fn strangle_wings_track_strike() {
    // Wings at K +/- 10: K = 120 puts them at 110 and 130.
    let pnl = payoff(Strategy::LongStrangle, &[100.0, 120.0, 140.0], 120.0, 2.0);
    assert_eq!(pnl, vec![7.0, -3.0, 7.0]);
}

#[test]
fn butterfly_uses_fixed_wings_with_moving_body() {
    // Body at K = 105 with wings still at 90 and 110.
    let pnl = payoff(Strategy::Butterfly, &[90.0, 105.0, 110.0, 130.0], 105.0, 0.0);
    assert_eq!(pnl, vec![0.0, 15.0, 10.0, 10.0]);
}

#[test]
fn calendar_spread_bounds() {
    let spots = linspace(0.0, 200.0, 2001);
    let pnl = payoff(Strategy::CalendarSpread, &spots, 100.0, 10.0);
    for v in pnl {
        assert!((0.0..=10.0).contains(&v));
    }
    assert_abs_diff_eq!(
        Strategy::CalendarSpread.payoff_at(110.0, 100.0, 10.0),
        5.0 - 5.0 * 1.0_f64.sin(),
        epsilon = 1e-12
    );
}

#[test]
fn payoff_is_idempotent() {
    let spots = linspace(50.0, 150.0, 500);
    let params = PayoffParams {
        strike: 100.0,
        premium: 10.0,
    };
    for strategy in Strategy::ALL {
        assert_eq!(params.curve(strategy, &spots), params.curve(strategy, &spots));
    }
}
