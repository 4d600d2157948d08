//! Step-response accuracy against analytic references.

use approx::assert_relative_eq;
use lb_lti::TransferFunction;
use lb_sim::{IntegratorKind, SimError, StepOptions, step_response};

fn tf(num: &[f64], den: &[f64]) -> TransferFunction {
    TransferFunction::new(num.to_vec(), den.to_vec()).unwrap()
}

#[test]
fn time_grid_invariants() {
    let resp = step_response(&tf(&[1.0], &[1.0, 1.0]), &StepOptions::default()).unwrap();

    assert_eq!(resp.time.len(), 1000);
    assert_eq!(resp.output.len(), 1000);
    assert_eq!(resp.time[0], 0.0);
    assert_eq!(resp.time[999], 20.0);

    let spacing = 20.0 / 999.0;
    for pair in resp.time.windows(2) {
        assert!(pair[1] > pair[0]);
        assert_relative_eq!(pair[1] - pair[0], spacing, max_relative = 1e-9);
    }
}

#[test]
fn first_order_lag_matches_analytic_response() {
    // 1/(s+1): y(t) = 1 - e^{-t}
    let opts = StepOptions {
        horizon: 10.0,
        samples: 501,
        ..StepOptions::default()
    };
    let resp = step_response(&tf(&[1.0], &[1.0, 1.0]), &opts).unwrap();
    for (&t, &y) in resp.time.iter().zip(resp.output.iter()) {
        let exact = 1.0 - (-t).exp();
        assert!((y - exact).abs() < 1e-6, "t={t}: {y} vs {exact}");
    }
}

#[test]
fn underdamped_second_order_peak_and_settling() {
    // wn = 2, zeta = 0.25: H = 4/(s^2 + s + 4)
    let zeta: f64 = 0.25;
    let resp = step_response(&tf(&[4.0], &[1.0, 1.0, 4.0]), &StepOptions::default()).unwrap();

    // Settled value: DC gain is 1, e^{-zeta*wn*20} is negligible.
    let settled = *resp.output.last().unwrap();
    assert_relative_eq!(settled, 1.0, max_relative = 1e-3);

    // Peak overshoot: exp(-pi*zeta/sqrt(1-zeta^2)) above the final value.
    let peak = resp.output.iter().cloned().fold(f64::MIN, f64::max);
    let expected = 1.0 + (-std::f64::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp();
    assert_relative_eq!(peak, expected, max_relative = 1e-2);
}

#[test]
fn critically_damped_response_has_no_overshoot() {
    // 1/(s+1)^2: y(t) = 1 - (1+t)e^{-t}, monotone
    let resp = step_response(&tf(&[1.0], &[1.0, 2.0, 1.0]), &StepOptions::default()).unwrap();
    for pair in resp.output.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-12);
    }
    assert!(resp.output.iter().all(|&y| y <= 1.0 + 1e-9));
}

#[test]
fn unstable_system_diverges_and_passes_through() {
    // 1/(s-1) has a right-half-plane pole; the runner must not error.
    let resp = step_response(&tf(&[1.0], &[1.0, -1.0]), &StepOptions::default()).unwrap();
    let last = *resp.output.last().unwrap();
    assert!(last > 1e6 || !last.is_finite());
}

#[test]
fn forward_euler_agrees_with_rk4_on_smooth_systems() {
    let g = tf(&[1.0], &[1.0, 2.0, 1.0]);
    let rk4 = step_response(&g, &StepOptions::default()).unwrap();
    let euler = step_response(
        &g,
        &StepOptions {
            integrator: IntegratorKind::ForwardEuler,
            substeps: 200,
            ..StepOptions::default()
        },
    )
    .unwrap();
    for (y_rk4, y_euler) in rk4.output.iter().zip(euler.output.iter()) {
        assert!((y_rk4 - y_euler).abs() < 1e-3);
    }
}

#[test]
fn improper_system_fails_realization() {
    let g = tf(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
    assert!(matches!(
        step_response(&g, &StepOptions::default()),
        Err(SimError::Realization(_))
    ));
}

#[test]
fn determinism() {
    let g = tf(&[4.0], &[1.0, 1.0, 4.0]);
    let a = step_response(&g, &StepOptions::default()).unwrap();
    let b = step_response(&g, &StepOptions::default()).unwrap();
    assert_eq!(a, b);
}
