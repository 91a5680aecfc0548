//! Fixed-step integrators for initial value problems.
//!
//! Abscissae are `x0 + i·h` rather than accumulated, so long runs do not
//! drift. When `h` does not divide the interval the last step is shortened
//! to end exactly on `x_end`. Every trajectory starts with the initial
//! condition.

use crate::config::constants::MAX_ODE_STEPS;
use crate::error::{NError, Result};

/// Relative slack under which `(x_end - x0) / h` counts as a whole number.
const STEP_ROUNDING: f64 = 1e-9;

/// Grid points `x0, x0 + h, …, x_end`.
fn grid(x0: f64, x_end: f64, h: f64) -> Result<Vec<f64>> {
    if !(h > 0.0) || !h.is_finite() {
        return Err(NError::InvalidArgument(format!("step size must be positive, got {h}")));
    }
    if !(x_end >= x0) {
        return Err(NError::InvalidArgument(format!("x_end {x_end} precedes x0 {x0}")));
    }
    let ratio = (x_end - x0) / h;
    let steps = if (ratio - ratio.round()).abs() <= STEP_ROUNDING * ratio.max(1.0) {
        ratio.round()
    } else {
        ratio.ceil()
    };
    if !(steps <= MAX_ODE_STEPS as f64) {
        return Err(NError::InvalidArgument(format!(
            "step size {h} needs {steps} steps, more than {MAX_ODE_STEPS}"
        )));
    }
    let n = steps as usize;
    let mut xs: Vec<f64> = (0..n).map(|i| x0 + i as f64 * h).collect();
    xs.push(x_end);
    Ok(xs)
}

/// Forward Euler for y' = f(x, y). Returns `(x, y)` pairs.
pub fn solve_first_order_ode<F>(f: F, x0: f64, y0: f64, x_end: f64, h: f64) -> Result<Vec<(f64, f64)>>
where
    F: Fn(f64, f64) -> f64,
{
    let xs = grid(x0, x_end, h)?;
    let mut out = Vec::with_capacity(xs.len());
    let mut y = y0;
    out.push((x0, y0));
    for w in xs.windows(2) {
        let (x, step) = (w[0], w[1] - w[0]);
        y += step * f(x, y);
        out.push((w[1], y));
    }
    Ok(out)
}

/// Classical RK4 for y' = f(x, y). Returns `(x, y)` pairs.
pub fn solve_first_order_ode_rk4<F>(f: F, x0: f64, y0: f64, x_end: f64, h: f64) -> Result<Vec<(f64, f64)>>
where
    F: Fn(f64, f64) -> f64,
{
    let xs = grid(x0, x_end, h)?;
    let mut out = Vec::with_capacity(xs.len());
    let mut y = y0;
    out.push((x0, y0));
    for w in xs.windows(2) {
        let (x, h) = (w[0], w[1] - w[0]);
        let k1 = f(x, y);
        let k2 = f(x + h / 2.0, y + h * k1 / 2.0);
        let k3 = f(x + h / 2.0, y + h * k2 / 2.0);
        let k4 = f(x + h, y + h * k3);
        y += h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
        out.push((w[1], y));
    }
    Ok(out)
}

/// RK4 for y'' = f(x, y, y') on the state (y, y'). Returns `(x, y, y')` triples.
pub fn solve_second_order_ode<F>(
    f: F,
    x0: f64,
    y0: f64,
    dy0: f64,
    x_end: f64,
    h: f64,
) -> Result<Vec<(f64, f64, f64)>>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let xs = grid(x0, x_end, h)?;
    let mut out = Vec::with_capacity(xs.len());
    let (mut y, mut v) = (y0, dy0);
    out.push((x0, y0, dy0));
    for w in xs.windows(2) {
        let (x, h) = (w[0], w[1] - w[0]);
        // (y, v)' = (v, f(x, y, v))
        let (k1y, k1v) = (v, f(x, y, v));
        let (k2y, k2v) = {
            let (yy, vv) = (y + h * k1y / 2.0, v + h * k1v / 2.0);
            (vv, f(x + h / 2.0, yy, vv))
        };
        let (k3y, k3v) = {
            let (yy, vv) = (y + h * k2y / 2.0, v + h * k2v / 2.0);
            (vv, f(x + h / 2.0, yy, vv))
        };
        let (k4y, k4v) = {
            let (yy, vv) = (y + h * k3y, v + h * k3v);
            (vv, f(x + h, yy, vv))
        };
        y += h * (k1y + 2.0 * k2y + 2.0 * k3y + k4y) / 6.0;
        v += h * (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
        out.push((w[1], y, v));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn euler_exponential_growth() {
        let traj = solve_first_order_ode(|_, y| y, 0.0, 1.0, 1.0, 1e-3).unwrap();
        assert_eq!(traj.len(), 1001);
        let (x, y) = *traj.last().unwrap();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, std::f64::consts::E, epsilon = 2e-3);
        // Euler underestimates a convex solution
        assert!(y < std::f64::consts::E);
    }

    #[test]
    fn rk4_is_fourth_order() {
        let traj = solve_first_order_ode_rk4(|_, y| y, 0.0, 1.0, 1.0, 0.1).unwrap();
        assert_abs_diff_eq!(traj.last().unwrap().1, std::f64::consts::E, epsilon = 1e-5);
    }

    #[test]
    fn harmonic_oscillator() {
        let traj = solve_second_order_ode(|_, y, _| -y, 0.0, 0.0, 1.0, 1.0, 0.01).unwrap();
        let (x, y, dy) = *traj.last().unwrap();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1f64.sin(), epsilon = 1e-8);
        assert_abs_diff_eq!(dy, 1f64.cos(), epsilon = 1e-8);
    }

    #[test]
    fn bad_steps() {
        assert!(solve_first_order_ode(|_, y| y, 0.0, 1.0, 1.0, 0.0).is_err());
        assert!(solve_first_order_ode(|_, y| y, 1.0, 1.0, 0.0, 0.1).is_err());
        assert_eq!(solve_first_order_ode(|_, y| y, 0.0, 1.0, 0.0, 0.1).unwrap().len(), 1);
    }

    #[test]
    fn tiny_step_is_rejected_not_allocated() {
        assert!(matches!(
            solve_first_order_ode(|_, y| y, 0.0, 1.0, 1.0, 1e-300),
            Err(NError::InvalidArgument(_))
        ));
        assert!(solve_first_order_ode_rk4(|_, y| y, 0.0, 1.0, 1.0, 1e-300).is_err());
        assert!(solve_second_order_ode(|_, y, _| -y, 0.0, 0.0, 1.0, f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn last_step_is_shortened_to_land_on_x_end() {
        // steps of 0.4, 0.4, then 0.2
        let traj = solve_first_order_ode(|_, y| y, 0.0, 1.0, 1.0, 0.4).unwrap();
        let xs: Vec<f64> = traj.iter().map(|p| p.0).collect();
        assert_eq!(xs.len(), 4);
        assert_abs_diff_eq!(xs[1], 0.4, epsilon = 1e-15);
        assert_abs_diff_eq!(xs[2], 0.8, epsilon = 1e-15);
        assert_eq!(xs[3], 1.0);
        assert_abs_diff_eq!(traj[3].1, 1.4 * 1.4 * 1.2, epsilon = 1e-12);

        let traj = solve_second_order_ode(|_, y, _| -y, 0.0, 0.0, 1.0, 1.0, 0.3).unwrap();
        let (x, y, _) = *traj.last().unwrap();
        assert_eq!(x, 1.0);
        assert_abs_diff_eq!(y, 1f64.sin(), epsilon = 1e-3);
    }

    #[test]
    fn near_whole_step_count_is_not_padded() {
        // 1.0 / 0.1 is 10 up to rounding; no extra sliver step
        let traj = solve_first_order_ode_rk4(|_, y| y, 0.0, 1.0, 1.0, 0.1).unwrap();
        assert_eq!(traj.len(), 11);
        assert_eq!(traj.last().unwrap().0, 1.0);
    }
}
