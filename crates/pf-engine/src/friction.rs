//! Darcy friction factor from Reynolds number and relative roughness.
//!
//! Laminar flow has the exact closed form f = 64/Re. Turbulent flow solves
//! the implicit Colebrook-White relation by fixed-point iteration seeded
//! from the explicit Swamee-Jain approximation. The transitional band
//! (2300 <= Re <= 4000) has no exact correlation; the turbulent one is
//! applied there as a conservative estimate and the result is flagged.

use crate::flow::LAMINAR_LIMIT;

/// Iteration cap for the Colebrook-White fixed point.
pub const MAX_ITERATIONS: usize = 50;

/// Convergence tolerance on successive friction-factor iterates.
pub const CONVERGENCE_TOL: f64 = 1e-6;

/// Relative roughness above which wall-friction correlations lose accuracy.
pub const RELATIVE_ROUGHNESS_WARN: f64 = 0.05;

/// A solved friction factor and whether the iteration converged.
///
/// `converged == false` means the Swamee-Jain seed was returned after the
/// iteration cap; the value is still usable, only last-digit precision is
/// uncertain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionSolution {
    pub factor: f64,
    pub converged: bool,
}

/// Explicit Swamee-Jain approximation of the Colebrook-White equation.
///
/// f = 0.25 / [log10(eps/(3.7 D) + 5.74/Re^0.9)]^2
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let arg = relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9);
    0.25 / arg.log10().powi(2)
}

/// Solve for the Darcy friction factor.
///
/// Laminar (Re < 2300): exact 64/Re. Otherwise Colebrook-White
/// 1/sqrt(f) = -2 log10(eps/(3.7 D) + 2.51/(Re sqrt(f))), iterated from the
/// Swamee-Jain seed until successive iterates agree within
/// [`CONVERGENCE_TOL`] or [`MAX_ITERATIONS`] is reached. Non-convergence
/// falls back to the seed rather than failing.
pub fn solve_friction(reynolds: f64, relative_roughness: f64) -> FrictionSolution {
    if reynolds < LAMINAR_LIMIT {
        return FrictionSolution {
            factor: 64.0 / reynolds,
            converged: true,
        };
    }

    let seed = swamee_jain(reynolds, relative_roughness);
    let mut factor = seed;
    for _ in 0..MAX_ITERATIONS {
        let inv_sqrt = -2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * factor.sqrt())).log10();
        let next = 1.0 / (inv_sqrt * inv_sqrt);
        if (next - factor).abs() < CONVERGENCE_TOL {
            return FrictionSolution {
                factor: next,
                converged: true,
            };
        }
        factor = next;
    }

    FrictionSolution {
        factor: seed,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_is_exact() {
        let sol = solve_friction(100.0, 0.0);
        assert!((sol.factor - 0.64).abs() < 1e-12);
        assert!(sol.converged);

        let sol = solve_friction(1500.0, 1e-4);
        assert!((sol.factor - 64.0 / 1500.0).abs() < 1e-12);
    }

    #[test]
    fn laminar_ignores_roughness() {
        let smooth = solve_friction(2000.0, 0.0);
        let rough = solve_friction(2000.0, 0.01);
        assert_eq!(smooth.factor, rough.factor);
    }

    #[test]
    fn turbulent_converges_near_swamee_jain() {
        // Reference scenario: PVC pipe, D = 0.05 m, eps = 0.0015 mm
        let reynolds = 253_633.0;
        let relative_roughness = 1.5e-6 / 0.05;

        let seed = swamee_jain(reynolds, relative_roughness);
        let sol = solve_friction(reynolds, relative_roughness);

        assert!(sol.converged);
        // Swamee-Jain tracks Colebrook-White within ~2% in this range
        assert!((sol.factor - seed).abs() / seed < 0.02);
        assert!((sol.factor - 0.0152).abs() / 0.0152 < 0.02);
    }

    #[test]
    fn turbulent_satisfies_colebrook_white() {
        let reynolds = 80_000.0;
        let relative_roughness = 2e-4;
        let sol = solve_friction(reynolds, relative_roughness);
        assert!(sol.converged);

        // Plug the result back into the implicit relation
        let lhs = 1.0 / sol.factor.sqrt();
        let rhs =
            -2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * sol.factor.sqrt())).log10();
        assert!((lhs - rhs).abs() < 1e-3);
    }

    #[test]
    fn transitional_band_uses_turbulent_correlation() {
        let sol = solve_friction(3000.0, 1e-4);
        assert!(sol.converged);
        assert!((sol.factor - 64.0 / 3000.0).abs() > 1e-3, "must not be laminar form");
        assert!(sol.factor > 0.0);
    }

    #[test]
    fn rough_pipe_has_higher_friction() {
        let smooth = solve_friction(1e5, 1e-6);
        let rough = solve_friction(1e5, 1e-2);
        assert!(rough.factor > smooth.factor);
    }
}
