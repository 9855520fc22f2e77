const COINCIDENT_ENERGY: f64 = 1e10;

/// Two-dimensional (logarithmic) Coulomb interaction between lattice charges.
#[inline]
pub fn log_coulomb(dist: f64, q1: f64, q2: f64, k: f64) -> f64 {
    if dist < 1e-6 {
        return q1.signum() * q2.signum() * COINCIDENT_ENERGY;
    }
    -k * q1 * q2 * dist.ln()
}

#[inline]
pub fn solvent_exposure(occupied_neighbors: usize) -> f64 {
    1.0 - (occupied_neighbors.min(6) as f64 / 6.0)
}

#[inline]
pub fn exposure_energy(exposure: f64, exposed_weight: f64, buried_weight: f64) -> f64 {
    exposed_weight * exposure + buried_weight * (1.0 - exposure)
}

#[inline]
pub fn angular_penalty(actual_steps: i8, preferred_steps: i8, penalty_per_step: f64) -> f64 {
    penalty_per_step * (actual_steps as f64 - preferred_steps as f64).abs()
}

/// Repulsive 12-power wall, `strength` at the threshold and zero beyond it.
#[inline]
pub fn steric_repulsion(dist: f64, threshold: f64, strength: f64) -> f64 {
    if dist > threshold {
        return 0.0;
    }
    if dist < 1e-6 {
        return COINCIDENT_ENERGY;
    }
    strength * (threshold / dist).powi(12)
}
