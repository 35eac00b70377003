use nnlogic_core::{Policy, State};

/// Pick the target most in need of refinement.
///
/// Prefers the highest ν_raw among states above `theta_null`, falling back
/// to the highest ν_raw overall. Ties go to the earliest state. `None` for
/// an empty slice.
pub fn query_next<'s>(states: &'s [State], policy: &Policy) -> Option<&'s State> {
    most_vague(states.iter().filter(|s| s.nu_raw > policy.theta_null)).or_else(|| most_vague(states.iter()))
}

fn most_vague<'s>(candidates: impl Iterator<Item = &'s State>) -> Option<&'s State> {
    candidates.fold(None, |best: Option<&'s State>, s| match best {
        Some(b) if b.nu_raw >= s.nu_raw => Some(b),
        _ => Some(s),
    })
}
