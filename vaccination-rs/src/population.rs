use crate::Identity;

/// Label assigned to the i-th citizen (1-based).
pub fn citizen_label(i: usize) -> Identity {
    format!("Citizen {}", i)
}

/// Creates a new population of n citizens labeled "Citizen 1" to "Citizen n".
pub fn new_population(n: usize) -> Vec<Identity> {
    (1..=n).map(citizen_label).collect()
}
