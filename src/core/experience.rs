/// Suitability multiplier for a mentor's years of experience
///
/// Mid-career mentors (4-7 years) score highest. The bands overlap, so they
/// are checked from the narrowest outwards and the first match wins.
#[inline]
pub fn experience_weight(years: u32) -> f64 {
    match years {
        4..=7 => 1.0,
        3..=8 => 0.9,
        2..=10 => 0.8,
        _ => 0.7,
    }
}
