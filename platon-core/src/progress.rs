//! Progress pass-through flags
//!
//! Maps an external counter onto a count of faces to style distinctly.
//! Pure computation only; coloring is the view layer's job.

/// Number of faces flagged for a progress value of `value` out of `max`:
/// `floor((value / max) * face_count)`. `value` is clamped to `0..=max`;
/// a zero `max` (rejected at configuration time) yields zero flags.
pub fn progressed_count(value: u32, max: u32, face_count: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let fraction = f64::from(value.min(max)) / f64::from(max);
    (fraction * face_count as f64).floor() as usize
}

/// Whether the face at `index` (original face-list order) is progressed
/// when the first `count` faces are flagged.
pub fn is_progressed(index: usize, count: usize) -> bool {
    index < count
}

/// Per-face flags in original face-list order.
pub fn progressed_flags(value: u32, max: u32, face_count: usize) -> Vec<bool> {
    let count = progressed_count(value, max, face_count);
    (0..face_count).map(|i| is_progressed(i, count)).collect()
}
