use super::point_2d::{distance, normalize};
use super::Point;

/// Upper bound on the number of dashes in one segment.
pub const MAX_DASHES: usize = 4096;

/// Computes the dash layout of a dotted segment from `start` to `end`.
///
/// Dashes of length `segment_len` alternate with gaps of the same length.
/// When the final dash would overshoot it is clipped at `end`; otherwise a
/// short cap centred on `end` is appended so the endpoint stays visible.
/// Returns nothing for a non-positive or non-finite `segment_len` or a
/// zero-length segment. Dashes are lengthened when needed so the layout never
/// exceeds [`MAX_DASHES`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn dashes(start: Point, end: Point, segment_len: f32) -> Vec<(Point, Point)> {
    let total = distance(start, end);
    if !segment_len.is_finite() || segment_len <= 0.0 || !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }
    let segment_len = segment_len.max(total / (2.0 * MAX_DASHES as f32));

    let count = ((total / (2.0 * segment_len)).ceil() as usize).min(MAX_DASHES);
    let step = normalize(end - start) * segment_len;

    let mut out = Vec::with_capacity(count + 1);
    let mut end_cap = true;
    for i in 0..count {
        let dash_start = start + step * (2 * i) as f32;
        let mut dash_end = dash_start + step;

        if i + 1 == count && distance(dash_start, dash_end) > distance(dash_start, end) {
            dash_end = end;
            end_cap = false;
        }
        out.push((dash_start, dash_end));
    }

    if end_cap {
        out.push((end + step * 0.05, end - step * 0.05));
    }
    out
}
