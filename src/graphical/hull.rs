// Hull Renderer: order 2D feasible vertices into their convex-hull boundary
// for polygon rendering. Andrew's monotone chain.

/// Convex hull of a 2D point set, counter-clockwise, starting from the
/// lexicographically smallest point.
///
/// Degenerate inputs are not a fault: zero or one point comes back as-is,
/// and an all-collinear set yields its two extremes (a zero-area polygon,
/// which renders as a segment).
pub fn convex_hull(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    if pts.len() < 2 {
        return pts;
    }

    let mut lower: Vec<(f64, f64)> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<(f64, f64)> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other begins; drop the duplicated endpoints.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Cross product of (o -> a) and (o -> b); positive for a strictly
/// counter-clockwise turn.
fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}
