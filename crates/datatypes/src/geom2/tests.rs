use super::*;
use proptest::prelude::*;
use std::f64::consts::PI;

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment2D {
    Segment2D::new(Point2D::new(ax, ay), Point2D::new(bx, by))
}

fn pt(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn crossing_diagonals_meet_in_the_middle() {
    let s = seg(0.0, 0.0, 2.0, 2.0);
    let t = seg(0.0, 2.0, 2.0, 0.0);
    assert_eq!(s.intersection(&t), Intersection::Point(pt(1.0, 1.0)));
    assert_eq!(t.intersection(&s), Intersection::Point(pt(1.0, 1.0)));
}

#[test]
fn collinear_disjoint_is_disjoint() {
    let s = seg(0.0, 0.0, 1.0, 0.0);
    let t = seg(2.0, 0.0, 3.0, 0.0);
    assert_eq!(s.intersection(&t), Intersection::Disjoint);
    assert!(!s.intersects_with(&t));
}

#[test]
fn parallel_on_distinct_lines_is_disjoint() {
    let s = seg(0.0, 0.0, 2.0, 0.0);
    let t = seg(0.0, 1.0, 2.0, 1.0);
    assert_eq!(s.intersection(&t), Intersection::Disjoint);
}

#[test]
fn collinear_overlap_returns_sub_segment() {
    let s = seg(0.0, 0.0, 2.0, 0.0);
    let t = seg(1.0, 0.0, 3.0, 0.0);
    assert_eq!(
        s.intersection(&t),
        Intersection::Overlap(seg(1.0, 0.0, 2.0, 0.0))
    );
    // Oriented like the receiver.
    assert_eq!(
        t.reversed().intersection(&s.reversed()),
        Intersection::Overlap(seg(2.0, 0.0, 1.0, 0.0))
    );
    // Full containment and identical segments.
    assert_eq!(
        seg(0.0, 0.0, 4.0, 4.0).intersection(&seg(1.0, 1.0, 2.0, 2.0)),
        Intersection::Overlap(seg(1.0, 1.0, 2.0, 2.0))
    );
    assert_eq!(s.intersection(&s), Intersection::Overlap(s));
    assert_eq!(
        s.intersection(&s.reversed()),
        Intersection::Overlap(s)
    );
}

#[test]
fn shared_endpoint_is_a_point() {
    let s = seg(0.0, 0.0, 1.0, 1.0);
    let t = seg(1.0, 1.0, 2.0, 0.0);
    assert_eq!(s.intersection(&t), Intersection::Point(pt(1.0, 1.0)));
    // Collinear segments touching end to end.
    let u = seg(0.0, 0.0, 1.0, 0.0);
    let v = seg(1.0, 0.0, 2.0, 0.0);
    assert_eq!(u.intersection(&v), Intersection::Point(pt(1.0, 0.0)));
    assert_eq!(v.intersection(&u), Intersection::Point(pt(1.0, 0.0)));
}

#[test]
fn reference_cases() {
    let s = seg(0.0, 0.0, 3.0, 3.0);
    let t = seg(2.0, 0.0, 2.0, 3.0);
    let u = seg(0.0, 0.0, 2.0, 3.0);
    let v = seg(6.0, 0.0, 3.0, 3.0);
    let w = seg(10.0, 10.0, 15.0, 15.0);
    let p = s.intersection(&t).point().expect("crossing");
    assert!(p.approx_eq(&pt(2.0, 2.0), 1e-12));
    assert_eq!(s.intersection(&u), Intersection::Point(pt(0.0, 0.0)));
    assert_eq!(s.intersection(&v), Intersection::Point(pt(3.0, 3.0)));
    // Collinear with a gap.
    assert_eq!(s.intersection(&w), Intersection::Disjoint);
    assert!(s.intersects_with(&t) && s.intersects_with(&u) && s.intersects_with(&v));
    assert!(!s.intersects_with(&w));
}

#[test]
fn lines_cross_outside_the_segments() {
    let s = seg(0.0, 0.0, 1.0, 0.0);
    let t = seg(2.0, -1.0, 2.0, 1.0);
    assert_eq!(s.intersection(&t), Intersection::Disjoint);
}

#[test]
fn near_parallel_is_classified_as_parallel() {
    let s = seg(0.0, 0.0, 1.0, 0.0);
    // Determinant ~1e-17, far below eps_det; lines 1e-3 apart.
    let t = seg(0.0, 1e-3, 1.0, 1e-3 + 1e-17);
    assert_eq!(s.intersection(&t), Intersection::Disjoint);
    // Same slope defect on the same line: collinear overlap.
    let u = seg(0.5, 0.0, 1.5, 1e-17);
    assert_eq!(
        s.intersection(&u).overlap().map(|o| o.a),
        Some(pt(0.5, 0.0))
    );
}

#[test]
fn near_parallel_separated_segment_is_disjoint_either_direction() {
    let s = seg(0.0, 0.0, 1.0, 0.0);
    // Starts on the x-axis far to the left and rises 1e-6 over 2e6 units:
    // lines meet at x = -1e6, well outside `s`.
    let t = seg(-1e6, 0.0, 1e6, 1e-6);
    assert_eq!(s.intersection(&t), Intersection::Disjoint);
    assert_eq!(s.intersection(&t.reversed()), Intersection::Disjoint);
    assert_eq!(t.intersection(&s), Intersection::Disjoint);
}

#[test]
fn near_parallel_segment_crossing_the_line_is_a_point() {
    let s = seg(0.0, 0.0, 1.0, 0.0);
    let t = seg(-1e7, -1e-6, 1e7, 1e-6);
    assert_eq!(s.intersection(&t), Intersection::Point(pt(0.0, 0.0)));
    assert_eq!(s.intersection(&t.reversed()), Intersection::Point(pt(0.0, 0.0)));
    // Crosses the line of `s` far past its end.
    let u = seg(2.0, -1e-6, 3e7, 1e-6);
    assert_eq!(s.intersection(&u), Intersection::Disjoint);
}

#[test]
fn degenerate_segments_as_points() {
    let s = seg(0.0, 0.0, 2.0, 2.0);
    let on = seg(1.0, 1.0, 1.0, 1.0);
    let off = seg(1.0, 0.0, 1.0, 0.0);
    assert_eq!(s.intersection(&on), Intersection::Point(pt(1.0, 1.0)));
    assert_eq!(on.intersection(&s), Intersection::Point(pt(1.0, 1.0)));
    assert_eq!(s.intersection(&off), Intersection::Disjoint);
    assert_eq!(on.intersection(&on), Intersection::Point(pt(1.0, 1.0)));
    assert_eq!(on.intersection(&off), Intersection::Disjoint);
}

#[test]
fn degenerate_segments_rejected_under_strict_policy() {
    let s = seg(0.0, 0.0, 2.0, 2.0);
    let d = seg(1.0, 1.0, 1.0, 1.0);
    let cfg = GeomCfg::strict();
    assert_eq!(
        s.intersection_with(&d, cfg),
        Err(GeomError::DegenerateSegment)
    );
    assert_eq!(
        d.intersection_with(&s, cfg),
        Err(GeomError::DegenerateSegment)
    );
    let t = seg(0.0, 2.0, 2.0, 0.0);
    assert_eq!(
        s.intersection_with(&t, cfg),
        Ok(Intersection::Point(pt(1.0, 1.0)))
    );
}

#[test]
fn segment_metrics() {
    let s = seg(0.0, 0.0, 4.0, 3.0);
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.direction(), Vector2D::new(4.0, 3.0));
    assert_eq!(s.midpoint(), pt(2.0, 1.5));
    assert_eq!(s.point_at(1.0), s.b);
    assert!((s.distance_to_point(pt(8.0, 6.0)) - 5.0).abs() < 1e-12);
    assert!((s.distance_to_point(pt(-3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert!(s.contains_point(pt(2.0, 1.5), 1e-12));
    assert!(s.same_undirected(&s.reversed()));
    assert_ne!(s, s.reversed());
    assert_eq!(s.to_string(), "(0.00,0.00)->(4.00,3.00)");
    assert!(!s.is_degenerate(1e-9));
}

#[test]
fn cfg_deserializes_with_defaults() {
    let cfg: GeomCfg =
        serde_json::from_str(r#"{ "eps_feas": 1e-6, "degenerate": "reject" }"#).unwrap();
    assert_eq!(cfg.eps_feas, 1e-6);
    assert_eq!(cfg.eps_det, GeomCfg::default().eps_det);
    assert_eq!(cfg.degenerate, DegeneratePolicy::Reject);
}

#[test]
fn polar_rejects_negative_magnitude_from_json() {
    let bad = serde_json::from_str::<Polar>(r#"{ "r": -1.0, "theta": 0.0 }"#);
    assert!(bad.is_err());
    let ok: Polar = serde_json::from_str(r#"{ "r": 2.0, "theta": 7.0 }"#).unwrap();
    assert!((ok.theta() - (7.0 - 2.0 * PI)).abs() < 1e-12);
    let p: Point2D = serde_json::from_str("[1.5, -2.0]").unwrap();
    assert_eq!(p, pt(1.5, -2.0));
}

fn coord() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

fn vector() -> impl Strategy<Value = Vector2D> {
    (coord(), coord()).prop_map(|(x, y)| Vector2D::new(x, y))
}

fn point() -> impl Strategy<Value = Point2D> {
    (coord(), coord()).prop_map(|(x, y)| Point2D::new(x, y))
}

/// Zero, or clearly off the line relative to `eps_feas`.
fn normal_offset() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 1e-6..1e-3f64, -1e-3..-1e-6f64]
}

/// `(s, t)` where the ends of `t` sit at parameters `k`, `m` along the line of
/// `s`, each shifted off it along the normal.
fn near_parallel_pair() -> impl Strategy<Value = (Segment2D, Segment2D, bool)> {
    (
        (-10.0..10.0f64, -10.0..10.0f64),
        (-10.0..10.0f64, -10.0..10.0f64),
        -2.0..3.0f64,
        -2.0..3.0f64,
        normal_offset(),
        normal_offset(),
    )
        .prop_filter("non-degenerate", |(_, (dx, dy), k, m, _, _)| {
            dx.hypot(*dy) > 1e-2 && (k - m).abs() > 1e-3
        })
        .prop_map(|((ax, ay), (dx, dy), k, m, off_a, off_b)| {
            let a = Point2D::new(ax, ay);
            let dir = Vector2D::new(dx, dy);
            let n = dir.perp().unit();
            let s = Segment2D::new(a, a + dir);
            let t = Segment2D::new(a + dir * k + n * off_a, a + dir * m + n * off_b);
            (s, t, off_a == 0.0 && off_b == 0.0)
        })
}

fn same_kind(x: &Intersection, y: &Intersection) -> bool {
    std::mem::discriminant(x) == std::mem::discriminant(y)
}

/// Every reported point or overlap end lies on both segments.
fn lies_on_both(hit: &Intersection, s: &Segment2D, t: &Segment2D, eps: f64) -> bool {
    let ends = match *hit {
        Intersection::Disjoint => vec![],
        Intersection::Point(p) => vec![p],
        Intersection::Overlap(o) => vec![o.a, o.b],
    };
    ends.iter()
        .all(|&p| s.contains_point(p, eps) && t.contains_point(p, eps))
}

proptest! {
    #[test]
    fn rotation_round_trip(v in vector(), theta in -10.0..10.0f64) {
        let back = v.rotate(theta).rotate(-theta);
        prop_assert!(back.approx_eq(&v, 1e-9), "{v} -> {back}");
    }

    #[test]
    fn rotation_preserves_length(v in vector(), theta in -10.0..10.0f64) {
        prop_assert!((v.rotate(theta).length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn polar_round_trip(v in vector()) {
        let p = v.to_polar();
        prop_assert!(p.r() >= 0.0);
        prop_assert!(p.theta() > -PI && p.theta() <= PI);
        prop_assert!(p.to_cartesian().approx_eq(&v, 1e-9));
    }

    #[test]
    fn affine_consistency(p in point(), q in point()) {
        prop_assert!(((p - q) + q).approx_eq(&p, 1e-9));
    }

    #[test]
    fn intersection_is_symmetric_and_on_both(
        a in point(), b in point(), c in point(), d in point()
    ) {
        let s = Segment2D::new(a, b);
        let t = Segment2D::new(c, d);
        let st = s.intersection(&t);
        let ts = t.intersection(&s);
        prop_assert_eq!(st.is_disjoint(), ts.is_disjoint());
        prop_assert!(lies_on_both(&st, &s, &t, 1e-6), "{s} x {t} -> {st}");
    }

    #[test]
    fn near_parallel_pairs_are_consistent((s, t, collinear) in near_parallel_pair()) {
        let st = s.intersection(&t);
        let st_rev = s.intersection(&t.reversed());
        prop_assert!(same_kind(&st, &st_rev), "{s} x {t}: {st} vs {st_rev}");
        prop_assert!(lies_on_both(&st, &s, &t, 1e-6), "{s} x {t} -> {st}");
        prop_assert!(lies_on_both(&st_rev, &s, &t, 1e-6), "{s} x {t} -> {st_rev}");
        if collinear {
            let ts = t.intersection(&s);
            prop_assert!(same_kind(&st, &ts), "{s} x {t}: {st} vs {ts}");
        } else {
            prop_assert!(st.overlap().is_none(), "{s} x {t} -> {st}");
        }
    }
}
