//! Intersection classification across the three locus kinds.

use super::*;
use crate::error::GeomError;
use crate::kernel::{Point, Vector};
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(p(x1, y1), p(x2, y2))
}

#[test]
fn crossing_segments_meet_in_one_point() {
    let a = seg(0.0, 0.0, 4.0, 4.0);
    let b = seg(4.0, 0.0, 0.0, 4.0);
    match a.intersect(&b).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(2.0, 2.0)),
        other => panic!("expected a point, got {other:?}"),
    }
    // Same answer with the operands swapped.
    match b.intersect(&a).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(2.0, 2.0)),
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn separated_segments_do_not_meet() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(0.0, 1.0, 1.0, 1.0);
    assert_eq!(a.intersect(&b).unwrap(), None);
    // Carriers cross, but outside both parameter ranges.
    let c = seg(3.0, 1.0, 3.0, 2.0);
    assert_eq!(a.intersect(&c).unwrap(), None);
}

#[test]
fn collinear_segments_classify_by_overlap_width() {
    let a = seg(0.0, 0.0, 4.0, 0.0);

    // Disjoint on the same carrier.
    assert_eq!(a.intersect(&seg(5.0, 0.0, 9.0, 0.0)).unwrap(), None);

    // Endpoint touch collapses to a point.
    match a.intersect(&seg(4.0, 0.0, 8.0, 0.0)).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(4.0, 0.0)),
        other => panic!("expected a point, got {other:?}"),
    }

    // Genuine overlap keeps a segment.
    match a.intersect(&seg(2.0, 0.0, 6.0, 0.0)).unwrap() {
        Some(Intersection::Segment(s)) => {
            assert_eq!(s.start, p(2.0, 0.0));
            assert_eq!(s.end, p(4.0, 0.0));
        }
        other => panic!("expected a segment, got {other:?}"),
    }

    // A segment nested in a longer one comes back whole.
    match a.intersect(&seg(1.0, 0.0, 3.0, 0.0)).unwrap() {
        Some(Intersection::Segment(s)) => {
            assert_eq!(s.start, p(1.0, 0.0));
            assert_eq!(s.end, p(3.0, 0.0));
        }
        other => panic!("expected a segment, got {other:?}"),
    }
}

#[test]
fn shared_endpoint_of_a_corner_is_a_point_contact() {
    let a = seg(0.0, 0.0, 4.0, 0.0);
    let b = seg(4.0, 0.0, 4.0, 3.0);
    match a.intersect(&b).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(4.0, 0.0)),
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn parallel_lines_with_offset_never_meet() {
    let a = Line::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    let b = Line::new(p(0.0, 1.0), Vector::new(2.0, 0.0));
    assert_eq!(a.intersect(&b).unwrap(), None);
}

#[test]
fn coincident_lines_intersect_in_a_line() {
    let a = Line::new(p(0.0, 0.0), Vector::new(1.0, 1.0));
    let b = Line::new(p(2.0, 2.0), Vector::new(-3.0, -3.0));
    match a.intersect(&b).unwrap() {
        Some(Intersection::Line(l)) => {
            assert!(a.contains_point(l.base));
            assert!(l.director.cross(a.director).abs() < 1e-9);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn lines_cross_in_one_point() {
    let a = Line::new(p(0.0, 0.0), Vector::new(1.0, 1.0));
    let b = Line::new(p(4.0, 0.0), Vector::new(0.0, 1.0));
    match a.intersect(&b).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(4.0, 4.0)),
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn facing_rays_overlap_in_a_segment() {
    let a = Ray::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    let b = Ray::new(p(3.0, 0.0), Vector::new(-1.0, 0.0));
    match a.intersect(&b).unwrap() {
        Some(Intersection::Segment(s)) => {
            assert_eq!(s.start, p(0.0, 0.0));
            assert_eq!(s.end, p(3.0, 0.0));
        }
        other => panic!("expected a segment, got {other:?}"),
    }
    // Receding rays share nothing.
    let c = Ray::new(p(-1.0, 0.0), Vector::new(-1.0, 0.0));
    assert_eq!(a.intersect(&c).unwrap(), None);
}

#[test]
fn nested_rays_overlap_in_a_ray() {
    let a = Ray::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    let b = Ray::new(p(2.0, 0.0), Vector::new(1.0, 0.0));
    match a.intersect(&b).unwrap() {
        Some(Intersection::Ray(r)) => {
            assert_eq!(r.origin, p(2.0, 0.0));
            assert!(r.director.cross(Vector::new(1.0, 0.0)).abs() < 1e-9);
            assert!(r.director.dot(Vector::new(1.0, 0.0)) > 0.0);
        }
        other => panic!("expected a ray, got {other:?}"),
    }
}

#[test]
fn line_and_collinear_ray_intersect_in_the_ray() {
    let line = Line::new(p(0.0, 0.0), Vector::new(-1.0, 0.0));
    let ray = Ray::new(p(2.0, 0.0), Vector::new(1.0, 0.0));
    match line.intersect(&ray).unwrap() {
        Some(Intersection::Ray(r)) => {
            assert_eq!(r.origin, p(2.0, 0.0));
            // The surviving half matches the ray's own heading.
            assert!(r.director.dot(Vector::new(1.0, 0.0)) > 0.0);
        }
        other => panic!("expected a ray, got {other:?}"),
    }
    // And symmetrically from the ray's side.
    match ray.intersect(&line).unwrap() {
        Some(Intersection::Ray(r)) => {
            assert_eq!(r.origin, p(2.0, 0.0));
            assert!(r.director.dot(Vector::new(1.0, 0.0)) > 0.0);
        }
        other => panic!("expected a ray, got {other:?}"),
    }
}

#[test]
fn ray_ignores_hits_behind_its_origin() {
    let ray = Ray::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    let behind = seg(-3.0, 1.0, -3.0, -1.0);
    assert_eq!(ray.intersect(&behind).unwrap(), None);
    let ahead = seg(3.0, 1.0, 3.0, -1.0);
    match ray.intersect(&ahead).unwrap() {
        Some(Intersection::Point(q)) => assert_eq!(q, p(3.0, 0.0)),
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn degenerate_operands_are_rejected() {
    let good = seg(0.0, 0.0, 1.0, 0.0);
    let collapsed = seg(2.0, 2.0, 2.0, 2.0);
    assert!(matches!(
        good.intersect(&collapsed),
        Err(GeomError::DegenerateInput { .. })
    ));
    assert!(matches!(
        collapsed.intersect(&good),
        Err(GeomError::DegenerateInput { .. })
    ));
    let no_heading = Line::new(p(0.0, 0.0), Vector::zero());
    assert!(no_heading.intersect(&good.to_line()).is_err());
}

#[test]
fn membership_respects_each_domain() {
    let line = Line::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    assert!(line.contains_point(p(-7.0, 0.0)));
    assert!(!line.contains_point(p(0.0, 1.0)));

    let ray = Ray::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    assert!(ray.contains_point(p(3.0, 0.0)));
    assert!(ray.contains_point(p(0.0, 0.0)));
    assert!(!ray.contains_point(p(-1.0, 0.0)));

    let s = seg(0.0, 0.0, 4.0, 0.0);
    assert!(s.contains_point(p(0.0, 0.0)));
    assert!(s.contains_point(p(2.0, 0.0)));
    assert!(s.contains_point(p(4.0, 0.0)));
    assert!(!s.contains_point(p(4.5, 0.0)));
}

#[test]
fn sidedness_is_strict_at_the_defining_points() {
    let s = seg(0.0, 0.0, 4.0, 0.0);
    assert!(s.is_left_of(p(2.0, 3.0)));
    assert!(s.is_right_of(p(2.0, -3.0)));
    assert!(!s.is_left_of(p(0.0, 0.0)));
    assert!(!s.is_right_of(p(0.0, 0.0)));
    assert!(!s.is_left_of(p(9.0, 0.0)));

    let line = Line::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    assert!(line.is_left_of(p(0.5, 1.0)));
    assert!(!line.is_left_of(p(0.0, 0.0)));
}

#[test]
fn closest_points_respect_each_domain() {
    let line = Line::new(p(0.0, 0.0), Vector::new(4.0, 0.0));
    assert_eq!(line.closest_point_to(p(2.0, 5.0)).unwrap(), p(2.0, 0.0));
    assert_eq!(line.distance_to_point(p(2.0, 5.0)).unwrap(), 5.0);

    let ray = Ray::new(p(0.0, 0.0), Vector::new(1.0, 0.0));
    assert_eq!(ray.closest_point_to(p(-3.0, 4.0)).unwrap(), p(0.0, 0.0));
    assert_eq!(ray.distance_to_point(p(-3.0, 4.0)).unwrap(), 5.0);
    assert_eq!(ray.closest_point_to(p(7.0, 2.0)).unwrap(), p(7.0, 0.0));

    let s = seg(0.0, 0.0, 4.0, 0.0);
    assert_eq!(s.closest_point_to(p(9.0, 3.0)).unwrap(), p(4.0, 0.0));
    assert_eq!(s.closest_point_to(p(2.0, -7.0)).unwrap(), p(2.0, 0.0));
    assert_eq!(s.distance_to_point(p(-3.0, 4.0)).unwrap(), 5.0);

    let collapsed = seg(1.0, 1.0, 1.0, 1.0);
    assert!(collapsed.closest_point_to(p(0.0, 0.0)).is_err());
}

#[test]
fn perpendiculars_pass_through_the_anchor() {
    let line = Line::new(p(0.0, 0.0), Vector::new(2.0, 0.0));
    let perp = line.perpendicular_at(p(3.0, 1.0)).unwrap();
    assert_eq!(perp.base, p(3.0, 1.0));
    assert_eq!(perp.director.dot(line.director), 0.0);

    let s = seg(0.0, 0.0, 4.0, 0.0);
    let perp = s.perpendicular_at(p(1.0, 0.0)).unwrap();
    assert!(perp.contains_point(p(1.0, 5.0)));
}

#[test]
fn conversions_keep_base_and_heading() {
    let s = seg(1.0, 2.0, 5.0, 2.0);
    let ray = s.to_ray();
    assert_eq!(ray.origin, p(1.0, 2.0));
    assert_eq!(ray.director, Vector::new(4.0, 0.0));
    let line = s.to_line();
    assert_eq!(line.base, p(1.0, 2.0));
    let back = ray.to_line();
    assert_eq!(back.base, p(1.0, 2.0));
    assert_eq!(back.director, Vector::new(4.0, 0.0));

    assert_eq!(s.length(), 4.0);
    assert_eq!(s.midpoint(), p(3.0, 2.0));
    assert_eq!(s.reversed().start, p(5.0, 2.0));
}

fn any_segment() -> impl Strategy<Value = Segment> {
    (
        -50.0f64..50.0,
        -50.0f64..50.0,
        -50.0f64..50.0,
        -50.0f64..50.0,
    )
        .prop_map(|(x1, y1, x2, y2)| Segment::new(Point::new(x1, y1), Point::new(x2, y2)))
}

proptest! {
    #[test]
    fn segment_intersection_is_symmetric(a in any_segment(), b in any_segment()) {
        prop_assume!(!a.is_degenerate() && !b.is_degenerate());
        let ab = a.intersect(&b).unwrap();
        let ba = b.intersect(&a).unwrap();
        match (ab, ba) {
            (None, None) => {}
            (Some(Intersection::Point(p1)), Some(Intersection::Point(p2))) => {
                prop_assert!(p1.distance_to(p2) < 1e-6);
            }
            (Some(Intersection::Segment(s1)), Some(Intersection::Segment(s2))) => {
                let aligned = s1.start.distance_to(s2.start) < 1e-6
                    && s1.end.distance_to(s2.end) < 1e-6;
                let flipped = s1.start.distance_to(s2.end) < 1e-6
                    && s1.end.distance_to(s2.start) < 1e-6;
                prop_assert!(aligned || flipped, "overlap endpoints disagree");
            }
            (lhs, rhs) => prop_assert!(false, "asymmetric kinds: {lhs:?} vs {rhs:?}"),
        }
    }
}
