use pagecraft_designer::transform::{
    is_valid_transform, move_by, rotate, scale, Bounds, Delta, ScaleFactors, Transform,
    TransformPartial,
};
use pagecraft_designer::DesignerError;

#[test]
fn test_move_and_back() {
    let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
    let d = Delta::new(5.5, -7.25);
    let moved = move_by(b, d);
    assert_eq!(moved.left, 15.5);
    assert_eq!(moved.top, 12.75);
    assert_eq!(moved.width, 30.0);
    assert_eq!(move_by(moved, -d), b);
}

#[test]
fn test_scale_identity() {
    let s = ScaleFactors::new(1.5, 0.5);
    assert_eq!(scale(s, 1.0), s);
    assert_eq!(scale(s, 2.0), ScaleFactors::new(3.0, 1.0));
}

#[test]
fn test_rotate_normalizes() {
    assert_eq!(rotate(350.0, 20.0), 10.0);
    assert_eq!(rotate(10.0, -20.0), 350.0);
    assert_eq!(rotate(45.0, 360.0), 45.0);
    assert_eq!(rotate(0.0, -720.0), 0.0);
}

#[test]
fn test_validity() {
    assert!(is_valid_transform(&TransformPartial::default()));
    assert!(is_valid_transform(&TransformPartial::position(-50.0, -50.0)));
    assert!(!is_valid_transform(&TransformPartial {
        scale_x: Some(0.0),
        ..TransformPartial::default()
    }));
    assert!(!is_valid_transform(&TransformPartial {
        height: Some(-1.0),
        ..TransformPartial::default()
    }));
    assert!(is_valid_transform(&TransformPartial {
        width: Some(0.0),
        ..TransformPartial::default()
    }));
}

#[test]
fn test_apply_rejects_without_changing() {
    let t = Transform::new(0.0, 0.0, 100.0, 50.0);
    let err = t
        .apply(&TransformPartial {
            scale_y: Some(-2.0),
            ..TransformPartial::default()
        })
        .unwrap_err();
    assert!(matches!(err, DesignerError::InvalidTransform { .. }));

    let rotated = t
        .apply(&TransformPartial {
            angle: Some(-90.0),
            scale_x: Some(2.0),
            ..TransformPartial::default()
        })
        .unwrap();
    assert_eq!(rotated.angle, 270.0);
    assert_eq!(rotated.scaled_width(), 200.0);
}

#[test]
fn test_rotated_bounds_are_axis_aligned() {
    let mut t = Transform::new(0.0, 0.0, 100.0, 50.0);
    t.angle = 90.0;
    let b = t.bounds();
    assert!((b.width - 50.0).abs() < 1e-9);
    assert!((b.height - 100.0).abs() < 1e-9);
    assert!((b.center_x() - 50.0).abs() < 1e-9);
    assert!((b.center_y() - 25.0).abs() < 1e-9);
}
