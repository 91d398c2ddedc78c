use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};
use vizij_camera_path::{
    build_timeline, resolve_attribute, resolve_checkpoints, synthesize, Checkpoint,
    LightIntensity, LightPosition, LightSize, PathError, RenderState,
};

fn v(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

fn lit(cp: Checkpoint, size: f32) -> Checkpoint {
    cp.with_light_position(v(0.0, 4.0, 0.0))
        .with_light_size(size)
        .with_light_intensity(1.0)
}

fn assert_orthonormal(state: &RenderState) {
    let r = state.rotation();
    for i in 0..3 {
        assert_relative_eq!(r.row(i).norm(), 1.0, epsilon = 1e-5);
        for j in (i + 1)..3 {
            assert_relative_eq!(r.row(i).dot(&r.row(j)), 0.0, epsilon = 1e-5);
        }
    }
    assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-5);
}

#[test]
fn scenario_a_back_fills_from_first_declaration() {
    let cps = vec![
        Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)),
        Checkpoint::new(10, v(10.0, 0.0, 0.0), v(0.0, 0.0, 1.0))
            .with_light_size(2.0)
            .with_light_position(v(1.0, 1.0, 1.0))
            .with_light_intensity(3.0),
    ];

    let resolved = resolve_checkpoints(&cps).expect("resolve");
    assert_eq!(resolved[0].light_size, 2.0);
    assert_eq!(resolved[0].light_position, v(1.0, 1.0, 1.0));

    let states = synthesize(&resolved).expect("synthesize");
    assert_eq!(states.len(), 11);
    assert_eq!(states[0].light_size, 2.0);
    assert_eq!(states[0].timestamp, 0);
    assert_eq!(states[10].timestamp, 10);
}

#[test]
fn scenario_b_midpoint_is_mean_of_endpoints() {
    let cps = vec![
        Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0))
            .with_light_position(v(0.0, 2.0, 0.0))
            .with_light_size(1.0)
            .with_light_intensity(4.0),
        Checkpoint::new(5, v(5.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(10, v(10.0, 0.0, 0.0), v(0.0, 0.0, -1.0))
            .with_light_position(v(4.0, 2.0, 8.0))
            .with_light_size(3.0)
            .with_light_intensity(8.0),
    ];

    let states = build_timeline(&cps).expect("timeline");
    let mid = &states[5];
    assert_eq!(mid.timestamp, 5);
    assert_relative_eq!(mid.light_position, v(2.0, 2.0, 4.0), epsilon = 1e-6);
    assert_relative_eq!(mid.light_size, 2.0, epsilon = 1e-6);
    assert_relative_eq!(mid.light_intensity, 6.0, epsilon = 1e-6);
}

#[test]
fn scenario_c_single_checkpoint_is_insufficient() {
    let cps = vec![lit(Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)), 1.0)];
    assert_eq!(
        build_timeline(&cps).unwrap_err(),
        PathError::InsufficientCheckpoints { count: 1 }
    );
}

#[test]
fn scenario_d_light_position_declared_nowhere() {
    let cps = vec![
        Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0))
            .with_light_size(1.0)
            .with_light_intensity(1.0),
        Checkpoint::new(4, v(1.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
    ];
    assert_eq!(
        build_timeline(&cps).unwrap_err(),
        PathError::missing_attribute("light_position")
    );
}

#[test]
fn resolver_fills_every_index_and_boundaries_exactly() {
    let cps = vec![
        Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(3, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(7, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)).with_light_size(0.75),
        Checkpoint::new(9, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(19, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)).with_light_size(1.75),
        Checkpoint::new(30, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
    ];
    let sizes = resolve_attribute::<LightSize>(&cps).expect("sizes");
    assert_eq!(sizes.len(), cps.len());
    assert_eq!(sizes[0], 0.75);
    assert_eq!(sizes[1], 0.75);
    // t=9 sits 2/12 of the way from t=7 to t=19
    assert_relative_eq!(sizes[3], 0.75 + 2.0 / 12.0, epsilon = 1e-6);
    assert_eq!(sizes[5], 1.75);
}

#[test]
fn resolver_interpolates_on_segment_for_vec3_and_scalar() {
    let cps = vec![
        Checkpoint::new(2, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0))
            .with_light_position(v(-2.0, 0.0, 6.0))
            .with_light_intensity(10.0),
        Checkpoint::new(5, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(6, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)),
        Checkpoint::new(10, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0))
            .with_light_position(v(6.0, 8.0, -2.0))
            .with_light_intensity(2.0),
    ];
    let positions = resolve_attribute::<LightPosition>(&cps).expect("positions");
    let intensities = resolve_attribute::<LightIntensity>(&cps).expect("intensities");

    // t=5 -> 3/8, t=6 -> 4/8
    assert_relative_eq!(positions[1], v(1.0, 3.0, 3.0), epsilon = 1e-5);
    assert_relative_eq!(positions[2], v(2.0, 4.0, 2.0), epsilon = 1e-5);
    assert_relative_eq!(intensities[1], 7.0, epsilon = 1e-5);
    assert_relative_eq!(intensities[2], 6.0, epsilon = 1e-5);
}

#[test]
fn timeline_spans_inclusive_range_with_matching_endpoints() {
    let cps = vec![
        lit(Checkpoint::new(-3, v(1.0, 2.0, 3.0), v(0.2, -0.1, -1.0)), 0.5),
        Checkpoint::new(4, v(-1.0, 2.0, 0.0), v(1.0, 0.0, -0.3)),
        lit(Checkpoint::new(17, v(0.0, 5.0, -2.0), v(-0.5, -0.5, -1.0)), 2.5)
            .with_light_position(v(2.0, 6.0, -1.0))
            .with_light_intensity(3.0),
    ];
    let states = build_timeline(&cps).expect("timeline");
    assert_eq!(states.len(), (17 - (-3) + 1) as usize);
    assert!(states.windows(2).all(|w| w[1].timestamp == w[0].timestamp + 1));

    let first = states.first().unwrap();
    let last = states.last().unwrap();
    assert_relative_eq!(first.position, cps[0].position, epsilon = 1e-5);
    assert_relative_eq!(first.light_size, 0.5, epsilon = 1e-6);
    assert_relative_eq!(first.light_position, v(0.0, 4.0, 0.0), epsilon = 1e-5);
    assert_relative_eq!(first.light_intensity, 1.0, epsilon = 1e-6);
    assert_relative_eq!(last.position, cps[2].position, epsilon = 1e-5);
    assert_relative_eq!(last.light_size, 2.5, epsilon = 1e-6);
    assert_relative_eq!(last.light_position, v(2.0, 6.0, -1.0), epsilon = 1e-5);
    assert_relative_eq!(last.light_intensity, 3.0, epsilon = 1e-6);

    // The forward row of the final rotation is the negated, normalized final direction.
    let forward = -cps[2].direction.normalize();
    assert_relative_eq!(last.rotation().row(2).transpose(), forward, epsilon = 1e-5);
}

#[test]
fn every_rotation_is_orthonormal() {
    let cps = vec![
        lit(Checkpoint::new(0, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)), 1.0),
        Checkpoint::new(12, v(3.0, 0.0, 0.0), v(1.0, -0.5, 0.0)),
        Checkpoint::new(20, v(3.0, 3.0, 0.0), v(0.3, 0.9, 0.2)),
        Checkpoint::new(33, v(0.0, 3.0, 3.0), v(-1.0, 0.1, 1.0)),
    ];
    let states = build_timeline(&cps).expect("timeline");
    assert_eq!(states.len(), 34);
    states.iter().for_each(assert_orthonormal);
}

#[test]
fn straight_down_camera_still_produces_a_basis() {
    let cps = vec![
        lit(Checkpoint::new(0, v(0.0, 10.0, 0.0), v(0.0, -1.0, 0.0)), 1.0),
        Checkpoint::new(2, v(0.0, 8.0, 0.0), v(0.0, -1.0, 0.0)),
    ];
    let states = build_timeline(&cps).expect("timeline");
    assert_eq!(states.len(), 3);
    for state in &states {
        assert!(state.view_transform.iter().all(|x| x.is_finite()));
        assert_orthonormal(state);
    }
}

#[test]
fn unordered_input_is_rejected_before_resolution() {
    let cps = vec![
        lit(Checkpoint::new(10, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)), 1.0),
        lit(Checkpoint::new(2, v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)), 1.0),
    ];
    assert!(matches!(
        build_timeline(&cps),
        Err(PathError::UnorderedTimestamps { index: 1, .. })
    ));
}
