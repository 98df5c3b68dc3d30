use artifact_core::{
    build_scene, hex_to_rgba, ring_position, GeometryLibrary, ObjectId, ParticleField,
    ParticleParams, Project, SceneError, Shape, DEFAULT_PROJECTS, RING_RADIUS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_scene_has_three_artifacts_on_a_ring() {
    let mut library = GeometryLibrary::new();
    let registry = build_scene(DEFAULT_PROJECTS, &mut library).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(library.len(), 3);

    let ids: Vec<ObjectId> = registry.all().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![ObjectId(1), ObjectId(2), ObjectId(3)]);

    for object in registry.all() {
        let p = object.transform.position;
        assert!((p.length() - RING_RADIUS).abs() < 1e-5);
        assert_eq!(p.z, 0.0);
        assert!(library.get(object.geometry).is_some());
    }
    assert_eq!(registry.get(ObjectId(2)).unwrap().info.title, "Deep Mind");
}

#[test]
fn first_artifact_sits_on_positive_x() {
    let p = ring_position(0, 3, 2.5);
    assert!((p.x - 2.5).abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn colours_decode_from_hex() {
    assert_eq!(hex_to_rgba(0xff0055), [1.0, 0.0, 85.0 / 255.0, 1.0]);
    let mut library = GeometryLibrary::new();
    let registry = build_scene(DEFAULT_PROJECTS, &mut library).unwrap();
    assert_eq!(registry.all()[1].color, hex_to_rgba(0x00ffaa));
}

#[test]
fn empty_project_list_is_a_configuration_error() {
    let mut library = GeometryLibrary::new();
    assert!(matches!(
        build_scene(&[], &mut library),
        Err(SceneError::Configuration(_))
    ));
}

#[test]
fn custom_project_list_builds() {
    let projects = [Project {
        title: "Solo",
        description: "only one",
        color: 0xffffff,
        shape: Shape::Octahedron { radius: 1.0 },
    }];
    let mut library = GeometryLibrary::new();
    let registry = build_scene(&projects, &mut library).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.all()[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn particles_fill_the_spread_cube_deterministically() {
    let params = ParticleParams {
        count: 200,
        spread: 10.0,
    };
    let a = ParticleField::generate(&params, &mut StdRng::seed_from_u64(42));
    let b = ParticleField::generate(&params, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.positions.len(), 200);
    for p in &a.positions {
        assert!(p.abs().max_element() <= 5.0);
    }
}

#[test]
fn zero_spread_collapses_particles() {
    let params = ParticleParams {
        count: 4,
        spread: 0.0,
    };
    let field = ParticleField::generate(&params, &mut StdRng::seed_from_u64(1));
    assert!(field.positions.iter().all(|p| *p == glam::Vec3::ZERO));
}

#[test]
fn particle_rotation_accumulates() {
    let mut field = ParticleField::default();
    for _ in 0..5 {
        field.advance(0.001);
    }
    assert!((field.rotation_y - 0.005).abs() < 1e-7);
}

#[test]
fn particle_drift_survives_long_sessions() {
    let mut field = ParticleField {
        positions: Vec::new(),
        rotation_y: 16384.0,
    };
    field.advance(0.001);
    let start = field.rotation_y;
    assert!(start < std::f32::consts::TAU);
    for _ in 0..1000 {
        field.advance(0.001);
    }
    let drifted = (field.rotation_y - start).rem_euclid(std::f32::consts::TAU);
    assert!((drifted - 1.0).abs() < 2e-3, "drifted {drifted}");
}

#[test]
fn non_finite_spread_collapses_particles() {
    let params = ParticleParams {
        count: 3,
        spread: f32::NAN,
    };
    let field = ParticleField::generate(&params, &mut StdRng::seed_from_u64(1));
    assert_eq!(field.positions, vec![glam::Vec3::ZERO; 3]);
}
