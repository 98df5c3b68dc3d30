use artifact_core::{
    ArtifactInfo, GeometryHandle, ObjectId, Registry, SceneError, SceneObject,
};
use glam::Vec3;

fn object(id: u32, x: f32) -> SceneObject {
    SceneObject::new(
        ObjectId(id),
        GeometryHandle(0),
        Vec3::new(x, 0.0, 0.0),
        ArtifactInfo {
            title: format!("Artifact {id}"),
            description: format!("Description {id}"),
        },
    )
}

#[test]
fn objects_keep_registration_order() {
    let mut registry = Registry::new();
    for (id, x) in [(9, 0.0), (2, 1.0), (5, 2.0)] {
        registry.register(object(id, x)).unwrap();
    }
    let ids: Vec<u32> = registry.all().iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec![9, 2, 5]);
    assert_eq!(registry.index_of(ObjectId(2)), Some(1));
    assert_eq!(registry.len(), 3);
}

#[test]
fn duplicate_id_is_a_configuration_error() {
    let mut registry = Registry::new();
    registry.register(object(1, 0.0)).unwrap();
    let err = registry.register(object(1, 3.0)).unwrap_err();
    assert!(matches!(err, SceneError::Configuration(_)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn invalid_base_scale_is_rejected() {
    let mut registry = Registry::new();
    let zero = object(1, 0.0).with_base_scale(Vec3::new(1.0, 0.0, 1.0));
    assert!(matches!(
        registry.register(zero),
        Err(SceneError::Configuration(_))
    ));
    let nan = object(2, 0.0).with_base_scale(Vec3::splat(f32::NAN));
    assert!(matches!(
        registry.register(nan),
        Err(SceneError::Configuration(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn sealed_registry_refuses_new_objects() {
    let mut registry = Registry::new();
    registry.register(object(1, 0.0)).unwrap();
    registry.seal();
    assert!(registry.is_sealed());
    assert!(matches!(
        registry.register(object(2, 1.0)),
        Err(SceneError::Configuration(_))
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_of_unknown_id_is_not_found() {
    let mut registry = Registry::new();
    registry.register(object(1, 0.0)).unwrap();
    assert_eq!(registry.get(ObjectId(1)).unwrap().info.title, "Artifact 1");
    assert_eq!(
        registry.get(ObjectId(42)).unwrap_err(),
        SceneError::NotFound(ObjectId(42))
    );
    assert!(!registry.contains(ObjectId(42)));
}

#[test]
fn world_matrix_applies_group_rotation() {
    let mut registry = Registry::new();
    registry.register(object(1, 2.0)).unwrap();
    registry.set_group_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
    let obj = &registry.all()[0];
    let p = registry.world_matrix(obj).transform_point3(Vec3::ZERO);
    // +X rotated a quarter turn about Y lands on -Z
    assert!(p.x.abs() < 1e-5);
    assert!((p.z + 2.0).abs() < 1e-5);
}

#[test]
fn error_messages_name_the_id() {
    let msg = SceneError::NotFound(ObjectId(7)).to_string();
    assert!(msg.contains("#7"), "{msg}");
}
