use artifact_core::{
    build_scene, ArtifactInfo, Camera, CameraParams, GeometryLibrary, Mesh, ObjectId, Picker,
    PointerState, ProxySpheres, Ray, Registry, SceneObject, Shape, DEFAULT_PROJECTS,
};
use glam::Vec3;

fn info(id: u32) -> ArtifactInfo {
    ArtifactInfo {
        title: format!("Artifact {id}"),
        description: String::new(),
    }
}

fn camera(width: u32, height: u32) -> Camera {
    Camera::new(&CameraParams::default(), width, height)
}

/// Registry of icosahedra at the given positions, ids in list order.
fn mesh_scene(objects: &[(u32, Vec3)]) -> (Registry, GeometryLibrary) {
    let mut library = GeometryLibrary::new();
    let handle = library.insert(Mesh::from_shape(Shape::Icosahedron { radius: 0.8 }));
    let mut registry = Registry::new();
    for &(id, position) in objects {
        registry
            .register(SceneObject::new(ObjectId(id), handle, position, info(id)))
            .unwrap();
    }
    (registry, library)
}

fn ndc_of(camera: &Camera, p: Vec3) -> PointerState {
    let clip = camera.view_projection() * p.extend(1.0);
    PointerState::new(clip.x / clip.w, clip.y / clip.w)
}

#[test]
fn centre_pointer_picks_object_at_origin() {
    let (registry, library) = mesh_scene(&[(1, Vec3::ZERO)]);
    let picker = Picker::new(library);
    let cam = camera(800, 800);
    assert_eq!(
        picker.pick(&registry, &cam, PointerState::new(0.0, 0.0)),
        Some(ObjectId(1))
    );
}

#[test]
fn corner_pointer_misses() {
    let (registry, library) = mesh_scene(&[(1, Vec3::ZERO)]);
    let picker = Picker::new(library);
    let cam = camera(800, 800);
    assert_eq!(
        picker.pick(&registry, &cam, PointerState::new(0.95, 0.95)),
        None
    );
}

#[test]
fn empty_registry_picks_nothing() {
    let registry = Registry::new();
    let picker = Picker::new(GeometryLibrary::new());
    assert_eq!(
        picker.pick(&registry, &camera(100, 100), PointerState::default()),
        None
    );
}

#[test]
fn picking_is_repeatable() {
    let (registry, library) = mesh_scene(&[(1, Vec3::ZERO), (2, Vec3::new(2.5, 0.0, 0.0))]);
    let picker = Picker::new(library);
    let cam = camera(1280, 720);
    let pointer = ndc_of(&cam, Vec3::new(2.5, 0.0, 0.0));
    let first = picker.pick(&registry, &cam, pointer);
    assert_eq!(first, Some(ObjectId(2)));
    for _ in 0..5 {
        assert_eq!(picker.pick(&registry, &cam, pointer), first);
    }
}

#[test]
fn nearest_object_wins() {
    // The one closer to the camera is registered last
    let (registry, library) = mesh_scene(&[(1, Vec3::ZERO), (2, Vec3::new(0.0, 0.0, 2.0))]);
    let picker = Picker::new(library);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let hit = picker.pick_ray(&registry, &ray).unwrap();
    assert_eq!(hit.id, ObjectId(2));
    assert_eq!(hit.index, 1);
    assert!(hit.distance < 3.0);
}

#[test]
fn equal_distance_resolves_to_lower_registry_index() {
    // Same mesh, same place: identical distances. Registration order decides,
    // not the id value.
    let (registry, library) = mesh_scene(&[(7, Vec3::ZERO), (3, Vec3::ZERO)]);
    let picker = Picker::new(library);
    let cam = camera(800, 600);
    assert_eq!(
        picker.pick(&registry, &cam, PointerState::default()),
        Some(ObjectId(7))
    );

    let proxy = Picker::new(ProxySpheres { radius: 0.8 });
    assert_eq!(
        proxy.pick(&registry, &cam, PointerState::default()),
        Some(ObjectId(7))
    );
}

#[test]
fn viewport_resize_changes_what_the_pointer_hits() {
    // At 2:1 the pointer at x = 0.8 lands on world x ~= 6.14 in the z = 0 plane.
    let x = 0.8 * (75.0_f32.to_radians() * 0.5).tan() * 2.0 * 5.0;
    let mut registry = Registry::new();
    registry
        .register(SceneObject::new(
            ObjectId(1),
            artifact_core::GeometryHandle(0),
            Vec3::new(x, 0.0, 0.0),
            info(1),
        ))
        .unwrap();
    let picker = Picker::new(ProxySpheres { radius: 0.8 });
    let pointer = PointerState::new(0.8, 0.0);

    let mut cam = camera(2000, 1000);
    assert_eq!(picker.pick(&registry, &cam, pointer), Some(ObjectId(1)));

    cam.resize(1000, 1000);
    assert_eq!(picker.pick(&registry, &cam, pointer), None);
}

#[test]
fn picked_ids_always_come_from_the_registry() {
    let mut library = GeometryLibrary::new();
    let registry = build_scene(DEFAULT_PROJECTS, &mut library).unwrap();
    let picker = Picker::new(library);
    let cam = camera(1024, 768);
    let mut hits = 0;
    for i in 0..=20 {
        for j in 0..=20 {
            let pointer = PointerState::new(i as f32 / 10.0 - 1.0, j as f32 / 10.0 - 1.0);
            if let Some(id) = picker.pick(&registry, &cam, pointer) {
                assert!(registry.contains(id));
                hits += 1;
            }
        }
    }
    assert!(hits > 0);
}

#[test]
fn group_rotation_moves_pick_targets() {
    let (mut registry, library) = mesh_scene(&[(1, Vec3::new(2.5, 0.0, 0.0))]);
    let picker = Picker::new(library);
    let cam = camera(800, 800);
    let pointer = ndc_of(&cam, Vec3::new(2.5, 0.0, 0.0));
    assert_eq!(picker.pick(&registry, &cam, pointer), Some(ObjectId(1)));

    // Half a turn about Y puts the object on the other side of the ring
    registry.set_group_rotation(Vec3::new(0.0, std::f32::consts::PI, 0.0));
    assert_eq!(picker.pick(&registry, &cam, pointer), None);
}

#[test]
fn ray_starts_at_the_eye() {
    let cam = camera(640, 480);
    let ray = cam.cast_ray(PointerState::new(0.3, -0.4));
    assert_eq!(ray.origin, cam.eye);
    assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    let centre = cam.cast_ray(PointerState::default());
    assert!((centre.direction - Vec3::NEG_Z).length() < 1e-5);
}
