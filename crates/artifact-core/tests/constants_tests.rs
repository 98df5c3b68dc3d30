use artifact_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(IDLE_SPIN_PER_FRAME > 0.0);
    assert!(PARTICLE_DRIFT_PER_FRAME > 0.0);
    assert!(HOVER_SPIN_BOOST_PER_FRAME > 0.0);
    assert!(PARALLAX_STRENGTH > 0.0);
    assert!(FOG_DENSITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Hover must read as a boost over the idle state
    assert!(HOVER_SCALE_MULTIPLIER > 1.0);
    assert!(HOVER_SPIN_BOOST_PER_FRAME > IDLE_SPIN_PER_FRAME);
    // Stars drift slower than artifacts spin
    assert!(PARTICLE_DRIFT_PER_FRAME < IDLE_SPIN_PER_FRAME);

    // Camera sits outside the ring and its frustum contains the particle cube
    assert!(CAMERA_Z > RING_RADIUS);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FAR > CAMERA_Z + PARTICLE_SPREAD);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
fn shader_declares_both_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}
