use glam::{Vec3, Vec4};
use portfolio_wasm::camera::PerspectiveCamera;
use portfolio_wasm::config::HeroConfig;
use portfolio_wasm::particles::ParticleField;
use portfolio_wasm::viewport::{Pointer, Viewport};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn resize_updates_aspect_and_projection() {
    let mut camera = PerspectiveCamera::new(75.0, Viewport::new(1920.0, 1080.0), 0.1, 1000.0, 3.0);
    assert!(approx(camera.aspect, 1920.0 / 1080.0));

    camera.resize(Viewport::new(800.0, 600.0));
    assert!(approx(camera.aspect, 800.0 / 600.0));

    let projection = camera.projection();
    let focal = 1.0 / (75.0f32.to_radians() / 2.0).tan();
    assert!(approx(projection.y_axis.y, focal));
    assert!(approx(projection.x_axis.x, focal / (800.0 / 600.0)));
}

#[test]
fn field_resize_reaches_the_camera() {
    let mut field = ParticleField::new(HeroConfig::default(), Viewport::new(1920.0, 1080.0), || 0.5);
    field.resize(Viewport::new(800.0, 600.0));

    assert_eq!(field.viewport(), Viewport::new(800.0, 600.0));
    assert!(approx(field.camera().aspect, 800.0 / 600.0));
}

#[test]
fn camera_sits_on_positive_z_looking_at_origin() {
    let camera = PerspectiveCamera::new(75.0, Viewport::new(800.0, 600.0), 0.1, 1000.0, 3.0);
    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));

    let origin = camera.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(approx(origin.x, 0.0) && approx(origin.y, 0.0));
    assert!(approx(origin.z, -3.0));

    let clip = camera.projection() * origin;
    assert!(approx(clip.x / clip.w, 0.0) && approx(clip.y / clip.w, 0.0));
}

#[test]
fn pointer_offset_spans_half_a_unit_each_way() {
    let viewport = Viewport::new(800.0, 600.0);
    let top_left = Pointer::new(0.0, 0.0).offset_from_center(viewport);
    let center = Pointer::new(400.0, 300.0).offset_from_center(viewport);
    let bottom_right = Pointer::new(800.0, 600.0).offset_from_center(viewport);

    assert_eq!((top_left.x, top_left.y), (-0.5, -0.5));
    assert_eq!((center.x, center.y), (0.0, 0.0));
    assert_eq!((bottom_right.x, bottom_right.y), (0.5, 0.5));
}

#[test]
fn pointer_css_is_literal_pixels() {
    assert_eq!(
        Pointer::new(120.0, 48.5).css(),
        ("120px".to_owned(), "48.5px".to_owned())
    );
}
