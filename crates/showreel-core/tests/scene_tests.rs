// Host-side scenario tests for the assembled scene.

use glam::{Vec2, Vec3};
use showreel_core::picking::pick;
use showreel_core::{
    default_catalog, HoverEvent, OrientationMode, Scene, SceneConfig, SceneError, TextureProvider,
    TextureState, TEXTURE_RETRY_SECS,
};

fn still_config() -> SceneConfig {
    let mut config = SceneConfig::curated();
    config.controls.auto_rotate = false;
    config
}

fn curated_scene() -> Scene {
    let mut scene = Scene::new(still_config(), &default_catalog()).unwrap();
    scene.resize(1280, 720);
    scene.tick(0.0);
    scene
}

/// Turn the camera so it looks straight at `point`.
fn face(scene: &mut Scene, point: Vec3) {
    let d = (point - scene.camera().eye).normalize();
    let yaw = (-d.x).atan2(-d.z);
    let pitch = (-d.y).asin();
    let (cur_yaw, cur_pitch) = (scene.rig().yaw(), scene.rig().pitch());
    scene.rig_mut().rotate_by(yaw - cur_yaw, pitch - cur_pitch);
}

fn screen_point_of(scene: &Scene, item: usize) -> Vec2 {
    scene
        .camera()
        .project(scene.items()[item].group.position)
        .expect("item in front of camera")
}

#[test]
fn scene_builds_one_entry_per_item() {
    let scene = curated_scene();
    assert_eq!(scene.items().len(), 5);
    assert_eq!(scene.candidates().len(), 5);
    for (i, item) in scene.items().iter().enumerate() {
        assert_eq!(item.id, i);
        assert_eq!(scene.candidates()[i].item, i);
    }
    assert_eq!(scene.items()[0].meta.client, "Delimobil");
    assert_eq!(scene.items()[4].meta.client, "T-Bank");
}

#[test]
fn pointer_over_item_three_picks_it_and_half_turn_loses_it() {
    let mut scene = curated_scene();
    let target = scene.items()[3].group.position;
    face(&mut scene, target);
    let ndc = screen_point_of(&scene, 3);
    assert!(ndc.length() < 0.05, "facing the item should center it: {ndc:?}");

    scene.set_pointer(ndc);
    let report = scene.tick(0.0);
    assert_eq!(report.hover_events.as_slice(), &[HoverEvent::Enter(3)]);
    assert_eq!(scene.hovered(), Some(3));

    scene.rig_mut().rotate_by(std::f32::consts::PI, 0.0);
    let report = scene.tick(0.0);
    assert_ne!(scene.hovered(), Some(3), "item 3 is now behind the camera");
    assert_eq!(report.hover_events.first(), Some(&HoverEvent::Leave(3)));
}

#[test]
fn moving_off_all_items_fires_single_leave() {
    let mut scene = curated_scene();
    let target = scene.items()[2].group.position;
    face(&mut scene, target);
    scene.set_pointer(screen_point_of(&scene, 2));
    let report = scene.tick(0.0);
    assert_eq!(report.hover_events.as_slice(), &[HoverEvent::Enter(2)]);

    let empty = Vec2::new(0.0, 0.95);
    assert!(pick(empty, scene.camera(), scene.candidates()).is_none());
    scene.set_pointer(empty);
    let report = scene.tick(0.0);
    assert_eq!(report.hover_events.as_slice(), &[HoverEvent::Leave(2)]);
    assert_eq!(report.hovered, None);
}

#[test]
fn switching_items_in_one_tick_leaves_before_entering() {
    let mut scene = curated_scene();
    let first = scene.items()[1].group.position;
    face(&mut scene, first);
    scene.set_pointer(screen_point_of(&scene, 1));
    assert_eq!(scene.tick(0.0).hover_events.as_slice(), &[HoverEvent::Enter(1)]);

    let second = scene.items()[3].group.position;
    face(&mut scene, second);
    scene.set_pointer(screen_point_of(&scene, 3));
    let report = scene.tick(0.0);
    assert_eq!(
        report.hover_events.as_slice(),
        &[HoverEvent::Leave(1), HoverEvent::Enter(3)]
    );
    assert_eq!(report.hovered, Some(3));
    assert_eq!(scene.feedback().cursor(), showreel_core::Cursor::Pointer);
}

#[test]
fn repeated_ticks_on_same_item_fire_no_events() {
    let mut scene = curated_scene();
    let target = scene.items()[0].group.position;
    face(&mut scene, target);
    scene.set_pointer(screen_point_of(&scene, 0));
    assert_eq!(scene.tick(0.0).hover_events.len(), 1);
    for _ in 0..5 {
        assert!(scene.tick(0.0).hover_events.is_empty());
    }
}

#[test]
fn click_on_item_activates_with_metadata() {
    let mut scene = curated_scene();
    let target = scene.items()[1].group.position;
    face(&mut scene, target);
    let ndc = screen_point_of(&scene, 1);
    let activation = scene.click(ndc).expect("click lands on item 1");
    assert_eq!(activation.item, 1);
    assert_eq!(activation.meta.client, "Fonbet KZ");
    assert_eq!(activation.meta.subtitle, "KHL moments");
}

#[test]
fn click_on_empty_space_activates_nothing() {
    let mut scene = curated_scene();
    // Default view looks down -Z, below the curated band.
    let ndc = Vec2::new(0.0, -0.9);
    assert!(pick(ndc, scene.camera(), scene.candidates()).is_none());
    assert!(scene.click(ndc).is_none());
}

#[test]
fn empty_scene_never_picks() {
    let mut config = SceneConfig::uniform(0);
    config.ambient.dust = None;
    let mut scene = Scene::new(config, &default_catalog()).unwrap();
    scene.set_pointer(Vec2::ZERO);
    let report = scene.tick(0.1);
    assert!(report.hover_events.is_empty());
    assert!(scene.click(Vec2::ZERO).is_none());
}

#[test]
fn hover_grows_item_and_leave_restores_it() {
    let mut scene = curated_scene();
    let target = scene.items()[4].group.position;
    face(&mut scene, target);
    scene.set_pointer(screen_point_of(&scene, 4));
    scene.tick(0.0);
    let mut t = 0.0;
    for _ in 0..60 {
        t += 1.0 / 60.0;
        scene.tick(t);
    }
    let style = scene.config.feedback;
    let item = &scene.items()[4];
    assert!((item.group.scale - style.hover_scale).abs() < 1e-4);
    assert!((item.ring.opacity - style.ring_hover_opacity).abs() < 1e-4);
    assert!(scene.feedback().tweens().is_empty());

    scene.clear_pointer();
    scene.tick(t + 0.01);
    for _ in 0..60 {
        t += 1.0 / 60.0;
        scene.tick(t + 0.01);
    }
    let item = &scene.items()[4];
    assert!((item.group.scale - style.rest_scale).abs() < 1e-4);
    assert!((item.ring.opacity - style.ring_rest_opacity).abs() < 1e-4);
}

#[test]
fn items_bob_around_their_base_height() {
    let mut scene = curated_scene();
    let amplitude = scene.config.motion.amplitude;
    for i in 0..50 {
        scene.tick(i as f32 * 0.3);
        for item in scene.items() {
            let dy = item.group.position.y - item.base_position.y;
            assert!(dy.abs() <= amplitude + 1e-5);
            assert_eq!(item.group.position.x, item.base_position.x);
            assert_eq!(item.group.position.z, item.base_position.z);
        }
    }
}

#[test]
fn rings_face_camera_and_labels_hang_below() {
    let mut scene = curated_scene();
    scene.rig_mut().rotate_by(0.7, 0.3);
    scene.tick(1.0);
    let eye = scene.camera().eye;
    let up = scene.camera().up_world();
    let offset = scene.config.decoration.label_offset();
    for item in scene.items() {
        let to_camera = (eye - item.group.position).normalize();
        let ring_z = item.ring.rotation * Vec3::Z;
        assert!(ring_z.dot(to_camera) > 0.999, "ring not facing camera");

        let expected = item.group.position - up * offset;
        assert!(item.label.position.distance(expected) < 1e-4);
    }
}

#[test]
fn decorations_only_mode_keeps_group_rotation() {
    let mut config = still_config();
    config.orientation = OrientationMode::DecorationsOnly;
    let mut scene = Scene::new(config, &default_catalog()).unwrap();
    scene.tick(0.5);
    for item in scene.items() {
        assert_eq!(item.group.rotation, glam::Quat::IDENTITY);
    }
}

#[test]
fn auto_rotate_toggle_controls_yaw() {
    let mut scene = Scene::new(SceneConfig::curated(), &default_catalog()).unwrap();
    scene.tick(0.0);
    let yaw0 = scene.rig().yaw();
    scene.tick(1.0);
    assert!((scene.rig().yaw() - yaw0).abs() > 1e-4, "auto-rotate moves the view");

    scene.set_auto_rotate(false);
    let yaw1 = scene.rig().yaw();
    scene.tick(2.0);
    assert!((scene.rig().yaw() - yaw1).abs() < 1e-6);
    scene.set_auto_rotate(true);
    assert!(scene.rig().auto_rotate());
}

#[test]
fn camera_stays_at_the_origin() {
    let mut scene = Scene::new(SceneConfig::curated(), &default_catalog()).unwrap();
    scene.drag(300.0, -120.0);
    for i in 0..120 {
        scene.tick(i as f32 / 60.0);
        assert!(scene.camera().eye.length() < 0.05);
    }
}

#[test]
fn resize_updates_aspect() {
    let mut scene = curated_scene();
    scene.resize(1000, 500);
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
    scene.resize(640, 0);
    assert!(scene.camera().aspect.is_finite());
}

#[test]
fn golden_variant_places_requested_count() {
    let scene = Scene::new(SceneConfig::uniform(12), &default_catalog()).unwrap();
    assert_eq!(scene.items().len(), 12);
    assert_eq!(scene.items()[5].meta.client, "Delimobil #2");
}

#[test]
fn curated_variant_rejects_too_many_items() {
    let mut config = SceneConfig::curated();
    config.item_count = 8;
    let err = Scene::new(config, &default_catalog()).err().unwrap();
    assert!(matches!(err, SceneError::PresetTableTooShort { .. }));
}

#[test]
fn empty_catalog_is_rejected() {
    let err = Scene::new(SceneConfig::curated(), &[]).err().unwrap();
    assert_eq!(err, SceneError::EmptyCatalog { requested: 5 });
}

#[test]
fn ambient_is_reproducible_per_seed() {
    let a = Scene::new(SceneConfig::curated(), &default_catalog()).unwrap();
    let b = Scene::new(SceneConfig::curated(), &default_catalog()).unwrap();
    assert_eq!(a.ambient().star_count(), 2700);
    let sa = &a.ambient().stars[0].stars[17];
    let sb = &b.ambient().stars[0].stars[17];
    assert_eq!(sa, sb);
}

struct RefuseFirst {
    attempts: Vec<usize>,
}

impl TextureProvider for RefuseFirst {
    fn try_start(&mut self, item: usize, _source: &str) -> bool {
        self.attempts.push(item);
        item != 0
    }
}

#[test]
fn blocked_texture_is_local_and_retried_later() {
    let mut scene = curated_scene();
    let mut provider = RefuseFirst {
        attempts: Vec::new(),
    };
    scene.service_textures(&mut provider);
    assert_eq!(provider.attempts, vec![0, 1, 2, 3, 4]);
    assert!(matches!(
        scene.items()[0].texture.state,
        TextureState::Blocked { .. }
    ));
    for item in &scene.items()[1..] {
        assert!(item.texture.is_live());
    }

    provider.attempts.clear();
    scene.service_textures(&mut provider);
    assert!(provider.attempts.is_empty(), "retry waits for the delay");

    scene.tick(TEXTURE_RETRY_SECS + 0.1);
    scene.service_textures(&mut provider);
    assert_eq!(provider.attempts, vec![0]);
}

#[test]
fn click_lifts_texture_block_immediately() {
    let mut scene = curated_scene();
    let mut provider = RefuseFirst {
        attempts: Vec::new(),
    };
    scene.service_textures(&mut provider);
    provider.attempts.clear();
    scene.click(Vec2::new(0.0, -0.9));
    scene.service_textures(&mut provider);
    assert_eq!(provider.attempts, vec![0]);
}

#[test]
fn ambient_follows_the_clock() {
    let mut scene = curated_scene();
    let before = scene.ambient().dust.as_ref().unwrap().particles[0].position;
    scene.tick(3.0);
    let ambient = scene.ambient();
    let planet = ambient.planet.expect("planet enabled by default");
    assert_eq!(planet.uniforms.time, 3.0);
    assert_eq!(planet.uniforms.camera_pos, scene.camera().eye);
    let dust = ambient.dust.as_ref().unwrap();
    assert_ne!(dust.particles[0].position, before);
    assert!(ambient.stars[0].stars.iter().all(|s| {
        let k = s.twinkle(3.0);
        (0.0..=1.0).contains(&k)
    }));
}
