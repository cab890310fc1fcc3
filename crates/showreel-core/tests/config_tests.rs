// Host-side tests for configuration values and their relationships.

use showreel_core::catalog::{default_catalog, expand, ExternalContent};
use showreel_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(HOVER_SCALE > REST_SCALE);
    assert!(RING_HOVER_OPACITY > RING_REST_OPACITY);
    assert!(RING_REST_OPACITY > RING_INITIAL_OPACITY);
    assert!(RING_OUTER_MULT > RING_INNER_MULT && RING_INNER_MULT > 1.0);
    assert!(CAMERA_EYE_OFFSET < CAMERA_ZNEAR);
    assert!(PLANET_CENTER.y + PLANET_RADIUS < 0.0, "viewer must sit above the planet");
    assert!(ORBIT_DISTANCE * HEMISPHERE_HEIGHT_SCALE > BOB_AMPLITUDE + SPHERE_RADIUS);
}

#[test]
fn default_config_is_the_curated_scene() {
    let config = SceneConfig::default();
    assert_eq!(config.item_count, 5);
    assert!(matches!(config.layout, LayoutStrategy::Curated { .. }));
    assert_eq!(config.orientation, OrientationMode::WholeGroup);
    assert!(config.validate().is_ok());
}

#[test]
fn uniform_config_validates_for_any_count() {
    for n in [0, 1, 2, 40] {
        assert!(SceneConfig::uniform(n).validate().is_ok(), "n={n}");
    }
}

#[test]
fn validation_rejects_bad_values() {
    let mut c = SceneConfig::curated();
    c.motion.speed = 0.0;
    assert!(matches!(
        c.validate(),
        Err(SceneError::InvalidConfig {
            field: "motion.speed",
            ..
        })
    ));

    let mut c = SceneConfig::curated();
    c.feedback.scale_duration = -1.0;
    assert!(c.validate().is_err());

    let mut c = SceneConfig::curated();
    c.feedback.ring_hover_opacity = 1.5;
    assert!(c.validate().is_err());

    let mut c = SceneConfig::curated();
    c.decoration.ring_outer_mult = c.decoration.ring_inner_mult;
    assert!(c.validate().is_err());

    let mut c = SceneConfig::curated();
    c.motion.amplitude = f32::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn error_messages_name_the_field() {
    let mut c = SceneConfig::curated();
    c.decoration.sphere_radius = -2.0;
    let msg = c.validate().unwrap_err().to_string();
    assert!(msg.contains("decoration.sphere_radius"), "{msg}");
}

#[test]
fn catalog_entries_carry_detail_content() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 5);
    for meta in &catalog {
        assert!(meta.preview.is_some());
        assert!(matches!(meta.content, Some(ExternalContent::Video { .. })));
    }
}

#[test]
fn expand_cycles_with_numbered_names() {
    let catalog = default_catalog();
    let metas = expand(&catalog, 11);
    assert_eq!(metas.len(), 11);
    assert_eq!(metas[0].client, "Delimobil");
    assert_eq!(metas[5].client, "Delimobil #2");
    assert_eq!(metas[10].client, "Delimobil #3");
    assert!(expand(&[], 3).is_empty());
}

#[test]
fn overrides_select_the_variant() {
    let c = SceneConfig::from_overrides(None, None).unwrap();
    assert!(matches!(c.layout, LayoutStrategy::Curated { .. }));

    let c = SceneConfig::from_overrides(Some(" Golden "), Some("9")).unwrap();
    assert!(matches!(c.layout, LayoutStrategy::GoldenAngle { .. }));
    assert_eq!(c.item_count, 9);

    let c = SceneConfig::from_overrides(Some("golden"), None).unwrap();
    assert_eq!(c.item_count, 5);
}

#[test]
fn overrides_reject_garbage() {
    assert!(matches!(
        SceneConfig::from_overrides(Some("spiral"), None),
        Err(SceneError::InvalidConfig { field: "layout", .. })
    ));
    assert!(matches!(
        SceneConfig::from_overrides(Some("golden"), Some("many")),
        Err(SceneError::InvalidConfig { field: "item_count", .. })
    ));
}
