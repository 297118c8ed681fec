//! End-to-end behavior of the viewer controller against a host scene.

use footing_core::{CircularColumnParams, ComplexColumnParams, ModelKind, RectangleColumnParams};
use footing_render_3d::{Scene3D, SceneChange};
use footing_viewer::{ModelParameters, ViewerConfig, ViewerController, ViewerEvent};

fn mounted(kind: ModelKind) -> (Scene3D, ViewerController) {
    let mut scene = Scene3D::new();
    let mut controller = ViewerController::new(kind, ModelParameters::default());
    controller.mount(&mut scene).unwrap();
    (scene, controller)
}

fn expected_primitives(kind: ModelKind) -> usize {
    match kind {
        // slab + 10 columns
        ModelKind::CircularColumns => 11,
        // slab + 2 cuboids + 10 + 8 posts
        ModelKind::ComplexColumn => 21,
        // slab + 3 x 2 posts
        ModelKind::RectangleColumn => 7,
    }
}

#[test]
fn model_switch_leaves_only_new_model_primitives() {
    for from in ModelKind::ALL {
        for to in ModelKind::ALL {
            if from == to {
                continue;
            }
            let (mut scene, mut controller) = mounted(from);
            let old_group = controller.active_group().unwrap().id();
            let old_ids: Vec<_> = controller.active_group().unwrap().primitive_ids().collect();

            controller.select_model(&mut scene, to).unwrap();

            let group = controller.active_group().unwrap();
            assert_eq!(group.kind(), to);
            assert_eq!(scene.objects_in_group(old_group).count(), 0, "{from} -> {to}");
            assert!(old_ids.iter().all(|id| !scene.contains(*id)));
            assert_eq!(scene.object_count(), expected_primitives(to), "{from} -> {to}");
            assert_eq!(scene.object_count(), group.primitive_count());
            assert_eq!(scene.material_count(), 2);
        }
    }
}

#[test]
fn model_switch_disposes_before_creating() {
    let (mut scene, mut controller) = mounted(ModelKind::CircularColumns);
    scene.drain_changes();

    controller.select_model(&mut scene, ModelKind::RectangleColumn).unwrap();
    let changes = scene.drain_changes();

    let last_removal = changes
        .iter()
        .rposition(|c| matches!(c, SceneChange::Removed { .. } | SceneChange::MaterialRemoved { .. }))
        .unwrap();
    let first_addition = changes
        .iter()
        .position(|c| matches!(c, SceneChange::Added { .. } | SceneChange::MaterialAdded { .. }))
        .unwrap();
    assert!(last_removal < first_addition);
}

#[test]
fn rejected_switch_keeps_current_model() {
    let mut scene = Scene3D::new();
    let mut parameters = ModelParameters::default();
    parameters.rectangle.posts_x = 0;
    let mut controller = ViewerController::new(ModelKind::CircularColumns, parameters);
    controller.mount(&mut scene).unwrap();
    let before = controller.active_group().unwrap().snapshot(&scene);

    let err = controller.select_model(&mut scene, ModelKind::RectangleColumn).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(controller.selected(), ModelKind::CircularColumns);
    assert_eq!(controller.active_group().unwrap().snapshot(&scene), before);
}

#[test]
fn repeated_identical_update_is_idempotent() {
    let (mut scene, mut controller) = mounted(ModelKind::ComplexColumn);
    let mut params = ComplexColumnParams::default();
    params.cuboid1.posts_top = 6;
    params.cuboid2_offset_z = -0.4;

    controller.set_complex_params(&mut scene, params.clone()).unwrap();
    let once = controller.active_group().unwrap().snapshot(&scene);
    let ids: Vec<_> = controller.active_group().unwrap().primitive_ids().collect();
    scene.drain_changes();

    controller.set_complex_params(&mut scene, params).unwrap();
    let group = controller.active_group().unwrap();
    assert_eq!(group.snapshot(&scene), once);
    assert_eq!(group.primitive_ids().collect::<Vec<_>>(), ids);
    assert!(scene.drain_changes().is_empty());
}

#[test]
fn finite_toggle_changes_only_slab_extent() {
    let mut scene = Scene3D::new();
    let mut parameters = ModelParameters::default();
    parameters.circular.is_finite_concrete = false;
    let mut controller = ViewerController::new(ModelKind::CircularColumns, parameters);
    controller.mount(&mut scene).unwrap();
    let before = controller.active_group().unwrap().snapshot(&scene);
    scene.drain_changes();

    let finite = CircularColumnParams {
        is_finite_concrete: true,
        ..CircularColumnParams::default()
    };
    controller.set_circular_params(&mut scene, finite).unwrap();

    let group = controller.active_group().unwrap();
    let after = group.snapshot(&scene);
    assert_eq!(before[1..], after[1..]);
    assert_ne!(before[0].kind, after[0].kind);
    assert_eq!(
        scene.drain_changes(),
        vec![SceneChange::Updated { id: group.slab_id().unwrap() }]
    );
}

#[test]
fn post_count_change_adds_and_removes_only_the_difference() {
    let (mut scene, mut controller) = mounted(ModelKind::RectangleColumn);
    scene.drain_changes();

    let params = RectangleColumnParams {
        posts_x: 2,
        ..Default::default()
    };
    controller.set_rectangle_params(&mut scene, params).unwrap();

    let removed = scene
        .drain_changes()
        .into_iter()
        .filter(|c| matches!(c, SceneChange::Removed { .. }))
        .count();
    assert_eq!(removed, 2);
    assert_eq!(scene.object_count(), 5);
}

#[test]
fn unmount_twice_leaves_empty_scene() {
    let (mut scene, mut controller) = mounted(ModelKind::ComplexColumn);

    controller.unmount(&mut scene);
    controller.unmount(&mut scene);

    assert!(!controller.is_mounted());
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.material_count(), 0);
}

#[test]
fn events_drive_the_same_transitions() {
    let config = ViewerConfig::from_json_str(r#"{ "model": "rectangleColumn" }"#).unwrap();
    let mut scene = Scene3D::with_options(config.tessellation());
    let mut controller = ViewerController::new(config.model, config.parameters.clone());
    controller.mount(&mut scene).unwrap();

    let events = vec![
        ViewerEvent::SetRectangle(RectangleColumnParams {
            posts_z: 4,
            ..Default::default()
        }),
        ViewerEvent::SelectModel(ModelKind::CircularColumns),
        ViewerEvent::SetCircular(CircularColumnParams {
            post_count: 3,
            ..Default::default()
        }),
    ];
    for event in events {
        controller.handle(&mut scene, event).unwrap();
    }

    assert_eq!(controller.selected(), ModelKind::CircularColumns);
    assert_eq!(controller.active_group().unwrap().post_ids().len(), 3);
    assert_eq!(scene.object_count(), 4);
    assert_eq!(controller.parameters().rectangle.posts_z, 4);

    controller.handle(&mut scene, ViewerEvent::Unmount).unwrap();
    assert_eq!(scene.object_count(), 0);
}
