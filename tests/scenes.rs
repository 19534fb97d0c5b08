//! Structural checks on the four generated documents.

use lottie_core::audit_document;
use lottie_data::model::{GroupShape, LottieJson, Property, Shape, TransformShape, Vec2};
use neko_lottie::scenes::{build_idle, build_listening, build_sleeping, build_speaking};
use neko_lottie::{to_pretty_json, Scene};

fn all_documents() -> Vec<(Scene, LottieJson)> {
    Scene::ALL.iter().map(|&s| (s, s.build())).collect()
}

/// Top-level group of the main character layer.
fn part<'a>(doc: &'a LottieJson, name: &str) -> &'a GroupShape {
    doc.layers[0]
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Group(g) if g.nm == name => Some(g),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no part named {}", name))
}

fn part_transform<'a>(doc: &'a LottieJson, name: &str) -> &'a TransformShape {
    part(doc, name).transform().expect("group without transform")
}

fn times<T>(prop: &Property<T>) -> Vec<u32> {
    prop.keyframes()
        .expect("expected an animated value")
        .iter()
        .map(|kf| kf.t)
        .collect()
}

fn starts(prop: &Property<Vec2>) -> Vec<Vec2> {
    prop.keyframes().unwrap().iter().map(|kf| kf.s).collect()
}

fn angles(prop: &Property<f64>) -> Vec<f64> {
    prop.keyframes().unwrap().iter().map(|kf| kf.s).collect()
}

fn walk_shapes<'a>(shapes: &'a [Shape], out: &mut Vec<&'a Shape>) {
    for shape in shapes {
        out.push(shape);
        if let Shape::Group(g) = shape {
            walk_shapes(&g.it, out);
        }
    }
}

#[test]
fn test_out_points_match_animation_lengths() {
    let lengths: Vec<u32> = all_documents().iter().map(|(_, d)| d.op).collect();
    assert_eq!(lengths, vec![48, 24, 48, 72]);

    for (scene, doc) in all_documents() {
        assert_eq!(doc.nm, scene.name());
        assert_eq!(doc.ip, 0);
        assert_eq!(doc.fr, 24);
        assert_eq!((doc.w, doc.h), (200, 200));
        assert!(doc.assets.is_empty());
    }
}

#[test]
fn test_documents_pass_structural_audit() {
    for (scene, doc) in all_documents() {
        let violations = audit_document(&doc);
        assert!(
            violations.is_empty(),
            "{} has violations: {:#?}",
            scene,
            violations
        );
    }
}

#[test]
fn test_paths_and_groups_are_well_formed() {
    for (scene, doc) in all_documents() {
        let mut shapes = Vec::new();
        for layer in &doc.layers {
            walk_shapes(&layer.shapes, &mut shapes);
        }

        for shape in shapes {
            match shape {
                Shape::Path(p) => {
                    let bez = p.ks.static_value().unwrap();
                    assert_eq!(bez.i.len(), bez.v.len(), "{}: {}", scene, p.nm);
                    assert_eq!(bez.o.len(), bez.v.len(), "{}: {}", scene, p.nm);
                }
                Shape::Group(g) => {
                    let (last, rest) = g.it.split_last().unwrap();
                    assert!(matches!(last, Shape::Transform(_)), "{}: {}", scene, g.nm);
                    assert!(
                        !rest.iter().any(|s| matches!(s, Shape::Transform(_))),
                        "{}: {}",
                        scene,
                        g.nm
                    );
                    assert_eq!(g.np as usize, g.it.len());
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_builders_are_idempotent() {
    assert_eq!(build_idle(), build_idle());
    assert_eq!(build_speaking(), build_speaking());
    assert_eq!(build_listening(), build_listening());
    assert_eq!(build_sleeping(), build_sleeping());
}

#[test]
fn test_json_round_trip() {
    for (scene, doc) in all_documents() {
        let text = to_pretty_json(&doc).unwrap();
        let parsed: LottieJson = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, doc, "{} changed after a round trip", scene);
        assert_eq!(to_pretty_json(&parsed).unwrap(), text);
    }
}

#[test]
fn test_output_is_two_space_indented_with_stable_order() {
    let text = to_pretty_json(&build_idle()).unwrap();
    assert!(text.starts_with("{\n  \"v\": \"5.7.4\",\n  \"fr\": 24,\n  \"ip\": 0,\n  \"op\": 48,"));
    assert!(text.contains("\"ty\": \"gr\""));
}

#[test]
fn test_parts_are_layered_back_to_front() {
    let doc = build_idle();
    let names: Vec<&str> = doc.layers[0]
        .shapes
        .iter()
        .filter_map(|s| s.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "Body", "Tail", "LeftPaw", "RightPaw", "Head", "LeftEar", "RightEar", "Stripe0",
            "Stripe1", "Stripe2", "LeftEye", "RightEye", "Nose", "Mouth", "LWhisker0",
            "LWhisker1", "LWhisker2", "RWhisker0", "RWhisker1", "RWhisker2", "LeftBlush",
            "RightBlush",
        ]
    );
}

#[test]
fn test_idle_breathing_is_loop_closed() {
    let doc = build_idle();
    let scale = &part_transform(&doc, "Body").s;
    assert_eq!(times(scale), vec![0, 24, 48]);

    let kfs = scale.keyframes().unwrap();
    assert_eq!(kfs[0].s, [100.0, 100.0]);
    assert_eq!(kfs[0].e, Some([100.0, 97.0]));
    assert_eq!(kfs[2].s, [100.0, 100.0]);
}

#[test]
fn test_idle_tail_sway() {
    let doc = build_idle();
    let rotation = &part_transform(&doc, "Tail").r;
    assert_eq!(times(rotation), vec![0, 24, 48]);
    assert_eq!(angles(rotation), vec![-5.0, 5.0, -5.0]);
    assert!(rotation.keyframes().unwrap()[2].e.is_none());
}

#[test]
fn test_idle_blink_and_ear_twitch() {
    let doc = build_idle();

    let eye_scale = &part_transform(&doc, "LeftEye").s;
    assert_eq!(times(eye_scale), vec![30, 32, 34]);
    assert_eq!(starts(eye_scale)[1], [100.0, 10.0]);

    let ear_rotation = &part_transform(&doc, "LeftEar").r;
    assert_eq!(times(ear_rotation), vec![0, 36, 40, 48]);
    assert_eq!(ear_rotation.keyframes().unwrap()[1].e, Some(-4.0));

    assert!(!part_transform(&doc, "RightEar").r.is_animated());
}

#[test]
fn test_speaking_mouth_opens_and_closes() {
    let doc = build_speaking();
    let scale = &part_transform(&doc, "OpenMouth").s;

    assert_eq!(times(scale), vec![0, 6, 12, 18, 24]);
    assert_eq!(
        starts(scale),
        vec![
            [100.0, 0.0],
            [100.0, 100.0],
            [100.0, 0.0],
            [100.0, 100.0],
            [100.0, 0.0]
        ]
    );
    assert!(scale.keyframes().unwrap()[4].e.is_none());
}

#[test]
fn test_speaking_bounce_and_squint() {
    let doc = build_speaking();

    let pos = &part_transform(&doc, "Body").p;
    assert_eq!(times(pos), vec![0, 6, 12, 18, 24]);
    assert_eq!(starts(pos)[1], [100.0, 128.0]);

    assert_eq!(
        part_transform(&doc, "RightEye").s,
        Property::Static([100.0, 80.0])
    );
    assert!(doc.layers[0]
        .shapes
        .iter()
        .all(|s| s.name() != Some("Mouth")));
}

#[test]
fn test_speaking_tail_wag() {
    let doc = build_speaking();
    let rotation = &part_transform(&doc, "Tail").r;
    assert_eq!(times(rotation), vec![0, 12, 24]);
    assert_eq!(angles(rotation), vec![-10.0, 10.0, -10.0]);
}

#[test]
fn test_listening_breathing_and_tail() {
    let doc = build_listening();

    let scale = &part_transform(&doc, "Body").s;
    assert_eq!(times(scale), vec![0, 24, 48]);
    assert_eq!(
        starts(scale),
        vec![[100.0, 100.0], [100.0, 98.0], [100.0, 100.0]]
    );

    let rotation = &part_transform(&doc, "Tail").r;
    assert_eq!(times(rotation), vec![0, 24, 48]);
    assert_eq!(angles(rotation), vec![-3.0, 3.0, -3.0]);
}

#[test]
fn test_listening_ear_lift_and_eye_widening() {
    let doc = build_listening();

    let ear_pos = part_transform(&doc, "RightEar").p.keyframes().unwrap();
    let at_24 = ear_pos.iter().find(|kf| kf.t == 24).unwrap();
    assert_eq!(at_24.s, [0.0, -5.0]);
    let last = ear_pos.last().unwrap();
    assert_eq!((last.t, last.s), (48, [0.0, 0.0]));

    let left = &part_transform(&doc, "LeftEye").s;
    let right = &part_transform(&doc, "RightEye").s;
    assert_eq!(left, right);
    assert_eq!(left.keyframes().unwrap()[0].e, Some([120.0, 120.0]));
    assert_eq!(times(left), times(&part_transform(&doc, "RightEar").p));
}

#[test]
fn test_listening_head_tilt_quarters() {
    let doc = build_listening();
    let rotation = &part_transform(&doc, "Head").r;
    assert_eq!(times(rotation), vec![0, 12, 24, 36, 48]);
    assert_eq!(angles(rotation), vec![0.0, 3.0, 0.0, -3.0, 0.0]);
}

#[test]
fn test_sleeping_z_layers_are_staggered() {
    let doc = build_sleeping();
    assert_eq!(doc.layers.len(), 4);

    let z_layers = &doc.layers[1..];
    let indices: Vec<u32> = z_layers.iter().map(|l| l.ind).collect();
    assert_eq!(indices, vec![2, 3, 4]);

    let schedules: Vec<Vec<u32>> = z_layers.iter().map(|l| times(&l.ks.o)).collect();
    assert_eq!(schedules, vec![vec![0, 48], vec![10, 58], vec![20, 68]]);

    for (i, layer) in z_layers.iter().enumerate() {
        assert_eq!(layer.nm, format!("Zzz{}", i));
        assert_eq!((layer.ip, layer.op), (0, 72));
        assert_eq!(times(&layer.ks.p), times(&layer.ks.o));
        assert_eq!(times(&layer.ks.s), times(&layer.ks.o));

        let scale = layer.ks.s.keyframes().unwrap();
        let grow = 60.0 + 15.0 * i as f64;
        assert_eq!(scale[0].s, [grow, grow, 100.0]);
        assert_eq!(scale[1].s, [grow + 40.0, grow + 40.0, 100.0]);

        let opacity = layer.ks.o.keyframes().unwrap();
        assert_eq!((opacity[0].s, opacity[1].s), (100.0, 0.0));
    }
}

#[test]
fn test_sleeping_body_breathes_slowly() {
    let doc = build_sleeping();
    let body = part_transform(&doc, "Body");

    assert_eq!(times(&body.p), vec![0, 36, 72]);
    assert_eq!(
        starts(&body.p),
        vec![[100.0, 130.0], [100.0, 131.0], [100.0, 130.0]]
    );

    assert_eq!(times(&body.s), vec![0, 36, 72]);
    assert_eq!(
        starts(&body.s),
        vec![[100.0, 100.0], [100.0, 95.0], [100.0, 100.0]]
    );

    let rotation = &part_transform(&doc, "Tail").r;
    assert_eq!(times(rotation), vec![0, 36, 72]);
    assert_eq!(angles(rotation), vec![-2.0, 2.0, -2.0]);
}

#[test]
fn test_sleeping_uses_closed_eyes() {
    let doc = build_sleeping();
    let names: Vec<&str> = doc.layers[0]
        .shapes
        .iter()
        .filter_map(|s| s.name())
        .collect();
    assert!(names.contains(&"LeftClosedEye"));
    assert!(names.contains(&"RightClosedEye"));
    assert!(!names.contains(&"LeftEye"));

    let head = &part_transform(&doc, "Head").p;
    assert_eq!(starts(head), vec![[100.0, 80.0], [100.0, 83.0], [100.0, 80.0]]);
}
