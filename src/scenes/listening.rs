use super::{oscillate, Cat, Scene};
use crate::parts::{self, BODY_POS, HEAD_POS, TAIL_POS};
use lottie_core::{animated_val, document, ease_to, rest, shape_layer, Transform};
use lottie_data::model::LottieJson;

/// Attentive loop: head tilts side to side, right ear perks up, eyes widen.
pub fn build_listening() -> LottieJson {
    let op = Scene::Listening.out_point();

    let body_tr = Transform::new()
        .position(BODY_POS)
        .scale(oscillate([100.0, 100.0], [100.0, 98.0], 24, 2))
        .build();

    let tail_tr = Transform::new()
        .position(TAIL_POS)
        .rotation(oscillate(-3.0, 3.0, 24, 2))
        .build();

    let head_tr = Transform::new()
        .position(HEAD_POS)
        .rotation(animated_val(vec![
            ease_to(0, 0.0, 3.0),
            ease_to(12, 3.0, 0.0),
            ease_to(24, 0.0, -3.0),
            ease_to(36, -3.0, 0.0),
            rest(48, 0.0),
        ]))
        .build();

    // The ear lift and the eye widening share the same 24-frame phase.
    let right_ear_tr = Transform::new()
        .position(oscillate([0.0, 0.0], [0.0, -5.0], 24, 2))
        .build();
    let eye_scale = oscillate([100.0, 100.0], [120.0, 120.0], 24, 2);

    let cat = Cat {
        body: parts::body(Some(body_tr)),
        tail: parts::tail(Some(tail_tr)),
        head: parts::head(Some(head_tr)),
        ears: parts::ears(None, Some(right_ear_tr)),
        eyes: parts::eyes_scaled(eye_scale),
        mouth: parts::mouth_w(),
    };

    let layer = shape_layer("CatListening", 1, cat.into_shapes())
        .position([100.0, 100.0, 0.0])
        .frames(0, op)
        .build();
    document(Scene::Listening.name(), op, vec![layer])
}
