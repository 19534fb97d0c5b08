use super::{oscillate, Cat, Scene};
use crate::parts::{self, BODY_POS, TAIL_POS};
use lottie_core::{animated_val, document, ease_to, keyframe, rest, shape_layer, Transform};
use lottie_data::model::LottieJson;

/// Resting loop: slow breathing, lazy tail, one ear twitch and one blink.
pub fn build_idle() -> LottieJson {
    let op = Scene::Idle.out_point();

    let body_tr = Transform::new()
        .position(BODY_POS)
        .scale(oscillate([100.0, 100.0], [100.0, 97.0], 24, 2))
        .build();

    let tail_tr = Transform::new()
        .position(TAIL_POS)
        .rotation(oscillate(-5.0, 5.0, 24, 2))
        .build();

    // Left ear stays put until the twitch at 36..40.
    let left_ear_tr = Transform::new()
        .rotation(animated_val(vec![
            keyframe(0, 0.0, Some(0.0), false),
            ease_to(36, 0.0, -4.0),
            ease_to(40, -4.0, 0.0),
            rest(48, 0.0),
        ]))
        .build();

    let cat = Cat {
        body: parts::body(Some(body_tr)),
        tail: parts::tail(Some(tail_tr)),
        head: parts::head(None),
        ears: parts::ears(Some(left_ear_tr), None),
        eyes: parts::eyes_normal(&[(30, 34)], false),
        mouth: parts::mouth_w(),
    };

    let layer = shape_layer("CatIdle", 1, cat.into_shapes())
        .position([100.0, 100.0, 0.0])
        .frames(0, op)
        .build();
    document(Scene::Idle.name(), op, vec![layer])
}
