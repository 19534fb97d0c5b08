use super::{oscillate, Cat, Scene};
use crate::parts::{self, TAIL_POS};
use lottie_core::{document, shape_layer, Transform};
use lottie_data::model::LottieJson;

/// Talking loop: bouncing body, quick tail wag, mouth opening four times.
pub fn build_speaking() -> LottieJson {
    let op = Scene::Speaking.out_point();

    let body_tr = Transform::new()
        .position(oscillate([100.0, 130.0], [100.0, 128.0], 6, 4))
        .build();

    let tail_tr = Transform::new()
        .position(TAIL_POS)
        .rotation(oscillate(-10.0, 10.0, 12, 2))
        .build();

    let mouth_scale = oscillate([100.0, 0.0], [100.0, 100.0], 6, 4);

    let cat = Cat {
        body: parts::body(Some(body_tr)),
        tail: parts::tail(Some(tail_tr)),
        head: parts::head(None),
        ears: parts::ears(None, None),
        eyes: parts::eyes_normal(&[], true),
        mouth: parts::open_mouth(Some(mouth_scale)),
    };

    let layer = shape_layer("CatSpeaking", 1, cat.into_shapes())
        .position([100.0, 100.0, 0.0])
        .frames(0, op)
        .build();
    document(Scene::Speaking.name(), op, vec![layer])
}
