use super::{oscillate, Cat, Scene};
use crate::palette::SLEEP_BLUE;
use crate::parts::{self, TAIL_POS};
use lottie_core::{
    animated_val, document, ease_to, group, path, rest, shape_layer, stroke, Transform,
};
use lottie_data::model::{Layer, LottieJson};

/// Frames each floating "Z" takes to rise and fade, independent of its start.
pub const Z_DURATION: u32 = 48;
/// Start frame and x position of each "Z".
const Z_GLYPHS: [(u32, f64); 3] = [(0, 135.0), (10, 145.0), (20, 155.0)];

/// Sleeping loop: slow breathing with a drooping head, closed eyes and a
/// trail of "Z"s drifting up.
pub fn build_sleeping() -> LottieJson {
    let op = Scene::Sleeping.out_point();

    let body_tr = Transform::new()
        .position(oscillate([100.0, 130.0], [100.0, 131.0], 36, 2))
        .scale(oscillate([100.0, 100.0], [100.0, 95.0], 36, 2))
        .build();

    let tail_tr = Transform::new()
        .position(TAIL_POS)
        .rotation(oscillate(-2.0, 2.0, 36, 2))
        .build();

    let head_tr = Transform::new()
        .position(oscillate([100.0, 80.0], [100.0, 83.0], 36, 2))
        .build();

    let cat = Cat {
        body: parts::body(Some(body_tr)),
        tail: parts::tail(Some(tail_tr)),
        head: parts::head(Some(head_tr)),
        ears: parts::ears(None, None),
        eyes: parts::closed_eyes(),
        mouth: parts::mouth_w(),
    };

    let mut layers = vec![shape_layer("CatSleeping", 1, cat.into_shapes())
        .position([100.0, 100.0, 0.0])
        .frames(0, op)
        .build()];
    layers.extend(
        Z_GLYPHS
            .iter()
            .enumerate()
            .map(|(i, &(start, x))| z_layer(i as u32, start, x, op)),
    );

    document(Scene::Sleeping.name(), op, layers)
}

/// One "Z" glyph layer. Its schedule always runs `Z_DURATION` frames from
/// `start`, even past the document's out-point.
fn z_layer(i: u32, start: u32, x: f64, op: u32) -> Layer {
    let end = start + Z_DURATION;
    let from = 60.0 + i as f64 * 15.0;
    let to = 100.0 + i as f64 * 15.0;

    let glyph = group(
        &format!("Z{}", i),
        vec![
            path(
                &format!("Z{}Path", i),
                vec![[-4.0, -4.0], [4.0, -4.0], [-4.0, 4.0], [4.0, 4.0]],
                None,
                None,
                false,
            ),
            stroke(&format!("Z{}Stroke", i), SLEEP_BLUE, 1.5, 100.0),
        ],
        None,
    );

    shape_layer(&format!("Zzz{}", i), i + 2, vec![glyph])
        .position(animated_val(vec![
            ease_to(start, [x, 60.0, 0.0], [x, 30.0, 0.0]),
            rest(end, [x, 30.0, 0.0]),
        ]))
        .opacity(animated_val(vec![ease_to(start, 100.0, 0.0), rest(end, 0.0)]))
        .scale(animated_val(vec![
            ease_to(start, [from, from, 100.0], [to, to, 100.0]),
            rest(end, [to, to, 100.0]),
        ]))
        .frames(0, op)
        .build()
}
