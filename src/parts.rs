//! Character parts, each a group (or a short list of groups) in canvas space.
//!
//! Every part with a movable pose takes an optional transform override. When
//! it is `None` the part sits at its default pose.

use crate::palette::{
    BLACK, BLUSH, DARK_ORANGE, MOUTH_RED, ORANGE, PINK_INNER, PINK_NOSE, WHITE,
};
use lottie_core::{
    animated_val, ease_to, ellipse, fill, group, keyframe, path, rest, stroke, transform,
    Transform,
};
use lottie_data::model::{Keyframe, Property, Shape, TransformShape, Vec2};

pub const BODY_POS: Vec2 = [100.0, 130.0];
pub const TAIL_POS: Vec2 = [140.0, 150.0];
pub const HEAD_POS: Vec2 = [100.0, 80.0];

const EYE_Y: f64 = 78.0;
const EYES: [(&str, f64); 2] = [("LeftEye", 88.0), ("RightEye", 112.0)];

/// Vertical scale of an eye at the bottom of a blink, in percent.
const BLINK_SCALE: f64 = 10.0;
const SQUINT_SCALE: f64 = 80.0;

fn placed(pos: Vec2) -> TransformShape {
    Transform::new().position(pos).build()
}

pub fn body(tr: Option<TransformShape>) -> Shape {
    group(
        "Body",
        vec![
            ellipse("BodyShape", [0.0, 0.0], [90.0, 75.0]),
            fill("BodyFill", ORANGE, 100.0),
        ],
        Some(tr.unwrap_or_else(|| placed(BODY_POS))),
    )
}

/// Curved tail on the right side.
pub fn tail(tr: Option<TransformShape>) -> Shape {
    group(
        "Tail",
        vec![
            path(
                "TailPath",
                vec![[0.0, 0.0], [15.0, -10.0], [30.0, -25.0], [25.0, -40.0]],
                Some(vec![[0.0, 0.0], [-5.0, 5.0], [-5.0, 5.0], [5.0, 5.0]]),
                Some(vec![[5.0, -5.0], [5.0, -5.0], [5.0, -5.0], [0.0, 0.0]]),
                false,
            ),
            stroke("TailStroke", ORANGE, 8.0, 100.0),
        ],
        Some(tr.unwrap_or_else(|| placed(TAIL_POS))),
    )
}

pub fn head(tr: Option<TransformShape>) -> Shape {
    group(
        "Head",
        vec![
            ellipse("HeadShape", [0.0, 0.0], [70.0, 65.0]),
            fill("HeadFill", ORANGE, 100.0),
        ],
        Some(tr.unwrap_or_else(|| placed(HEAD_POS))),
    )
}

struct EarGeometry {
    cx: f64,
    tip_y: f64,
    base_left: f64,
    base_right: f64,
    base_y: f64,
}

/// Triangle ear with a smaller pink triangle inside.
fn ear(name: &str, geo: EarGeometry, tr: Option<TransformShape>) -> Shape {
    let EarGeometry {
        cx,
        tip_y,
        base_left,
        base_right,
        base_y,
    } = geo;

    let outer = group(
        &format!("{}Outer", name),
        vec![
            path(
                &format!("{}OuterPath", name),
                vec![[cx, tip_y], [base_left, base_y], [base_right, base_y]],
                None,
                None,
                true,
            ),
            fill(&format!("{}OuterFill", name), ORANGE, 100.0),
        ],
        None,
    );
    let inner = group(
        &format!("{}Inner", name),
        vec![
            path(
                &format!("{}InnerPath", name),
                vec![
                    [cx, tip_y + 6.0],
                    [(base_left + cx) / 2.0 + 1.0, base_y - 3.0],
                    [(base_right + cx) / 2.0 - 1.0, base_y - 3.0],
                ],
                None,
                None,
                true,
            ),
            fill(&format!("{}InnerFill", name), PINK_INNER, 100.0),
        ],
        None,
    );
    group(name, vec![outer, inner], tr)
}

/// Left and right ears. Overrides replace each ear's own transform.
pub fn ears(left: Option<TransformShape>, right: Option<TransformShape>) -> Vec<Shape> {
    vec![
        ear(
            "LeftEar",
            EarGeometry {
                cx: 75.0,
                tip_y: 38.0,
                base_left: 62.0,
                base_right: 88.0,
                base_y: 62.0,
            },
            left,
        ),
        ear(
            "RightEar",
            EarGeometry {
                cx: 125.0,
                tip_y: 38.0,
                base_left: 112.0,
                base_right: 138.0,
                base_y: 62.0,
            },
            right,
        ),
    ]
}

/// Black pupil with a white highlight. `scale` drives the whole eye.
pub fn eye(name: &str, cx: f64, cy: f64, scale: Option<Property<Vec2>>) -> Shape {
    let pupil = group(
        &format!("{}Pupil", name),
        vec![
            ellipse(&format!("{}EllShape", name), [0.0, 0.0], [8.0, 10.0]),
            fill(&format!("{}Fill", name), BLACK, 100.0),
        ],
        Some(placed([cx, cy])),
    );
    let highlight = group(
        &format!("{}Highlight", name),
        vec![
            ellipse(&format!("{}HlShape", name), [0.0, 0.0], [3.0, 3.0]),
            fill(&format!("{}HlFill", name), WHITE, 100.0),
        ],
        Some(placed([cx + 2.0, cy - 2.0])),
    );

    let tr = match scale {
        Some(s) => Transform::new().scale(s).build(),
        None => transform(),
    };
    group(name, vec![pupil, highlight], Some(tr))
}

/// Scale keyframes pinching the eye shut at each window's midpoint and
/// reopening it by the window's end.
pub fn blink_scale(blink_frames: &[(u32, u32)]) -> Property<Vec2> {
    let open = [100.0, 100.0];
    let shut = [100.0, BLINK_SCALE];

    let mut kfs: Vec<Keyframe<Vec2>> = Vec::with_capacity(blink_frames.len() * 3);
    for (idx, &(start, end)) in blink_frames.iter().enumerate() {
        kfs.push(ease_to(start, open, shut));
        // A reversed window collapses onto `start` instead of underflowing.
        kfs.push(ease_to(start + end.saturating_sub(start) / 2, shut, open));
        if idx + 1 == blink_frames.len() {
            kfs.push(rest(end, open));
        } else {
            // Stay open until the next blink starts.
            kfs.push(keyframe(end, open, Some(open), false));
        }
    }
    animated_val(kfs)
}

/// Open eyes. Blinking wins over squinting when both are requested.
pub fn eyes_normal(blink_frames: &[(u32, u32)], squint: bool) -> Vec<Shape> {
    let scale = if !blink_frames.is_empty() {
        Some(blink_scale(blink_frames))
    } else if squint {
        Some(Property::Static([100.0, SQUINT_SCALE]))
    } else {
        None
    };

    EYES.iter()
        .map(|&(name, cx)| eye(name, cx, EYE_Y, scale.clone()))
        .collect()
}

/// Both eyes driven by one shared scale value.
pub fn eyes_scaled(scale: Property<Vec2>) -> Vec<Shape> {
    EYES.iter()
        .map(|&(name, cx)| eye(name, cx, EYE_Y, Some(scale.clone())))
        .collect()
}

/// Flat horizontal lines used while asleep.
pub fn closed_eyes() -> Vec<Shape> {
    [("LeftClosedEye", 88.0), ("RightClosedEye", 112.0)]
        .iter()
        .map(|&(name, cx)| {
            group(
                name,
                vec![
                    path(
                        &format!("{}Line", name),
                        vec![[cx - 5.0, EYE_Y], [cx + 5.0, EYE_Y]],
                        None,
                        None,
                        false,
                    ),
                    stroke(&format!("{}Stroke", name), BLACK, 2.0, 100.0),
                ],
                None,
            )
        })
        .collect()
}

pub fn nose() -> Shape {
    group(
        "Nose",
        vec![
            ellipse("NoseShape", [0.0, 0.0], [6.0, 5.0]),
            fill("NoseFill", PINK_NOSE, 100.0),
        ],
        Some(placed([100.0, 85.0])),
    )
}

/// Resting "w" mouth.
pub fn mouth_w() -> Shape {
    group(
        "Mouth",
        vec![
            path(
                "MouthPath",
                vec![
                    [93.0, 89.0],
                    [96.0, 93.0],
                    [100.0, 90.0],
                    [104.0, 93.0],
                    [107.0, 89.0],
                ],
                Some(vec![
                    [0.0, 0.0],
                    [-1.0, -1.0],
                    [0.0, 1.0],
                    [-1.0, -1.0],
                    [0.0, 0.0],
                ]),
                Some(vec![
                    [1.0, 1.0],
                    [0.0, -1.0],
                    [1.0, 1.0],
                    [0.0, -1.0],
                    [0.0, 0.0],
                ]),
                false,
            ),
            stroke("MouthStroke", BLACK, 1.2, 100.0),
        ],
        None,
    )
}

/// Ellipse mouth used while talking; `scale` animates it open and shut.
pub fn open_mouth(scale: Option<Property<Vec2>>) -> Shape {
    let mut tr = Transform::new().position([100.0, 92.0]);
    if let Some(s) = scale {
        tr = tr.scale(s);
    }
    group(
        "OpenMouth",
        vec![
            ellipse("OpenMouthShape", [0.0, 0.0], [10.0, 8.0]),
            fill("OpenMouthFill", MOUTH_RED, 100.0),
        ],
        Some(tr.build()),
    )
}

/// Three whiskers per side, fanning out from the muzzle.
pub fn whiskers() -> Vec<Shape> {
    let fan = [(0.0, 0.0), (-4.0, -5.0), (4.0, 5.0)];
    let sides = [("L", 82.0, 55.0), ("R", 118.0, 145.0)];

    let mut out = Vec::with_capacity(6);
    for (side, root_x, tip_x) in sides {
        for (i, (y_off, angle)) in fan.iter().enumerate() {
            out.push(group(
                &format!("{}Whisker{}", side, i),
                vec![
                    path(
                        &format!("{}W{}Path", side, i),
                        vec![[root_x, 87.0 + y_off], [tip_x, 85.0 + y_off + angle]],
                        None,
                        None,
                        false,
                    ),
                    stroke(&format!("{}W{}Stroke", side, i), BLACK, 0.8, 100.0),
                ],
                None,
            ));
        }
    }
    out
}

pub fn blush() -> Vec<Shape> {
    [("LeftBlush", "LBlush", 82.0), ("RightBlush", "RBlush", 118.0)]
        .iter()
        .map(|&(name, short, x)| {
            group(
                name,
                vec![
                    ellipse(&format!("{}Shape", short), [0.0, 0.0], [12.0, 8.0]),
                    fill(&format!("{}Fill", short), BLUSH, 40.0),
                ],
                Some(placed([x, 90.0])),
            )
        })
        .collect()
}

pub fn paws() -> Vec<Shape> {
    [("LeftPaw", "LPaw", 82.0), ("RightPaw", "RPaw", 118.0)]
        .iter()
        .map(|&(name, short, x)| {
            group(
                name,
                vec![
                    ellipse(&format!("{}Shape", short), [0.0, 0.0], [22.0, 14.0]),
                    fill(&format!("{}Fill", short), ORANGE, 100.0),
                ],
                Some(placed([x, 162.0])),
            )
        })
        .collect()
}

/// Three tabby stripes on the forehead.
pub fn forehead_stripes() -> Vec<Shape> {
    [95.0, 100.0, 105.0]
        .iter()
        .enumerate()
        .map(|(i, &cx)| {
            group(
                &format!("Stripe{}", i),
                vec![
                    path(
                        &format!("Stripe{}Path", i),
                        vec![[cx, 62.0], [cx - 1.0, 55.0], [cx, 50.0]],
                        Some(vec![[0.0, 0.0], [0.0, 2.0], [0.0, 0.0]]),
                        Some(vec![[0.0, -2.0], [0.0, -2.0], [0.0, 0.0]]),
                        false,
                    ),
                    stroke(&format!("Stripe{}Stroke", i), DARK_ORANGE, 2.0, 100.0),
                ],
                None,
            )
        })
        .collect()
}
