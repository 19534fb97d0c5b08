//! Constructors for schema-valid Lottie fragments.
//!
//! Every function here is pure: identical input gives structurally identical
//! output. Static geometry is passed as raw values; transform and layer
//! properties accept anything convertible into a [`Property`], so callers can
//! hand over either a raw value (wrapped as static) or a prepared animated
//! value (passed through unchanged).

use lottie_data::model::{
    BezierPath, BezierTangent, EllipseShape, FillShape, GroupShape, Keyframe, Layer,
    LayerTransform, LottieJson, PathShape, Property, RectShape, Rgb, Shape, StrokeShape,
    TransformShape, Vec2, Vec3,
};

pub const FORMAT_VERSION: &str = "5.7.4";
pub const FRAME_RATE: u32 = 24;
pub const CANVAS_WIDTH: u32 = 200;
pub const CANVAS_HEIGHT: u32 = 200;

/// Ease handles attached to every eased keyframe: in `(0.42, 1)`, out `(0.58, 0)`.
pub const EASE_IN: (f64, f64) = (0.42, 1.0);
pub const EASE_OUT: (f64, f64) = (0.58, 0.0);

pub fn static_val<T>(value: T) -> Property<T> {
    Property::Static(value)
}

/// Wraps keyframes as an animated value. The caller guarantees a non-empty,
/// time-ordered sequence.
pub fn animated_val<T>(keyframes: Vec<Keyframe<T>>) -> Property<T> {
    debug_assert!(
        !keyframes.is_empty(),
        "animated value needs at least one keyframe"
    );
    Property::Animated(keyframes)
}

/// Single keyframe. Without `end` it is the terminal hold of its sequence.
pub fn keyframe<T>(t: u32, start: T, end: Option<T>, hold: bool) -> Keyframe<T> {
    Keyframe {
        t,
        s: start,
        e: end,
        h: hold.then_some(1),
        i: None,
        o: None,
    }
}

/// Keyframe with the fixed ease-in/ease-out handles (only when `end` is present).
pub fn ease_keyframe<T>(t: u32, start: T, end: Option<T>) -> Keyframe<T> {
    let eased = end.is_some();
    let mut kf = keyframe(t, start, end, false);
    if eased {
        kf.i = Some(BezierTangent {
            x: vec![EASE_IN.0],
            y: vec![EASE_IN.1],
        });
        kf.o = Some(BezierTangent {
            x: vec![EASE_OUT.0],
            y: vec![EASE_OUT.1],
        });
    }
    kf
}

/// Eased segment starting at `t`, going from `from` to `to`.
pub fn ease_to<T>(t: u32, from: T, to: T) -> Keyframe<T> {
    ease_keyframe(t, from, Some(to))
}

/// Final keyframe of a sequence.
pub fn rest<T>(t: u32, value: T) -> Keyframe<T> {
    keyframe(t, value, None, false)
}

// Shape items

pub fn ellipse(name: &str, pos: Vec2, size: Vec2) -> Shape {
    Shape::Ellipse(EllipseShape {
        nm: name.to_string(),
        p: static_val(pos),
        s: static_val(size),
        d: 1,
    })
}

pub fn rect(name: &str, pos: Vec2, size: Vec2, roundness: f64) -> Shape {
    Shape::Rect(RectShape {
        nm: name.to_string(),
        p: static_val(pos),
        s: static_val(size),
        r: static_val(roundness),
        d: 1,
    })
}

pub fn fill(name: &str, color: Rgb, opacity: f64) -> Shape {
    Shape::Fill(FillShape {
        nm: name.to_string(),
        c: static_val(color),
        o: static_val(opacity),
        r: 1,
        bm: 0,
    })
}

pub fn stroke(name: &str, color: Rgb, width: f64, opacity: f64) -> Shape {
    Shape::Stroke(StrokeShape {
        nm: name.to_string(),
        c: static_val(color),
        o: static_val(opacity),
        w: static_val(width),
        lc: 2,
        lj: 2,
        bm: 0,
    })
}

/// Bezier path. Missing tangents default to zero offsets (straight segments).
pub fn path(
    name: &str,
    vertices: Vec<Vec2>,
    in_tangents: Option<Vec<Vec2>>,
    out_tangents: Option<Vec<Vec2>>,
    closed: bool,
) -> Shape {
    let n = vertices.len();
    let i = in_tangents.unwrap_or_else(|| vec![[0.0, 0.0]; n]);
    let o = out_tangents.unwrap_or_else(|| vec![[0.0, 0.0]; n]);
    Shape::Path(PathShape {
        nm: name.to_string(),
        ks: static_val(BezierPath {
            i,
            o,
            v: vertices,
            c: closed,
        }),
        d: 1,
    })
}

/// Builder for a group-local transform item.
///
/// Defaults: position and anchor `[0, 0]`, scale `[100, 100]`, rotation `0`,
/// opacity `100`, no skew.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    position: Option<Property<Vec2>>,
    anchor: Option<Property<Vec2>>,
    scale: Option<Property<Vec2>>,
    rotation: Option<Property<f64>>,
    opacity: Option<Property<f64>>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, p: impl Into<Property<Vec2>>) -> Self {
        self.position = Some(p.into());
        self
    }

    pub fn anchor(mut self, a: impl Into<Property<Vec2>>) -> Self {
        self.anchor = Some(a.into());
        self
    }

    pub fn scale(mut self, s: impl Into<Property<Vec2>>) -> Self {
        self.scale = Some(s.into());
        self
    }

    pub fn rotation(mut self, r: impl Into<Property<f64>>) -> Self {
        self.rotation = Some(r.into());
        self
    }

    pub fn opacity(mut self, o: impl Into<Property<f64>>) -> Self {
        self.opacity = Some(o.into());
        self
    }

    pub fn build(self) -> TransformShape {
        TransformShape {
            p: self.position.unwrap_or(Property::Static([0.0, 0.0])),
            a: self.anchor.unwrap_or(Property::Static([0.0, 0.0])),
            s: self.scale.unwrap_or(Property::Static([100.0, 100.0])),
            r: self.rotation.unwrap_or(Property::Static(0.0)),
            o: self.opacity.unwrap_or(Property::Static(100.0)),
            sk: static_val(0.0),
            sa: static_val(0.0),
        }
    }
}

/// Identity transform item.
pub fn transform() -> TransformShape {
    Transform::new().build()
}

/// Group container. The transform (identity when `None`) is appended as the last item.
pub fn group(name: &str, items: Vec<Shape>, tr: Option<TransformShape>) -> Shape {
    let mut it = items;
    it.push(Shape::Transform(tr.unwrap_or_else(transform)));
    Shape::Group(GroupShape {
        nm: name.to_string(),
        np: it.len() as u32,
        it,
        bm: 0,
        cix: 2,
    })
}

/// Builder for a shape layer.
///
/// Defaults: position `[100, 100, 0]`, anchor `[0, 0, 0]`, scale
/// `[100, 100, 100]`, rotation `0`, opacity `100`, visible over `[0, 48)`.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    name: String,
    index: u32,
    shapes: Vec<Shape>,
    position: Option<Property<Vec3>>,
    anchor: Option<Property<Vec3>>,
    scale: Option<Property<Vec3>>,
    rotation: Option<Property<f64>>,
    opacity: Option<Property<f64>>,
    in_point: u32,
    out_point: u32,
}

pub fn shape_layer(name: &str, index: u32, shapes: Vec<Shape>) -> ShapeLayer {
    ShapeLayer {
        name: name.to_string(),
        index,
        shapes,
        position: None,
        anchor: None,
        scale: None,
        rotation: None,
        opacity: None,
        in_point: 0,
        out_point: 48,
    }
}

impl ShapeLayer {
    pub fn position(mut self, p: impl Into<Property<Vec3>>) -> Self {
        self.position = Some(p.into());
        self
    }

    pub fn anchor(mut self, a: impl Into<Property<Vec3>>) -> Self {
        self.anchor = Some(a.into());
        self
    }

    pub fn scale(mut self, s: impl Into<Property<Vec3>>) -> Self {
        self.scale = Some(s.into());
        self
    }

    pub fn rotation(mut self, r: impl Into<Property<f64>>) -> Self {
        self.rotation = Some(r.into());
        self
    }

    pub fn opacity(mut self, o: impl Into<Property<f64>>) -> Self {
        self.opacity = Some(o.into());
        self
    }

    /// Visible range `[in_point, out_point)` in frames.
    pub fn frames(mut self, in_point: u32, out_point: u32) -> Self {
        self.in_point = in_point;
        self.out_point = out_point;
        self
    }

    pub fn build(self) -> Layer {
        Layer {
            ty: 4,
            nm: self.name,
            ind: self.index,
            ddd: 0,
            sr: 1.0,
            ip: self.in_point,
            op: self.out_point,
            st: 0,
            bm: 0,
            ks: LayerTransform {
                p: self.position.unwrap_or(Property::Static([100.0, 100.0, 0.0])),
                a: self.anchor.unwrap_or(Property::Static([0.0, 0.0, 0.0])),
                s: self
                    .scale
                    .unwrap_or(Property::Static([100.0, 100.0, 100.0])),
                r: self.rotation.unwrap_or(Property::Static(0.0)),
                o: self.opacity.unwrap_or(Property::Static(100.0)),
            },
            ao: 0,
            shapes: self.shapes,
        }
    }
}

/// Top-level document: 24 fps, 200x200 canvas, starting at frame 0.
pub fn document(name: &str, out_point: u32, layers: Vec<Layer>) -> LottieJson {
    LottieJson {
        v: FORMAT_VERSION.to_string(),
        fr: FRAME_RATE,
        ip: 0,
        op: out_point,
        w: CANVAS_WIDTH,
        h: CANVAS_HEIGHT,
        nm: name.to_string(),
        ddd: 0,
        assets: Vec::new(),
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ease_keyframe_attaches_fixed_handles() {
        let kf = ease_to(0, [100.0, 100.0], [100.0, 97.0]);
        assert_eq!(kf.e, Some([100.0, 97.0]));
        assert_eq!(kf.i.as_ref().unwrap().x, vec![0.42]);
        assert_eq!(kf.i.as_ref().unwrap().y, vec![1.0]);
        assert_eq!(kf.o.as_ref().unwrap().x, vec![0.58]);
        assert_eq!(kf.o.as_ref().unwrap().y, vec![0.0]);
    }

    #[test]
    fn test_ease_keyframe_without_end_has_no_handles() {
        let kf = ease_keyframe(48, [100.0, 100.0], None);
        assert!(kf.e.is_none());
        assert!(kf.i.is_none() && kf.o.is_none());
    }

    #[test]
    fn test_hold_flag() {
        let kf = keyframe(10, 5.0, None, true);
        assert_eq!(kf.h, Some(1));
        assert_eq!(keyframe(10, 5.0, None, false).h, None);
    }

    #[test]
    fn test_path_defaults_tangents_to_zero() {
        let Shape::Path(p) = path("Line", vec![[0.0, 0.0], [10.0, 0.0]], None, None, false)
        else {
            panic!("expected path");
        };
        let bez = p.ks.static_value().unwrap();
        assert_eq!(bez.i, vec![[0.0, 0.0]; 2]);
        assert_eq!(bez.o, vec![[0.0, 0.0]; 2]);
        assert!(!bez.c);
    }

    #[test]
    fn test_transform_passes_animated_values_through() {
        let rotation = animated_val(vec![ease_to(0, -5.0, 5.0), rest(24, 5.0)]);
        let tr = Transform::new()
            .position([140.0, 150.0])
            .rotation(rotation.clone())
            .build();
        assert_eq!(tr.p, Property::Static([140.0, 150.0]));
        assert_eq!(tr.r, rotation);
        assert_eq!(tr.s, Property::Static([100.0, 100.0]));
        assert_eq!(tr.o, Property::Static(100.0));
    }

    #[test]
    fn test_group_appends_transform_last() {
        let Shape::Group(g) = group(
            "Dot",
            vec![
                ellipse("DotShape", [0.0, 0.0], [4.0, 4.0]),
                fill("DotFill", [0.0, 0.0, 0.0], 100.0),
            ],
            None,
        ) else {
            panic!("expected group");
        };
        assert_eq!(g.np, 3);
        assert!(matches!(g.it.last(), Some(Shape::Transform(_))));
        assert_eq!(g.transform(), Some(&transform()));
    }

    #[test]
    fn test_rect_wire_form() {
        let shape = rect("Panel", [0.0, 0.0], [40.0, 20.0], 4.0);
        assert_eq!(
            serde_json::to_value(&shape).unwrap(),
            json!({
                "ty": "rc",
                "nm": "Panel",
                "p": { "a": 0, "k": [0.0, 0.0] },
                "s": { "a": 0, "k": [40.0, 20.0] },
                "r": { "a": 0, "k": 4.0 },
                "d": 1
            })
        );
    }

    #[test]
    fn test_shape_layer_defaults() {
        let layer = shape_layer("Empty", 1, Vec::new()).build();
        assert_eq!(layer.ty, 4);
        assert_eq!((layer.ip, layer.op), (0, 48));
        assert_eq!(layer.ks.p, Property::Static([100.0, 100.0, 0.0]));
        assert_eq!(layer.ks.s, Property::Static([100.0, 100.0, 100.0]));
    }

    #[test]
    fn test_document_header() {
        let doc = document("cat-test", 24, Vec::new());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["v"], "5.7.4");
        assert_eq!(value["fr"], 24);
        assert_eq!(value["w"], 200);
        assert_eq!(value["h"], 200);
        assert_eq!(value["op"], 24);
        assert_eq!(value["assets"], json!([]));
    }
}
