use serde::ser::SerializeStruct;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

/// One complete animation document (the top-level Lottie object).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LottieJson {
    pub v: String,
    pub fr: u32,
    pub ip: u32,
    pub op: u32,
    pub w: u32,
    pub h: u32,
    pub nm: String,
    #[serde(default)]
    pub ddd: u8,
    #[serde(default)]
    pub assets: Vec<serde_json::Value>, // Always empty for generated documents
    pub layers: Vec<Layer>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Layer {
    pub ty: u8, // 4 = shape layer
    pub nm: String,
    pub ind: u32,
    #[serde(default)]
    pub ddd: u8,
    #[serde(default = "default_one")]
    pub sr: f64, // Time stretch
    pub ip: u32,
    pub op: u32,
    #[serde(default)]
    pub st: u32,
    #[serde(default)]
    pub bm: u8,
    pub ks: LayerTransform,
    #[serde(default)]
    pub ao: u8,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

fn default_one() -> f64 {
    1.0
}

/// Layer-level transform. Position, anchor and scale carry a z component.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LayerTransform {
    pub p: Property<Vec3>,
    pub a: Property<Vec3>,
    pub s: Property<Vec3>,
    pub r: Property<f64>,
    pub o: Property<f64>,
}

// Shapes

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "ty")]
pub enum Shape {
    #[serde(rename = "gr")]
    Group(GroupShape),
    #[serde(rename = "rc")]
    Rect(RectShape),
    #[serde(rename = "el")]
    Ellipse(EllipseShape),
    #[serde(rename = "fl")]
    Fill(FillShape),
    #[serde(rename = "st")]
    Stroke(StrokeShape),
    #[serde(rename = "tr")]
    Transform(TransformShape),
    #[serde(rename = "sh")]
    Path(PathShape),
}

impl Shape {
    /// Display name of the item. Transforms are anonymous.
    pub fn name(&self) -> Option<&str> {
        match self {
            Shape::Group(g) => Some(&g.nm),
            Shape::Rect(r) => Some(&r.nm),
            Shape::Ellipse(e) => Some(&e.nm),
            Shape::Fill(f) => Some(&f.nm),
            Shape::Stroke(s) => Some(&s.nm),
            Shape::Path(p) => Some(&p.nm),
            Shape::Transform(_) => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupShape {
    pub nm: String,
    pub np: u32, // Number of items, including the trailing transform
    pub it: Vec<Shape>,
    #[serde(default)]
    pub bm: u8,
    #[serde(default)]
    pub cix: u32,
}

impl GroupShape {
    /// The group's local transform, which is always the last item.
    pub fn transform(&self) -> Option<&TransformShape> {
        match self.it.last() {
            Some(Shape::Transform(tr)) => Some(tr),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RectShape {
    pub nm: String,
    pub p: Property<Vec2>,
    pub s: Property<Vec2>,
    pub r: Property<f64>, // Corner roundness
    #[serde(default = "default_direction")]
    pub d: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EllipseShape {
    pub nm: String,
    pub p: Property<Vec2>,
    pub s: Property<Vec2>,
    #[serde(default = "default_direction")]
    pub d: u8,
}

fn default_direction() -> u8 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FillShape {
    pub nm: String,
    pub c: Property<Rgb>,
    pub o: Property<f64>,
    #[serde(default)]
    pub r: u8, // Fill rule: 1 = non-zero
    #[serde(default)]
    pub bm: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StrokeShape {
    pub nm: String,
    pub c: Property<Rgb>,
    pub o: Property<f64>,
    pub w: Property<f64>,
    #[serde(default)]
    pub lc: u8, // Line cap: 2 = round
    #[serde(default)]
    pub lj: u8, // Line join: 2 = round
    #[serde(default)]
    pub bm: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathShape {
    pub nm: String,
    pub ks: Property<BezierPath>,
    #[serde(default = "default_direction")]
    pub d: u8,
}

/// Group-local transform item (`"ty": "tr"`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransformShape {
    pub p: Property<Vec2>,
    pub a: Property<Vec2>,
    pub s: Property<Vec2>,
    pub r: Property<f64>,
    pub o: Property<f64>,
    pub sk: Property<f64>, // Skew amount in degrees
    pub sa: Property<f64>, // Skew axis in degrees
}

/// Static-or-animated value wrapper, written as `{"a": 0|1, "k": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Property<T> {
    Static(T),
    Animated(Vec<Keyframe<T>>),
}

impl<T> Property<T> {
    pub fn is_animated(&self) -> bool {
        matches!(self, Property::Animated(_))
    }

    pub fn static_value(&self) -> Option<&T> {
        match self {
            Property::Static(v) => Some(v),
            Property::Animated(_) => None,
        }
    }

    pub fn keyframes(&self) -> Option<&[Keyframe<T>]> {
        match self {
            Property::Static(_) => None,
            Property::Animated(kfs) => Some(kfs),
        }
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Property::Static(value)
    }
}

impl<T: Serialize> Serialize for Property<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Property", 2)?;
        match self {
            Property::Static(v) => {
                state.serialize_field("a", &0u8)?;
                state.serialize_field("k", v)?;
            }
            Property::Animated(keyframes) => {
                state.serialize_field("a", &1u8)?;
                state.serialize_field("k", keyframes)?;
            }
        }
        state.end()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Property<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawProperty {
            #[serde(default)]
            a: u8,
            k: serde_json::Value,
        }

        let raw = RawProperty::deserialize(deserializer)?;
        if raw.a == 1 {
            serde_json::from_value::<Vec<Keyframe<T>>>(raw.k)
                .map(Property::Animated)
                .map_err(serde::de::Error::custom)
        } else {
            serde_json::from_value::<T>(raw.k)
                .map(Property::Static)
                .map_err(serde::de::Error::custom)
        }
    }
}

/// A timed value. Without `e` the keyframe is a terminal hold.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned"))]
pub struct Keyframe<T> {
    pub t: u32,
    #[serde(
        serialize_with = "serialize_keyframe_value",
        deserialize_with = "deserialize_keyframe_value"
    )]
    pub s: T,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_keyframe_value",
        deserialize_with = "deserialize_optional_keyframe_value"
    )]
    pub e: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<BezierTangent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o: Option<BezierTangent>,
}

// Keyframe payloads are always arrays on the wire; scalars become `[x]`.
fn serialize_keyframe_value<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match serde_json::to_value(value).map_err(serde::ser::Error::custom)? {
        serde_json::Value::Number(n) => [n].serialize(serializer),
        other => other.serialize(serializer),
    }
}

fn serialize_optional_keyframe_value<T, S>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => serialize_keyframe_value(v, serializer),
        None => serializer.serialize_none(),
    }
}

fn keyframe_value_from_json<T: DeserializeOwned>(v: serde_json::Value) -> Option<T> {
    if let Ok(val) = serde_json::from_value(v.clone()) {
        return Some(val);
    }

    // Unwrap single-element arrays written for scalars
    if let Ok(vec) = serde_json::from_value::<Vec<T>>(v) {
        if let Some(first) = vec.into_iter().next() {
            return Some(first);
        }
    }

    None
}

fn deserialize_keyframe_value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    keyframe_value_from_json(v)
        .ok_or_else(|| serde::de::Error::custom("keyframe value has an unexpected shape"))
}

fn deserialize_optional_keyframe_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    if v.is_null() {
        return Ok(None);
    }
    keyframe_value_from_json(v)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("keyframe value has an unexpected shape"))
}

pub type Vec2 = [f64; 2];
pub type Vec3 = [f64; 3];
pub type Rgb = [f64; 3];

/// Bezier tangent control points for keyframe easing
/// Matches the JSON format: {"x": [0.42], "y": [1]}
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BezierTangent {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BezierPath {
    #[serde(default)]
    pub i: Vec<Vec2>,
    #[serde(default)]
    pub o: Vec<Vec2>,
    #[serde(default)]
    pub v: Vec<Vec2>,
    #[serde(default)]
    pub c: bool,
}
