//! The four cat animations and the catalogue that names them.

mod idle;
mod listening;
mod sleeping;
mod speaking;

pub use idle::build_idle;
pub use listening::build_listening;
pub use sleeping::build_sleeping;
pub use speaking::build_speaking;

use crate::parts;
use lottie_core::{animated_val, ease_to, rest};
use lottie_data::model::{LottieJson, Property, Shape};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Idle,
    Speaking,
    Listening,
    Sleeping,
}

impl Scene {
    pub const ALL: [Scene; 4] = [
        Scene::Idle,
        Scene::Speaking,
        Scene::Listening,
        Scene::Sleeping,
    ];

    /// Document name, also the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Scene::Idle => "cat-idle",
            Scene::Speaking => "cat-speaking",
            Scene::Listening => "cat-listening",
            Scene::Sleeping => "cat-sleeping",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// Length of the animation in frames.
    pub fn out_point(self) -> u32 {
        match self {
            Scene::Idle => 48,
            Scene::Speaking => 24,
            Scene::Listening => 48,
            Scene::Sleeping => 72,
        }
    }

    pub fn build(self) -> LottieJson {
        let doc = match self {
            Scene::Idle => build_idle(),
            Scene::Speaking => build_speaking(),
            Scene::Listening => build_listening(),
            Scene::Sleeping => build_sleeping(),
        };
        debug!(
            scene = self.name(),
            layers = doc.layers.len(),
            shapes = doc.layers.first().map_or(0, |l| l.shapes.len()),
            "assembled scene"
        );
        doc
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scene '{0}', expected one of: idle, speaking, listening, sleeping")]
pub struct UnknownScene(pub String);

impl FromStr for Scene {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_prefix("cat-").unwrap_or(&key);
        match key {
            "idle" => Ok(Scene::Idle),
            "speaking" => Ok(Scene::Speaking),
            "listening" => Ok(Scene::Listening),
            "sleeping" => Ok(Scene::Sleeping),
            _ => Err(UnknownScene(s.to_string())),
        }
    }
}

/// The parts that vary between scenes. Everything else is shared.
pub(crate) struct Cat {
    pub body: Shape,
    pub tail: Shape,
    pub head: Shape,
    pub ears: Vec<Shape>,
    pub eyes: Vec<Shape>,
    pub mouth: Shape,
}

impl Cat {
    /// Shapes in back-to-front order.
    pub fn into_shapes(self) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(24);
        shapes.push(self.body);
        shapes.push(self.tail);
        shapes.extend(parts::paws());
        shapes.push(self.head);
        shapes.extend(self.ears);
        shapes.extend(parts::forehead_stripes());
        shapes.extend(self.eyes);
        shapes.push(parts::nose());
        shapes.push(self.mouth);
        shapes.extend(parts::whiskers());
        shapes.extend(parts::blush());
        shapes
    }
}

/// Eased back-and-forth between `from` and `to`, one segment every `step`
/// frames, `segments` times, settling on whichever value the last segment
/// reached.
pub(crate) fn oscillate<T: Clone>(from: T, to: T, step: u32, segments: u32) -> Property<T> {
    let mut kfs = Vec::with_capacity(segments as usize + 1);
    let (mut cur, mut next) = (from, to);
    for n in 0..segments {
        kfs.push(ease_to(n * step, cur.clone(), next.clone()));
        std::mem::swap(&mut cur, &mut next);
    }
    kfs.push(rest(segments * step, cur));
    animated_val(kfs)
}
