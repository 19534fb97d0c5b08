//! Structural audit of generated documents.
//!
//! The generator never validates what it builds; this pass is run afterwards
//! (by tests and the `verify` command) to report every place where a
//! document breaks the invariants players rely on.

use lottie_data::model::{Layer, LayerTransform, LottieJson, Property, Shape, TransformShape};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    #[error("animated value has no keyframes")]
    EmptyAnimation,
    #[error("keyframe at frame {next} does not come after frame {prev}")]
    UnorderedKeyframes { prev: u32, next: u32 },
    #[error("keyframe at frame {t} is not the last one but has no end value")]
    MissingEndValue { t: u32 },
    #[error("final keyframe at frame {t} carries an end value")]
    TrailingEndValue { t: u32 },
    #[error("path has {vertices} vertices, {in_tangents} in-tangents and {out_tangents} out-tangents")]
    TangentLengthMismatch {
        vertices: usize,
        in_tangents: usize,
        out_tangents: usize,
    },
    #[error("group does not end with a transform")]
    MissingGroupTransform,
    #[error("transform at item {index} is not the last item of its group")]
    StrayTransform { index: usize },
    #[error("group declares {declared} items but holds {actual}")]
    ItemCountMismatch { declared: u32, actual: usize },
    #[error("layer index {0} is used more than once")]
    DuplicateLayerIndex(u32),
    #[error("layer out-point {op} is not after its in-point {ip}")]
    EmptyLayerRange { ip: u32, op: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending node, e.g. `layers[0].shapes[3].it[1].ks`.
    pub location: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Collects every invariant violation in `doc`. An empty result means the
/// document is structurally sound.
pub fn audit_document(doc: &LottieJson) -> Vec<Violation> {
    let mut auditor = Auditor::default();
    let mut seen = HashSet::new();

    for (idx, layer) in doc.layers.iter().enumerate() {
        let loc = format!("layers[{}]", idx);
        if !seen.insert(layer.ind) {
            auditor.report(&loc, ViolationKind::DuplicateLayerIndex(layer.ind));
        }
        auditor.layer(&loc, layer);
    }

    auditor.violations
}

#[derive(Default)]
struct Auditor {
    violations: Vec<Violation>,
}

impl Auditor {
    fn report(&mut self, location: &str, kind: ViolationKind) {
        self.violations.push(Violation {
            location: location.to_string(),
            kind,
        });
    }

    fn layer(&mut self, loc: &str, layer: &Layer) {
        if layer.op <= layer.ip {
            self.report(
                loc,
                ViolationKind::EmptyLayerRange {
                    ip: layer.ip,
                    op: layer.op,
                },
            );
        }
        self.layer_transform(&format!("{}.ks", loc), &layer.ks);
        for (idx, shape) in layer.shapes.iter().enumerate() {
            self.shape(&format!("{}.shapes[{}]", loc, idx), shape);
        }
    }

    fn layer_transform(&mut self, loc: &str, ks: &LayerTransform) {
        self.property(&format!("{}.p", loc), &ks.p);
        self.property(&format!("{}.a", loc), &ks.a);
        self.property(&format!("{}.s", loc), &ks.s);
        self.property(&format!("{}.r", loc), &ks.r);
        self.property(&format!("{}.o", loc), &ks.o);
    }

    fn transform(&mut self, loc: &str, tr: &TransformShape) {
        self.property(&format!("{}.p", loc), &tr.p);
        self.property(&format!("{}.a", loc), &tr.a);
        self.property(&format!("{}.s", loc), &tr.s);
        self.property(&format!("{}.r", loc), &tr.r);
        self.property(&format!("{}.o", loc), &tr.o);
        self.property(&format!("{}.sk", loc), &tr.sk);
        self.property(&format!("{}.sa", loc), &tr.sa);
    }

    fn shape(&mut self, loc: &str, shape: &Shape) {
        match shape {
            Shape::Group(g) => {
                if g.np as usize != g.it.len() {
                    self.report(
                        loc,
                        ViolationKind::ItemCountMismatch {
                            declared: g.np,
                            actual: g.it.len(),
                        },
                    );
                }
                if g.transform().is_none() {
                    self.report(loc, ViolationKind::MissingGroupTransform);
                }
                let last = g.it.len().saturating_sub(1);
                for (idx, item) in g.it.iter().enumerate() {
                    if idx != last && matches!(item, Shape::Transform(_)) {
                        self.report(loc, ViolationKind::StrayTransform { index: idx });
                    }
                    self.shape(&format!("{}.it[{}]", loc, idx), item);
                }
            }
            Shape::Rect(r) => {
                self.property(&format!("{}.p", loc), &r.p);
                self.property(&format!("{}.s", loc), &r.s);
                self.property(&format!("{}.r", loc), &r.r);
            }
            Shape::Ellipse(e) => {
                self.property(&format!("{}.p", loc), &e.p);
                self.property(&format!("{}.s", loc), &e.s);
            }
            Shape::Fill(f) => {
                self.property(&format!("{}.c", loc), &f.c);
                self.property(&format!("{}.o", loc), &f.o);
            }
            Shape::Stroke(s) => {
                self.property(&format!("{}.c", loc), &s.c);
                self.property(&format!("{}.o", loc), &s.o);
                self.property(&format!("{}.w", loc), &s.w);
            }
            Shape::Transform(tr) => self.transform(loc, tr),
            Shape::Path(p) => {
                let ks_loc = format!("{}.ks", loc);
                let paths: Vec<_> = match &p.ks {
                    Property::Static(path) => vec![path],
                    Property::Animated(kfs) => kfs
                        .iter()
                        .flat_map(|kf| std::iter::once(&kf.s).chain(kf.e.as_ref()))
                        .collect(),
                };
                for path in paths {
                    if path.i.len() != path.v.len() || path.o.len() != path.v.len() {
                        self.report(
                            &ks_loc,
                            ViolationKind::TangentLengthMismatch {
                                vertices: path.v.len(),
                                in_tangents: path.i.len(),
                                out_tangents: path.o.len(),
                            },
                        );
                    }
                }
                self.property(&ks_loc, &p.ks);
            }
        }
    }

    fn property<T>(&mut self, loc: &str, prop: &Property<T>) {
        let Some(keyframes) = prop.keyframes() else {
            return;
        };
        if keyframes.is_empty() {
            self.report(loc, ViolationKind::EmptyAnimation);
            return;
        }

        for pair in keyframes.windows(2) {
            if pair[1].t <= pair[0].t {
                self.report(
                    loc,
                    ViolationKind::UnorderedKeyframes {
                        prev: pair[0].t,
                        next: pair[1].t,
                    },
                );
            }
        }

        let last = keyframes.len() - 1;
        for (idx, kf) in keyframes.iter().enumerate() {
            // Hold keyframes jump straight to the next one and need no target.
            if idx < last && kf.e.is_none() && kf.h.is_none() {
                self.report(loc, ViolationKind::MissingEndValue { t: kf.t });
            }
            if idx == last && kf.e.is_some() {
                self.report(loc, ViolationKind::TrailingEndValue { t: kf.t });
            }
        }
    }
}
