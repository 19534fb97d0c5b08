//! RGB colours of the cat, components in `0.0..=1.0`.

use lottie_data::model::Rgb;

pub const ORANGE: Rgb = [0.95, 0.75, 0.3];
pub const DARK_ORANGE: Rgb = [0.85, 0.65, 0.2];
pub const PINK_INNER: Rgb = [0.95, 0.7, 0.7];
pub const PINK_NOSE: Rgb = [0.9, 0.5, 0.5];
pub const BLACK: Rgb = [0.0, 0.0, 0.0];
pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const BLUSH: Rgb = [1.0, 0.75, 0.75];
pub const MOUTH_RED: Rgb = [0.85, 0.4, 0.4];
pub const SLEEP_BLUE: Rgb = [0.4, 0.4, 0.7];
