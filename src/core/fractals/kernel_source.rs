use crate::core::data::names::{UnknownNameError, parse_named};
use crate::core::data::render_params::HARD_ITERATION_CAP;
use crate::core::fractals::variant::FractalVariant;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelSourceError {
    #[error("{stage} shader has an unfilled template slot near '{context}'")]
    UnfilledSlot { stage: &'static str, context: String },
}

/// GLSL float precision qualifier for generated kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Precision {
    #[serde(rename = "lowp")]
    Low,
    #[serde(rename = "mediump")]
    Medium,
    #[default]
    #[serde(rename = "highp")]
    High,
}

impl Precision {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Low => "lowp",
            Self::Medium => "mediump",
            Self::High => "highp",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).identifier())
    }
}

impl FromStr for Precision {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(Self::ALL, Self::identifier, "precision", s)
    }
}

const PRECISION_SLOT: &str = "%PRECISION%";
const STEP_SLOT: &str = "%STEP%";
const CAP_SLOT: &str = "%CAP%";
const GUARD_SLOT: &str = "%GUARD%";

/// Matches the CPU step returning infinity when `z` has no inverse.
const ZERO_INVERSE_GUARD: &str = "if (dot(z, z) == 0.0) {
      z = vec2(1e30);
      iter += 1;
      break;
    }
    ";

const VERTEX_TEMPLATE: &str = r"attribute vec2 aCorner;

uniform mat2 uRotationMatrix;
uniform float uScale;
uniform vec2 uCenter;
uniform float uAspect;

varying vec2 vPosition;

void main(void) {
  gl_Position = vec4(aCorner.x / uAspect, aCorner.y, 0.0, 1.0);
  vPosition = uRotationMatrix * (aCorner * uScale) + uCenter;
}
";

const FRAGMENT_TEMPLATE: &str = r"precision %PRECISION% float;

uniform int uMaxIter;
uniform float uEscapeTol;
uniform bool uColourByIndex;
uniform bool uJulia;
uniform vec2 uJuliaConstant;
uniform sampler2D uPalette;
varying vec2 vPosition;

#define cmul(a,b) (vec2((a).x * (b).x - (a).y * (b).y, (a).x * (b).y + (a).y * (b).x))
#define cinv(a) (vec2((a).x, -(a).y) / dot((a), (a)))

void main() {
  vec2 z = vPosition;
  vec2 c = uJulia ? uJuliaConstant : vPosition;

  int iter = 0;
  for (int i = 0; i < %CAP%; i++) {
    %GUARD%z = %STEP%;
    iter += 1;

    if (dot(z, z) >= uEscapeTol || iter >= uMaxIter) break;
  }

  float index;
  if (uColourByIndex) {
    index = iter >= uMaxIter ? 0.0 : float(iter) / float(uMaxIter);
  } else {
    float magnitude = dot(z, z) / uEscapeTol;
    index = magnitude < 1.0 ? pow(magnitude, 0.125) : 0.0;
  }

  gl_FragColor = texture2D(uPalette, vec2(index, 0.5));
}
";

/// Vertex and fragment shader text for one variant, generated once at
/// initialization. Changing variant or precision means regenerating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSource {
    pub vertex: String,
    pub fragment: String,
}

impl KernelSource {
    pub fn generate(variant: FractalVariant, precision: Precision) -> Result<Self, KernelSourceError> {
        let fragment = FRAGMENT_TEMPLATE
            .replace(PRECISION_SLOT, precision.identifier())
            .replace(CAP_SLOT, &HARD_ITERATION_CAP.to_string())
            .replace(GUARD_SLOT, step_guard(variant))
            .replace(STEP_SLOT, step_expression(variant));
        let vertex = VERTEX_TEMPLATE.to_string();

        ensure_filled("vertex", &vertex)?;
        ensure_filled("fragment", &fragment)?;

        Ok(Self { vertex, fragment })
    }
}

fn ensure_filled(stage: &'static str, source: &str) -> Result<(), KernelSourceError> {
    match source.find('%') {
        Some(position) => Err(KernelSourceError::UnfilledSlot {
            stage,
            context: source[position..].chars().take(16).collect(),
        }),
        None => Ok(()),
    }
}

fn step_guard(variant: FractalVariant) -> &'static str {
    match variant {
        FractalVariant::Rk3Twist => ZERO_INVERSE_GUARD,
        _ => "",
    }
}

/// The recurrence `f(z, c)` as a GLSL expression over `vec2`.
#[must_use]
pub const fn step_expression(variant: FractalVariant) -> &'static str {
    match variant {
        FractalVariant::Mandelbrot => "cmul(z, z) + c",
        FractalVariant::Rk1 => "z + c",
        FractalVariant::Rk2 => "0.5 * cmul(z, z) + z + c",
        FractalVariant::Rk3 => "cmul(cmul(z, z), z) / 6.0 + 0.5 * cmul(z, z) + z + c",
        FractalVariant::Rk4 => {
            "cmul(cmul(z, z), cmul(z, z)) / 24.0 + cmul(cmul(z, z), z) / 6.0 + 0.5 * cmul(z, z) + z + c"
        }
        FractalVariant::Rk3Twist => {
            "3.0 * cinv(z) + cmul(cmul(z, z), z) / 6.0 + 0.5 * cmul(z, z) + z + c"
        }
    }
}
