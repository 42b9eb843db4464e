#![deny(unsafe_code)]
//! 2D gradient (Perlin) noise generator.
//!
//! A [`GradientGrid`] holds one unit-length pseudo-random gradient vector per
//! lattice point; [`sample`] evaluates the scalar field at a pixel by dotting
//! the four surrounding gradients with corner-to-pixel displacements and
//! blending with a quintic-eased bilinear interpolation. Single-frequency
//! noise only — no octave summation, no simplex.
//!
//! The primary output is a raw scalar [`Field`] in ≈[-1, 1], which the
//! rendering pipeline tone-maps to grayscale pixels.

use glam::DVec2;
use noise_engine_core::ease::{fade, lerp};
use noise_engine_core::error::NoiseError;
use noise_engine_core::field::Field;
use noise_engine_core::params::{param_string, param_usize};
use noise_engine_core::prng::Xorshift64;
use noise_engine_core::Generator;
use serde_json::{json, Value};

/// Default lattice cell size in pixels.
const DEFAULT_CELL_SIZE: usize = 16;
/// Squared-length floor below which a raw gradient draw is resampled.
const DEGENERATE_EPS: f64 = 1e-12;

/// How the corner-to-pixel displacement enters the dot product.
///
/// The reference renderer normalizes the displacement to a unit direction
/// before dotting, which departs from canonical Perlin noise and changes the
/// statistical character of the field (values cluster toward the gradient
/// magnitudes instead of tapering to zero at corners). Canonical noise uses
/// the raw cell-relative displacement. Both are supported; `Normalized` is
/// the default because it reproduces the reference output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Displacement {
    /// Unit-direction displacement (reference behavior). A zero displacement
    /// at an exact lattice corner contributes 0.0.
    #[default]
    Normalized,
    /// Cell-relative displacement (canonical Perlin noise).
    Raw,
}

impl Displacement {
    /// Parses a mode name; recognizes `"normalized"` and `"raw"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normalized" => Some(Displacement::Normalized),
            "raw" => Some(Displacement::Raw),
            _ => None,
        }
    }

    /// The canonical parameter-string form of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Displacement::Normalized => "normalized",
            Displacement::Raw => "raw",
        }
    }
}

/// Tunable parameters for the Perlin generator.
#[derive(Debug, Clone, Copy)]
pub struct PerlinParams {
    /// Lattice cell size in pixels. Each cell spans `cell_size` pixels per axis.
    pub cell_size: usize,
    /// Displacement handling for the corner dot products.
    pub displacement: Displacement,
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            displacement: Displacement::default(),
        }
    }
}

impl PerlinParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Unknown displacement names fall back to the default mode, matching the
    /// tolerant behavior of the other param helpers.
    pub fn from_json(params: &Value) -> Self {
        let displacement = Displacement::from_name(&param_string(
            params,
            "displacement",
            Displacement::default().as_str(),
        ))
        .unwrap_or_default();
        Self {
            cell_size: param_usize(params, "cell_size", DEFAULT_CELL_SIZE),
            displacement,
        }
    }
}

/// Immutable grid of unit-length pseudo-random gradient vectors, one per
/// lattice point.
///
/// Built once from a seeded PRNG before any sampling, then read-only: pixel
/// evaluation shares the grid freely (no interior mutability, no locking).
#[derive(Debug, Clone)]
pub struct GradientGrid {
    cols: usize,
    rows: usize,
    vectors: Vec<DVec2>,
}

impl GradientGrid {
    /// Creates a `cols` x `rows` grid of random unit gradients.
    ///
    /// Consumes entropy from `rng`; two grids built from PRNGs in the same
    /// state are identical. Returns `NoiseError::InvalidDimensions` if either
    /// dimension is zero or the product overflows.
    pub fn new(cols: usize, rows: usize, rng: &mut Xorshift64) -> Result<Self, NoiseError> {
        if cols == 0 || rows == 0 {
            return Err(NoiseError::InvalidDimensions);
        }
        let len = cols
            .checked_mul(rows)
            .ok_or(NoiseError::InvalidDimensions)?;
        let vectors = (0..len).map(|_| random_unit(rng)).collect();
        Ok(Self {
            cols,
            rows,
            vectors,
        })
    }

    /// Creates a grid sized to cover every pixel of a `width` x `height`
    /// raster at the given cell size.
    ///
    /// Allocates `ceil(dim / cell_size) + 1` lattice points per axis so the
    /// rightmost/bottommost pixel's upper corner exists.
    pub fn for_image(
        width: usize,
        height: usize,
        cell_size: usize,
        rng: &mut Xorshift64,
    ) -> Result<Self, NoiseError> {
        if cell_size == 0 {
            return Err(NoiseError::InvalidCellSize(0));
        }
        if width == 0 || height == 0 {
            return Err(NoiseError::InvalidDimensions);
        }
        Self::new(
            width.div_ceil(cell_size) + 1,
            height.div_ceil(cell_size) + 1,
            rng,
        )
    }

    /// Creates a grid from explicit gradient vectors (row-major, `cols` per
    /// row). Vectors are expected to be unit length; none are normalized here.
    ///
    /// Returns `NoiseError::DimensionMismatch` if the vector count does not
    /// equal `cols * rows`.
    pub fn from_vectors(
        cols: usize,
        rows: usize,
        vectors: Vec<DVec2>,
    ) -> Result<Self, NoiseError> {
        if cols == 0 || rows == 0 {
            return Err(NoiseError::InvalidDimensions);
        }
        let expected = cols
            .checked_mul(rows)
            .ok_or(NoiseError::InvalidDimensions)?;
        if vectors.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                expected_w: cols,
                expected_h: rows,
                expected,
                got: vectors.len(),
            });
        }
        Ok(Self {
            cols,
            rows,
            vectors,
        })
    }

    /// Lattice points per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Lattice points per column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Read-only access to the stored gradients in row-major order.
    pub fn vectors(&self) -> &[DVec2] {
        &self.vectors
    }

    /// The gradient at lattice point `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the lattice point lies outside the grid. An out-of-range
    /// `col` would otherwise alias into the next row, so this is checked
    /// explicitly rather than left to slice indexing.
    pub fn corner(&self, col: usize, row: usize) -> DVec2 {
        assert!(
            col < self.cols && row < self.rows,
            "lattice corner ({col}, {row}) outside {}x{} gradient grid",
            self.cols,
            self.rows
        );
        self.vectors[row * self.cols + col]
    }

    /// Whether every pixel of a `width` x `height` raster can be sampled
    /// against this grid at the given cell size.
    pub fn covers(&self, width: usize, height: usize, cell_size: usize) -> bool {
        if width == 0 || height == 0 || cell_size == 0 {
            return false;
        }
        // The last pixel's upper corner is ((width-1)/cell + 1, ...).
        (width - 1) / cell_size + 1 < self.cols && (height - 1) / cell_size + 1 < self.rows
    }

    /// Checked form of the coverage precondition.
    ///
    /// Returns `NoiseError::OutOfCoverage` naming the worst pixel if the grid
    /// is too small for the raster.
    pub fn require_coverage(
        &self,
        width: usize,
        height: usize,
        cell_size: usize,
    ) -> Result<(), NoiseError> {
        if self.covers(width, height, cell_size) {
            Ok(())
        } else {
            Err(NoiseError::OutOfCoverage {
                x: width.saturating_sub(1),
                y: height.saturating_sub(1),
                cols: self.cols,
                rows: self.rows,
            })
        }
    }
}

/// Draws a unit-length gradient from two symmetric uniform components.
///
/// Degenerate draws (both components ~0, which would divide by zero during
/// normalization) are resampled rather than replaced with a fixed fallback,
/// so every stored gradient is an honest random direction.
fn random_unit(rng: &mut Xorshift64) -> DVec2 {
    loop {
        let v = DVec2::new(rng.next_symmetric(), rng.next_symmetric());
        if v.length_squared() > DEGENERATE_EPS {
            return v.normalize();
        }
    }
}

/// Dot product of one corner's gradient with the displacement from that
/// corner's pixel-space position `(cx*cell_size, cy*cell_size)` to the pixel.
fn corner_dot(
    grid: &GradientGrid,
    cx: usize,
    cy: usize,
    x: usize,
    y: usize,
    cell_size: usize,
    displacement: Displacement,
) -> f64 {
    let gradient = grid.corner(cx, cy);
    let offset = DVec2::new(
        x as f64 - (cx * cell_size) as f64,
        y as f64 - (cy * cell_size) as f64,
    );
    let d = match displacement {
        Displacement::Normalized => offset.normalize_or_zero(),
        Displacement::Raw => offset / cell_size as f64,
    };
    d.dot(gradient)
}

/// Evaluates the noise scalar at pixel `(x, y)`.
///
/// Locates the cell containing the pixel by integer division, computes the
/// four corner dot products, and blends them bilinearly with quintic-eased
/// fractional offsets. Result is in ≈[-1, 1] and continuous across cell
/// boundaries (adjacent cells share corner gradients).
///
/// Preconditions (fail fast, not recoverable): `cell_size > 0`, and the
/// pixel's cell corners must lie inside `grid` — see
/// [`GradientGrid::require_coverage`] for the checked form.
pub fn sample(
    grid: &GradientGrid,
    x: usize,
    y: usize,
    cell_size: usize,
    displacement: Displacement,
) -> f64 {
    let x0 = x / cell_size;
    let y0 = y / cell_size;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let sx = fade((x % cell_size) as f64 / cell_size as f64);
    let sy = fade((y % cell_size) as f64 / cell_size as f64);

    let n00 = corner_dot(grid, x0, y0, x, y, cell_size, displacement);
    let n10 = corner_dot(grid, x1, y0, x, y, cell_size, displacement);
    let ix0 = lerp(n00, n10, sx);

    let n01 = corner_dot(grid, x0, y1, x, y, cell_size, displacement);
    let n11 = corner_dot(grid, x1, y1, x, y, cell_size, displacement);
    let ix1 = lerp(n01, n11, sx);

    lerp(ix0, ix1, sy)
}

/// Evaluates the noise field for every pixel of a `width` x `height` raster.
///
/// The checked boundary around [`sample`]: validates the cell size and grid
/// coverage up front, then fills a [`Field`] one pixel at a time. Each pixel
/// depends only on the read-only grid, so the loop has no cross-pixel state.
pub fn rasterize(
    grid: &GradientGrid,
    width: usize,
    height: usize,
    cell_size: usize,
    displacement: Displacement,
) -> Result<Field, NoiseError> {
    if cell_size == 0 {
        return Err(NoiseError::InvalidCellSize(0));
    }
    grid.require_coverage(width, height, cell_size)?;

    let mut field = Field::new(width, height)?;
    let data = field.data_mut();
    for y in 0..height {
        for x in 0..width {
            data[y * width + x] = sample(grid, x, y, cell_size, displacement);
        }
    }
    Ok(field)
}

/// Perlin gradient-noise generator.
///
/// Bundles a PRNG seed with [`PerlinParams`]; each [`generate`](Generator::generate)
/// call rebuilds the gradient grid from the seed and rasterizes the field, so
/// repeated calls are bit-identical.
pub struct Perlin {
    seed: u64,
    params: PerlinParams,
}

impl Perlin {
    /// Creates a new Perlin generator.
    ///
    /// Returns `NoiseError::InvalidCellSize` if `params.cell_size` is zero.
    pub fn new(seed: u64, params: PerlinParams) -> Result<Self, NoiseError> {
        if params.cell_size == 0 {
            return Err(NoiseError::InvalidCellSize(0));
        }
        Ok(Self { seed, params })
    }

    /// Creates a Perlin generator from a JSON params object.
    pub fn from_json(seed: u64, json_params: &Value) -> Result<Self, NoiseError> {
        Self::new(seed, PerlinParams::from_json(json_params))
    }

    /// Lattice cell size in pixels.
    pub fn cell_size(&self) -> usize {
        self.params.cell_size
    }

    /// Displacement mode used for corner dot products.
    pub fn displacement(&self) -> Displacement {
        self.params.displacement
    }
}

impl Generator for Perlin {
    fn generate(&self, width: usize, height: usize) -> Result<Field, NoiseError> {
        let mut rng = Xorshift64::new(self.seed);
        let grid = GradientGrid::for_image(width, height, self.params.cell_size, &mut rng)?;
        rasterize(
            &grid,
            width,
            height,
            self.params.cell_size,
            self.params.displacement,
        )
    }

    fn params(&self) -> Value {
        json!({
            "cell_size": self.params.cell_size,
            "displacement": self.params.displacement.as_str(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "cell_size": {
                "type": "integer",
                "default": DEFAULT_CELL_SIZE,
                "min": 1,
                "max": 256,
                "description": "Lattice cell size in pixels"
            },
            "displacement": {
                "type": "string",
                "default": Displacement::default().as_str(),
                "values": ["normalized", "raw"],
                "description": "Corner displacement handling: unit-direction (reference) or cell-relative (canonical)"
            }
        })
    }
}
