//! Axis and grid types for parameter sweeps.

use serde::{Deserialize, Serialize};

use crate::config::AxisRange;
use crate::model::ScenarioState;

/// Scenario field varied along a sweep axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepField {
    HomeShare,
    AnnualKm,
    HomePrice,
    PublicPrice,
    Petrol,
    Losses,
    Maint,
}

impl SweepField {
    /// Copy of `base` with this field set to `value`, clamped into its range.
    ///
    /// Integer fields are rounded to the nearest whole number.
    #[must_use]
    pub fn apply(self, base: &ScenarioState, value: f64) -> ScenarioState {
        let mut state = base.clone();
        match self {
            SweepField::HomeShare => state.home_share = value.round() as u32,
            SweepField::AnnualKm => state.annual_km = value.round() as u32,
            SweepField::HomePrice => state.home_price = value,
            SweepField::PublicPrice => state.public_price = value,
            SweepField::Petrol => state.petrol = value,
            SweepField::Losses => state.losses = value,
            SweepField::Maint => state.maint = value,
        }
        state.clamped()
    }
}

/// One dimension of a sweep: the field to vary and the values it takes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub field: SweepField,
    pub values: Vec<f64>,
}

impl SweepAxis {
    pub fn new(field: SweepField, values: Vec<f64>) -> Self {
        Self { field, values }
    }

    pub fn from_range(field: SweepField, range: &AxisRange) -> Self {
        Self::new(field, range.values())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scenario at one grid point: `base` with every axis override applied in order
pub fn point_state(base: &ScenarioState, axes: &[SweepAxis], indices: &[usize]) -> ScenarioState {
    axes.iter()
        .zip(indices)
        .fold(base.clone(), |state, (axis, &idx)| {
            axis.field.apply(&state, axis.values[idx])
        })
}

/// N-dimensional grid storage with flat backing array and stride-based indexing.
///
/// Stores values in row-major order where the last dimension varies fastest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid<T> {
    /// The data stored in row-major order
    data: Vec<T>,
    /// Shape of each dimension (e.g., [21, 11] for a 21x11 grid)
    shape: Vec<usize>,
    /// Precomputed strides for index calculation
    strides: Vec<usize>,
}

impl<T> SweepGrid<T> {
    /// Build a grid by evaluating `f` at every index, in row-major order
    pub fn from_fn(shape: Vec<usize>, f: impl Fn(&[usize]) -> T) -> Self {
        let data = GridIndices::new(&shape).map(|indices| f(&indices)).collect();
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Parallel [`from_fn`](Self::from_fn); identical output
    #[cfg(feature = "parallel")]
    pub fn par_from_fn<F>(shape: Vec<usize>, f: F) -> Self
    where
        T: Send,
        F: Fn(&[usize]) -> T + Sync,
    {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};

        let indices: Vec<Vec<usize>> = GridIndices::new(&shape).collect();
        let data = indices.into_par_iter().map(|idx| f(&idx)).collect();
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Get the shape of the grid
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert multi-dimensional indices to flat index
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, (&idx, &size)) in indices.iter().zip(&self.shape).enumerate() {
            if idx >= size {
                return None;
            }
            flat += idx * self.strides[i];
        }
        Some(flat)
    }

    /// Get a reference to the value at the given indices
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).map(|i| &self.data[i])
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Contiguous run of values with the first index fixed.
    /// For a 2D grid this is one row.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        let rows = *self.shape.first()?;
        if index >= rows {
            return None;
        }
        let stride = self.strides[0];
        Some(&self.data[index * stride..(index + 1) * stride])
    }
}

/// Compute strides for row-major order
fn compute_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return Vec::new();
    }
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len() - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Iterator over all indices in a grid, row-major
struct GridIndices {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl GridIndices {
    fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            done: shape.is_empty() || shape.contains(&0),
        }
    }
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Increment indices (row-major: last dimension varies fastest)
        for i in (0..self.shape.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.shape[i] {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
            }
        }

        Some(result)
    }
}
