//! Memory-efficient label matrix representation

use std::mem;
use ndarray::ArrayView2;
use serde::{Serialize, Deserialize};

/// Compressed sparse row representation of a binary label matrix of shape
/// (n_samples, n_labels)
///
/// Each row holds the sorted, deduplicated label indices assigned to one
/// sample. Values are presence indicators only; multiplicity is not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparseLabelMatrix {
    /// Number of samples (rows)
    pub n_samples: usize,

    /// Number of labels (columns)
    pub n_labels: usize,

    /// Offset array: offsets[i] to offsets[i+1] delimits the label range
    /// for sample i
    pub offsets: Vec<u32>,

    /// Concatenated per-sample label indices, sorted within each sample
    pub labels: Vec<u32>,
}

impl SparseLabelMatrix {
    /// Create an empty matrix with pre-allocated capacity
    pub fn with_capacity(n_samples: usize, n_labels: usize, nnz: usize) -> Self {
        let mut offsets = Vec::with_capacity(n_samples + 1);
        offsets.push(0);
        Self {
            n_samples: 0,
            n_labels,
            offsets,
            labels: Vec::with_capacity(nnz),
        }
    }

    /// Build a matrix from per-sample label index lists
    ///
    /// Rows are sorted and deduplicated; label indices are not range-checked
    /// against `n_labels`.
    pub fn from_rows(n_labels: usize, rows: &[Vec<u32>]) -> Self {
        let nnz = rows.iter().map(|row| row.len()).sum();
        let mut matrix = Self::with_capacity(rows.len(), n_labels, nnz);

        for row in rows {
            let mut row = row.clone();
            row.sort_unstable();
            row.dedup();
            matrix.push_sample(&row);
        }

        matrix
    }

    /// Build a matrix from a dense 0/1 indicator array
    pub fn from_dense(dense: ArrayView2<u8>) -> Self {
        let (n_samples, n_labels) = dense.dim();
        let mut matrix = Self::with_capacity(n_samples, n_labels, 0);

        for sample in dense.rows() {
            let row: Vec<u32> = sample
                .iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(label, _)| label as u32)
                .collect();
            matrix.push_sample(&row);
        }

        matrix
    }

    /// Append one sample's sorted label indices
    pub fn push_sample(&mut self, labels: &[u32]) {
        self.labels.extend_from_slice(labels);
        self.offsets.push(self.labels.len() as u32);
        self.n_samples += 1;
    }

    /// Label indices assigned to a sample
    pub fn sample_labels(&self, sample: usize) -> &[u32] {
        let start = self.offsets[sample] as usize;
        let end = self.offsets[sample + 1] as usize;
        &self.labels[start..end]
    }

    /// Matrix shape as (n_samples, n_labels)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_samples, self.n_labels)
    }

    /// Number of stored label assignments
    pub fn nnz(&self) -> usize {
        self.labels.len()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let labels = self.labels.capacity() * mem::size_of::<u32>();

        base + offsets + labels
    }
}
