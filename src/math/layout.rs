//! Flat float-array layouts shared by every value type.
//!
//! A flat array of the wrong size never fails construction: a warning is
//! emitted and the caller substitutes its default value. The strict variant
//! backs the `TryFrom<&[f32]>` impls.

use tracing::warn;

use crate::error::LayoutError;

/// Reads exactly `N` floats from `values`.
///
/// Returns `None` and emits a warning when the length differs.
#[must_use]
pub(crate) fn read_flat<const N: usize>(type_name: &'static str, values: &[f32]) -> Option<[f32; N]> {
    let array = <[f32; N]>::try_from(values).ok();
    if array.is_none() {
        warn_size_mismatch(type_name, &[N], values.len());
    }
    array
}

/// Reads exactly `N` floats from `values`, or reports the mismatch.
pub(crate) fn strict_flat<const N: usize>(
    type_name: &'static str,
    expected: &'static [usize],
    values: &[f32],
) -> Result<[f32; N], LayoutError> {
    <[f32; N]>::try_from(values).map_err(|_| LayoutError::SizeMismatch {
        type_name,
        expected,
        given: values.len(),
    })
}

/// Emits the wrong-size diagnostic for `type_name`.
pub(crate) fn warn_size_mismatch(type_name: &'static str, expected: &[usize], given: usize) {
    warn!(
        type_name,
        expected = ?expected,
        given,
        "constructed from a flat array of the wrong size, using the default value"
    );
}
