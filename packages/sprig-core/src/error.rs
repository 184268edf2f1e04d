use thiserror::Error;

/// Validation failures raised by shape constructors and setters.
///
/// `InvalidPosition`, `InvalidColor` and `UnknownKey` reject values of the
/// wrong kind; `OutOfRange` rejects numbers below the field's minimum. A
/// failed setter leaves the previous value in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("position must be a finite 2D vector, got ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },

    #[error("invalid color value {0:?}")]
    InvalidColor(String),

    #[error("unknown key name {0:?}")]
    UnknownKey(String),

    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
    },
}

impl ShapeError {
    pub fn is_range_error(&self) -> bool {
        matches!(self, ShapeError::OutOfRange { .. })
    }
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<u32, ShapeError> {
    u32::try_from(value).map_err(|_| ShapeError::OutOfRange {
        field,
        value: value.into(),
        min: 0,
    })
}

pub(crate) fn positive(field: &'static str, value: i32) -> Result<u32, ShapeError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ShapeError::OutOfRange {
            field,
            value: value.into(),
            min: 1,
        }),
    }
}
