use polars::prelude::{Column, DataType, PolarsResult};

/// Reads a column as optional floats, casting integer columns first.
pub(crate) fn float_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let casted = column.cast(&DataType::Float64)?;
    let values = casted.f64()?.into_iter().collect();
    Ok(values)
}

/// Reads a column of counts. Negative or fractional cells come back as `None`.
pub(crate) fn count_values(column: &Column) -> PolarsResult<Vec<Option<u64>>> {
    let casted = column.cast(&DataType::UInt64)?;
    let values = casted.u64()?.into_iter().collect();
    Ok(values)
}

pub(crate) fn string_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let casted = column.cast(&DataType::String)?;
    let values = casted
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}
