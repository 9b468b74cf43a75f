use super::Layout;
use crate::dimensions::DIMENSION_ID_PERIOD;
use crate::error::ValidationError;
use crate::model::{Dimension, VisualizationType};

/// An axis is valid when its first dimension carries at least one item.
/// Later dimensions are not inspected.
pub fn is_axis_valid(axis: &[Dimension]) -> bool {
    axis.first().is_some_and(Dimension::is_valid)
}

fn validate_axis(axis: &[Dimension], error: ValidationError) -> Result<(), ValidationError> {
    if is_axis_valid(axis) {
        Ok(())
    } else {
        Err(error)
    }
}

fn validate_dimension(
    dimension: Option<&Dimension>,
    error: ValidationError,
) -> Result<(), ValidationError> {
    match dimension {
        Some(dim) if dim.is_valid() => Ok(()),
        _ => Err(error),
    }
}

fn validate_default_layout(layout: &Layout<'_>) -> Result<(), ValidationError> {
    validate_axis(layout.columns, ValidationError::MissingSeries)?;
    validate_axis(layout.rows, ValidationError::MissingCategory)?;
    validate_dimension(
        layout.find_dimension(DIMENSION_ID_PERIOD),
        ValidationError::MissingPeriod,
    )
}

fn validate_pie_layout(layout: &Layout<'_>) -> Result<(), ValidationError> {
    validate_axis(layout.rows, ValidationError::MissingCategory)?;
    validate_axis(layout.filters, ValidationError::MissingFilter)?;
    validate_dimension(
        layout.find_dimension(DIMENSION_ID_PERIOD),
        ValidationError::MissingPiePeriod,
    )
}

fn validate_year_over_year_layout(layout: &Layout<'_>) -> Result<(), ValidationError> {
    if layout.yearly_series.and_then(|series| series.first()).is_none() {
        return Err(ValidationError::MissingSeriesPeriod);
    }

    validate_axis(layout.rows, ValidationError::MissingCategoryPeriod)?;
    validate_axis(layout.columns, ValidationError::MissingData)
}

/// Check that a layout can be rendered as its chart type
pub fn validate_layout(layout: &Layout<'_>) -> Result<(), ValidationError> {
    let result = match layout.vis_type {
        VisualizationType::Pie => validate_pie_layout(layout),
        VisualizationType::YearOverYearLine | VisualizationType::YearOverYearColumn => {
            validate_year_over_year_layout(layout)
        }
        _ => validate_default_layout(layout),
    };

    if let Err(error) = &result {
        tracing::debug!("Layout for {} rejected: {}", layout.vis_type, error);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dx() -> Dimension {
        Dimension::with_item_ids("dx", ["d1"])
    }

    fn pe() -> Dimension {
        Dimension::with_item_ids("pe", ["LAST_12_MONTHS"])
    }

    fn ou() -> Dimension {
        Dimension::with_item_ids("ou", ["USER_ORGUNIT"])
    }

    fn layout<'a>(
        vis_type: VisualizationType,
        columns: &'a [Dimension],
        rows: &'a [Dimension],
        filters: &'a [Dimension],
    ) -> Layout<'a> {
        Layout {
            vis_type,
            columns,
            rows,
            filters,
            yearly_series: None,
        }
    }

    #[test]
    fn test_axis_validity_only_checks_first_dimension() {
        assert!(!is_axis_valid(&[]));
        assert!(!is_axis_valid(&[Dimension::bare("dx")]));
        assert!(!is_axis_valid(&[Dimension::new("dx", Vec::new())]));
        assert!(is_axis_valid(&[dx(), Dimension::bare("ou")]));
        assert!(!is_axis_valid(&[Dimension::bare("ou"), dx()]));
    }

    #[test]
    fn test_default_layout_rules_in_order() {
        let vis_type = VisualizationType::Column;

        let err = validate_layout(&layout(vis_type, &[], &[pe()], &[])).unwrap_err();
        assert_eq!(err, ValidationError::MissingSeries);

        let err = validate_layout(&layout(vis_type, &[dx()], &[], &[pe()])).unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);

        let err = validate_layout(&layout(vis_type, &[dx()], &[ou()], &[])).unwrap_err();
        assert_eq!(err, ValidationError::MissingPeriod);

        assert!(validate_layout(&layout(vis_type, &[dx()], &[ou()], &[pe()])).is_ok());
        assert!(validate_layout(&layout(vis_type, &[dx()], &[pe()], &[])).is_ok());
    }

    #[test]
    fn test_period_without_items_is_rejected() {
        let columns = [dx()];
        let rows = [ou()];
        let filters = [Dimension::bare("pe")];
        let err = validate_layout(&layout(VisualizationType::Line, &columns, &rows, &filters))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingPeriod);
    }

    #[test]
    fn test_first_matching_period_decides() {
        // an empty pe on columns shadows a valid pe on filters
        let columns = [dx(), Dimension::bare("pe")];
        let rows = [ou()];
        let filters = [pe()];
        let err = validate_layout(&layout(VisualizationType::Bar, &columns, &rows, &filters))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingPeriod);
    }

    #[test]
    fn test_pie_layout() {
        let vis_type = VisualizationType::Pie;

        let err = validate_layout(&layout(vis_type, &[dx()], &[], &[pe()])).unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);

        let err = validate_layout(&layout(vis_type, &[], &[dx()], &[])).unwrap_err();
        assert_eq!(err, ValidationError::MissingFilter);

        let err = validate_layout(&layout(vis_type, &[], &[dx()], &[ou()])).unwrap_err();
        assert_eq!(err, ValidationError::MissingPiePeriod);
        assert_eq!(
            err.to_string(),
            "Please add at least one period as Category or Filter"
        );

        assert!(validate_layout(&layout(vis_type, &[], &[dx()], &[pe()])).is_ok());
    }

    #[test]
    fn test_year_over_year_layout() {
        let columns = [dx()];
        let rows = [Dimension::with_item_ids("pe", ["MONTHS_THIS_YEAR"])];
        let series = vec!["THIS_YEAR".to_string(), "LAST_YEAR".to_string()];

        let mut yoy = layout(VisualizationType::YearOverYearLine, &columns, &rows, &[]);
        assert_eq!(
            validate_layout(&yoy).unwrap_err(),
            ValidationError::MissingSeriesPeriod
        );

        yoy.yearly_series = Some(&[][..]);
        assert_eq!(
            validate_layout(&yoy).unwrap_err(),
            ValidationError::MissingSeriesPeriod
        );

        yoy.yearly_series = Some(series.as_slice());
        assert!(validate_layout(&yoy).is_ok());

        yoy.vis_type = VisualizationType::YearOverYearColumn;
        yoy.rows = &[];
        assert_eq!(
            validate_layout(&yoy).unwrap_err(),
            ValidationError::MissingCategoryPeriod
        );

        yoy.rows = &rows;
        yoy.columns = &[];
        let err = validate_layout(&yoy).unwrap_err();
        assert_eq!(err, ValidationError::MissingData);
        assert_ne!(err.to_string(), ValidationError::MissingSeries.to_string());
    }
}
