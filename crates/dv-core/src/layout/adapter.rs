//! Normalization of axis item lists received from the backend

use crate::dimensions::{self, ALL_DYNAMIC_DIMENSION_ITEMS, ALL_ITEMS_NAME};
use crate::model::{AxisId, Dimension, DimensionItem, Visualization};

fn adapt_dimension(dimension: &Dimension) -> Dimension {
    if !dimension.items().is_empty() {
        return dimension.clone();
    }

    let items = if dimensions::is_reserved(&dimension.dimension) {
        None
    } else {
        Some(vec![DimensionItem::named(
            ALL_DYNAMIC_DIMENSION_ITEMS,
            ALL_ITEMS_NAME,
        )])
    };

    Dimension {
        dimension: dimension.dimension.clone(),
        items,
    }
}

/// Give every dimension without items a usable item list
///
/// Dimensions that already have items are kept as they are. Empty data,
/// period, org unit and assigned-category dimensions get no item list;
/// any other empty dimension gets the "all items" placeholder.
pub fn adapt_axis_items(axis: &[Dimension]) -> Vec<Dimension> {
    axis.iter().map(adapt_dimension).collect()
}

/// Apply [`adapt_axis_items`] to all three axes in place
pub fn adapt_visualization_axes(visualization: &mut Visualization) {
    for axis in AxisId::ALL {
        let adapted = adapt_axis_items(visualization.axis(axis));
        *visualization.axis_mut(axis) = adapted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::RESERVED_DIMENSION_IDS;
    use proptest::prelude::*;

    #[test]
    fn test_items_are_kept() {
        let axis = vec![Dimension::with_item_ids("J5jldMd8OHv", ["a", "b"])];
        assert_eq!(adapt_axis_items(&axis), axis);
    }

    #[test]
    fn test_dynamic_dimension_gets_placeholder() {
        let axis = vec![
            Dimension::bare("J5jldMd8OHv"),
            Dimension::new("Bpx0589u8y0", Vec::new()),
        ];
        let adapted = adapt_axis_items(&axis);

        for dim in &adapted {
            assert_eq!(
                dim.items(),
                &[DimensionItem::named(ALL_DYNAMIC_DIMENSION_ITEMS, ALL_ITEMS_NAME)]
            );
        }
    }

    #[test]
    fn test_reserved_dimensions_stay_unresolved() {
        for id in RESERVED_DIMENSION_IDS {
            let adapted = adapt_axis_items(&[Dimension::new(id, Vec::new())]);
            assert_eq!(adapted[0].items, None, "{id} should not get a placeholder");
        }
    }

    fn dimension_strategy() -> impl Strategy<Value = Dimension> {
        let id = prop_oneof![
            Just("dx".to_string()),
            Just("pe".to_string()),
            Just("ou".to_string()),
            Just("co".to_string()),
            "[A-Za-z][A-Za-z0-9]{10}",
        ];
        let items = prop::option::of(prop::collection::vec("[a-z]{1,6}", 0..3));
        (id, items).prop_map(|(dimension, items)| Dimension {
            dimension,
            items: items.map(|ids| ids.into_iter().map(DimensionItem::new).collect()),
        })
    }

    proptest! {
        #[test]
        fn adapting_twice_changes_nothing(axis in prop::collection::vec(dimension_strategy(), 0..5)) {
            let once = adapt_axis_items(&axis);
            let twice = adapt_axis_items(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reserved_ids_never_get_placeholder(axis in prop::collection::vec(dimension_strategy(), 0..5)) {
            for (before, after) in axis.iter().zip(adapt_axis_items(&axis)) {
                if dimensions::is_reserved(&before.dimension) && before.items().is_empty() {
                    prop_assert!(after.items.is_none());
                }
                prop_assert_eq!(&before.dimension, &after.dimension);
            }
        }
    }
}
