//! Conversion of numeric org unit levels into level uids

use serde::{Deserialize, Serialize};

use crate::dimensions::DIMENSION_ID_ORGUNIT;
use crate::model::{AxisId, Visualization};

/// Prefix of org unit items that select a whole level
pub const LEVEL_PREFIX: &str = "LEVEL-";

/// An organisation unit level as known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitLevel {
    pub id: String,
    pub level: u32,
}

/// Rewrite `LEVEL-<n>` org unit items into `LEVEL-<uid>`
///
/// Items referring to a level that is not in `levels` are left untouched.
pub fn convert_ou_levels_to_uids(levels: &[OrgUnitLevel], visualization: &mut Visualization) {
    if levels.is_empty() {
        return;
    }

    for axis in AxisId::ALL {
        let org_units = visualization
            .axis_mut(axis)
            .iter_mut()
            .filter(|dim| dim.dimension == DIMENSION_ID_ORGUNIT);

        for dimension in org_units {
            let Some(items) = dimension.items.as_mut() else {
                continue;
            };

            for item in items.iter_mut() {
                let Some(level) = item
                    .id
                    .strip_prefix(LEVEL_PREFIX)
                    .and_then(|rest| rest.parse::<u32>().ok())
                else {
                    continue;
                };

                match levels.iter().find(|l| l.level == level) {
                    Some(found) => item.id = format!("{LEVEL_PREFIX}{}", found.id),
                    None => tracing::warn!("No org unit level {} to resolve {}", level, item.id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, VisualizationType};

    #[test]
    fn test_numeric_levels_are_resolved() {
        let levels = vec![
            OrgUnitLevel { id: "wjP19dkFeIk".to_string(), level: 2 },
            OrgUnitLevel { id: "tTUf91fCytl".to_string(), level: 3 },
        ];

        let mut vis = Visualization::new(VisualizationType::Column);
        vis.filters
            .push(Dimension::with_item_ids("ou", ["ImspTQPwCqd", "LEVEL-3", "LEVEL-7", "LEVEL-tTUf91fCytl"]));
        vis.rows.push(Dimension::with_item_ids("pe", ["LEVEL-2"]));

        convert_ou_levels_to_uids(&levels, &mut vis);

        let ids: Vec<&str> = vis.filters[0].items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ImspTQPwCqd", "LEVEL-tTUf91fCytl", "LEVEL-7", "LEVEL-tTUf91fCytl"]
        );
        // only the org unit dimension is touched
        assert_eq!(vis.rows[0].items()[0].id, "LEVEL-2");
    }
}
