//! Cache of display information for dimension items

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Display information for one dimension item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataItem {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_item_type: Option<String>,
}

impl MetadataItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            dimension_item_type: None,
        }
    }
}

/// Item id to display information
pub type Metadata = AHashMap<String, MetadataItem>;

/// Entries are only ever added; later values for a key win
pub fn reduce(state: &mut Metadata, action: &Action) {
    if let Action::AddMetadata(entries) = action {
        state.extend(entries.iter().map(|(id, item)| (id.clone(), item.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metadata(entries: &[(&str, &str)]) -> Metadata {
        entries
            .iter()
            .map(|(id, name)| (id.to_string(), MetadataItem::named(*name)))
            .collect()
    }

    #[test]
    fn test_default_state_is_untouched_by_other_actions() {
        let mut state = Metadata::default();
        reduce(&mut state, &Action::ClearSnackbar);
        assert!(state.is_empty());
    }

    #[test]
    fn test_add_metadata() {
        let mut state = metadata(&[("uid1", "Jethro Q. Walrustitty")]);
        let added = metadata(&[(
            "uid2",
            "Tarquin Fin-tim-lin-bin-whin-bim-lim-bus-stop-Ftang-Ftang-Ole-Biscuitbarrel",
        )]);

        reduce(&mut state, &Action::AddMetadata(added.clone()));

        let mut expected = metadata(&[("uid1", "Jethro Q. Walrustitty")]);
        expected.extend(added);
        assert_eq!(state, expected);
    }

    #[test]
    fn test_later_entries_win() {
        let mut state = metadata(&[("uid1", "Old")]);
        reduce(&mut state, &Action::AddMetadata(metadata(&[("uid1", "New")])));
        assert_eq!(state["uid1"].name, "New");
        assert_eq!(state.len(), 1);
    }

    proptest! {
        #[test]
        fn disjoint_merges_compose(
            a in prop::collection::hash_map("a[0-9]{1,4}", "[a-z ]{0,8}", 0..6),
            b in prop::collection::hash_map("b[0-9]{1,4}", "[a-z ]{0,8}", 0..6),
        ) {
            let to_metadata = |m: &std::collections::HashMap<String, String>| -> Metadata {
                m.iter().map(|(k, v)| (k.clone(), MetadataItem::named(v.clone()))).collect()
            };

            let mut stepwise = Metadata::default();
            reduce(&mut stepwise, &Action::AddMetadata(to_metadata(&a)));
            reduce(&mut stepwise, &Action::AddMetadata(to_metadata(&b)));

            let mut combined = to_metadata(&a);
            combined.extend(to_metadata(&b));
            let mut at_once = Metadata::default();
            reduce(&mut at_once, &Action::AddMetadata(combined));

            prop_assert_eq!(stepwise, at_once);
        }
    }
}
