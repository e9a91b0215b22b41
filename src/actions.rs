//! Conversion between the two shapes of an actions mapping.
//!
//! Locally, automation actions live in a map from the string form of an
//! alert status code to an action id. The remote API instead exchanges an
//! ordered list of [`ActionRef`] pairs. These functions convert between the
//! two shapes.

use std::collections::BTreeMap;

use certwatch_types::{ActionRef, AlertStatus};

use crate::error::ApiError;

/// Convert the local map shape into the list the remote API expects.
///
/// Entries are emitted in ascending order of the string form of their
/// status key, so `"10"` sorts before `"2"`. A key that does not parse as
/// an integer fails the whole conversion with
/// [`ApiError::InvalidActionKey`].
pub fn refs_from_map(actions: &BTreeMap<String, String>) -> Result<Vec<ActionRef>, ApiError> {
    let mut refs = Vec::with_capacity(actions.len());
    for (key, action_id) in actions {
        let status = key
            .parse::<AlertStatus>()
            .map_err(|_| ApiError::InvalidActionKey { key: key.clone() })?;
        refs.push(ActionRef::new(action_id.clone(), status));
    }
    Ok(refs)
}

/// Convert the remote list shape back into the local map.
///
/// Keys are the string form of each status code. When the list carries the
/// same status twice, the later entry wins.
pub fn map_from_refs(refs: &[ActionRef]) -> BTreeMap<String, String> {
    let mut actions = BTreeMap::new();
    for action in refs {
        actions.insert(action.alert_status.to_string(), action.action_id.clone());
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn map_converts_to_ordered_refs() {
        let refs = refs_from_map(&map(&[("0", "act-down"), ("2", "act-trouble")])).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].action_id, "act-down");
        assert_eq!(refs[0].alert_status, AlertStatus::DOWN);
        assert_eq!(refs[1].alert_status, AlertStatus::TROUBLE);
    }

    #[test]
    fn order_follows_string_keys_not_numeric_values() {
        let refs = refs_from_map(&map(&[("2", "b"), ("10", "a")])).unwrap();
        // Lexicographically "10" < "2", so status 10 comes first.
        assert_eq!(refs[0].alert_status, AlertStatus::new(10));
        assert_eq!(refs[1].alert_status, AlertStatus::TROUBLE);
    }

    #[test]
    fn parseable_map_round_trips_exactly() {
        let original = map(&[("0", "act-down"), ("10", "act-ten"), ("2", "act-trouble")]);
        let refs = refs_from_map(&original).unwrap();
        assert_eq!(map_from_refs(&refs), original);
    }

    #[test]
    fn non_numeric_key_rejects_whole_map() {
        let err = refs_from_map(&map(&[("0", "act-down"), ("down", "act-x")])).unwrap_err();
        match err {
            ApiError::InvalidActionKey { key } => assert_eq!(key, "down"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn refs_convert_back_to_map() {
        let refs = vec![
            ActionRef::new("act-down", AlertStatus::DOWN),
            ActionRef::new("act-critical", AlertStatus::CRITICAL),
        ];
        let actions = map_from_refs(&refs);
        assert_eq!(actions, map(&[("0", "act-down"), ("4", "act-critical")]));
    }

    #[test]
    fn later_duplicate_status_wins() {
        let refs = vec![
            ActionRef::new("first", AlertStatus::TROUBLE),
            ActionRef::new("second", AlertStatus::TROUBLE),
        ];
        let actions = map_from_refs(&refs);
        assert_eq!(actions, map(&[("2", "second")]));
    }

    #[test]
    fn empty_map_round_trips() {
        let refs = refs_from_map(&BTreeMap::new()).unwrap();
        assert!(refs.is_empty());
        assert!(map_from_refs(&refs).is_empty());
    }
}
