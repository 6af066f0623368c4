//! End-to-end editing scenarios over a small menu tree.

use permgrid_matrix::MatrixState;
use permgrid_tree::resource_keys;
use permgrid_types::{Effect, Resource, SaveItem};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn tree() -> Vec<Resource> {
    vec![Resource::menu("menu.a", "A").with_children(vec![Resource::menu("menu.a.b", "B")])]
}

#[test]
fn toggle_twice_then_save_and_commit() {
    let codes = ["VIEW", "EDIT"];
    let mut state = MatrixState::default();

    assert_eq!(state.toggle("menu.a.b", "VIEW"), Effect::Allow);
    assert_eq!(state.toggle("menu.a.b", "VIEW"), Effect::Deny);
    assert_eq!(state.change_count(), 1);
    assert_eq!(
        state.generate_save_payload(&codes).items,
        vec![SaveItem {
            resource_key: "menu.a.b".into(),
            permission_code: "VIEW".into(),
            effect: Effect::Deny,
        }]
    );

    state.commit();
    assert_eq!(state.change_count(), 0);
}

#[test]
fn deny_column_over_two_resources() {
    let keys = resource_keys(&tree());
    assert_eq!(keys, vec!["menu.a", "menu.a.b"]);
    let mut state = MatrixState::default();
    state.apply_column("DELETE", &keys, Effect::Deny);
    assert_eq!(state.change_count(), 2);
    let expected: BTreeSet<String> = ["menu.a".to_string(), "menu.a.b".to_string()].into();
    assert_eq!(state.changed_keys(), expected);
}

#[test]
fn set_then_unset_is_clean() {
    let mut state = MatrixState::default();
    state.set_effect("menu.a", "VIEW", Effect::Allow);
    state.set_effect("menu.a", "VIEW", Effect::Unset);
    assert_eq!(state.change_count(), 0);
}
