// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: `plugins()` resolves exactly the active plugin names.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use wct_config::WctConfig;
use wct_context::Context;
use wct_test_utils::MockResolver;

/// A plugin entry paired with whether it should activate its plugin.
fn plugin_entry() -> impl Strategy<Value = (Value, bool)> {
    prop_oneof![
        Just((json!(false), false)),
        Just((json!(true), true)),
        Just((json!({}), true)),
        Just((json!({"disabled": true}), false)),
        Just((json!({"disabled": false}), true)),
        Just((json!({"disabled": true, "browsers": ["chrome"]}), false)),
        Just((json!({"browsers": ["chrome"]}), true)),
        Just((json!(null), false)),
        Just((json!(0), false)),
        Just((json!(""), false)),
        Just((json!("on"), true)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    #[test]
    fn resolves_exactly_the_active_names(
        entries in prop::collection::btree_map("[a-z][a-z0-9_-]{0,8}", plugin_entry(), 0..8)
    ) {
        let plugins: serde_json::Map<String, Value> = entries
            .iter()
            .map(|(name, (value, _))| (name.clone(), value.clone()))
            .collect();
        let expected: Vec<String> = entries
            .iter()
            .filter(|(_, (_, active))| *active)
            .map(|(name, _)| name.clone())
            .collect();

        let config: WctConfig = serde_json::from_value(json!({ "plugins": plugins })).unwrap();
        let resolver = Arc::new(MockResolver::new());
        let context: Context = Context::with_config(config, resolver.clone());

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (mut resolved, mut requested) = runtime.block_on(async {
            let resolved: Vec<String> = context
                .plugins()
                .await
                .unwrap()
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            (resolved, resolver.requested().await)
        });
        resolved.sort();
        requested.sort();

        prop_assert_eq!(&resolved, &expected);
        prop_assert_eq!(&requested, &expected);
        prop_assert_eq!(context.enabled_plugins(), expected);
    }
}

#[test]
fn entry_table_matches_config_semantics() {
    // Guard the strategy's expectations against the config model itself.
    let entries: BTreeMap<&str, Value> = BTreeMap::from([
        ("a", json!(false)),
        ("b", json!({"disabled": true})),
        ("c", json!({})),
    ]);
    let config: WctConfig = serde_json::from_value(json!({ "plugins": entries })).unwrap();
    assert_eq!(config.active_plugin_names().collect::<Vec<_>>(), vec!["c"]);
}
