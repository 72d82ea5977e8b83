//! End-to-end inheritance scenarios over small instance trees.

use styleline::{
    resolve_inherited_style, resolve_inherited_style_builtin, InheritableSet, Instance,
    InstanceId, PropertyConfigs, StyleProperty, StyleValue,
};

/// Root(color: red) → Mid(color: inherit, fontSize: 12px) → Leaf.
fn sample_tree() -> Instance {
    Instance::new("root")
        .with_style(StyleProperty::Color, "red")
        .with_child(
            Instance::new("mid")
                .with_style(StyleProperty::Color, "inherit")
                .with_style(StyleProperty::FontSize, "12px")
                .with_child(Instance::new("leaf")),
        )
}

#[test]
fn leaf_inherits_color_from_root_and_font_size_from_mid() {
    let tree = sample_tree();
    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("leaf"));

    let color = inherited.get(StyleProperty::Color).expect("color resolved");
    assert_eq!(color.instance.id.as_str(), "root");
    assert_eq!(color.value, &StyleValue::from("red"));

    let font_size = inherited
        .get(StyleProperty::FontSize)
        .expect("fontSize resolved");
    assert_eq!(font_size.instance.id.as_str(), "mid");
    assert_eq!(font_size.value, &StyleValue::from("12px"));

    assert_eq!(inherited.len(), 2);
}

#[test]
fn mid_inherits_only_color() {
    // fontSize is set on mid itself; its own style never feeds its
    // *inherited* style.
    let tree = sample_tree();
    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("mid"));

    let color = inherited.get(StyleProperty::Color).expect("color resolved");
    assert_eq!(color.instance.id.as_str(), "root");
    assert!(!inherited.contains(StyleProperty::FontSize));
    assert_eq!(inherited.len(), 1);
}

#[test]
fn unknown_target_resolves_to_empty() {
    let tree = sample_tree();
    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("missing"));
    assert!(inherited.is_empty());
}

#[test]
fn root_target_resolves_to_empty() {
    let tree = sample_tree();
    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("root"));
    assert!(inherited.is_empty());
}

#[test]
fn resolution_works_on_deserialized_project_data() {
    let tree: Instance = serde_json::from_str(
        r#"{
            "id": "body",
            "style": { "color": "red", "width": "960px" },
            "children": [
                "leading text",
                {
                    "id": "section",
                    "style": { "color": "inherit", "lineHeight": 1.5 },
                    "children": [
                        { "id": "paragraph", "children": ["hello"] }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("paragraph"));

    assert_eq!(
        inherited
            .get(StyleProperty::Color)
            .map(|entry| entry.instance.id.as_str()),
        Some("body")
    );
    assert_eq!(
        inherited
            .get(StyleProperty::LineHeight)
            .map(|entry| entry.instance.id.as_str()),
        Some("section")
    );
    // width is not inheritable; it never appears.
    assert!(!inherited.contains(StyleProperty::Width));
}

#[test]
fn yaml_config_drives_a_custom_registry_end_to_end() {
    let configs = PropertyConfigs::from_yaml(
        "width:\n  inherited: true\ncolor:\n  inherited: false\n",
    )
    .unwrap();
    let inheritable = InheritableSet::from_configs(&configs);

    let tree = Instance::new("root")
        .with_style(StyleProperty::Width, "100px")
        .with_style(StyleProperty::Color, "red")
        .with_child(Instance::new("leaf"));

    let inherited = resolve_inherited_style(&tree, &InstanceId::new("leaf"), &inheritable);

    assert!(inherited.contains(StyleProperty::Width));
    assert!(!inherited.contains(StyleProperty::Color));
}

#[test]
fn deep_chains_resolve_without_recursion_limits() {
    // A deliberately deep linear chain; the iterative walk must not care.
    let mut node = Instance::new("target");
    for depth in 0..2_000 {
        node = Instance::new(format!("level-{depth}")).with_child(node);
    }
    let tree = Instance::new("root")
        .with_style(StyleProperty::Color, "red")
        .with_child(node);

    let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("target"));
    assert_eq!(
        inherited
            .get(StyleProperty::Color)
            .map(|entry| entry.instance.id.as_str()),
        Some("root")
    );
}
