use qplan::geom::rect;
use qplan::{PlanDocument, PlanOptions, VisualElement, VisualTree, render_plan};
use serde_json::json;

const PLAN_XML: &str = r#"<Root>
  <Stmt StatementId="1">
    <RelOp NodeId="0" EstimateRows="42" AvgRowSize="16"/>
  </Stmt>
</Root>"#;

#[test]
fn defaults_enable_tooltips() {
    assert_eq!(PlanOptions::default(), PlanOptions { tooltips: true });
}

#[test]
fn recognized_options_override_defaults() {
    let options = PlanOptions::from_value(&json!({ "tooltips": false }));
    assert!(!options.tooltips);
}

#[test]
fn unrecognized_options_are_ignored() {
    let options = PlanOptions::from_value(&json!({
        "tooltips": true,
        "theme": "dark",
        "zoom": 2,
    }));
    assert_eq!(options, PlanOptions { tooltips: true });

    // Wrong-typed values for known keys are ignored too.
    let options = PlanOptions::from_value(&json!({ "tooltips": "yes" }));
    assert!(options.tooltips);
}

#[test]
fn render_plan_lays_out_the_diagram_end_to_end() {
    let plan = PlanDocument::parse(PLAN_XML).unwrap();

    let mut tree = VisualTree::new();
    let root = tree.push(
        None,
        VisualElement::new().class("qp-root").rect(rect(0.0, 0.0, 640.0, 480.0)),
    );
    let statement = tree.push(Some(root), VisualElement::new().attr("data-statement-id", "1"));

    // Statement box with one operator child, in the contracted nesting.
    let entry = tree.push(Some(statement), VisualElement::new());
    let row = tree.push(Some(entry), VisualElement::new().class("qp-tr"));
    let cell = tree.push(Some(row), VisualElement::new());
    tree.push(
        Some(cell),
        VisualElement::new().class("qp-node").rect(rect(10.0, 100.0, 80.0, 40.0)),
    );
    let kids = tree.push(Some(row), VisualElement::new());

    let child_entry = tree.push(Some(kids), VisualElement::new());
    let child_row = tree.push(Some(child_entry), VisualElement::new().class("qp-tr"));
    let child_cell = tree.push(Some(child_row), VisualElement::new());
    tree.push(
        Some(child_cell),
        VisualElement::new()
            .class("qp-node")
            .attr("data-node-id", "0")
            .rect(rect(200.0, 100.0, 80.0, 40.0)),
    );
    tree.push(Some(child_row), VisualElement::new());

    let rendered = render_plan(&tree, &plan, &PlanOptions::default()).unwrap();

    assert!(rendered.tooltips);
    assert_eq!(rendered.connectors.len(), 1);
    let connector = &rendered.connectors[0];
    assert_eq!(connector.statement_id, "1");
    assert_eq!(connector.node_id.as_deref(), Some("0"));
    // ln(42) ~ 3.7
    assert_eq!(connector.thickness, 3.0);
    assert_eq!(rendered.paddings.len(), 1);
    assert_eq!(rendered.paddings[0].padding_right, 3.0);
}
