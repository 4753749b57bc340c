use qplan_core::PlanDocument;
use qplan_render::error::Error;
use qplan_render::geom::rect;
use qplan_render::node::VisualNode;
use qplan_render::tree::{ElementId, VisualElement, VisualTree};

const PLAN_XML: &str = r#"<Root>
  <Stmt StatementId="1">
    <RelOp NodeId="0" EstimateRows="100" AvgRowSize="20">
      <RelOp NodeId="1" EstimateRows="3" AvgRowSize="8"/>
    </RelOp>
  </Stmt>
</Root>"#;

struct Operator {
    node: ElementId,
    kids: ElementId,
}

fn add_operator(
    tree: &mut VisualTree,
    container: ElementId,
    node_id: Option<&str>,
) -> Operator {
    let entry = tree.push(Some(container), VisualElement::new());
    let row = tree.push(Some(entry), VisualElement::new().class("qp-tr"));
    let cell = tree.push(Some(row), VisualElement::new());
    let mut element = VisualElement::new()
        .class("qp-node")
        .rect(rect(0.0, 0.0, 100.0, 40.0));
    if let Some(id) = node_id {
        element = element.attr("data-node-id", id);
    }
    let node = tree.push(Some(cell), element);
    let kids = tree.push(Some(row), VisualElement::new());
    Operator { node, kids }
}

fn build_tree() -> (VisualTree, Operator, Operator, Operator) {
    let mut tree = VisualTree::new();
    let root = tree.push(None, VisualElement::new().class("qp-root"));
    let statement = tree.push(
        Some(root),
        VisualElement::new().attr("data-statement-id", "1"),
    );
    let top = add_operator(&mut tree, statement, None);
    let op0 = add_operator(&mut tree, top.kids, Some("0"));
    let op1 = add_operator(&mut tree, op0.kids, Some("1"));
    (tree, top, op0, op1)
}

#[test]
fn construction_requires_an_element() {
    let tree = VisualTree::new();
    assert_eq!(VisualNode::new(&tree, None).unwrap_err(), Error::NullElement);
}

#[test]
fn construction_requires_the_node_marker() {
    let mut tree = VisualTree::new();
    let plain = tree.push(None, VisualElement::new().class("qp-tr"));
    assert_eq!(
        VisualNode::new(&tree, Some(plain)).unwrap_err(),
        Error::InvalidElementKind { expected: "qp-node" },
    );
}

#[test]
fn children_follow_the_structural_nesting() {
    let (tree, top, op0, op1) = build_tree();

    let top = VisualNode::new(&tree, Some(top.node)).unwrap();
    let children = top.children().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].element(), op0.node);

    let op0 = VisualNode::new(&tree, Some(op0.node)).unwrap();
    let children = op0.children().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].element(), op1.node);

    let op1 = VisualNode::new(&tree, Some(op1.node)).unwrap();
    assert!(op1.children().unwrap().is_empty());
}

#[test]
fn malformed_child_entries_abort_with_null_element() {
    let (mut tree, top, _, _) = build_tree();
    // An entry with no descendants: the fixed descent finds nothing to wrap.
    tree.push(Some(top.kids), VisualElement::new());

    let top = VisualNode::new(&tree, Some(top.node)).unwrap();
    assert_eq!(top.children().unwrap_err(), Error::NullElement);
}

#[test]
fn node_id_is_optional_statement_id_is_not() {
    let (tree, top, op0, _) = build_tree();

    let top = VisualNode::new(&tree, Some(top.node)).unwrap();
    assert_eq!(top.node_id(), None);
    assert_eq!(top.statement_id().unwrap(), "1");

    let op0 = VisualNode::new(&tree, Some(op0.node)).unwrap();
    assert_eq!(op0.node_id(), Some("0"));
    assert_eq!(op0.statement_id().unwrap(), "1");
}

#[test]
fn missing_statement_ancestor_is_a_construction_error() {
    let mut tree = VisualTree::new();
    let root = tree.push(None, VisualElement::new().class("qp-root"));
    let orphan = add_operator(&mut tree, root, Some("0"));

    let node = VisualNode::new(&tree, Some(orphan.node)).unwrap();
    assert_eq!(node.statement_id().unwrap_err(), Error::MissingStatementAncestor);
}

#[test]
fn rel_op_resolves_through_the_plan_document() {
    let plan = PlanDocument::parse(PLAN_XML).unwrap();
    let (tree, _, op0, _) = build_tree();

    let node = VisualNode::new(&tree, Some(op0.node)).unwrap();
    let metrics = node.rel_op(&plan).unwrap().expect("metrics should resolve");
    assert_eq!(metrics.estimated_rows(), 100.0);
    assert_eq!(metrics.estimated_row_size(), 20);
}

#[test]
fn rel_op_is_none_when_resolution_fails() {
    let plan = PlanDocument::parse(PLAN_XML).unwrap();
    let (mut tree, _, _, _) = build_tree();

    // A node whose id exists in no statement.
    let statement = tree.push(None, VisualElement::new().attr("data-statement-id", "1"));
    let stray = add_operator(&mut tree, statement, Some("99"));
    let node = VisualNode::new(&tree, Some(stray.node)).unwrap();
    assert!(node.rel_op(&plan).unwrap().is_none());
}

#[test]
fn rel_op_is_none_for_statement_level_nodes() {
    // Statement elements resolve but are not operator elements.
    let plan = PlanDocument::parse(PLAN_XML).unwrap();
    let (tree, top, _, _) = build_tree();

    let node = VisualNode::new(&tree, Some(top.node)).unwrap();
    assert!(node.rel_op(&plan).unwrap().is_none());
}
