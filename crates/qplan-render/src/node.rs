use crate::error::{Error, Result};
use crate::tree::{ElementId, NODE_CLASS, NODE_ID_ATTR, ROW_CLASS, STATEMENT_ID_ATTR, VisualTree};
use qplan_core::{OperatorMetrics, PlanDocument};

/// Validated view over one rendered operator box (a `qp-node` element).
#[derive(Debug, Clone, Copy)]
pub struct VisualNode<'t> {
    tree: &'t VisualTree,
    element: ElementId,
}

impl<'t> VisualNode<'t> {
    /// Wraps an element, validating the node marker. An absent element is a
    /// contract violation by the renderer, not a lookup miss.
    pub fn new(tree: &'t VisualTree, element: Option<ElementId>) -> Result<Self> {
        let element = element.ok_or(Error::NullElement)?;
        if !tree.has_class(element, NODE_CLASS) {
            return Err(Error::InvalidElementKind {
                expected: NODE_CLASS,
            });
        }
        Ok(Self { tree, element })
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Child nodes from the visual tree's structural nesting (not the plan
    /// document): enclosing row container, its second child, then each
    /// grandchild's first-first-first descendant.
    pub fn children(&self) -> Result<Vec<VisualNode<'t>>> {
        let row = self
            .tree
            .find_ancestor_with_class(self.element, ROW_CLASS)
            .ok_or(Error::NullElement)?;
        let container = self.tree.child(row, 1).ok_or(Error::NullElement)?;
        let mut children = Vec::with_capacity(self.tree.children(container).len());
        for &entry in self.tree.children(container) {
            let node = self
                .tree
                .child(entry, 0)
                .and_then(|e| self.tree.child(e, 0))
                .and_then(|e| self.tree.child(e, 0));
            children.push(VisualNode::new(self.tree, node)?);
        }
        Ok(children)
    }

    /// The node's operator id, absent for top-level statements.
    pub fn node_id(&self) -> Option<&'t str> {
        self.tree.attr(self.element, NODE_ID_ATTR)
    }

    /// Statement id from the nearest enclosing statement container.
    pub fn statement_id(&self) -> Result<&'t str> {
        let mut current = self.tree.parent(self.element);
        while let Some(element) = current {
            if let Some(id) = self.tree.attr(element, STATEMENT_ID_ATTR) {
                return Ok(id);
            }
            current = self.tree.parent(element);
        }
        Err(Error::MissingStatementAncestor)
    }

    /// Metrics for the backing plan operator. `Ok(None)` when the plan does
    /// not resolve or resolves to a non-operator element; missing metrics are
    /// never an error.
    pub fn rel_op<'a, 'input>(
        &self,
        plan: &'a PlanDocument<'input>,
    ) -> Result<Option<OperatorMetrics<'a, 'input>>> {
        let statement_id = self.statement_id()?;
        let Some(element) = plan.resolve(statement_id, self.node_id()) else {
            return Ok(None);
        };
        Ok(OperatorMetrics::from_node(element).ok())
    }
}
