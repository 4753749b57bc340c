use crate::Result;

/// Read-only accessor over a showplan XML document.
///
/// Uses local tag/attribute names throughout: showplan XML lives in the
/// `schemas.microsoft.com/sqlserver/.../showplan` namespace and resolution
/// must work with or without it.
#[derive(Debug)]
pub struct PlanDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> PlanDocument<'input> {
    pub fn parse(xml: &'input str) -> Result<Self> {
        Ok(Self {
            doc: roxmltree::Document::parse(xml)?,
        })
    }

    /// Resolves a rendered node back to its backing plan element.
    ///
    /// With `node_id == None` the statement element itself is returned (top
    /// level statements have no operator of their own). Returns `None` when
    /// no statement or operator matches.
    pub fn resolve(
        &self,
        statement_id: &str,
        node_id: Option<&str>,
    ) -> Option<roxmltree::Node<'_, 'input>> {
        let statement = self
            .doc
            .descendants()
            .find(|n| n.is_element() && n.attribute("StatementId") == Some(statement_id))?;
        let Some(node_id) = node_id else {
            return Some(statement);
        };
        statement.descendants().find(|n| {
            n.is_element()
                && n.tag_name().name() == "RelOp"
                && n.attribute("NodeId") == Some(node_id)
        })
    }
}
