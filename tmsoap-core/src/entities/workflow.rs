//! Workflow records from the admin service.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static WORKFLOW: EntityDescriptor = EntityDescriptor {
    name: "Workflow",
    plural: "Workflows",
    hallmarks: &["workflowID"],
    result_tag: "WorkflowResult",
    list_result_tag: "WorkflowListResult",
};

/// One workflow definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(rename = "workflowID", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    /// The wire tag is the bare word `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<i64>,
    #[serde(rename = "typeName", skip_serializing_if = "Option::is_none")]
    pub workflow_type_name: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Workflow {
    fn descriptor() -> &'static EntityDescriptor {
        &WORKFLOW
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::workflow_status_label);
        let (workflow_type, workflow_type_name) =
            fields.code("type", codes::workflow_type_label);
        Workflow {
            workflow_id: fields.int("workflowID"),
            description: fields.text("description"),
            name: fields.text("name"),
            status,
            status_name,
            workflow_type,
            workflow_type_name,
            extra: fields.leftovers(),
        }
    }
}
