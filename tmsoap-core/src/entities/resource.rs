//! Resource-service records: the translators, reviewers and other
//! suppliers the system assigns work to.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static RESOURCE: EntityDescriptor = EntityDescriptor {
    name: "Resource",
    plural: "Resources",
    hallmarks: &["resourceID", "workingStatus"],
    result_tag: "ResourceResult",
    list_result_tag: "ResourceListResult",
};

/// A resource (supplier) record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "resourceID", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "externalID", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_of_address: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_of_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(rename = "skypeID", skip_serializing_if = "Option::is_none")]
    pub skype_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_status_name: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Resource {
    fn descriptor() -> &'static EntityDescriptor {
        &RESOURCE
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::resource_status_label);
        let (form_of_address, form_of_address_name) =
            fields.code("formOfAddress", codes::form_of_address_label);
        let (working_status, working_status_name) =
            fields.code("workingStatus", codes::working_status_label);
        Resource {
            resource_id: fields.int("resourceID"),
            academic_title: fields.text("academicTitle"),
            cost_center: fields.text("costCenter"),
            currency: fields.text("currency"),
            email: fields.text("email"),
            external_id: fields.text("externalID"),
            fax: fields.text("fax"),
            form_of_address,
            form_of_address_name,
            full_name: fields.text("fullName"),
            mobile_phone: fields.text("mobilePhone"),
            name1: fields.text("name1"),
            name2: fields.text("name2"),
            opening: fields.text("opening"),
            phone: fields.text("phone"),
            resource_type: fields.text("resourceType"),
            skype_id: fields.text("skypeID"),
            status,
            status_name,
            supervisor1: fields.text("supervisor1"),
            supervisor2: fields.text("supervisor2"),
            user_id: fields.int("userId"),
            website: fields.text("website"),
            working_status,
            working_status_name,
            extra: fields.leftovers(),
        }
    }
}
