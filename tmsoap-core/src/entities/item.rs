//! Item-service records: the language-pair line items of orders and
//! quotes.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static ITEM: EntityDescriptor = EntityDescriptor {
    name: "Item",
    plural: "Items",
    hallmarks: &["itemID", "briefDescription"],
    result_tag: "ItemResult",
    list_result_tag: "ItemListResult",
};

/// One item record.
///
/// The attached `jobIDList` arrives in several historical shapes
/// (`<integerList>`, repeated `<jobID>` children, plain text) and is left
/// undeclared on purpose, so whatever shape shows up survives in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<String>,
    #[serde(rename = "invoiceID", skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(rename = "projectID", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Item {
    fn descriptor() -> &'static EntityDescriptor {
        &ITEM
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::item_status_label);
        let (project_type, project_type_name) =
            fields.code("projectType", codes::project_type_label);
        Item {
            item_id: fields.int("itemID"),
            brief_description: fields.text("briefDescription"),
            comment: fields.text("comment"),
            delivery_deadline: fields.text("deliveryDeadline"),
            invoice_id: fields.int("invoiceID"),
            order_id: fields.int("orderID"),
            project_id: fields.int("projectID"),
            project_type,
            project_type_name,
            reference: fields.text("reference"),
            source_language: fields.text("sourceLanguage"),
            status,
            status_name,
            target_language: fields.text("targetLanguage"),
            total_price: fields.float("totalPrice"),
            extra: fields.leftovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::deep_objectify;

    #[test]
    fn test_item_from_tree() {
        let value = deep_objectify(
            "<Item>\
             <itemID>51</itemID>\
             <briefDescription>DE-EN manual</briefDescription>\
             <sourceLanguage>DE</sourceLanguage>\
             <targetLanguage>EN</targetLanguage>\
             <status>3</status>\
             <totalPrice>480.25</totalPrice>\
             </Item>",
        );
        let node = value.as_node().unwrap()["Item"].as_node().unwrap();
        let item = Item::from_tree(node);

        assert_eq!(item.item_id, Some(51));
        assert_eq!(item.source_language.as_deref(), Some("DE"));
        assert_eq!(item.status_name.as_deref(), Some("DELIVERED"));
        assert_eq!(item.total_price, Some(480.25));
    }

    #[test]
    fn test_item_job_id_list_shapes_survive_in_extra() {
        let value = deep_objectify(
            "<Item><itemID>51</itemID>\
             <jobIDList><integerList><integer>1</integer><integer>2</integer></integerList></jobIDList>\
             </Item>",
        );
        let node = value.as_node().unwrap()["Item"].as_node().unwrap();
        let item = Item::from_tree(node);

        let ids = item.extra["jobIDList"].as_node().unwrap()["integerList"]
            .as_node()
            .unwrap()["integer"]
            .as_list()
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].as_int(), Some(1));
    }
}
