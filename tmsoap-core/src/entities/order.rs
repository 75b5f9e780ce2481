//! Order-service records.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static ORDER: EntityDescriptor = EntityDescriptor {
    name: "Order",
    plural: "Orders",
    hallmarks: &["orderID", "orderDisplayName"],
    result_tag: "OrderResult",
    list_result_tag: "OrderListResult",
};

/// One order record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "customerContactID", skip_serializing_if = "Option::is_none")]
    pub customer_contact_id: Option<i64>,
    #[serde(rename = "customerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_closing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_display_name: Option<String>,
    #[serde(rename = "projectManagerID", skip_serializing_if = "Option::is_none")]
    pub project_manager_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_manager_memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(rename = "requestID", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Order {
    fn descriptor() -> &'static EntityDescriptor {
        &ORDER
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::archive_status_label);
        Order {
            order_id: fields.int("orderID"),
            currency: fields.text("currency"),
            customer_contact_id: fields.int("customerContactID"),
            customer_id: fields.int("customerID"),
            delivery_deadline: fields.text("deliveryDeadline"),
            order_closing_date: fields.text("orderClosingDate"),
            order_date: fields.text("orderDate"),
            order_display_name: fields.text("orderDisplayName"),
            project_manager_id: fields.int("projectManagerID"),
            project_manager_memo: fields.text("projectManagerMemo"),
            project_name: fields.text("projectName"),
            rate: fields.float("rate"),
            request_id: fields.int("requestID"),
            status,
            status_name,
            subject: fields.text("subject"),
            extra: fields.leftovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::deep_objectify;

    #[test]
    fn test_order_from_tree() {
        let value = deep_objectify(
            "<Order>\
             <orderID>900</orderID>\
             <orderDisplayName>O-2024-0900</orderDisplayName>\
             <customerID>7</customerID>\
             <orderDate>/Date(1694544000000)/</orderDate>\
             <rate>1.0</rate>\
             <status>2</status>\
             </Order>",
        );
        let node = value.as_node().unwrap()["Order"].as_node().unwrap();
        let order = Order::from_tree(node);

        assert_eq!(order.order_id, Some(900));
        assert_eq!(order.order_display_name.as_deref(), Some("O-2024-0900"));
        assert_eq!(order.order_date.as_deref(), Some("2023-09-12T18:40:00.000Z"));
        assert_eq!(order.rate, Some(1.0));
        assert_eq!(order.status_name.as_deref(), Some("COMPLETED"));
    }
}
