//! Customer-service records: customers and their delivery/invoice
//! addresses.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static CUSTOMER: EntityDescriptor = EntityDescriptor {
    name: "Customer",
    plural: "Customers",
    hallmarks: &["customerID", "fullName"],
    result_tag: "CustomerResult",
    list_result_tag: "CustomerListResult",
};

static ADDRESS: EntityDescriptor = EntityDescriptor {
    name: "Address",
    plural: "Addresses",
    hallmarks: &["addressID", "street"],
    result_tag: "AddressResult",
    list_result_tag: "AddressListResult",
};

/// A customer record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_initial_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dossier: Option<String>,
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
    #[serde(rename = "skypeID", skip_serializing_if = "Option::is_none")]
    pub skype_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Vendor keys the schema does not declare, passed through unchanged.
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Customer {
    fn descriptor() -> &'static EntityDescriptor {
        &CUSTOMER
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::customer_status_label);
        let (form_of_address, form_of_address_name) =
            fields.code("formOfAddress", codes::form_of_address_label);
        Customer {
            customer_id: fields.int("customerID"),
            academic_title: fields.text("academicTitle"),
            cost_center: fields.text("costCenter"),
            currency: fields.text("currency"),
            date_of_initial_contact: fields.text("dateOfInitialContact"),
            dossier: fields.text("dossier"),
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
            skype_id: fields.text("skypeID"),
            source_language: fields.text("sourceLanguage"),
            status,
            status_name,
            user_id: fields.int("userId"),
            website: fields.text("website"),
            extra: fields.leftovers(),
        }
    }
}

/// One customer address record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "addressID", skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Address {
    fn descriptor() -> &'static EntityDescriptor {
        &ADDRESS
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (address_type, address_type_name) =
            fields.code("addressType", codes::address_type_label);
        Address {
            address_id: fields.int("addressID"),
            address_type,
            address_type_name,
            city: fields.text("city"),
            country: fields.text("country"),
            description: fields.text("description"),
            name1: fields.text("name1"),
            name2: fields.text("name2"),
            office: fields.text("office"),
            state: fields.text("state"),
            street: fields.text("street"),
            street2: fields.text("street2"),
            zip: fields.text("zip"),
            extra: fields.leftovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::deep_objectify;

    #[test]
    fn test_customer_from_tree_coerces_and_resolves() {
        let value = deep_objectify(
            "<Customer>\
             <customerID>7</customerID>\
             <fullName>Jane Doe</fullName>\
             <status>1</status>\
             <formOfAddress>2</formOfAddress>\
             <userId>300</userId>\
             </Customer>",
        );
        let node = value.as_node().unwrap()["Customer"].as_node().unwrap();
        let customer = Customer::from_tree(node);

        assert_eq!(customer.customer_id, Some(7));
        assert_eq!(customer.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(customer.status, Some(1));
        assert_eq!(customer.status_name.as_deref(), Some("ACTIVE"));
        assert_eq!(customer.form_of_address, Some(2));
        assert_eq!(customer.form_of_address_name.as_deref(), Some("MADAM"));
        assert_eq!(customer.user_id, Some(300));
        assert!(customer.extra.is_empty());
    }

    #[test]
    fn test_customer_casing_priority_on_fields() {
        let mut tree = Tree::new();
        tree.insert("CustomerID", "7");
        tree.insert("FullName", "Jane");
        let customer = Customer::from_tree(&tree);
        assert_eq!(customer.customer_id, Some(7));
        assert_eq!(customer.full_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_customer_undeclared_keys_survive_in_extra() {
        let mut tree = Tree::new();
        tree.insert("customerID", 7i64);
        tree.insert("projectManagerID", 12i64);
        let customer = Customer::from_tree(&tree);
        assert_eq!(customer.extra["projectManagerID"].as_int(), Some(12));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["customerID"], 7);
        // Flattened, not nested under an `extra` key.
        assert_eq!(json["projectManagerID"], 12);
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn test_customer_absent_fields_are_omitted_from_json() {
        let mut tree = Tree::new();
        tree.insert("customerID", 7i64);
        let json = serde_json::to_value(Customer::from_tree(&tree)).unwrap();
        assert!(json.get("fullName").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_address_from_tree() {
        let mut tree = Tree::new();
        tree.insert("addressID", 44i64);
        tree.insert("street", "Main St 1");
        tree.insert("addressType", 2i64);
        let address = Address::from_tree(&tree);
        assert_eq!(address.address_id, Some(44));
        assert_eq!(address.street.as_deref(), Some("Main St 1"));
        assert_eq!(address.address_type_name.as_deref(), Some("INVOICE"));
    }
}
