//! Pricing records: price lines on items, price units, pricelists and
//! their entries.
//!
//! Price line fields keep the vendor's mixed `amount_perUnit` style
//! naming on the wire; the structs expose normal Rust names and rename on
//! serialization.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static PRICE_LINE: EntityDescriptor = EntityDescriptor {
    name: "PriceLine",
    plural: "PriceLines",
    hallmarks: &["priceLineID", "unit_price"],
    result_tag: "PriceLineResult",
    list_result_tag: "PriceLineListResult",
};

static PRICE_UNIT: EntityDescriptor = EntityDescriptor {
    name: "PriceUnit",
    plural: "PriceUnits",
    hallmarks: &["priceUnitID", "articleNumber"],
    result_tag: "PriceUnitResult",
    list_result_tag: "PriceUnitListResult",
};

static PRICELIST: EntityDescriptor = EntityDescriptor {
    name: "Pricelist",
    plural: "Pricelists",
    hallmarks: &["pricelistID", "withWhiteSpace"],
    result_tag: "PricelistResult",
    list_result_tag: "PricelistListResult",
};

static PRICELIST_ENTRY: EntityDescriptor = EntityDescriptor {
    name: "PricelistEntry",
    plural: "PricelistEntries",
    hallmarks: &["pricePerUnit", "amountPerUnit"],
    result_tag: "PricelistEntryResult",
    list_result_tag: "PricelistEntryListResult",
};

/// One price line on an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    #[serde(rename = "priceLineID", skip_serializing_if = "Option::is_none")]
    pub price_line_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "amount_perUnit", skip_serializing_if = "Option::is_none")]
    pub amount_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(rename = "priceUnitID", skip_serializing_if = "Option::is_none")]
    pub price_unit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type_name: Option<String>,
    #[serde(rename = "time_perUnit", skip_serializing_if = "Option::is_none")]
    pub time_per_unit: Option<f64>,
    #[serde(rename = "unit_price", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for PriceLine {
    fn descriptor() -> &'static EntityDescriptor {
        &PRICE_LINE
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (tax_type, tax_type_name) = fields.code("taxType", codes::tax_type_label);
        PriceLine {
            price_line_id: fields.int("priceLineID"),
            amount: fields.float("amount"),
            amount_per_unit: fields.float("amount_perUnit"),
            memo: fields.text("memo"),
            price_unit_id: fields.int("priceUnitID"),
            sequence: fields.int("sequence"),
            tax_type,
            tax_type_name,
            time_per_unit: fields.float("time_perUnit"),
            unit_price: fields.float("unit_price"),
            extra: fields.leftovers(),
        }
    }
}

/// A price unit (the thing a price line counts, e.g. words or hours).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUnit {
    #[serde(rename = "priceUnitID", skip_serializing_if = "Option::is_none")]
    pub price_unit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for PriceUnit {
    fn descriptor() -> &'static EntityDescriptor {
        &PRICE_UNIT
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        PriceUnit {
            price_unit_id: fields.int("priceUnitID"),
            active: fields.boolean("active"),
            article_number: fields.text("articleNumber"),
            description: fields.text("description"),
            memo: fields.text("memo"),
            service: fields.text("service"),
            extra: fields.leftovers(),
        }
    }
}

/// A pricelist attached to a customer or resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricelist {
    #[serde(rename = "pricelistID", skip_serializing_if = "Option::is_none")]
    pub pricelist_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_entry_rows: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_white_space: Option<bool>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Pricelist {
    fn descriptor() -> &'static EntityDescriptor {
        &PRICELIST
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        Pricelist {
            pricelist_id: fields.int("pricelistID"),
            currency: fields.text("currency"),
            inserted_entry_rows: fields.int("insertedEntryRows"),
            memo: fields.text("memo"),
            resource_currency: fields.text("resourceCurrency"),
            with_white_space: fields.boolean("withWhiteSpace"),
            extra: fields.leftovers(),
        }
    }
}

/// One row of a pricelist.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricelistEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(rename = "priceUnitID", skip_serializing_if = "Option::is_none")]
    pub price_unit_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for PricelistEntry {
    fn descriptor() -> &'static EntityDescriptor {
        &PRICELIST_ENTRY
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        PricelistEntry {
            amount_per_unit: fields.float("amountPerUnit"),
            price_per_unit: fields.float("pricePerUnit"),
            price_unit_id: fields.int("priceUnitID"),
            extra: fields.leftovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::deep_objectify;

    #[test]
    fn test_price_line_vendor_field_names() {
        let value = deep_objectify(
            "<PriceLine>\
             <priceLineID>3</priceLineID>\
             <amount_perUnit>0.12</amount_perUnit>\
             <unit_price>0.10</unit_price>\
             <amount>250.0</amount>\
             <taxType>1</taxType>\
             <sequence>1</sequence>\
             </PriceLine>",
        );
        let node = value.as_node().unwrap()["PriceLine"].as_node().unwrap();
        let line = PriceLine::from_tree(node);

        assert_eq!(line.price_line_id, Some(3));
        assert_eq!(line.amount_per_unit, Some(0.12));
        assert_eq!(line.unit_price, Some(0.10));
        assert_eq!(line.tax_type_name.as_deref(), Some("STANDARD"));

        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("amount_perUnit").is_some());
        assert!(json.get("unit_price").is_some());
    }

    #[test]
    fn test_price_unit_booleans() {
        let mut tree = Tree::new();
        tree.insert("priceUnitID", 9i64);
        tree.insert("active", "false");
        tree.insert("service", "Translation");

        let unit = PriceUnit::from_tree(&tree);
        assert_eq!(unit.active, Some(false));
        assert_eq!(unit.service.as_deref(), Some("Translation"));
    }

    #[test]
    fn test_pricelist_and_entry() {
        let mut tree = Tree::new();
        tree.insert("pricelistID", 5i64);
        tree.insert("withWhiteSpace", true);
        tree.insert("insertedEntryRows", 40i64);
        let list = Pricelist::from_tree(&tree);
        assert_eq!(list.pricelist_id, Some(5));
        assert_eq!(list.with_white_space, Some(true));
        assert_eq!(list.inserted_entry_rows, Some(40));

        let mut row = Tree::new();
        row.insert("pricePerUnit", 0.08f64);
        row.insert("amountPerUnit", 1.0f64);
        let entry = PricelistEntry::from_tree(&row);
        assert_eq!(entry.price_per_unit, Some(0.08));
        assert_eq!(entry.amount_per_unit, Some(1.0));
    }
}
