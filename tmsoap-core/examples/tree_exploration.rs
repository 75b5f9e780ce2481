use tmsoap_core::{deep_objectify, find_first_tag};

/// Tree Exploration Example
///
/// This example demonstrates the untyped side of decoding: scanning for
/// single tags and objectifying a messy body into a plain tree.
///
/// Run with: cargo run -p tmsoap-core --example tree_exploration

fn main() {
    println!("Tree Exploration Example\n");

    // Prefixes and casing disagree tag by tag, as real deployments do
    let body = "<SOAP-ENV:Envelope><soapenv:Body>\
                <ns2:OrderResult>\
                <statusCode>0</statusCode>\
                <data>\
                <orderID>900</orderID>\
                <orderDisplayName>O-2024-0900</orderDisplayName>\
                <orderDate>/Date(1694544000000)/</orderDate>\
                <item><itemID>1</itemID></item>\
                <item><itemID>2</itemID></item>\
                </data>\
                </ns2:OrderResult></soapenv:Body></SOAP-ENV:Envelope>";

    // Single-tag scans ignore prefixes and casing
    match find_first_tag(body, "orderdisplayname") {
        Some(name) => println!("✓ Found display name: {}", name),
        None => println!("✗ No display name tag"),
    }

    // The whole body objectifies into a plain tree; repeated tags promote
    // to lists and leaves come out coerced
    let tree = deep_objectify(body);
    match serde_json::to_string_pretty(&tree) {
        Ok(json) => {
            println!("✓ Objectified tree:\n{}", json);
        }
        Err(e) => {
            eprintln!("✗ Serialization failed: {}", e);
        }
    }

    // Malformed input still produces a value
    let broken = deep_objectify("<data><orderID>900</data>");
    println!("\nBroken input objectifies to: {:?}", broken);
}
