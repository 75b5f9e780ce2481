use tmsoap_core::entities::Customer;
use tmsoap_core::{check_response, decode_single};

/// Typed Decode Example
///
/// This example demonstrates how to check a response's status and decode a
/// typed customer record out of a captured SOAP body.
///
/// Run with: cargo run -p tmsoap-core --example decode_response

fn build_sample_response() -> String {
    "<S:Envelope xmlns:S=\"http://schemas.xmlsoap.org/soap/envelope/\"><S:Body>\
     <ns2:CustomerResult xmlns:ns2=\"http://API/\">\
     <statusCode>0</statusCode><statusMessage>OK</statusMessage>\
     <data>\
     <customerID>7</customerID>\
     <fullName>Jane Doe</fullName>\
     <email>jane@example.com</email>\
     <status>1</status>\
     <dateOfInitialContact>/Date(1694544000000)/</dateOfInitialContact>\
     </data>\
     </ns2:CustomerResult></S:Body></S:Envelope>"
        .to_string()
}

fn main() {
    println!("Typed Decode Example\n");

    let body = build_sample_response();
    println!("Response body size: {} bytes", body.len());

    // Check the status pair before touching the payload
    match check_response(&body) {
        Ok(base) => {
            println!(
                "✓ Status check passed: code {:?}, message {:?}",
                base.status_code, base.status_message
            );
        }
        Err(e) => {
            eprintln!("✗ Status check failed: {}", e);
        }
    }

    // Decode the customer record
    match decode_single::<Customer>(&body) {
        Some(customer) => {
            println!("✓ Decoded customer {:?}", customer.customer_id);
            println!("  full name: {:?}", customer.full_name);
            println!("  status:    {:?}", customer.status_name);
            println!("  contacted: {:?}", customer.date_of_initial_contact);
        }
        None => {
            println!("✗ No customer found in the response");
        }
    }

    println!("\nExample: Testing failure handling");

    // A SOAP fault fails the check but never panics
    let fault = "<S:Envelope><S:Body><S:Fault>\
                 <faultcode>S:Server</faultcode>\
                 <faultstring>Invalid session token</faultstring>\
                 </S:Fault></S:Body></S:Envelope>";
    match check_response(fault) {
        Ok(_) => println!("Unexpected success with a fault body"),
        Err(e) => println!("✓ Correctly detected failure: {}", e),
    }

    // Garbage input decodes to nothing rather than erroring
    match decode_single::<Customer>("not xml at all") {
        Some(_) => println!("Unexpected customer in garbage input"),
        None => println!("✓ Garbage input decoded to no record"),
    }
}
