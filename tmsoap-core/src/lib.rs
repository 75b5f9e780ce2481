//! Tolerant decoding for translation-management SOAP responses.
//!
//! The vendor's API speaks SOAP with inconsistent namespace prefixes, tag
//! casing and payload wrapping across versions and deployments, so this
//! crate never validates. It scans raw response text for the elements it
//! wants, objectifies them into plain trees, locates the domain entity
//! wherever the deployment nested it, and coerces it into a typed record.
//! Every layer is best-effort: malformed input and absent data decode to
//! `None` or empty, never an error. The one deliberate failure surface is
//! [`status::check_response`], which reports SOAP faults and failing
//! status codes.
//!
//! ```
//! use tmsoap_core::{check_response, decode_single, entities::Customer};
//!
//! let body = "<ns2:CustomerResult>\
//!             <statusCode>0</statusCode><statusMessage>OK</statusMessage>\
//!             <data><customerID>7</customerID><fullName>Jane Doe</fullName></data>\
//!             </ns2:CustomerResult>";
//!
//! let base = check_response(body).unwrap();
//! assert_eq!(base.status_code, Some(0));
//!
//! let customer = decode_single::<Customer>(body).unwrap();
//! assert_eq!(customer.customer_id, Some(7));
//! ```

pub mod codes;
pub mod decode;
pub mod entities;
pub mod find;
pub mod scalar;
pub mod scan;
pub mod status;
pub mod tree;
pub mod value;

pub use decode::{decode_list, decode_single};
pub use find::{EntityDescriptor, collect_entities, find_entity};
pub use scalar::coerce;
pub use scan::{find_all_tag_blocks, find_first_tag, find_first_tag_block};
pub use status::{
    Fault, ResultBase, ServiceError, check_response, extract_fault, extract_result_base,
};
pub use tree::{deep_objectify, objectify};
pub use value::{Scalar, Tree, Value};
