//! Fixed id-to-name tables for the vendor's enum-coded fields.
//!
//! The API encodes statuses and type fields as small integers, while some
//! deployments return the symbolic name directly. These tables cover the
//! numeric side; symbolic names pass through untouched in the DTO layer.
//! Unknown ids resolve to `None` rather than guessing.

pub fn customer_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "ACTIVE",
        2 => "NOT_ACTIVE",
        3 => "CONTACTED",
        4 => "NEW",
        5 => "BLOCKED",
        6 => "AQUISITION_ADDRESS", // vendor spelling
        7 => "NEW_AUTO",
        8 => "DELETION_REQUESTED",
        _ => return None,
    })
}

pub fn resource_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "ACTIVE",
        2 => "NOT_ACTIVE",
        3 => "CONTACTED",
        4 => "NEW",
        5 => "BLOCKED",
        6 => "PROBATION",
        7 => "QUALIFIED",
        8 => "DISQUALIFIED",
        9 => "NEW_AUTO",
        10 => "DELETION_REQUESTED",
        _ => return None,
    })
}

pub fn working_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "INTERNAL",
        2 => "EXTERNAL",
        _ => return None,
    })
}

pub fn form_of_address_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "SIR",
        2 => "MADAM",
        3 => "COMPANY",
        _ => return None,
    })
}

pub fn address_type_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "DELIVERY",
        2 => "INVOICE",
        3 => "OTHER",
        _ => return None,
    })
}

pub fn project_type_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "QUOTE",
        2 => "ORDER",
        _ => return None,
    })
}

pub fn job_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        0 => "IN_PREPARATION",
        1 => "REQUESTED",
        2 => "ASSIGNED",
        3 => "IN_PROGRESS",
        4 => "DELIVERED",
        5 => "APPROVED",
        6 => "INVOICE_ACCEPTED",
        7 => "INVOICE_CREATED",
        8 => "PAYED", // vendor spelling
        9 => "CANCELED",
        10 => "WITHOUT_INVOICE",
        11 => "OVERDUE",
        _ => return None,
    })
}

pub fn item_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "IN_PREPARATION",
        2 => "IN_PROGRESS",
        3 => "DELIVERED",
        4 => "APPROVED",
        5 => "INVOICED",
        6 => "CANCELED",
        7 => "DELIVERABLE",
        _ => return None,
    })
}

pub fn archive_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "ACTIVE",
        2 => "COMPLETED",
        3 => "ARCHIVED",
        4 => "QUOTE_MOVED_TO_ORDER",
        5 => "IN_PREPARATION",
        6 => "COMPLETED_ARCHIVABLE",
        _ => return None,
    })
}

pub fn tax_type_label(id: i64) -> Option<&'static str> {
    Some(match id {
        0 => "NONE",
        1 => "STANDARD",
        2 => "REDUCED",
        3 => "EXEMPT",
        4 => "REVERSE_CHARGE",
        _ => return None,
    })
}

pub fn workflow_status_label(id: i64) -> Option<&'static str> {
    Some(match id {
        0 => "INACTIVE",
        1 => "ACTIVE",
        _ => return None,
    })
}

pub fn workflow_type_label(id: i64) -> Option<&'static str> {
    Some(match id {
        1 => "STANDARD",
        2 => "CONDITION",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve() {
        assert_eq!(customer_status_label(1), Some("ACTIVE"));
        assert_eq!(working_status_label(2), Some("EXTERNAL"));
        assert_eq!(project_type_label(1), Some("QUOTE"));
        assert_eq!(job_status_label(3), Some("IN_PROGRESS"));
        assert_eq!(archive_status_label(4), Some("QUOTE_MOVED_TO_ORDER"));
    }

    #[test]
    fn test_unknown_ids_resolve_to_none() {
        assert_eq!(customer_status_label(99), None);
        assert_eq!(working_status_label(0), None);
        assert_eq!(tax_type_label(-1), None);
    }
}
