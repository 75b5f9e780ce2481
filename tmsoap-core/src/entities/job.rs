//! Job-service records: jobs, their price metrics and tracked time.

use serde::Serialize;

use crate::codes;
use crate::find::EntityDescriptor;
use crate::value::Tree;

use super::{Entity, FieldReader};

static JOB: EntityDescriptor = EntityDescriptor {
    name: "Job",
    plural: "Jobs",
    hallmarks: &["jobID", "jobTypeFull"],
    result_tag: "JobResult",
    list_result_tag: "JobListResult",
};

static JOB_METRIC: EntityDescriptor = EntityDescriptor {
    name: "JobMetric",
    plural: "JobMetrics",
    hallmarks: &["totalPrice", "totalPriceJobCurrency"],
    result_tag: "JobMetricResult",
    list_result_tag: "JobMetricListResult",
};

static JOB_TRACKING_TIME: EntityDescriptor = EntityDescriptor {
    name: "JobTrackingTime",
    plural: "JobTrackingTimes",
    hallmarks: &["dateFrom", "dateTo"],
    result_tag: "JobTrackingTimeResult",
    list_result_tag: "JobTrackingTimeListResult",
};

/// One job record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "jobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_source_files: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type_short: Option<String>,
    #[serde(rename = "projectID", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for Job {
    fn descriptor() -> &'static EntityDescriptor {
        &JOB
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        let (status, status_name) = fields.code("status", codes::job_status_label);
        let (project_type, project_type_name) =
            fields.code("projectType", codes::project_type_label);
        Job {
            job_id: fields.int("jobID"),
            count_source_files: fields.int("countSourceFiles"),
            due_date: fields.text("dueDate"),
            item_id: fields.int("itemID"),
            job_type_full: fields.text("jobTypeFull"),
            job_type_short: fields.text("jobTypeShort"),
            project_id: fields.int("projectID"),
            project_type,
            project_type_name,
            start_date: fields.text("startDate"),
            status,
            status_name,
            extra: fields.leftovers(),
        }
    }
}

/// Aggregated price figures for one job.
///
/// The per-unit `amounts` breakdown arrives as nested XML with no stable
/// schema, so it stays in `extra` as decoded data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_job_currency: Option<f64>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for JobMetric {
    fn descriptor() -> &'static EntityDescriptor {
        &JOB_METRIC
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        JobMetric {
            total_price: fields.float("totalPrice"),
            total_price_job_currency: fields.float("totalPriceJobCurrency"),
            extra: fields.leftovers(),
        }
    }
}

/// One tracked time span a resource booked on a job.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTrackingTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(rename = "resourceID", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Tree,
}

impl Entity for JobTrackingTime {
    fn descriptor() -> &'static EntityDescriptor {
        &JOB_TRACKING_TIME
    }

    fn from_tree(tree: &Tree) -> Self {
        let mut fields = FieldReader::new(tree);
        JobTrackingTime {
            comment: fields.text("comment"),
            completed: fields.boolean("completed"),
            date_from: fields.text("dateFrom"),
            date_to: fields.text("dateTo"),
            resource_id: fields.int("resourceID"),
            extra: fields.leftovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::deep_objectify;

    #[test]
    fn test_job_from_tree_with_legacy_dates() {
        let value = deep_objectify(
            "<Job>\
             <jobID>88</jobID>\
             <jobTypeFull>Translation</jobTypeFull>\
             <dueDate>/Date(1694544000000)/</dueDate>\
             <status>3</status>\
             <projectType>2</projectType>\
             </Job>",
        );
        let node = value.as_node().unwrap()["Job"].as_node().unwrap();
        let job = Job::from_tree(node);

        assert_eq!(job.job_id, Some(88));
        assert_eq!(job.due_date.as_deref(), Some("2023-09-12T18:40:00.000Z"));
        assert_eq!(job.status_name.as_deref(), Some("IN_PROGRESS"));
        assert_eq!(job.project_type_name.as_deref(), Some("ORDER"));
    }

    #[test]
    fn test_job_metric_keeps_amounts_in_extra() {
        let value = deep_objectify(
            "<JobMetric>\
             <totalPrice>120.5</totalPrice>\
             <totalPriceJobCurrency>110.0</totalPriceJobCurrency>\
             <amounts><baseUnitName>Words</baseUnitName><grossQuantity>2500</grossQuantity></amounts>\
             </JobMetric>",
        );
        let node = value.as_node().unwrap()["JobMetric"].as_node().unwrap();
        let metric = JobMetric::from_tree(node);

        assert_eq!(metric.total_price, Some(120.5));
        let amounts = metric.extra["amounts"].as_node().unwrap();
        assert_eq!(amounts["grossQuantity"].as_int(), Some(2500));
    }

    #[test]
    fn test_tracking_time_booleans() {
        let mut tree = Tree::new();
        tree.insert("dateFrom", "2024-01-01T08:00:00.000Z");
        tree.insert("dateTo", "2024-01-01T12:00:00.000Z");
        tree.insert("completed", true);
        tree.insert("resourceID", 4i64);

        let span = JobTrackingTime::from_tree(&tree);
        assert_eq!(span.completed, Some(true));
        assert_eq!(span.resource_id, Some(4));
    }
}
