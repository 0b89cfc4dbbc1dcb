//! Response envelopes of the Smartsheet API.

use serde::Deserialize;
use smartsheet_model::Attachment;

/// Paged list wrapper used by list endpoints.
///
/// With `includeAll=true` the service returns every item in one page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResult<T> {
    #[serde(default)]
    pub page_number: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

pub type AttachmentList = IndexResult<Attachment>;

/// Error body returned alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ref_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_list_reads_data() {
        let body = r#"{
            "pageNumber": 1,
            "pageSize": 100,
            "totalPages": 1,
            "totalCount": 2,
            "data": [
                {"id": 900, "name": "a.pdf", "attachmentType": "FILE", "mimeType": "application/pdf"},
                {"id": 901, "name": "b.png", "attachmentType": "FILE", "mimeType": "image/png"}
            ]
        }"#;
        let list: AttachmentList = serde_json::from_str(body).unwrap();
        assert_eq!(list.total_count, Some(2));
        let names: Vec<_> = list.data.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.png"]);
    }

    #[test]
    fn attachment_list_without_data_is_empty() {
        let list: AttachmentList = serde_json::from_str(r#"{"totalCount": 0}"#).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn error_body_parses() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"errorCode": 1006, "message": "Not Found", "refId": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(body.error_code, Some(1006));
        assert_eq!(body.message.as_deref(), Some("Not Found"));
        assert_eq!(body.ref_id.as_deref(), Some("abc123"));
    }
}
