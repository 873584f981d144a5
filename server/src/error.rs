use time::{OffsetDateTime, format_description::well_known::Iso8601};

const HELP: &str = "Please check the response headers for `x-request-id`, include the datetime and raise a support ticket.";

/// Body sent with every 4xx response.
pub fn json_error_response(err: impl std::error::Error) -> serde_json::Value {
    let now_iso8601 = OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME_OFFSET)
        .inspect_err(|e| {
            tracing::warn!(
                "unable to format OffsetDateTime::now_utc() as Iso8601 :: {:?}",
                e
            )
        })
        .ok();

    serde_json::json!({
        "error": err.to_string(),
        "help": HELP,
        "datetime": now_iso8601
    })
}
