use pdiff_api::{ApiResult, CreatedSite};

/// Completion of a background request, applied on the UI thread.
#[derive(Debug)]
pub enum AppAsyncEvent {
    SiteCreated {
        name: String,
        result: ApiResult<CreatedSite>,
    },
    ImageUploaded {
        group: String,
        id: i64,
        result: ApiResult<()>,
    },
}
