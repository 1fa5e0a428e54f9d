use super::*;
use std::path::PathBuf;

impl App {
    /// Registers the site named in the form. Every call issues one request;
    /// completions are applied in arrival order.
    pub fn create(&mut self) {
        let name = self.state.create_name.value().to_string();
        let url = self.config.server.create_url.clone();
        let api = self.api.clone();

        self.state.pending += 1;
        self.clear_error();
        tracing::debug!(site = %name, pending = self.state.pending, "Creating site");

        self.spawn_app_task(async move {
            let result = api.create_site(&url, &name).await;
            AppAsyncEvent::SiteCreated { name, result }
        });
    }

    pub fn upload(&mut self) {
        if self.state.view != View::Result || self.state.uploading {
            return;
        }

        let credentials = match self.state.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.report_api_error("Cannot sign upload", &e);
                return;
            }
        };

        let path = self.state.upload.image_path.value().trim().to_string();
        if path.is_empty() {
            self.report_error("Cannot upload", "choose an image file");
            return;
        }

        let id = match Self::parse_image_id(self.state.upload.id.value()) {
            Ok(id) => id,
            Err(e) => {
                self.report_error("Cannot upload", e);
                return;
            }
        };

        let group = self.state.upload.group.value().to_string();
        let url = self.config.server.post_image_url.clone();
        let api = self.api.clone();

        self.state.uploading = true;
        self.clear_error();

        self.spawn_app_task(async move {
            let result = api
                .post_image_file(&url, &credentials, &group, id, &PathBuf::from(path))
                .await;
            AppAsyncEvent::ImageUploaded { group, id, result }
        });
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Empty ids default to the current time so successive uploads sort in order.
    fn parse_image_id(raw: &str) -> Result<i64, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(chrono::Utc::now()
                .timestamp_nanos_opt()
                .unwrap_or_else(|| chrono::Utc::now().timestamp()));
        }
        raw.parse::<i64>()
            .map_err(|_| format!("image id must be a whole number, got {raw:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_defaults_to_now() {
        let before = chrono::Utc::now().timestamp();
        let id = App::parse_image_id("  ").expect("default id");
        assert!(id / 1_000_000_000 >= before);
    }

    #[test]
    fn image_id_parses_numbers() {
        assert_eq!(App::parse_image_id(" 1234 "), Ok(1234));
        assert!(App::parse_image_id("12a").is_err());
    }
}
