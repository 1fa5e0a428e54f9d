use super::*;

impl App {
    pub fn process_async_events(&mut self) {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        for event in async_events {
            self.apply_async_event(event);
        }
    }

    pub fn apply_async_event(&mut self, event: AppAsyncEvent) {
        match event {
            AppAsyncEvent::SiteCreated { name, result } => {
                self.state.pending = self.state.pending.saturating_sub(1);
                match result {
                    Ok(created) => {
                        tracing::info!(requested = %name, site = %created.name, "Site credentials received");
                        self.state.apply_created(created);
                    }
                    Err(e) => self.report_api_error("Failed to create site", &e),
                }
            }
            AppAsyncEvent::ImageUploaded { group, id, result } => {
                self.state.uploading = false;
                match result {
                    Ok(()) => {
                        self.state.last_upload = Some(format!("Uploaded {group} #{id}"));
                        self.clear_error();
                    }
                    Err(e) => self.report_api_error("Failed to upload image", &e),
                }
            }
        }
    }
}
