use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Create,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadField {
    #[default]
    ImagePath,
    Group,
    Id,
}

impl UploadField {
    pub fn next(self) -> Self {
        match self {
            UploadField::ImagePath => UploadField::Group,
            UploadField::Group => UploadField::Id,
            UploadField::Id => UploadField::ImagePath,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            UploadField::ImagePath => UploadField::Id,
            UploadField::Group => UploadField::ImagePath,
            UploadField::Id => UploadField::Group,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub image_path: TextField,
    pub group: TextField,
    pub id: TextField,
    pub focus: UploadField,
}

impl UploadForm {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            UploadField::ImagePath => &mut self.image_path,
            UploadField::Group => &mut self.group,
            UploadField::Id => &mut self.id,
        }
    }
}

/// Everything the view needs to draw a frame.
///
/// `key`, `secret` and `site` are only ever written together by
/// [`SessionState::apply_created`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub view: View,
    pub create_name: TextField,
    pub key: String,
    pub secret: String,
    pub site: String,
    pub error: Option<String>,
    pub pending: usize,
    pub upload: UploadForm,
    pub uploading: bool,
    pub last_upload: Option<String>,
    pub show_help: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_created(&mut self, created: CreatedSite) {
        self.key = created.key;
        self.secret = created.secret;
        self.site = created.name;
        self.view = View::Result;
        self.error = None;
    }

    pub fn has_credentials(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }

    pub fn credentials(&self) -> pdiff_api::ApiResult<SiteCredentials> {
        SiteCredentials::decode(&self.site, &self.key, &self.secret)
    }

    /// Back to the create form. Credentials stay until the next successful create.
    pub fn reset(&mut self) {
        self.view = View::Create;
        self.create_name.clear();
        self.upload = UploadForm::default();
        self.last_upload = None;
        self.error = None;
    }
}

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub state: SessionState,
    pub keybinds: Keybinds,
    pub api: PdiffApi,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let api = PdiffApi::with_timeouts(config.http.connect_timeout(), config.http.timeout());

        Self {
            should_quit: false,
            config,
            state: SessionState::new(),
            keybinds: Keybinds,
            api,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(name: &str) -> CreatedSite {
        CreatedSite {
            key: "K1".to_string(),
            secret: "S1".to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn starts_on_empty_create_form() {
        let state = SessionState::new();
        assert_eq!(state.view, View::Create);
        assert!(state.create_name.is_empty());
        assert!(state.key.is_empty() && state.secret.is_empty() && state.site.is_empty());
        assert!(!state.has_credentials());
    }

    #[test]
    fn apply_created_switches_to_result() {
        let mut state = SessionState::new();
        state.error = Some("old".to_string());
        state.apply_created(created("example"));

        assert_eq!(state.view, View::Result);
        assert_eq!(state.site, "example");
        assert!(state.has_credentials());
        assert!(state.error.is_none());
    }

    #[test]
    fn reset_keeps_credentials() {
        let mut state = SessionState::new();
        state.create_name = TextField::with_value("example");
        state.apply_created(created("example"));
        state.upload.group = TextField::with_value("g");
        state.reset();

        assert_eq!(state.view, View::Create);
        assert!(state.create_name.is_empty());
        assert!(state.upload.group.is_empty());
        assert_eq!(state.key, "K1");
    }

    #[test]
    fn upload_focus_cycles() {
        let mut form = UploadForm::default();
        form.focus = form.focus.next().next().next();
        assert_eq!(form.focus, UploadField::ImagePath);
        form.focus = form.focus.previous();
        assert_eq!(form.focus, UploadField::Id);
        form.focused_mut().handle_char('7');
        assert_eq!(form.id.value(), "7");
    }
}
