use super::{RemoteService, RenderService, ScriptService, SessionService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    session_service: SessionService,
    remote_service: RemoteService,
    render_service: RenderService,
    script_service: ScriptService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }

    pub fn remote_service(&self) -> &RemoteService {
        &self.remote_service
    }

    pub fn render_service(&self) -> &RenderService {
        &self.render_service
    }

    pub fn script_service(&self) -> &ScriptService {
        &self.script_service
    }
}
