//! Detail view for an activated item. The desktop build has no overlay UI,
//! so the view is the window title plus a log line.

use showreel_core::{Activation, ExternalContent, Scene};
use winit::window::Window;

pub const BASE_TITLE: &str = "Showreel";

#[derive(Default)]
pub struct DetailView {
    open: Option<Activation>,
}

impl DetailView {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&mut self, activation: Activation, scene: &mut Scene, window: &Window) {
        let meta = &activation.meta;
        let content = match &meta.content {
            Some(ExternalContent::Video { provider_id }) => format!("video {provider_id}"),
            None => "no video".to_string(),
        };
        log::info!(
            "[detail] open {} / {} [{}] ({content})",
            meta.client,
            meta.subtitle,
            meta.category
        );
        window.set_title(&format!(
            "{BASE_TITLE} | {} - {} [{}]",
            meta.client, meta.subtitle, meta.category
        ));
        scene.set_auto_rotate(false);
        self.open = Some(activation);
    }

    pub fn close(&mut self, scene: &mut Scene, window: &Window) {
        if let Some(activation) = self.open.take() {
            log::info!("[detail] close {}", activation.meta.client);
            window.set_title(BASE_TITLE);
            scene.set_auto_rotate(true);
        }
    }
}
