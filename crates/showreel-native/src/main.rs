mod detail;
mod gpu;
mod instances;
mod labels;

use std::path::PathBuf;

use anyhow::Context;
use detail::{DetailView, BASE_TITLE};
use gpu::GpuState;
use labels::LabelAtlas;
use showreel_core::{
    default_catalog, pointer_ndc, Activation, Cursor, Scene, SceneClock, SceneConfig,
    TextureProvider,
};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{CursorIcon, Window, WindowBuilder},
};

/// Pixels the pointer may travel between press and release and still count as a click.
const CLICK_SLOP_PX: f32 = 5.0;

/// Stands in for the video decoder: a preview "plays" once its file is on disk.
struct AssetProvider {
    root: PathBuf,
}

impl TextureProvider for AssetProvider {
    fn try_start(&mut self, _item: usize, source: &str) -> bool {
        self.root.join(source.trim_start_matches('/')).is_file()
    }
}

#[derive(Default)]
struct PointerInput {
    position: Option<(f32, f32)>,
    press: Option<(f32, f32)>,
    dragged: bool,
}

impl PointerInput {
    /// Returns the drag delta in pixels while the button is held.
    fn moved(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let prev = self.position.replace((x, y));
        let (px, py) = self.press?;
        if (x - px).hypot(y - py) > CLICK_SLOP_PX {
            self.dragged = true;
        }
        prev.map(|(ox, oy)| (x - ox, y - oy))
    }

    fn pressed(&mut self) {
        self.press = self.position;
        self.dragged = false;
    }

    /// Returns the click position if the press did not turn into a drag.
    fn released(&mut self) -> Option<(f32, f32)> {
        self.press.take()?;
        if self.dragged {
            None
        } else {
            self.position
        }
    }
}

/// Click or tap release at window pixels `(x, y)`. An open detail view swallows it.
fn release_at(x: f32, y: f32, scene: &mut Scene, detail: &mut DetailView, window: &Window) {
    if detail.is_open() {
        detail.close(scene, window);
        return;
    }
    let size = window.inner_size();
    if let Some(activation) = activate_at(scene, x, y, size.width, size.height) {
        detail.open(activation, scene, window);
    }
}

fn activate_at(scene: &mut Scene, x: f32, y: f32, width: u32, height: u32) -> Option<Activation> {
    scene.click(pointer_ndc(x, y, width as f32, height as f32))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = SceneConfig::from_overrides(
        std::env::var("SHOWREEL_LAYOUT").ok().as_deref(),
        std::env::var("SHOWREEL_ITEMS").ok().as_deref(),
    )
    .context("reading SHOWREEL_LAYOUT / SHOWREEL_ITEMS")?;
    let mut scene = Scene::new(config, &default_catalog())?;
    let mut textures = AssetProvider {
        root: std::env::var("SHOWREEL_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets")),
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(BASE_TITLE)
        .build(&event_loop)?;

    let font = labels::load_font();
    let atlas = LabelAtlas::build(font.as_ref(), scene.items());
    let mut state = pollster::block_on(GpuState::new(&window, atlas))?;
    let size = window.inner_size();
    scene.resize(size.width, size.height);

    let clock = SceneClock::new();
    let mut pointer = PointerInput::default();
    let mut detail = DetailView::default();
    let mut cursor = Cursor::Default;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                scene.resize(size.width, size.height);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                let size = state.window.inner_size();
                scene.set_pointer(pointer_ndc(x, y, size.width as f32, size.height as f32));
                if let Some((dx, dy)) = pointer.moved(x, y) {
                    if pointer.dragged {
                        scene.drag(dx, dy);
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => {
                pointer.position = None;
                scene.clear_pointer();
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => pointer.pressed(),
                ElementState::Released => {
                    if let Some((x, y)) = pointer.released() {
                        release_at(x, y, &mut scene, &mut detail, state.window);
                    }
                }
            },
            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => {
                let (x, y) = (location.x as f32, location.y as f32);
                let size = state.window.inner_size();
                match phase {
                    TouchPhase::Started | TouchPhase::Moved => {
                        scene.set_pointer(pointer_ndc(x, y, size.width as f32, size.height as f32));
                    }
                    TouchPhase::Ended => {
                        release_at(x, y, &mut scene, &mut detail, state.window);
                        scene.clear_pointer();
                    }
                    TouchPhase::Cancelled => scene.clear_pointer(),
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => detail.close(&mut scene, state.window),
            _ => {}
        },
        Event::AboutToWait => {
            let report = scene.tick(clock.elapsed());
            scene.service_textures(&mut textures);
            if report.cursor != cursor {
                cursor = report.cursor;
                state.window.set_cursor_icon(match cursor {
                    Cursor::Pointer => CursorIcon::Pointer,
                    Cursor::Default => CursorIcon::Default,
                });
            }
            match state.render(&scene) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn still_scene() -> Scene {
        let mut config = SceneConfig::curated();
        config.controls.auto_rotate = false;
        let mut scene = Scene::new(config, &default_catalog()).unwrap();
        scene.resize(800, 600);
        scene.tick(0.0);
        scene
    }

    /// Window pixel of a world point, assuming it is on screen.
    fn pixel_of(scene: &Scene, world: Vec3) -> (f32, f32) {
        let ndc = scene.camera().project(world).unwrap();
        ((ndc.x + 1.0) * 0.5 * 800.0, (1.0 - ndc.y) * 0.5 * 600.0)
    }

    #[test]
    fn release_over_item_activates_it() {
        let mut scene = still_scene();
        let target = scene.items()[2].group.position;
        let d = (target - scene.camera().eye).normalize();
        let (yaw, pitch) = ((-d.x).atan2(-d.z), (-d.y).asin());
        let (y0, p0) = (scene.rig().yaw(), scene.rig().pitch());
        scene.rig_mut().rotate_by(yaw - y0, pitch - p0);

        let (x, y) = pixel_of(&scene, target);
        let activation = activate_at(&mut scene, x, y, 800, 600).unwrap();
        assert_eq!(activation.item, 2);
        assert_eq!(activation.meta.client, "Oakley");
    }

    #[test]
    fn release_over_empty_space_does_nothing() {
        let mut scene = still_scene();
        assert!(activate_at(&mut scene, 400.0, 590.0, 800, 600).is_none());
    }

    #[test]
    fn short_press_is_a_click_and_long_move_is_a_drag() {
        let mut pointer = PointerInput::default();
        pointer.moved(100.0, 100.0);
        pointer.pressed();
        pointer.moved(102.0, 101.0);
        assert_eq!(pointer.released(), Some((102.0, 101.0)));

        pointer.pressed();
        let delta = pointer.moved(140.0, 101.0);
        assert_eq!(delta, Some((38.0, 0.0)));
        assert!(pointer.dragged);
        assert_eq!(pointer.released(), None);
    }
}
