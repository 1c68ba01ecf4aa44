use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::sort::Algorithm;

/// User intent decoded from window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Resize(u32, u32),
    /// Start when idle, stop when sorting.
    StartStop,
    Cancel,
    Reset,
    Grow,
    Shrink,
    Faster,
    Slower,
    NextAlgorithm,
    SelectAlgorithm(Algorithm),
    Screenshot,
}

impl Command {
    /// Key bindings. Returns `None` for unbound keys.
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        let command = match keycode {
            Keycode::Escape => Command::Quit,
            Keycode::Space => Command::StartStop,
            Keycode::C => Command::Cancel,
            Keycode::R => Command::Reset,
            Keycode::Up => Command::Grow,
            Keycode::Down => Command::Shrink,
            Keycode::Right => Command::Faster,
            Keycode::Left => Command::Slower,
            Keycode::Tab => Command::NextAlgorithm,
            Keycode::Num1 => Command::SelectAlgorithm(Algorithm::Bubble),
            Keycode::Num2 => Command::SelectAlgorithm(Algorithm::Selection),
            Keycode::Num3 => Command::SelectAlgorithm(Algorithm::Insertion),
            Keycode::Num4 => Command::SelectAlgorithm(Algorithm::Merge),
            Keycode::Num5 => Command::SelectAlgorithm(Algorithm::Quick),
            Keycode::Num6 => Command::SelectAlgorithm(Algorithm::Heap),
            Keycode::P => Command::Screenshot,
            _ => return None,
        };
        Some(command)
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, fps: u64) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_ms: 1000 / fps.max(1),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < self.frame_target_ms {
            let time_to_wait = self.frame_target_ms - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending SDL events into commands, in arrival order.
    pub fn poll_commands(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => commands.push(Command::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => commands.extend(Command::from_keycode(keycode)),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => commands.push(Command::Resize(w as u32, h as u32)),
                _ => {}
            }
        }
        commands
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
