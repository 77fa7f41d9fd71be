// Facade: one entry point in front of several subsystems.

use std::io::Write;

use crate::error::Result;

pub struct AudioPlayer;

impl AudioPlayer {
    pub fn play_audio(&self, filename: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Playing audio file: {filename}")?;
        Ok(())
    }
}

pub struct VideoPlayer;

impl VideoPlayer {
    pub fn play_video(&self, filename: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Playing video file: {filename}")?;
        Ok(())
    }
}

pub struct ImageLoader;

impl ImageLoader {
    pub fn load_image(&self, filename: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Loading image: {filename}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Video,
    Image,
}

impl MediaType {
    pub fn parse(media_type: &str) -> Option<Self> {
        match media_type {
            "audio" => Some(MediaType::Audio),
            "video" => Some(MediaType::Video),
            "image" => Some(MediaType::Image),
            _ => None,
        }
    }
}

pub struct MultimediaFacade {
    audio: AudioPlayer,
    video: VideoPlayer,
    images: ImageLoader,
}

impl MultimediaFacade {
    pub fn new() -> Self {
        Self {
            audio: AudioPlayer,
            video: VideoPlayer,
            images: ImageLoader,
        }
    }

    /// Dispatches to the matching subsystem. Unknown media types are
    /// reported on the transcript, not treated as errors.
    pub fn play_media(&self, filename: &str, media_type: &str, out: &mut dyn Write) -> Result<()> {
        match MediaType::parse(media_type) {
            Some(MediaType::Audio) => self.audio.play_audio(filename, out),
            Some(MediaType::Video) => self.video.play_video(filename, out),
            Some(MediaType::Image) => self.images.load_image(filename, out),
            None => {
                tracing::debug!(filename, media_type, "No subsystem for media type");
                writeln!(out, "Unsupported media type: {media_type}")?;
                Ok(())
            }
        }
    }
}

impl Default for MultimediaFacade {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Variant: starting and stopping a car
// ============================================================================

pub struct Engine;

impl Engine {
    pub fn start(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Engine started")?;
        Ok(())
    }

    pub fn stop(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Engine stopped")?;
        Ok(())
    }
}

pub struct Lights;

impl Lights {
    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Lights on")?;
        Ok(())
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Lights off")?;
        Ok(())
    }
}

pub struct Car {
    engine: Engine,
    lights: Lights,
}

impl Car {
    pub fn new() -> Self {
        Self {
            engine: Engine,
            lights: Lights,
        }
    }

    pub fn start_car(&self, out: &mut dyn Write) -> Result<()> {
        self.engine.start(out)?;
        self.lights.turn_on(out)?;
        writeln!(out, "Car is ready to drive")?;
        Ok(())
    }

    pub fn stop_car(&self, out: &mut dyn Write) -> Result<()> {
        self.lights.turn_off(out)?;
        self.engine.stop(out)?;
        writeln!(out, "Car has stopped")?;
        Ok(())
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let facade = MultimediaFacade::new();
    facade.play_media("song.mp3", "audio", out)?;
    facade.play_media("movie.mp4", "video", out)?;
    facade.play_media("picture.jpg", "image", out)?;
    facade.play_media("unknown.file", "unknown", out)?;

    writeln!(out)?;
    let car = Car::new();
    car.start_car(out)?;
    car.stop_car(out)
}
