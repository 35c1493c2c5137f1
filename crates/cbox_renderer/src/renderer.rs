//! Progressive frame driver.
//!
//! Each call to [`Renderer::render_frame`] traces one sample for every pixel
//! and adds it to the accumulation buffer. Pixels are independent tasks
//! scheduled by rayon; each task writes only its own cell, so the buffer
//! needs no locking. Frames run one after another, which orders the writes
//! to any given cell.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::RenderError;
use crate::film::pixel_index;
use crate::{trace, AccumulationBuffer, Camera, Color, RenderConfig, Sampler, Scene};

/// A render session: fixed configuration, scene and camera plus the
/// accumulated samples so far.
pub struct Renderer {
    config: RenderConfig,
    scene: Scene,
    camera: Camera,
    buffer: AccumulationBuffer,
    frame: u64,
}

impl Renderer {
    /// Validate `config` and set up an empty accumulation buffer.
    pub fn new(config: RenderConfig, scene: Scene) -> Result<Self, RenderError> {
        config.validate()?;

        if !scene.has_light() {
            warn!("Scene has no light surface; every path will end dark");
        }

        let camera = Camera::from_config(&config);
        let buffer = AccumulationBuffer::new(config.width, config.height);

        info!(
            "Renderer ready: {}x{}, {} surfaces, max depth {}, seed {}",
            config.width,
            config.height,
            scene.len(),
            config.max_depth,
            config.seed
        );

        Ok(Self {
            config,
            scene,
            camera,
            buffer,
            frame: 0,
        })
    }

    /// Trace one more sample per pixel.
    pub fn render_frame(&mut self) {
        let config = &self.config;
        let scene = &self.scene;
        let camera = &self.camera;
        let frame = self.frame;

        self.buffer.par_pixels_mut().for_each(|((u, v), cell)| {
            cell.accumulate(render_sample(camera, scene, config, u, v, frame));
        });

        self.frame += 1;
        debug!("Frame {} accumulated", self.frame);
    }

    /// Trace `frames` frames back to back.
    pub fn render_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.render_frame();
        }
    }

    /// Drop all accumulated samples, e.g. after the scene or camera changed
    /// outside this session.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.frame = 0;
        info!("Accumulation reset");
    }

    /// Number of frames accumulated since creation or the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Current mean radiance of pixel (u, v).
    pub fn read(&self, u: u32, v: u32) -> Color {
        self.buffer.read(self.buffer.index(u, v))
    }

    /// The accumulation buffer, for display.
    pub fn buffer(&self) -> &AccumulationBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// Trace the sample for pixel (u, v) in `frame`.
///
/// The random stream depends only on the session seed, the frame and the
/// pixel, so the result is the same whichever thread runs it.
pub fn render_sample(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    u: u32,
    v: u32,
    frame: u64,
) -> Color {
    let pixel = pixel_index(config.width, u, v);
    let mut sampler = Sampler::for_pixel(config.seed, frame, pixel);

    let ray = camera.generate_ray(u, v, config.height, sampler.jitter());
    trace(&ray, scene, config, &mut sampler)
}
