//! Rendering module - softbuffer back buffer and grid painting

pub mod frame;
pub mod grid;

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use tsvgrid::font::FontFace;
use tsvgrid::geometry::GridLayout;
use tsvgrid::model::AppModel;

use frame::{Frame, GlyphCache, TextPainter};

pub struct Renderer {
    face: FontFace,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames,
    /// so frames are composed here and copied on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    glyph_cache: GlyphCache,
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        face: FontFace,
    ) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            face,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            glyph_cache: GlyphCache::new(),
        })
    }

    fn ensure_size(&mut self, size: (u32, u32)) -> Result<()> {
        let (width, height) = (size.0.max(1), size.1.max(1));
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    pub fn render(&mut self, model: &AppModel, now: Instant) -> Result<()> {
        self.ensure_size(model.window_size)?;

        let layout = GridLayout::compute(model.window_size, &model.metrics);
        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            let mut painter = TextPainter::new(&self.face, &mut self.glyph_cache);

            frame.clear(model.theme.background);
            grid::render_reset_button(&mut frame, &mut painter, &self.face, model, &layout);
            grid::render_cells(&mut frame, &mut painter, &self.face, model, &layout);
            grid::render_scrollbars(&mut frame, model, &layout);
            grid::render_status(&mut frame, &mut painter, &self.face, model, &layout, now);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
