use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6). Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        let viewport = buffer.viewport();

        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
        writeln!(writer, "255")?;

        let rgb: Vec<u8> = buffer.rgb_bytes().collect();
        writer.write_all(&rgb)
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        self.encode(buffer, &mut writer)?;
        writer.flush()?;

        info!("Saved frame to {}", filepath.display());

        Ok(())
    }
}
