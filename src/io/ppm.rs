//! Plain-text pixel map output and contour loading

use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::io::configuration::{CHANNEL_MAX, CONTOUR_HEADER_LINES, PPM_MAGIC};
use crate::io::error::{FloodError, Result, file_system};
use crate::spatial::{Rgb, SharedGrid};

/// Write pixels as a `P3` pixel map
///
/// Header is the format tag, `rows cols` and the channel maximum, one per
/// line. Each image row follows on its own line as space-separated
/// `red green blue` triples, with a blank line after every row.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails
pub fn write_ppm<W: Write>(pixels: &Array2<Rgb>, writer: &mut W) -> std::io::Result<()> {
    let (rows, cols) = pixels.dim();
    writeln!(writer, "{PPM_MAGIC}")?;
    writeln!(writer, "{rows} {cols}")?;
    writeln!(writer, "{CHANNEL_MAX}")?;

    for row in pixels.rows() {
        let mut separator = "";
        for pixel in row {
            write!(writer, "{separator}{pixel}")?;
            separator = " ";
        }
        writeln!(writer)?;
        writeln!(writer)?;
    }

    writer.flush()
}

/// Write the grid to an already opened output file
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_ppm(grid: &SharedGrid, file: File, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(file);
    write_ppm(&grid.snapshot(), &mut writer).map_err(|e| file_system(path, "write output", e))
}

/// Read a `rows x cols` contour grid from a pixel map text stream
///
/// The first four lines are skipped as header; the remaining whitespace
/// separated integers are read as `rows * cols` triples in row-major order.
/// Anything after the last triple is ignored.
///
/// # Errors
///
/// Returns an error if the stream cannot be read, ends early, or holds a
/// value that isn't a channel in `0..=255`
pub fn read_contour<R: BufRead>(mut reader: R, rows: usize, cols: usize) -> Result<SharedGrid> {
    let mut line = String::new();
    for header_line in 0..CONTOUR_HEADER_LINES {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| file_system("<contour>", "read header", e))?;
        if read == 0 {
            return Err(FloodError::ContourFormat {
                reason: format!("stream ended in header line {}", header_line + 1),
            });
        }
    }

    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| file_system("<contour>", "read pixels", e))?;

    let expected = rows * cols;
    let mut channels = body.split_whitespace().map(parse_channel);
    let mut pixels = Vec::with_capacity(expected);

    for index in 0..expected {
        let mut next = || {
            channels.next().unwrap_or_else(|| {
                Err(FloodError::ContourFormat {
                    reason: format!("expected {expected} pixels, stream ended at pixel {index}"),
                })
            })
        };
        let red = next()?;
        let green = next()?;
        let blue = next()?;
        pixels.push(Rgb::new(red, green, blue));
    }

    SharedGrid::from_pixels(rows, cols, pixels)
}

/// Open and read a contour file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content is invalid
pub fn load_contour(path: &Path, rows: usize, cols: usize) -> Result<SharedGrid> {
    let file = File::open(path).map_err(|e| file_system(path, "open contour", e))?;
    read_contour(BufReader::new(file), rows, cols)
}

fn parse_channel(token: &str) -> Result<u8> {
    token.parse::<u8>().map_err(|_parse| FloodError::ContourFormat {
        reason: format!("'{token}' is not a channel value between 0 and {CHANNEL_MAX}"),
    })
}
