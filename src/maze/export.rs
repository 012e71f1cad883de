use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use super::{CellWall, Maze};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub cell_size: f64,
    pub padding: f64,
    pub stroke_width: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            padding: 10.0,
            stroke_width: 5.0,
        }
    }
}

/// Every wall still standing, as a line in pixel space.
///
/// Columns run along the horizontal axis and rows along the vertical one. Each cell
/// contributes its South and East walls; the North and West border closes the drawing.
pub fn wall_segments(maze: &Maze, cell_size: f64) -> Vec<LineSegment> {
    let mut segments = Vec::new();

    for cell in maze.get_cells().iter() {
        let (x, y) = (cell.get_coord().0 as f64, cell.get_coord().1 as f64);

        if cell.get_wall(CellWall::South) {
            segments.push(LineSegment {
                x1: y * cell_size,
                y1: (x + 1.0) * cell_size,
                x2: (y + 1.0) * cell_size,
                y2: (x + 1.0) * cell_size,
            });
        }
        if cell.get_wall(CellWall::East) {
            segments.push(LineSegment {
                x1: (y + 1.0) * cell_size,
                y1: x * cell_size,
                x2: (y + 1.0) * cell_size,
                y2: (x + 1.0) * cell_size,
            });
        }
    }

    let (width, height) = pixel_size(maze, cell_size);
    segments.push(LineSegment {
        x1: 0.0,
        y1: 0.0,
        x2: width,
        y2: 0.0,
    });
    segments.push(LineSegment {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: height,
    });

    segments
}

fn pixel_size(maze: &Maze, cell_size: f64) -> (f64, f64) {
    (
        maze.columns() as f64 * cell_size,
        maze.rows() as f64 * cell_size,
    )
}

pub fn write_svg<W: Write>(maze: &Maze, options: &ExportOptions, mut out: W) -> io::Result<()> {
    let (width, height) = pixel_size(maze, options.cell_size);
    let padding = options.padding;

    writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg""#)?;
    writeln!(out, r#"    xmlns:xlink="http://www.w3.org/1999/xlink""#)?;
    writeln!(
        out,
        r#"    width="{w}" height="{h}" viewBox="{p} {p} {w} {h}">"#,
        w = width + 2.0 * padding,
        h = height + 2.0 * padding,
        p = -padding,
    )?;
    writeln!(out, r#"<defs>"#)?;
    writeln!(out, r#"<style type="text/css"><![CDATA["#)?;
    writeln!(out, "line {{")?;
    writeln!(out, "    stroke: #000000;")?;
    writeln!(out, "    stroke-linecap: square;")?;
    writeln!(out, "    stroke-width: {};", options.stroke_width)?;
    writeln!(out, "}}")?;
    writeln!(out, "]]></style>")?;
    writeln!(out, "</defs>")?;

    for seg in wall_segments(maze, options.cell_size) {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            seg.x1, seg.y1, seg.x2, seg.y2
        )?;
    }

    writeln!(out, "</svg>")?;
    Ok(())
}

/// Writes `<rows>x<columns>.svg` into `dir`, replacing an older drawing of the same size
pub fn save_svg(maze: &Maze, options: &ExportOptions, dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}x{}.svg", maze.rows(), maze.columns()));

    let file = fs::File::create(&path)?;
    let mut writer = io::BufWriter::new(file);
    write_svg(maze, options, &mut writer)?;
    writer.flush()?;

    log::info!("Maze drawing written to {:?}", path);
    Ok(path)
}
