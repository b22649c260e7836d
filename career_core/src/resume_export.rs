//! Resume PDF export.
//!
//! Lays a resume out on A4 pages with the standard Helvetica family and
//! writes it next to other exports as `<Name_With_Underscores>_Resume.pdf`.
//! Positions are tracked in millimetres from the top-left corner and
//! converted to PDF points when each operation is emitted.

use crate::font_metrics::wrap_text;
use crate::types::Resume;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const BULLET_INDENT_MM: f32 = 25.0;
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Line advance factor per point of font size, in millimetres
const LINE_FACTOR: f32 = 0.4;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Download name for a resume: spaces become underscores, `_Resume.pdf` appended
pub fn resume_file_name(name: &str) -> String {
    format!("{}_Resume.pdf", name.replace(' ', "_"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    fn resource_name(&self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Oblique => "F3",
        }
    }
}

/// Accumulates text operations page by page
struct PageWriter {
    finished: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
    face: Face,
    size: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            finished: Vec::new(),
            ops: Vec::new(),
            y: MARGIN_MM,
            face: Face::Regular,
            size: 12.0,
        }
    }

    fn set_font(&mut self, face: Face, size: f32) {
        self.face = face;
        self.size = size;
    }

    fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    fn set_face(&mut self, face: Face) {
        self.face = face;
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }

    fn ensure_room(&mut self) {
        if self.y > PAGE_HEIGHT_MM - MARGIN_MM {
            self.finished.push(std::mem::take(&mut self.ops));
            self.y = MARGIN_MM;
        }
    }

    /// One line of text with its baseline at the current cursor
    fn text(&mut self, x: f32, text: &str) {
        self.ensure_room();
        let ops = &mut self.ops;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![self.face.resource_name().into(), Object::Real(self.size)],
        ));
        ops.push(Operation::new(
            "Td",
            vec![
                Object::Real(x * PT_PER_MM),
                Object::Real((PAGE_HEIGHT_MM - self.y) * PT_PER_MM),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(text))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Wrapped paragraph; moves the cursor by `lines * size * 0.4` mm
    fn wrapped(&mut self, x: f32, text: &str, max_width: f32) {
        let lines = wrap_text(text, max_width, self.size);
        let line_height = self.size * LINE_FACTOR;
        for line in &lines {
            self.text(x, line);
            self.y += line_height;
        }
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.ops);
        self.finished
    }
}

/// Lay out the resume and return the encoded PDF bytes
pub fn render_resume_pdf(resume: &Resume) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new();
    let body_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let bullet_width = PAGE_WIDTH_MM - 50.0;

    // Header
    writer.set_font(Face::Bold, 20.0);
    writer.text(MARGIN_MM, &resume.personal_info.name);
    writer.advance(10.0);

    writer.set_font(Face::Regular, 10.0);
    writer.text(MARGIN_MM, &resume.contact_line());
    writer.advance(15.0);

    // Summary
    writer.set_font(Face::Bold, 14.0);
    writer.text(MARGIN_MM, "PROFESSIONAL SUMMARY");
    writer.advance(8.0);

    writer.set_font(Face::Regular, 10.0);
    writer.wrapped(MARGIN_MM, &resume.summary, body_width);
    writer.advance(10.0);

    // Experience
    writer.set_font(Face::Bold, 14.0);
    writer.text(MARGIN_MM, "EXPERIENCE");
    writer.advance(8.0);

    for entry in &resume.experience {
        writer.set_font(Face::Bold, 12.0);
        writer.text(MARGIN_MM, &format!("{} - {}", entry.position, entry.company));
        writer.advance(6.0);

        writer.set_face(Face::Oblique);
        writer.text(MARGIN_MM, &entry.duration);
        writer.advance(8.0);

        writer.set_font(Face::Regular, 10.0);
        for line in &entry.description {
            writer.wrapped(BULLET_INDENT_MM, &format!("• {}", line), bullet_width);
            writer.advance(2.0);
        }
        writer.advance(5.0);
    }

    // Skills
    writer.set_size(14.0);
    writer.set_face(Face::Bold);
    writer.text(MARGIN_MM, "SKILLS");
    writer.advance(8.0);

    writer.set_font(Face::Regular, 10.0);
    writer.wrapped(MARGIN_MM, &resume.skills.join(", "), body_width);

    let pages = writer.finish();
    let page_count = pages.len();
    let bytes = assemble(pages, &resume.personal_info.name)?;
    log::debug!(
        "[export] Rendered resume PDF: {} page(s), {} bytes",
        page_count,
        bytes.len()
    );
    Ok(bytes)
}

fn assemble(pages: Vec<Vec<Operation>>, title: &str) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = add_font(&mut doc, "Helvetica");
    let bold = add_font(&mut doc, "Helvetica-Bold");
    let oblique = add_font(&mut doc, "Helvetica-Oblique");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Face::Regular.resource_name() => regular,
            Face::Bold.resource_name() => bold,
            Face::Oblique.resource_name() => oblique,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(PAGE_WIDTH_MM * PT_PER_MM),
                Object::Real(PAGE_HEIGHT_MM * PT_PER_MM),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(&format!("{} - Resume", title))),
        "Producer" => Object::string_literal(format!("career_core {}", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(
            chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string(),
        ),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
    Ok(bytes)
}

fn add_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

/// Map text onto WinAnsiEncoding; unmappable characters become '?'
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

/// Render and atomically write the resume into `dir`, returning the file path
pub fn export_resume(resume: &Resume, dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = render_resume_pdf(resume)?;
    let target = dir.join(resume_file_name(&resume.personal_info.name));
    let io_err = |source: std::io::Error| ExportError::Io {
        path: target.display().to_string(),
        source,
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
        log::error!("[export] Failed to create temporary file in {:?}", dir);
        io_err(e)
    })?;
    temp_file.write_all(&bytes).map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;
    temp_file.persist(&target).map_err(|e| {
        log::error!("[export] Failed to persist resume to {}", target.display());
        io_err(e.error)
    })?;

    log::info!("[export] Resume written to {}", target.display());
    Ok(target)
}
