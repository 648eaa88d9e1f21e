//! Document assembly: one full-width image per page.

use std::io::Write;

use bytes::Bytes;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::export::paginate::PageSize;
use crate::export::ExportError;

/// Where an image lands on its page, in points from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_pt: f32,
    pub y_pt: f32,
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Builds a paged document from bitmaps.
///
/// The handle is threaded through by value so a half-built document can only
/// be dropped, never observed.
pub trait DocumentAssembler: Send + Sync {
    type Handle;

    fn new_document(&self, page: PageSize) -> Result<Self::Handle, ExportError>;

    fn add_image_page(
        &self,
        handle: Self::Handle,
        image: &RgbImage,
        placement: Placement,
    ) -> Result<Self::Handle, ExportError>;

    fn serialize(&self, handle: Self::Handle) -> Result<Bytes, ExportError>;
}

pub struct PdfAssembler;

pub struct PdfHandle {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    page: PageSize,
}

fn assemble_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Assemble(e.to_string())
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

impl DocumentAssembler for PdfAssembler {
    type Handle = PdfHandle;

    fn new_document(&self, page: PageSize) -> Result<PdfHandle, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Ok(PdfHandle {
            doc,
            pages_id,
            kids: Vec::new(),
            page,
        })
    }

    fn add_image_page(
        &self,
        mut handle: PdfHandle,
        image: &RgbImage,
        placement: Placement,
    ) -> Result<PdfHandle, ExportError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(image.as_raw()).map_err(assemble_err)?;
        let pixels = encoder.finish().map_err(assemble_err)?;

        let image_id = handle.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width() as i64,
                "Height" => image.height() as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
                "Filter" => "FlateDecode",
            },
            pixels,
        ));

        // PDF user space starts bottom-left.
        let page_height = handle.page.height_pt();
        let y = page_height - placement.y_pt - placement.height_pt;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        real(placement.width_pt),
                        real(0.0),
                        real(0.0),
                        real(placement.height_pt),
                        real(placement.x_pt),
                        real(y),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = handle
            .doc
            .add_object(Stream::new(Dictionary::new(), content.encode().map_err(assemble_err)?));

        let page_id = handle.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => handle.pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
            "MediaBox" => vec![real(0.0), real(0.0), real(handle.page.width_pt()), real(page_height)],
        });
        handle.kids.push(page_id.into());
        Ok(handle)
    }

    fn serialize(&self, handle: PdfHandle) -> Result<Bytes, ExportError> {
        let PdfHandle {
            mut doc,
            pages_id,
            kids,
            ..
        } = handle;
        if kids.is_empty() {
            return Err(ExportError::Assemble("document has no pages".into()));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).map_err(assemble_err)?;
        Ok(Bytes::from(out))
    }
}
