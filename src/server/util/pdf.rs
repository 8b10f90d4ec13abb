//! PDF emission of the shopping list.

use std::sync::Arc;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::server::{
    error::Error,
    util::shopping_list::{PageLayout, PlacedLine, ShoppingListItem},
};

/// File name of the exported shopping list attachment
pub const SHOPPING_LIST_FILE_NAME: &str = "shoppingcart.pdf";

const DOCUMENT_TITLE: &str = "Shopping list";
const A4_WIDTH: Mm = Mm(210.0);
const A4_HEIGHT: Mm = Mm(297.0);

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Renders shopping lists to A4 PDF documents.
///
/// Uses built-in Helvetica unless a TrueType font was loaded, which is required for
/// ingredient names outside the Latin-1 range.
#[derive(Clone, Default)]
pub struct ShoppingListRenderer {
    font: Option<Arc<Vec<u8>>>,
    layout: PageLayout,
}

impl ShoppingListRenderer {
    /// Creates a renderer embedding the TrueType font at `path`
    pub fn with_font_file(path: &str) -> Result<Self, Error> {
        let font = std::fs::read(path)?;

        Ok(Self {
            font: Some(Arc::new(font)),
            layout: PageLayout::default(),
        })
    }

    /// Lays out the items and returns the finished PDF bytes
    pub fn render(&self, items: &[ShoppingListItem]) -> Result<Vec<u8>, Error> {
        let pages = self.layout.lay_out(items);

        self.emit(&pages)
    }

    fn load_font(&self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, Error> {
        let font = match &self.font {
            Some(bytes) => doc.add_external_font(bytes.as_slice()),
            None => doc.add_builtin_font(BuiltinFont::Helvetica),
        };

        font.map_err(|e| Error::RenderError(format!("Failed to load font: {}", e)))
    }

    fn emit(&self, pages: &[Vec<PlacedLine>]) -> Result<Vec<u8>, Error> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(DOCUMENT_TITLE, A4_WIDTH, A4_HEIGHT, "Page 1");
        let font = self.load_font(&doc)?;

        for (index, lines) in pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(A4_WIDTH, A4_HEIGHT, format!("Page {}", index + 1))
            };
            let layer = doc.get_page(page).get_layer(layer);

            for line in lines {
                layer.use_text(
                    line.text.clone(),
                    line.font_size,
                    pt_to_mm(line.x),
                    pt_to_mm(line.y),
                    &font,
                );
            }
        }

        doc.save_to_bytes()
            .map_err(|e| Error::RenderError(format!("Failed to serialize document: {}", e)))
    }
}
