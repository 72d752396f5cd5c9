//! Receipt PDF fixtures shared by the unit and CLI tests.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Text to place on a fixture page: x, y and text.
pub type Placed<'a> = (i64, i64, &'a str);

/// Font the fixture text is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFont {
    /// Courier with `WinAnsiEncoding`, one byte per glyph.
    WinAnsi,
    /// Type0 font with two-byte Identity-H codes and a `ToUnicode` map.
    Identity,
}

/// Maps codes 0x0000-0x00FF straight to the same code point.
const IDENTITY_TO_UNICODE: &str = "/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
1 beginbfrange
<0000> <00FF> <0000>
endbfrange
endcmap
CMapName currentdict /CMap defineresource pop
end
end
";

/// Build a PDF with one content stream per page, each run placed with `Tm`.
pub fn receipt_pdf(font: FixtureFont, pages: &[Vec<Placed<'_>>]) -> lopdf::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = add_font(&mut doc, font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for runs in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
        ];
        for (x, y, text) in runs {
            operations.push(Operation::new(
                "Tm",
                vec![1.into(), 0.into(), 0.into(), 1.into(), (*x).into(), (*y).into()],
            ));
            operations.push(Operation::new("Tj", vec![encode_text(font, text)]));
        }
        operations.push(Operation::new("ET", vec![]));

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
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data)?;
    Ok(data)
}

fn add_font(doc: &mut Document, font: FixtureFont) -> ObjectId {
    match font {
        FixtureFont::WinAnsi => doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        }),
        FixtureFont::Identity => {
            let to_unicode_id = doc.add_object(Stream::new(
                dictionary! {},
                IDENTITY_TO_UNICODE.as_bytes().to_vec(),
            ));
            let descriptor_id = doc.add_object(dictionary! {
                "Type" => "FontDescriptor",
                "FontName" => "ReceiptMono",
                "Flags" => 33,
                "FontBBox" => vec![0.into(), (-200).into(), 600.into(), 800.into()],
                "ItalicAngle" => 0,
                "Ascent" => 800,
                "Descent" => -200,
                "CapHeight" => 700,
                "StemV" => 80,
            });
            doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type0",
                "BaseFont" => "ReceiptMono",
                "Encoding" => "Identity-H",
                "DescendantFonts" => vec![Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "CIDFontType2",
                    "BaseFont" => "ReceiptMono",
                    "CIDSystemInfo" => dictionary! {
                        "Registry" => Object::string_literal("Adobe"),
                        "Ordering" => Object::string_literal("Identity"),
                        "Supplement" => 0,
                    },
                    "FontDescriptor" => descriptor_id,
                    "DW" => 600,
                })],
                "ToUnicode" => to_unicode_id,
            })
        }
    }
}

fn encode_text(font: FixtureFont, text: &str) -> Object {
    match font {
        FixtureFont::WinAnsi => Object::String(
            text.chars().map(win_ansi_byte).collect(),
            StringFormat::Literal,
        ),
        FixtureFont::Identity => Object::String(
            text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            StringFormat::Hexadecimal,
        ),
    }
}

/// WinAnsi code for `c`; only the Latin-1 range plus € and – are needed.
fn win_ansi_byte(c: char) -> u8 {
    match c {
        '€' => 0x80,
        '–' => 0x96,
        c => u8::try_from(u32::from(c)).unwrap_or(b'?'),
    }
}
