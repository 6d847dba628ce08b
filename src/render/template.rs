//! HWPML boilerplate wrapped around the converted body.
//!
//! The built-in template is generated from small data tables: font faces,
//! border fills, char shapes and paragraph shapes. Every shape identifier a
//! [`StyleCatalog`] hands out must be defined here.

use crate::error::{Error, Result};
use crate::model::StyleCatalog;

/// Placeholder substituted with the document title.
pub const TITLE_PLACEHOLDER: &str = "___TITLE___";

/// Placeholder substituted with the document author.
pub const AUTHOR_PLACEHOLDER: &str = "___AUTHOR___";

/// Placeholder substituted with the document date.
pub const DATE_PLACEHOLDER: &str = "___DATE___";

/// Text placed before and after the converted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParts {
    /// Everything up to and including the opening of the first section
    pub prefix: String,

    /// Everything after the last body block
    pub suffix: String,
}

/// Supplies the static document boilerplate.
pub trait TemplateProvider {
    /// Build prefix and suffix, splicing `manifest` into the prefix.
    ///
    /// The prefix carries [`TITLE_PLACEHOLDER`], [`AUTHOR_PLACEHOLDER`] and
    /// [`DATE_PLACEHOLDER`] once each.
    fn wrap(&self, manifest: &str) -> TemplateParts;

    /// Check that every shape the catalog references is defined.
    fn check_catalog(&self, _styles: &StyleCatalog) -> Result<()> {
        Ok(())
    }
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

const FONT_LANGS: [&str; 7] = [
    "Hangul", "Latin", "Hanja", "Japanese", "Other", "Symbol", "User",
];

const FONTS: [&str; 2] = ["함초롬돋움", "함초롬바탕"];

const TYPE_INFO: &str = r#"<TYPEINFO ArmStyle="1" Contrast="0" FamilyType="2" Letterform="1" Midline="1" Proportion="4" StrokeVariation="1" Weight="6" XHeight="1" />"#;

/// Fill of a border fill entry.
#[derive(Debug, Clone, Copy)]
enum Fill {
    Plain,
    Shaded(u32),
    BottomLine,
}

static BORDER_FILLS: [(u16, Fill); 4] = [
    (1, Fill::Plain),
    (2, Fill::Plain),
    (3, Fill::Shaded(14_737_632)),
    (4, Fill::BottomLine),
];

#[derive(Debug, Clone, Copy)]
enum Emphasis {
    None,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy)]
struct CharShapeDef {
    id: u16,
    height: u32,
    font: u8,
    text_color: u32,
    emphasis: Emphasis,
}

impl CharShapeDef {
    const fn new(id: u16, height: u32, emphasis: Emphasis) -> Self {
        Self {
            id,
            height,
            font: 1,
            text_color: 0,
            emphasis,
        }
    }

    const fn font(mut self, font: u8) -> Self {
        self.font = font;
        self
    }

    const fn color(mut self, text_color: u32) -> Self {
        self.text_color = text_color;
        self
    }
}

static CHAR_SHAPES: [CharShapeDef; 10] = [
    CharShapeDef::new(0, 1000, Emphasis::None),
    CharShapeDef::new(1, 2000, Emphasis::Bold),
    CharShapeDef::new(2, 1600, Emphasis::Bold),
    CharShapeDef::new(3, 1200, Emphasis::Bold),
    CharShapeDef::new(4, 1000, Emphasis::Bold),
    CharShapeDef::new(5, 1000, Emphasis::Bold),
    CharShapeDef::new(6, 1000, Emphasis::Italic),
    CharShapeDef::new(7, 1000, Emphasis::None).font(0),
    CharShapeDef::new(8, 1000, Emphasis::Italic).color(8_421_504),
    CharShapeDef::new(9, 900, Emphasis::Bold),
];

#[derive(Debug, Clone, Copy)]
struct ParaShapeDef {
    id: u16,
    align: &'static str,
    indent: i32,
    left: i32,
    border_fill: u16,
}

impl ParaShapeDef {
    const fn new(id: u16, align: &'static str, indent: i32, left: i32, border_fill: u16) -> Self {
        Self {
            id,
            align,
            indent,
            left,
            border_fill,
        }
    }
}

static PARA_SHAPES: [ParaShapeDef; 14] = [
    ParaShapeDef::new(0, "Justify", 0, 0, 2),
    ParaShapeDef::new(1, "Justify", -2104, 0, 2),
    ParaShapeDef::new(2, "Justify", -4174, 0, 2),
    ParaShapeDef::new(3, "Justify", -6244, 0, 2),
    ParaShapeDef::new(4, "Justify", -8314, 0, 2),
    ParaShapeDef::new(5, "Justify", -10384, 0, 2),
    ParaShapeDef::new(6, "Justify", -12454, 0, 2),
    ParaShapeDef::new(7, "Center", 0, 0, 2),
    ParaShapeDef::new(8, "Right", 0, 0, 2),
    ParaShapeDef::new(9, "Justify", 2000, 0, 3),
    ParaShapeDef::new(10, "Justify", 0, 0, 4),
    ParaShapeDef::new(11, "Justify", 0, 2000, 2),
    ParaShapeDef::new(12, "Justify", -2104, 2104, 2),
    ParaShapeDef::new(13, "Justify", -2104, 4208, 2),
];

const LAYOUT_FLAGS: [&str; 49] = [
    "AdjustBaselineInFixedLinespacing",
    "AdjustBaselineOfObjectToBottom",
    "AdjustLineheightToFont",
    "AdjustMarginFromAdjustLineheight",
    "AdjustParaBorderOffsetWithBorder",
    "AdjustParaBorderfillToSpacing",
    "AdjustVertPosOfLine",
    "ApplyAtLeastToPercent100Pct",
    "ApplyCharSpacingToCharGrid",
    "ApplyExtendHeaderFooterEachSection",
    "ApplyFontWeightToBold",
    "ApplyFontspaceToLatin",
    "ApplyMinColumnWidthTo1mm",
    "ApplyNextspacingOfLastPara",
    "ApplyParaBorderToOutside",
    "ApplyPrevspacingBeneathObject",
    "ApplyTabPosBasedOnSegment",
    "BaseCharUnitOfIndentOnFirstChar",
    "BaseCharUnitOnEAsian",
    "BaseLinespacingOnLinegrid",
    "BreakTabOverLine",
    "ConnectParaBorderfillOfEqualBorder",
    "DoNotAdjustEmptyAnchorLine",
    "DoNotAdjustWordInJustify",
    "DoNotAlignLastForbidden",
    "DoNotAlignLastPeriod",
    "DoNotAlignWhitespaceOnRight",
    "DoNotApplyAutoSpaceEAsianEng",
    "DoNotApplyAutoSpaceEAsianNum",
    "DoNotApplyColSeparatorAtNoGap",
    "DoNotApplyExtensionCharCompose",
    "DoNotApplyGridInHeaderFooter",
    "DoNotApplyHeaderFooterAtNoSpace",
    "DoNotApplyImageEffect",
    "DoNotApplyLinegridAtNoLinespacing",
    "DoNotApplyShapeComment",
    "DoNotApplyStrikeoutWithUnderline",
    "DoNotApplyVertOffsetOfForward",
    "DoNotApplyWhiteSpaceHeight",
    "DoNotFormattingAtBeneathAnchor",
    "DoNotHoldAnchorOfTable",
    "ExtendLineheightToOffset",
    "ExtendLineheightToParaBorderOffset",
    "ExtendVertLimitToPageMargins",
    "FixedUnderlineWidth",
    "OverlapBothAllowOverlap",
    "TreatQuotationAsLatin",
    "UseInnerUnderline",
    "UseLowercaseStrikeout",
];

const NOTE_SHAPES: &str = concat!(
    r#"<FOOTNOTESHAPE><AUTONUMFORMAT SuffixChar=")" Superscript="false" Type="Digit" />"#,
    r#"<NOTELINE Length="5cm" Type="Solid" Width="0.12mm" />"#,
    r#"<NOTESPACING AboveLine="850" BelowLine="567" BetweenNotes="283" />"#,
    r#"<NOTENUMBERING NewNumber="1" Type="Continuous" />"#,
    r#"<NOTEPLACEMENT BeneathText="false" Place="EachColumn" /></FOOTNOTESHAPE>"#,
    r#"<ENDNOTESHAPE><AUTONUMFORMAT SuffixChar=")" Superscript="false" Type="Digit" />"#,
    r#"<NOTELINE Length="14692344" Type="Solid" Width="0.12mm" />"#,
    r#"<NOTESPACING AboveLine="850" BelowLine="567" BetweenNotes="0" />"#,
    r#"<NOTENUMBERING NewNumber="1" Type="Continuous" />"#,
    r#"<NOTEPLACEMENT BeneathText="false" Place="EndOfDocument" /></ENDNOTESHAPE>"#,
);

const FOOTER: &str = "</SECTION></BODY><TAIL></TAIL></HWPML>";

/// Page geometry of the single section, in HWP units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub header: u32,
    pub footer: u32,
}

impl Default for PageGeometry {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 59528,
            height: 84188,
            margin_left: 8504,
            margin_right: 8504,
            margin_top: 5668,
            margin_bottom: 4252,
            header: 4252,
            footer: 4252,
        }
    }
}

/// The built-in HWPML 2.9 template.
#[derive(Debug, Clone, Default)]
pub struct HwpmlTemplate {
    page: PageGeometry,
}

impl HwpmlTemplate {
    /// Create the template with A4 page geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different page geometry.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Identifiers of the defined char shapes.
    pub fn char_shape_ids(&self) -> impl Iterator<Item = u16> {
        CHAR_SHAPES.iter().map(|c| c.id)
    }

    /// Identifiers of the defined paragraph shapes.
    pub fn para_shape_ids(&self) -> impl Iterator<Item = u16> {
        PARA_SHAPES.iter().map(|p| p.id)
    }

    /// Identifiers of the defined border fills.
    pub fn border_fill_ids(&self) -> impl Iterator<Item = u16> {
        BORDER_FILLS.iter().map(|(id, _)| *id)
    }

    fn head(&self, manifest: &str) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str(XML_DECLARATION);
        out.push_str(r#"<HWPML Style="embed" SubVersion="9.0.1.0" Version="2.9"><HEAD SecCnt="1">"#);
        out.push('\n');
        out.push_str(&format!(
            "<DOCSUMMARY><TITLE>{}</TITLE><AUTHOR>{}</AUTHOR><DATE>{}</DATE></DOCSUMMARY>",
            TITLE_PLACEHOLDER, AUTHOR_PLACEHOLDER, DATE_PLACEHOLDER
        ));
        out.push_str("<DOCSETTING>\n");
        out.push_str(r#"<BEGINNUMBER Endnote="1" Equation="1" Footnote="1" Page="1" Picture="1" Table="1" />"#);
        out.push_str(r#"<CARETPOS List="0" Para="20" Pos="6" /></DOCSETTING>"#);
        out.push_str("<MAPPINGTABLE>");
        out.push_str(manifest);
        out.push_str(&font_faces());
        out.push_str(&border_fills());
        out.push_str(&char_shapes());
        out.push_str(&para_shapes());
        out.push_str("</MAPPINGTABLE>");
        out.push_str(&compatibility());
        out.push_str("</HEAD>");
        out
    }

    fn section_def(&self) -> String {
        let p = &self.page;
        let mut out = String::with_capacity(4 * 1024);
        out.push_str(concat!(
            r#"<BODY><SECDEF CharGrid="0" FirstBorder="false" FirstFill="false" LineGrid="0" "#,
            r#"OutlineShape="1" SpaceColumns="1134" TabStop="8000" TextDirection="0" TextVerticalWidthHead="0">"#,
            r#"<STARTNUMBER Equation="0" Figure="0" Page="0" PageStartsOn="Both" Table="0" />"#,
            r#"<HIDE Border="false" EmptyLine="false" Footer="false" Header="false" MasterPage="false" PageNumPos="false" />"#,
        ));
        out.push_str(&format!(
            r#"<PAGEDEF GutterType="LeftOnly" Height="{}" Landscape="0" Width="{}">"#,
            p.height, p.width
        ));
        out.push_str(&format!(
            r#"<PAGEMARGIN Bottom="{}" Footer="{}" Gutter="0" Header="{}" Left="{}" Right="{}" Top="{}" /></PAGEDEF>"#,
            p.margin_bottom, p.footer, p.header, p.margin_left, p.margin_right, p.margin_top
        ));
        out.push_str(NOTE_SHAPES);
        for kind in ["Both", "Even", "Odd"] {
            out.push_str(&format!(
                concat!(
                    r#"<PAGEBORDERFILL BorderFill="1" FillArea="Paper" FooterInside="false" HeaderInside="false" TextBorder="true" Type="{}">"#,
                    r#"<PAGEOFFSET Bottom="1417" Left="1417" Right="1417" Top="1417" /></PAGEBORDERFILL>"#,
                ),
                kind
            ));
        }
        out.push_str(r#"</SECDEF><SECTION Id="0">"#);
        out
    }
}

impl TemplateProvider for HwpmlTemplate {
    fn wrap(&self, manifest: &str) -> TemplateParts {
        let mut prefix = self.head(manifest);
        prefix.push_str(&self.section_def());
        TemplateParts {
            prefix,
            suffix: FOOTER.to_string(),
        }
    }

    fn check_catalog(&self, styles: &StyleCatalog) -> Result<()> {
        let missing_para = styles
            .para_shapes()
            .into_iter()
            .find(|id| !self.para_shape_ids().any(|d| d == id.0));
        if let Some(id) = missing_para {
            return Err(Error::Render(format!("paragraph shape {} is not defined", id)));
        }

        let missing_char = styles
            .char_shapes()
            .into_iter()
            .find(|id| !self.char_shape_ids().any(|d| d == id.0));
        if let Some(id) = missing_char {
            return Err(Error::Render(format!("char shape {} is not defined", id)));
        }

        if !self.border_fill_ids().any(|d| d == styles.table_border_fill) {
            return Err(Error::Render(format!(
                "border fill {} is not defined",
                styles.table_border_fill
            )));
        }
        Ok(())
    }
}

fn font_faces() -> String {
    let mut out = String::from("<FACENAMELIST>");
    for lang in FONT_LANGS {
        out.push_str(&format!(r#"<FONTFACE Count="{}" Lang="{}">"#, FONTS.len(), lang));
        for (id, name) in FONTS.iter().enumerate() {
            out.push_str(&format!(r#"<FONT Id="{}" Name="{}" Type="ttf">"#, id, name));
            out.push_str(TYPE_INFO);
            out.push_str("</FONT>");
        }
        out.push_str("</FONTFACE>");
    }
    out.push_str("</FACENAMELIST>");
    out
}

fn border_fills() -> String {
    let mut out = format!(r#"<BORDERFILLLIST Count="{}">"#, BORDER_FILLS.len());
    for (id, fill) in BORDER_FILLS {
        out.push_str(&format!(
            r#"<BORDERFILL Id="{}" ThreeD="false" Shadow="false" CenterLine="None" BackgroundBrushId="0""#,
            id
        ));
        match fill {
            Fill::Plain => out.push_str(" />"),
            Fill::Shaded(color) => out.push_str(&format!(
                r#"><FILLBRUSH><WINDOWBRUSH FaceColor="{}" HatchColor="0" HatchStyle="None" Alpha="0" /></FILLBRUSH></BORDERFILL>"#,
                color
            )),
            Fill::BottomLine => out.push_str(
                r#"><BOTTOMBORDER Type="Solid" Width="0.12mm" Color="0" /></BORDERFILL>"#,
            ),
        }
    }
    out.push_str("</BORDERFILLLIST>");
    out
}

fn char_shapes() -> String {
    let mut out = format!(r#"<CHARSHAPELIST Count="{}">"#, CHAR_SHAPES.len());
    for shape in CHAR_SHAPES {
        out.push_str(&format!(
            r#"<CHARSHAPE BorderFillId="2" Height="{}" Id="{}" ShadeColor="4294967295" SymMark="0" TextColor="{}" UseFontSpace="false" UseKerning="false">"#,
            shape.height, shape.id, shape.text_color
        ));
        let per_lang = |tag: &str, value: u32| {
            format!(
                r#"<{} Hangul="{v}" Hanja="{v}" Japanese="{v}" Latin="{v}" Other="{v}" Symbol="{v}" User="{v}" />"#,
                tag,
                v = value
            )
        };
        out.push_str(&per_lang("FONTID", u32::from(shape.font)));
        out.push_str(&per_lang("RATIO", 100));
        out.push_str(&per_lang("CHARSPACING", 0));
        out.push_str(&per_lang("RELSIZE", 100));
        out.push_str(&per_lang("CHAROFFSET", 0));
        match shape.emphasis {
            Emphasis::None => {}
            Emphasis::Bold => out.push_str("<BOLD />"),
            Emphasis::Italic => out.push_str("<ITALIC />"),
        }
        out.push_str("</CHARSHAPE>");
    }
    out.push_str("</CHARSHAPELIST>");
    out
}

fn para_shapes() -> String {
    let mut out = format!(r#"<PARASHAPELIST Count="{}">"#, PARA_SHAPES.len());
    for shape in PARA_SHAPES {
        let break_non_latin = shape.align == "Justify";
        out.push_str(&format!(
            concat!(
                r#"<PARASHAPE Align="{}" AutoSpaceEAsianEng="false" AutoSpaceEAsianNum="false" "#,
                r#"BreakLatinWord="KeepWord" BreakNonLatinWord="{}" Condense="0" FontLineHeight="false" "#,
                r#"HeadingType="None" Id="{}" KeepLines="false" KeepWithNext="false" Level="0" "#,
                r#"LineWrap="Break" PageBreakBefore="false" SnapToGrid="true" TabDef="0" "#,
                r#"VerAlign="Baseline" WidowOrphan="false">"#,
            ),
            shape.align, break_non_latin, shape.id
        ));
        out.push_str(&format!(
            r#"<PARAMARGIN Indent="{}" Left="{}" LineSpacing="160" LineSpacingType="Percent" Next="0" Prev="0" Right="0" />"#,
            shape.indent, shape.left
        ));
        out.push_str(&format!(
            r#"<PARABORDER BorderFill="{}" Connect="false" IgnoreMargin="false" />"#,
            shape.border_fill
        ));
        out.push_str("</PARASHAPE>");
    }
    out.push_str("</PARASHAPELIST>");
    out
}

fn compatibility() -> String {
    let mut out = String::from(r#"<COMPATIBLEDOCUMENT TargetProgram="None"><LAYOUTCOMPATIBILITY"#);
    for flag in LAYOUT_FLAGS {
        out.push_str(&format!(r#" {}="false""#, flag));
    }
    out.push_str(" /></COMPATIBLEDOCUMENT>");
    out
}
