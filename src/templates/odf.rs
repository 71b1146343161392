use super::types::{CreateFn, DocumentKind, LocaleTags, TemplateError, TemplateResult};
use chrono::{SecondsFormat, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, Write};
use std::path::Path;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const GENERATOR: &str = concat!("odf-templates/", env!("CARGO_PKG_VERSION"));

const OFFICE_NS: &str = concat!(
    r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
    r#"xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" "#,
    r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" "#,
    r#"xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" "#,
    r#"xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" "#,
    r#"xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0" "#,
    r#"xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" "#,
    r#"xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" "#,
    r#"xmlns:dc="http://purl.org/dc/elements/1.1/""#,
);

/// Opens `path` for writing, refusing to replace an existing file.
fn create_new(path: &Path) -> TemplateResult<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| TemplateError::io(path, e))
}

/// Creates an empty plain-text file.
pub fn create_text_file(path: &Path) -> TemplateResult<()> {
    create_new(path)?;
    log::info!("Created text file: {}", path.display());
    Ok(())
}

/// Creates `path` and fills it through `write`. The file is removed again
/// when `write` fails, so a failed attempt leaves the name free.
fn write_new<F>(path: &Path, write: F) -> TemplateResult<()>
where
    F: FnOnce(File) -> TemplateResult<()>,
{
    let file = create_new(path)?;
    let result = write(file);

    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("Failed to remove partial file {}: {}", path.display(), e);
        }
    }

    result
}

/// Writes an empty ODF package of the given kind.
pub fn create_document(kind: DocumentKind, path: &Path, locale: &LocaleTags) -> TemplateResult<()> {
    let Some(mimetype) = kind.mimetype() else {
        return create_text_file(path);
    };

    write_new(path, |file| write_package(file, kind, mimetype, locale, path))?;
    log::info!("Created {} ({}): {}", kind, locale, path.display());
    Ok(())
}

/// `path` only names the target in errors.
fn write_package<W: Write + Seek>(
    writer: W,
    kind: DocumentKind,
    mimetype: &str,
    locale: &LocaleTags,
    path: &Path,
) -> TemplateResult<()> {
    let archive = |e: ZipError| TemplateError::archive(path, e);
    let io_err = |e: io::Error| TemplateError::io(path, e);

    let mut zip = ZipWriter::new(writer);

    // The mimetype entry must come first and stay uncompressed.
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("mimetype", stored).map_err(archive)?;
    zip.write_all(mimetype.as_bytes()).map_err(io_err)?;

    let parts = [
        ("META-INF/manifest.xml", manifest_xml(mimetype)),
        ("content.xml", content_xml(kind)),
        ("styles.xml", styles_xml(locale)),
        ("meta.xml", meta_xml()),
    ];

    for (name, body) in parts {
        zip.start_file(name, deflated).map_err(archive)?;
        zip.write_all(body.as_bytes()).map_err(io_err)?;
    }

    zip.finish().map_err(archive)?;
    Ok(())
}

/// Creation callback for `kind`, bound to the given locale.
pub fn creator(kind: DocumentKind, locale: LocaleTags) -> CreateFn {
    if kind == DocumentKind::Textfile {
        return Box::new(create_text_file);
    }
    Box::new(move |path: &Path| create_document(kind, path, &locale))
}

fn manifest_xml(mimetype: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">"#,
            r#"<manifest:file-entry manifest:full-path="/" manifest:media-type="{}"/>"#,
            r#"<manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>"#,
            r#"<manifest:file-entry manifest:full-path="styles.xml" manifest:media-type="text/xml"/>"#,
            r#"<manifest:file-entry manifest:full-path="meta.xml" manifest:media-type="text/xml"/>"#,
            r#"</manifest:manifest>"#,
        ),
        mimetype
    )
}

fn content_xml(kind: DocumentKind) -> String {
    let body = match kind {
        DocumentKind::Document => "<office:text/>",
        DocumentKind::Spreadsheet => "<office:spreadsheet/>",
        DocumentKind::Presentation => "<office:presentation/>",
        DocumentKind::Textfile => "",
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content {} office:version="1.2"><office:body>{}</office:body></office:document-content>"#,
        OFFICE_NS, body
    )
}

fn styles_xml(locale: &LocaleTags) -> String {
    let country = locale
        .country
        .as_deref()
        .map(|c| format!(r#" fo:country="{}""#, c))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<office:document-styles {} office:version="1.2"><office:styles>"#,
            r#"<style:default-style style:family="paragraph">"#,
            r#"<style:text-properties fo:language="{}"{}/>"#,
            r#"</style:default-style>"#,
            r#"</office:styles></office:document-styles>"#,
        ),
        OFFICE_NS, locale.language, country
    )
}

fn meta_xml() -> String {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<office:document-meta {} office:version="1.2"><office:meta>"#,
            r#"<meta:generator>{}</meta:generator>"#,
            r#"<meta:creation-date>{}</meta:creation-date>"#,
            r#"</office:meta></office:document-meta>"#,
        ),
        OFFICE_NS, GENERATOR, now
    )
}
