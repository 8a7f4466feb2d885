//! rc001 mint document rendering.

/// Renders the rc001 HTML mint document for a serial number.
///
/// The document references the collection's parent inscription as its script, so the
/// inscription renders as a child of the collection.
pub fn render_mint_document(sn: &str, collection_name: &str, parent_inscription_id: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
            "<meta name=\"p\" content=\"rc001\"><meta name=\"op\" content=\"mint\">",
            "<meta name=\"sn\" content=\"{sn}\"><title>{name}</title></head>",
            "<body><script src=\"/content/{parent}\"></script></body></html>"
        ),
        sn = sn,
        name = collection_name,
        parent = parent_inscription_id,
    )
}

/// Lowercase hex of the document's UTF-8 bytes.
pub fn render_mint_document_hex(
    sn: &str,
    collection_name: &str,
    parent_inscription_id: &str,
) -> String {
    hex::encode(render_mint_document(sn, collection_name, parent_inscription_id))
}
