//! Textual wrapping of raw response bodies.
//!
//! Pages are never deserialized here: their bytes are copied as-is between
//! hand-written wrapper punctuation.

const SEPARATOR: &[u8] = b",\n";

fn join_pages(pages: &[Vec<u8>]) -> Vec<u8> {
    pages.join(SEPARATOR)
}

/// `{ "category_pages": [ <p1>,\n<p2> ] }`
pub fn category_pages(pages: &[Vec<u8>]) -> Vec<u8> {
    let mut out = b"{ \"category_pages\": [\n".to_vec();
    out.extend(join_pages(pages));
    out.extend_from_slice(b"\n] }\n");
    out
}

/// `{ "meta_data": <meta>, "post_data": [ <b1>,\n<b2> ] }`
pub fn topic_pages(meta_data: &[u8], batches: &[Vec<u8>]) -> Vec<u8> {
    let mut out = b"{\n\"meta_data\": ".to_vec();
    out.extend_from_slice(meta_data);
    out.extend_from_slice(b",\n\"post_data\": [\n");
    out.extend(join_pages(batches));
    out.extend_from_slice(b"\n]\n}\n");
    out
}
