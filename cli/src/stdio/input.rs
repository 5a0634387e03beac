use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

pub const ENCODING_ENV: &str = "FRESHCHECK_INPUT_ENCODING";

/// Reads the hook payload from `path`, or stdin when no path is given.
pub fn read_hook_input(path: Option<&Path>) -> Result<String, std::io::Error> {
    let bytes = match path {
        Some(p) => std::fs::read(p)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    let forced = std::env::var(ENCODING_ENV).ok();
    Ok(decode_input_bytes(&bytes, forced.as_deref()))
}

/// Decodes payload bytes: forced label, then BOM, then UTF-16 sniffing, then
/// UTF-8 (lossy as a last resort).
pub fn decode_input_bytes(bytes: &[u8], forced: Option<&str>) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some(enc) = forced.and_then(|label| Encoding::for_label(label.trim().as_bytes())) {
        tracing::debug!(encoding = enc.name(), "using forced input encoding");
        return enc.decode_without_bom_handling(bytes).0.into_owned();
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(encoding = enc.name(), "input has BOM");
        return enc.decode_without_bom_handling(&bytes[bom_len..]).0.into_owned();
    }

    if let Some(enc) = sniff_utf16(bytes) {
        tracing::debug!(encoding = enc.name(), "input looks like UTF-16");
        return enc.decode_without_bom_handling(bytes).0.into_owned();
    }

    String::from_utf8_lossy(bytes).into_owned()
}

/// JSON payloads are mostly ASCII, so UTF-16 shows up as a zero byte in every
/// other position.
fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let sample = &bytes[..bytes.len().min(64)];
    if sample.len() < 2 {
        return None;
    }

    let zero_at = |parity: usize| {
        sample
            .iter()
            .enumerate()
            .filter(|(i, b)| i % 2 == parity && **b == 0)
            .count()
    };
    let (even, odd) = (zero_at(0), zero_at(1));
    let threshold = sample.len() / 4;

    if odd > threshold && odd > even * 2 {
        Some(encoding_rs::UTF_16LE)
    } else if even > threshold && even > odd * 2 {
        Some(encoding_rs::UTF_16BE)
    } else {
        None
    }
}
