//! Fixed-width ASCII text fields.
//!
//! Text is stored uppercased in fixed-size slots. Encoding is lossy on
//! purpose: overlong input is cut to the slot width without complaint, the
//! same way the IDU tolerates it.

/// Byte used to fill the unused tail of a padded slot.
pub const PADDING: u8 = b' ';

/// Written in place of characters that have no ASCII representation.
pub const REPLACEMENT: u8 = b'?';

/// Reads a text field of up to `max_len` bytes starting at `offset`.
///
/// Reading stops at the first NUL byte. Bytes outside of the printable ASCII
/// range are dropped and the result is trimmed. Bytes past the end of `data`
/// are treated as missing, so this never fails.
pub fn decode_text(data: &[u8], offset: usize, max_len: usize) -> String {
    let field = data.get(offset..).unwrap_or_default();
    let text: String = field
        .iter()
        .take(max_len)
        .take_while(|&&b| b != 0)
        .filter(|b| (32..=126).contains(*b))
        .map(|&b| b as char)
        .collect();

    text.trim().to_string()
}

/// Writes `text` into the `max_len` byte slot at `offset`.
///
/// The text is trimmed, uppercased and cut to `max_len` characters. Unused
/// bytes of the slot are filled with spaces. With `nul_terminate` the last
/// byte of the slot is then overwritten with NUL, even if that drops the
/// final character of a full-width value.
///
/// # Panics
///
/// Panics if the slot does not fit into `buf`.
pub fn encode_text(buf: &mut [u8], offset: usize, text: &str, max_len: usize, nul_terminate: bool) {
    let slot = &mut buf[offset..offset + max_len];
    slot.fill(PADDING);

    for (dst, src) in slot.iter_mut().zip(ascii_bytes(text)) {
        *dst = src;
    }

    if nul_terminate && max_len > 0 {
        slot[max_len - 1] = 0;
    }
}

/// Writes `text` at `offset` without padding or terminator, up to `max_len`
/// characters. Bytes after the written characters keep their previous value.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if the written bytes do not fit into `buf`.
pub fn write_ascii(buf: &mut [u8], offset: usize, text: &str, max_len: usize) -> usize {
    let bytes: Vec<u8> = ascii_bytes(text).take(max_len).collect();
    buf[offset..offset + bytes.len()].copy_from_slice(&bytes);
    bytes.len()
}

fn ascii_bytes(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.trim().chars().flat_map(char::to_uppercase).map(|c| {
        if c.is_ascii() {
            c as u8
        } else {
            REPLACEMENT
        }
    })
}
