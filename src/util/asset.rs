// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Cover asset resolution.
//!
//! Cover references in the catalog are file names relative to the covers
//! directory. They are resolved to `file://` URLs, then the characters that
//! would end a CSS `url(...)` value early are percent-escaped so the URL can
//! be pasted into a stylesheet or a terminal hyperlink unchanged.

use std::path::{Path, PathBuf};

/// Resolves a cover reference against the covers directory.
///
/// The path is made absolute against the current directory when possible and
/// percent-encoded the way a URL parser encodes a path: controls, space,
/// `"`, `#`, `%`, `<`, `>`, `?`, `` ` ``, `{`, `}` and non-ASCII bytes.
pub(crate) fn resolve_cover(covers_dir: &Path, cover: &str) -> String {
    let path: PathBuf = covers_dir.join(cover);
    let path = std::path::absolute(&path).unwrap_or(path);

    let mut url = String::from("file://");
    let raw = path.to_string_lossy().replace('\\', "/");
    if !raw.starts_with('/') {
        url.push('/');
    }

    for byte in raw.bytes() {
        match byte {
            b' ' | b'"' | b'#' | b'%' | b'<' | b'>' | b'?' | b'`' | b'{' | b'}' => {
                url.push_str(&percent_encode(byte));
            }
            b if b < 0x20 || b >= 0x7f => url.push_str(&percent_encode(b)),
            b => url.push(b as char),
        }
    }

    url
}

fn percent_encode(byte: u8) -> String {
    format!("%{:02X}", byte)
}

/// Escapes `'`, `(` and `)` so the URL stays valid inside `url(...)`.
pub(crate) fn escape_css_url(url: &str) -> String {
    url.replace('\'', "%27")
        .replace('(', "%28")
        .replace(')', "%29")
}

/// Resolves and escapes a cover reference in one step.
pub(crate) fn cover_url(covers_dir: &Path, cover: &str) -> String {
    escape_css_url(&resolve_cover(covers_dir, cover))
}
