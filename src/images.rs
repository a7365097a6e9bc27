use std::fs;
use std::path::Path;

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Conventional names recipes use for their finished-dish photo.
const COMMON_NAMES: &[&str] = &["成品", "完成"];

/// Find a photo for the recipe in the markdown file's directory and return
/// its raw-media URL. Probed in order: same stem as the file, the
/// conventional names (including the title with the 的做法 suffix
/// dropped), then any image in the directory, name-sorted so the pick is
/// stable.
pub fn find_image(
    md_path: &Path,
    relative_path: &str,
    title: &str,
    media_base: &str,
) -> Option<String> {
    let dir = md_path.parent()?;
    let stem = md_path.file_stem()?.to_string_lossy();

    let mut candidates: Vec<String> = vec![stem.to_string()];
    candidates.extend(COMMON_NAMES.iter().map(|n| n.to_string()));
    let plain_title = title.trim().trim_end_matches("的做法");
    if !plain_title.is_empty() {
        candidates.push(plain_title.to_string());
    }

    for name in &candidates {
        for ext in IMAGE_EXTS {
            let file = format!("{}.{}", name, ext);
            if dir.join(&file).is_file() {
                return Some(media_url(relative_path, &file, media_base));
            }
        }
    }

    // Fall back to whatever image the directory holds.
    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| {
            Path::new(name)
                .extension()
                .map_or(false, |ext| IMAGE_EXTS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
        })
        .collect();
    names.sort();
    names
        .first()
        .map(|file| media_url(relative_path, file, media_base))
}

fn media_url(relative_path: &str, file_name: &str, media_base: &str) -> String {
    let rel_img = match relative_path.rsplit_once('/') {
        Some((dir, _)) => format!("{}/{}", dir, file_name),
        None => file_name.to_string(),
    };
    format!("{}/{}", media_base, percent_encode(&rel_img))
}

/// Percent-encode a path for a URL: RFC 3986 unreserved bytes and `/`
/// pass through, everything else (notably the CJK filenames) is escaped.
fn percent_encode(path: &str) -> String {
    let mut out = String::with_capacity(path.len() * 3);
    for &b in path.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

// ── Tests ──
