//! Widget HTML asset loading.

use std::{fs, path::Path};

use tracing::warn;

/// Load a widget HTML document from the assets directory.
///
/// Any failure (missing file, unreadable file, non-UTF-8 content) falls back to
/// [`placeholder_document`]: a missing static asset must not prevent the server
/// from starting or a widget from being registered.
pub fn load_widget_html(assets_dir: &Path, filename: &str) -> String {
    let path = assets_dir.join(filename);
    match fs::read_to_string(&path) {
        Ok(html) => html,
        Err(err) => {
            warn!(
                target: "pizzaz_mcp::widgets",
                path = %path.display(),
                reason = %err,
                "Widget HTML asset unavailable; using placeholder document"
            );
            placeholder_document(filename)
        }
    }
}

/// Deterministic minimal HTML document naming the requested asset file.
pub fn placeholder_document(filename: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{filename}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"pizzaz-root\">Widget template placeholder: {filename}</div>\n\
         </body>\n\
         </html>\n"
    )
}
