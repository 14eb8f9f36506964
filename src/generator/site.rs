use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::aggregate::DocSet;
use crate::error::{DocResult, IoContext};
use crate::generator::html::{render_index, render_type_page};
use crate::generator::{SiteOptions, SCRIPT_JS, STYLE_CSS};
use crate::locator::type_page;
use crate::search::{build_search_index, search_index_json};

pub const INDEX_PAGE: &str = "index.html";
pub const STYLE_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const SEARCH_INDEX_FILE: &str = "search-index.json";

/// A rendered output file, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub name: String,
    pub contents: String,
}

impl SiteFile {
    fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        SiteFile {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

pub struct SiteGenerator<'a> {
    docs: &'a DocSet,
    options: SiteOptions,
}

impl<'a> SiteGenerator<'a> {
    pub fn new(docs: &'a DocSet, options: SiteOptions) -> Self {
        SiteGenerator { docs, options }
    }

    /// Renders every file of the site without touching the disk.
    pub fn render(&self) -> DocResult<Vec<SiteFile>> {
        let entries = build_search_index(self.docs);
        let mut files = vec![
            SiteFile::new(SEARCH_INDEX_FILE, search_index_json(&entries)?),
            SiteFile::new(INDEX_PAGE, render_index(self.docs, &self.options)),
        ];

        let mut seen: HashSet<String> = files.iter().map(|f| f.name.clone()).collect();
        for type_doc in self.docs.types() {
            let name = type_page(&type_doc.full_name);
            if !seen.insert(name.clone()) {
                warn!(
                    "page {} for {} overwrites another page with the same name",
                    name, type_doc.full_name
                );
            }
            files.push(SiteFile::new(
                name,
                render_type_page(self.docs, type_doc, &self.options),
            ));
        }

        files.push(SiteFile::new(STYLE_FILE, STYLE_CSS));
        files.push(SiteFile::new(SCRIPT_FILE, SCRIPT_JS));
        Ok(files)
    }

    /// Renders the site and writes it into `output_dir`, creating the
    /// directory when needed. Returns the written paths.
    pub fn write_to(&self, output_dir: &Path) -> DocResult<Vec<PathBuf>> {
        let files = self.render()?;

        fs::create_dir_all(output_dir).with_io_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = output_dir.join(&file.name);
            fs::write(&path, file.contents)
                .with_io_context(|| format!("failed to write {}", path.display()))?;
            debug!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
