//! Gallery content descriptors as handed over by the content provider.

use crate::constants::{DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_SLUG, PLACEHOLDER_IMAGE_URL};
use crate::error::Result;
use serde::Deserialize;

/// One raw gallery entry before layout.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawItem {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl RawItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Everything the stage needs from the provider: ordered items plus an
/// optional logo.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GalleryContent {
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl GalleryContent {
    /// Result of a failed or empty fetch: no items, no logo.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct SvgRef {
    #[serde(default)]
    url: Option<String>,
}

/// Project record in the provider's JSON payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    svg: Option<SvgRef>,
    #[serde(default)]
    pub images: Vec<Option<String>>,
}

impl ProjectRecord {
    pub fn svg_url(&self) -> Option<&str> {
        self.svg.as_ref().and_then(|s| s.url.as_deref())
    }
}

/// Decode the provider payload (an array of project records) and pick the
/// project matching `current_slug`, falling back to the first one.
pub fn parse_projects(json: &str, current_slug: Option<&str>) -> Result<GalleryContent> {
    let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
    Ok(select_project(&projects, current_slug))
}

pub fn select_project(projects: &[ProjectRecord], current_slug: Option<&str>) -> GalleryContent {
    let Some(project) = current_slug
        .and_then(|slug| projects.iter().find(|p| p.slug.as_deref() == Some(slug)))
        .or_else(|| projects.first())
    else {
        log::warn!("[content] no project data, gallery stays empty");
        return GalleryContent::empty();
    };

    let name = non_blank(project.name.as_deref()).unwrap_or(DEFAULT_PROJECT_NAME);
    let slug = non_blank(project.slug.as_deref()).unwrap_or(DEFAULT_PROJECT_SLUG);
    let logo_url = non_blank(project.svg_url()).map(str::to_owned);

    let items: Vec<RawItem> = project
        .images
        .iter()
        .enumerate()
        .map(|(i, url)| RawItem {
            url: non_blank(url.as_deref())
                .unwrap_or(PLACEHOLDER_IMAGE_URL)
                .to_owned(),
            name: Some(format!("{} {}", name, i + 1)),
            slug: Some(slug.to_owned()),
        })
        .collect();

    if items.is_empty() {
        log::warn!("[content] project {name} ({slug}) has no images");
    }
    log::info!(
        "[content] project {} ({}) items={} logo={:?}",
        name,
        slug,
        items.len(),
        logo_url
    );
    GalleryContent { items, logo_url }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
